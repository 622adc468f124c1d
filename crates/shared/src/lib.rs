//! Types shared by the catalog server and its clients.

pub mod domain;
pub mod error;
pub mod protocol;
