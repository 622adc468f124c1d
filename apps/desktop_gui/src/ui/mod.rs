//! UI layer for the studio window: app shell, per-view panels, and brand theming.

pub mod app;
pub mod theme;
pub mod views;

pub use app::{StartupConfig, StudioApp};
