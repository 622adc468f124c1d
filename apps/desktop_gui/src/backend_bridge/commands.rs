//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    FetchImage { reference: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchImage { .. } => "fetch_image",
        }
    }
}
