//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Returns whether the command was queued.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; images will load shortly".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker disconnected; images cannot be loaded".to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    fn fetch(reference: &str) -> BackendCommand {
        BackendCommand::FetchImage {
            reference: reference.to_string(),
        }
    }

    #[test]
    fn queues_command_when_there_is_room() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&tx, fetch("/a.jpg"), &mut status));
        assert!(status.is_empty());
        assert!(matches!(
            rx.try_recv(),
            Ok(BackendCommand::FetchImage { reference }) if reference == "/a.jpg"
        ));
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, fetch("/a.jpg"), &mut status);
        assert!(!dispatch_backend_command(&tx, fetch("/b.jpg"), &mut status));
        assert!(status.contains("full"));
    }

    #[test]
    fn reports_disconnected_backend() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        assert!(!dispatch_backend_command(&tx, fetch("/a.jpg"), &mut status));
        assert!(status.contains("disconnected"));
    }
}
