//! Host-side collaborators: the selection source and the completion channel.

pub mod snapshot;

pub use crate::error::HostError;
pub use snapshot::{ObjectSnapshot, Selection, TypeSnapshot};

/// Presentation channel for the end-of-batch message.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Prints the message to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

/// Emits the message as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{message}");
    }
}
