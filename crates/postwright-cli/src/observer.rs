//! Progress printing for interactive runs.

use postwright_pipeline::{ProgressObserver, Stage};

/// Prints stage transitions to stderr as the run advances.
///
/// Stdout is reserved for the final post so output can be piped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl ProgressObserver for ConsoleObserver {
    fn stage_changed(&self, stage: Stage) {
        if let Some(message) = stage.message() {
            eprintln!("{message}");
        }
    }
}
