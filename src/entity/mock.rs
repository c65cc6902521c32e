use anyhow::Result;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use super::{Entity, base_run};

/// A test entity. Records when each `run` happened, then does the base behavior.
pub struct RecordingEntity {
    calls: Arc<Mutex<Vec<Instant>>>,
}

impl RecordingEntity {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the call log; stays readable after the entity is boxed.
    pub fn calls(&self) -> Arc<Mutex<Vec<Instant>>> {
        Arc::clone(&self.calls)
    }
}

impl Default for RecordingEntity {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for RecordingEntity {
    fn name(&self) -> &str {
        "Recording"
    }

    fn age(&self) -> u32 {
        0
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        self.calls.lock().unwrap().push(Instant::now());
        base_run(out)
    }
}
