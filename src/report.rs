//! Stateless progress reporting for the scaffolding workflow.
//!
//! The orchestrator never prints directly; it talks to a [`Reporter`] passed in
//! by the caller. This keeps rendering concerns out of the engine and makes the
//! orchestrator's non-fatal failure path observable in tests.

/// Sink for user-facing progress and non-fatal failure messages.
pub trait Reporter {
    /// A step of the workflow started or finished normally.
    fn step(&self, message: &str);

    /// A non-fatal failure occurred; execution continues.
    fn warn(&self, message: &str);
}

/// Reporter that forwards to the `log` facade.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn step(&self, message: &str) {
        log::info!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Reporter that records messages in memory.
///
/// Used by tests to assert which warnings the orchestrator produced.
#[derive(Default)]
pub struct MemoryReporter {
    messages: std::sync::Mutex<Vec<(Level, String)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Step,
    Warn,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn steps(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == Level::Step)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn step(&self, message: &str) {
        self.messages.lock().unwrap().push((Level::Step, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push((Level::Warn, message.to_string()));
    }
}
