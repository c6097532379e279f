/// Whether the session loop keeps going. The only transition is
/// `running -> stopped`.
#[derive(Debug)]
pub struct SessionState {
    running: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { running: true }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns false when the session had already stopped.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Rendering,
    AwaitingInput,
    Dispatching,
    Terminated,
}

/// Result of one menu selection, consumed before the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled,
    ModuleUnavailable(String),
    HandlerError(String),
    InvalidChoice(String),
    Quit,
}
