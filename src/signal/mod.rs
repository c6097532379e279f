use std::process;

use once_cell::sync::OnceCell;

use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::session::grace::{GraceDelay, INTERRUPT_UNITS};
use crate::ui::{Presenter, Severity, TerminalPresenter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Process-wide Ctrl-C handling.
///
/// The handler runs on its own thread and ends the process directly, so it
/// works the same whether the session is waiting at the prompt or a module
/// owns the terminal. It never touches session state.
#[derive(Debug, Clone)]
pub struct SignalController {
    grace: GraceDelay,
    color: bool,
    logger: Logger,
}

impl SignalController {
    pub fn new(grace: GraceDelay, color: bool, logger: Logger) -> Self {
        Self {
            grace,
            color,
            logger,
        }
    }

    /// Register the handler. Only the first call in a process installs
    /// anything; later calls succeed without effect.
    pub fn install(self) -> Result<()> {
        INSTALLED.get_or_try_init(|| {
            ctrlc::set_handler(move || self.shutdown())
                .map_err(|e| Error::Signal(format!("failed to set Ctrl-C handler: {e}")))
        })?;
        Ok(())
    }

    pub fn is_installed() -> bool {
        INSTALLED.get().is_some()
    }

    fn shutdown(&self) {
        self.logger
            .info("Interrupt received; exiting", LogTarget::FileOnly);
        TerminalPresenter::stdout()
            .with_color(self.color)
            .notify("Interrupt received. Exiting...", Severity::Info);
        self.grace.pause(INTERRUPT_UNITS);
        process::exit(0);
    }
}
