pub mod grace;
pub mod models;

use std::any::Any;
use std::io::{self, BufRead};
use std::panic::{self, AssertUnwindSafe};

use crate::core::about::{APP_NAME, PROMPT};
use crate::errors::{Error, Result};
use crate::extensions::string::ToChoiceKey;
use crate::logging::{LogTarget, Logger};
use crate::modules::{AttackModule, ModuleHost};
use crate::registry::{MenuAction, ModuleRegistry};
use crate::session::grace::{
    FAREWELL_UNITS, GraceDelay, LOADING_UNITS, RECOVERY_UNITS, STUB_UNITS, UNEXPECTED_UNITS,
};
use crate::session::models::{DispatchOutcome, SessionPhase, SessionState};
use crate::ui::{MenuView, Presenter, Severity};

/// Key the session falls back to when input ends.
const QUIT_KEY: &str = "q";

/// The interactive menu: render, read one line, dispatch, recover, repeat.
///
/// Nothing a module does can end the loop. Only the quit selection (or end
/// of input, which counts as quit) returns from [`Session::run`].
pub struct Session<P: Presenter, H: ModuleHost> {
    registry: &'static ModuleRegistry,
    presenter: P,
    host: H,
    grace: GraceDelay,
    logger: Logger,
    state: SessionState,
    phase: SessionPhase,
}

impl<P: Presenter, H: ModuleHost> Session<P, H> {
    pub fn new(presenter: P, host: H, grace: GraceDelay, logger: Logger) -> Self {
        Self {
            registry: ModuleRegistry::global(),
            presenter,
            host,
            grace,
            logger,
            state: SessionState::new(),
            phase: SessionPhase::Rendering,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    #[cfg(test)]
    pub(crate) fn presenter(&self) -> &P {
        &self.presenter
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &H {
        &self.host
    }

    /// Drive the session on stdin until the operator quits.
    pub fn run(&mut self) {
        let stdin = io::stdin();
        self.run_with_reader(stdin.lock());
    }

    pub fn run_with_reader<R: BufRead>(&mut self, mut reader: R) {
        self.logger.info("Session started", LogTarget::FileOnly);

        while self.state.is_running() {
            let iteration = panic::catch_unwind(AssertUnwindSafe(|| self.iterate(&mut reader)));
            let detail = match iteration {
                Ok(Ok(())) => continue,
                Ok(Err(err)) => err.to_string(),
                Err(payload) => panic_detail(payload.as_ref()),
            };
            self.recover(&Error::unexpected(detail).to_string());
        }

        self.logger.info("Session ended", LogTarget::FileOnly);
    }

    fn iterate<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        self.phase = SessionPhase::Rendering;
        let view = MenuView {
            entries: self.registry.entries(),
            prompt: PROMPT,
        };
        self.presenter.render(&view);

        self.phase = SessionPhase::AwaitingInput;
        let choice = self.read_choice(reader)?;

        self.phase = SessionPhase::Dispatching;
        let outcome = self.dispatch(&choice);
        self.logger.info(
            format!("Selection '{choice}' -> {outcome:?}"),
            LogTarget::FileOnly,
        );
        self.settle(outcome);
        Ok(())
    }

    fn read_choice<R: BufRead>(&self, reader: &mut R) -> Result<String> {
        let mut line = String::new();
        let read = reader.read_line(&mut line);
        self.choice_from(read, &line)
    }

    /// One normalized line. End of input, or an interrupt surfacing from the
    /// read, means the operator is leaving.
    fn choice_from(&self, read: io::Result<usize>, line: &str) -> Result<String> {
        match read {
            Ok(0) => {
                self.logger
                    .info("End of input; quitting", LogTarget::FileOnly);
                Ok(QUIT_KEY.to_string())
            }
            Ok(_) => Ok(line.to_choice_key()),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                self.logger
                    .info("Read interrupted; quitting", LogTarget::FileOnly);
                Ok(QUIT_KEY.to_string())
            }
            Err(err) => Err(Error::Io(err)),
        }
    }

    fn dispatch(&mut self, choice: &str) -> DispatchOutcome {
        let Some(entry) = self.registry.resolve(choice) else {
            return DispatchOutcome::InvalidChoice(choice.to_string());
        };
        match entry.action() {
            MenuAction::Quit => DispatchOutcome::Quit,
            MenuAction::Stub { module, release } => {
                self.announce_stub(module, release);
                DispatchOutcome::Handled
            }
            MenuAction::Launch(module) => self.launch(module),
        }
    }

    fn announce_stub(&mut self, module: AttackModule, release: u8) {
        self.presenter.notify(
            &format!("{module} module will be available in version {release} release"),
            Severity::Info,
        );
        self.presenter
            .notify("Returning to main menu...", Severity::Info);
        self.grace.pause(STUB_UNITS);
    }

    fn launch(&mut self, module: AttackModule) -> DispatchOutcome {
        self.presenter
            .notify(&format!("Loading {module} Module..."), Severity::Progress);
        self.grace.pause(LOADING_UNITS);

        match self.host.launch(module) {
            Ok(()) => DispatchOutcome::Handled,
            Err(err @ Error::ModuleUnavailable { .. }) => {
                DispatchOutcome::ModuleUnavailable(err.to_string())
            }
            Err(err @ Error::Module { .. }) => DispatchOutcome::HandlerError(err.to_string()),
            Err(other) => DispatchOutcome::HandlerError(
                Error::Module {
                    module: module.to_string(),
                    cause: other.to_string(),
                }
                .to_string(),
            ),
        }
    }

    fn settle(&mut self, outcome: DispatchOutcome) {
        match outcome {
            DispatchOutcome::Handled => {}
            DispatchOutcome::InvalidChoice(_) => {
                self.presenter.notify(
                    "Invalid choice. Please select 0-3 or 'q' to quit.",
                    Severity::Warning,
                );
                self.grace.pause(RECOVERY_UNITS);
            }
            DispatchOutcome::ModuleUnavailable(reason) => {
                self.logger.warn(&reason, LogTarget::FileOnly);
                self.presenter.notify(&reason, Severity::Warning);
                self.grace.pause(RECOVERY_UNITS);
            }
            DispatchOutcome::HandlerError(cause) => {
                self.logger.error(&cause, LogTarget::FileOnly);
                self.presenter.notify(&cause, Severity::Error);
                self.grace.pause(RECOVERY_UNITS);
            }
            DispatchOutcome::Quit => {
                self.presenter
                    .notify(&format!("Exiting {APP_NAME}..."), Severity::Info);
                self.grace.pause(FAREWELL_UNITS);
                self.state.stop();
                self.phase = SessionPhase::Terminated;
            }
        }
    }

    /// Loop-boundary recovery for anything that escaped an iteration.
    fn recover(&mut self, detail: &str) {
        self.logger.error(detail, LogTarget::FileOnly);
        self.presenter.notify(detail, Severity::Error);
        self.grace.pause(UNEXPECTED_UNITS);
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "module panicked".to_string()
    }
}
