#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive};

use crate::config::Config;
use crate::errors::{Error, Result};

/// Attack modules reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIterDerive)]
pub enum AttackModule {
    #[strum(to_string = "SS7")]
    Ss7,
    #[strum(to_string = "GTP")]
    Gtp,
    #[strum(to_string = "Diameter")]
    Diameter,
    #[strum(to_string = "SIP")]
    Sip,
}

/// Runs an attack module to completion.
///
/// The module owns the terminal until it returns. Implementations report a
/// missing module as [`Error::ModuleUnavailable`] and anything else that
/// went wrong as [`Error::Module`].
pub trait ModuleHost {
    fn launch(&mut self, module: AttackModule) -> Result<()>;
}

/// Launches each module as an external program with the operator's stdio.
#[derive(Debug, Clone, Default)]
pub struct ExternalModuleHost {
    commands: HashMap<AttackModule, String>,
}

impl ExternalModuleHost {
    pub fn from_config(config: &Config) -> Self {
        let commands = AttackModule::iter()
            .filter_map(|m| config.module_command(m).map(|cmd| (m, cmd.to_string())))
            .collect();
        Self { commands }
    }

    pub fn command_for(&self, module: AttackModule) -> Option<&str> {
        self.commands.get(&module).map(String::as_str)
    }

    fn unavailable(module: AttackModule, reason: impl Into<String>) -> Error {
        Error::ModuleUnavailable {
            module: module.to_string(),
            reason: reason.into(),
        }
    }

    fn failed(module: AttackModule, cause: impl Into<String>) -> Error {
        Error::Module {
            module: module.to_string(),
            cause: cause.into(),
        }
    }

    fn describe_exit(program: &str, status: ExitStatus) -> String {
        match status.code() {
            Some(code) => format!("'{program}' exited with status {code}"),
            None => format!("'{program}' was terminated by a signal"),
        }
    }
}

impl ModuleHost for ExternalModuleHost {
    fn launch(&mut self, module: AttackModule) -> Result<()> {
        let Some(command_line) = self.command_for(module) else {
            return Err(Self::unavailable(module, "no command configured"));
        };
        let mut parts = command_line.split_whitespace();
        let Some(program) = parts.next() else {
            return Err(Self::unavailable(module, "no command configured"));
        };

        let status = Command::new(program)
            .args(parts)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(Self::failed(module, Self::describe_exit(program, status))),
            Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                Err(Self::unavailable(module, format!("'{program}': {err}")))
            }
            Err(err) => Err(Self::failed(
                module,
                format!("failed to start '{program}': {err}"),
            )),
        }
    }
}
