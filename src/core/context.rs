use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::core::cli::CliArgs;
use crate::errors::Result;
use crate::logging::Logger;
use crate::session::grace::GraceDelay;

/// Startup wiring shared by the session and the signal controller.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
}

impl AppContext {
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let mut config = match &args.config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load_or_default(DEFAULT_CONFIG_PATH)?,
        };
        if args.no_color {
            config.set_color(false);
        }

        let logger = Logger::with_dir(&args.logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self { config, logger })
    }

    pub fn grace(&self) -> GraceDelay {
        GraceDelay::new(self.config.time_unit())
    }
}
