use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the menu core and its collaborators.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Startup ------------------------------------------------------------
    /// Bad command-line arguments.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Config file missing, unreadable or holding invalid values.
    #[error("Config error: {0}")]
    Config(String),

    /// The interrupt handler could not be registered.
    #[error("Signal error: {0}")]
    Signal(String),

    // ---- Module dispatch ----------------------------------------------------
    /// A module implementation is absent or cannot be started.
    #[error("{module} module not available: {reason}")]
    ModuleUnavailable { module: String, reason: String },

    /// A module ran but did not complete successfully.
    #[error("Error loading {module} module: {cause}")]
    Module { module: String, cause: String },

    /// Anything that escaped the dispatch step, including handler panics.
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (stdin, terminal output, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config decode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn unexpected<S: Into<String>>(msg: S) -> Self {
        Error::Unexpected(msg.into())
    }
}
