
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Where a log line goes. The session screen belongs to the presenter, so
/// most session events are `FileOnly`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

trait LogSink: Send + Sync {
    fn write_line(&self, level: LogLevel, line: &str);
}

/// Info to stdout, warnings and errors to stderr.
struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write_line(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Info => println!("{line}"),
            LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
        }
    }
}

struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    fn create(dir: &Path) -> std::io::Result<(Self, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S%.3f");
        let path = dir.join(format!("sigploit-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((
            Self {
                file: Mutex::new(file),
            },
            path,
        ))
    }
}

impl LogSink for FileSink {
    fn write_line(&self, _level: LogLevel, line: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }
}

struct FileState {
    dir: PathBuf,
    sink: Option<Arc<dyn LogSink>>,
    path: Option<PathBuf>,
    attempted: bool,
}

impl FileState {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            sink: None,
            path: None,
            attempted: false,
        }
    }
}

/// Cheap-to-clone session logger. The log file is only created on the first
/// file-targeted line, so a session that never logs leaves nothing behind.
#[derive(Clone)]
pub struct Logger {
    console: Arc<dyn LogSink>,
    file_state: Arc<Mutex<FileState>>,
    file_enabled: Arc<AtomicBool>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::with_dir("logs")
    }

    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            console: Arc::new(ConsoleSink),
            file_state: Arc::new(Mutex::new(FileState::new(dir.as_ref().to_path_buf()))),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Path of the session log, once it has been created.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.file_state.lock().ok().and_then(|s| s.path.clone())
    }

    /// Send panic reports to the session log instead of the operator's
    /// screen. The session already shows its own notice for them.
    pub fn capture_panics(&self) {
        let logger = self.clone();
        panic::set_hook(Box::new(move |info| {
            logger.error(format!("Panic: {info}"), LogTarget::FileOnly);
        }));
    }

    pub(crate) fn format_file_line(level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        format!("[{timestamp}] {:<5} {message}", level.as_ref())
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if matches!(target, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile) {
            self.console.write_line(level, message);
        }

        if matches!(target, LogTarget::FileOnly | LogTarget::ConsoleAndFile)
            && self.file_logging_enabled()
        {
            if let Some(sink) = self.file_sink() {
                sink.write_line(level, &Self::format_file_line(level, message));
            }
        }
    }

    fn file_sink(&self) -> Option<Arc<dyn LogSink>> {
        let mut state = self.file_state.lock().ok()?;
        if state.attempted {
            return state.sink.clone();
        }
        state.attempted = true;

        match FileSink::create(&state.dir) {
            Ok((sink, path)) => {
                let sink: Arc<dyn LogSink> = Arc::new(sink);
                state.path = Some(path);
                state.sink = Some(sink.clone());
                Some(sink)
            }
            Err(err) => {
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                None
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .field("file_enabled", &self.file_logging_enabled())
            .finish()
    }
}
