pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod modules;
pub mod registry;
pub mod session;
pub mod signal;
pub mod ui;
