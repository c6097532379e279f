pub mod ansi;
pub mod ascii;
pub mod chrome;
pub mod presenter;
mod table_printer;
#[cfg(test)]
mod tests;
mod width_util;

pub use presenter::{MenuView, Presenter, Severity, TerminalPresenter};
