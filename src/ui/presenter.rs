use std::io::{self, Write};

use crate::registry::MenuEntry;
use crate::ui::ansi::{FG_GREEN, FG_RED, FG_YELLOW, STYLE_RESET};
use crate::ui::chrome::UiChrome;
use crate::ui::table_printer::TablePrinter;
use crate::ui::width_util::WidthUtil;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral status, e.g. stub announcements and the farewell.
    Info,
    /// Work starting, e.g. a module being loaded.
    Progress,
    Warning,
    Error,
}

impl Severity {
    fn marker(self) -> &'static str {
        match self {
            Severity::Info | Severity::Progress => "[*]",
            Severity::Warning | Severity::Error => "[!]",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Severity::Info => FG_YELLOW,
            Severity::Progress => FG_GREEN,
            Severity::Warning | Severity::Error => FG_RED,
        }
    }
}

/// Everything one menu screen shows.
#[derive(Debug, Clone, Copy)]
pub struct MenuView<'a> {
    pub entries: &'a [MenuEntry],
    pub prompt: &'a str,
}

/// Output side of the session. Both calls are fire-and-forget: the loop
/// never looks at whether rendering worked.
pub trait Presenter {
    fn render(&mut self, view: &MenuView<'_>);
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Presenter drawing onto a terminal, or any writer in tests.
#[derive(Debug)]
pub struct TerminalPresenter<W: Write> {
    out: W,
    chrome: UiChrome,
    table: TablePrinter,
    clear_screen: bool,
    color: bool,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            chrome: UiChrome::new(),
            table: TablePrinter::new(),
            clear_screen: true,
            color: true,
        }
    }

    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn format_notice(message: &str, severity: Severity) -> String {
        format!(
            "{}{} {message}{STYLE_RESET}",
            severity.color(),
            severity.marker()
        )
    }

    fn draw_menu(&self, view: &MenuView<'_>, buf: &mut Vec<u8>) -> io::Result<()> {
        self.chrome.write_banner(buf)?;
        self.chrome.write_contributors(buf)?;
        self.chrome.write_rule(buf, Some("MAIN MENU"))?;
        self.table.render_menu(view.entries, buf)?;
        self.chrome.write_rule(buf, None)?;
        self.chrome.write_prompt(buf, view.prompt)
    }

    /// Styled text goes out in one write; plain mode strips the styling.
    fn emit(&mut self, buf: Vec<u8>) {
        let text = String::from_utf8_lossy(&buf);
        let text = if self.color {
            text.into_owned()
        } else {
            WidthUtil::strip_ansi(&text)
        };
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, view: &MenuView<'_>) {
        // Clearing is a control sequence, not styling, so plain mode keeps it.
        if self.clear_screen {
            let _ = self.chrome.write_clear(&mut self.out);
        }
        let mut buf = Vec::new();
        let _ = self.draw_menu(view, &mut buf);
        self.emit(buf);
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        let line = format!("\n{}\n", Self::format_notice(message, severity));
        self.emit(line.into_bytes());
    }
}
