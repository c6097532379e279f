use std::io::{self, Write};

use crate::core::about::{AUTHOR, CONTRIBUTORS, TAGLINE, VERSION};
use crate::ui::ansi::{
    CLEAR_SCREEN, CURSOR_HOME, FG_CYAN, FG_GREEN, FG_RED, FG_YELLOW, PROMPT_STYLE, STYLE_BOLD,
    STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;

const BANNER_ART: [&str; 6] = [
    "███████╗██╗ ██████╗██████╗ ██╗      ██████╗ ██╗████████╗",
    "██╔════╝██║██╔════╝██╔══██╗██║     ██╔═══██╗██║╚══██╔══╝",
    "███████╗██║██║     ██████╔╝██║     ██║   ██║██║   ██║   ",
    "╚════██║██║██║     ██╔═══╝ ██║     ██║   ██║██║   ██║   ",
    "███████║██║╚██████╗██║     ███████╗╚██████╔╝██║   ██║   ",
    "╚══════╝╚═╝ ╚═════╝╚═╝     ╚══════╝ ╚═════╝ ╚═╝   ╚═╝   ",
];

/// Width of the `≡` rules framing the menu table.
pub const RULE_WIDTH: usize = 48;

/// Screen furniture around the menu: banner, credits, rules and prompt.
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_clear<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{CLEAR_SCREEN}{CURSOR_HOME}")
    }

    /// Block-letter title, centered, followed by tagline, version and author.
    pub fn write_banner<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let art_width = BANNER_ART
            .iter()
            .map(|l| self.util.visible_width(l))
            .max()
            .unwrap_or(0);
        let pad = " ".repeat(self.util.center_pad(art_width));

        writeln!(out)?;
        for line in BANNER_ART {
            writeln!(out, "{pad}{STYLE_BOLD}{line}{STYLE_RESET}")?;
        }
        writeln!(out)?;
        writeln!(out, "{pad}{FG_YELLOW}{TAGLINE}{STYLE_RESET}")?;
        writeln!(out, "{pad}{FG_RED}Version: {VERSION}{STYLE_RESET}")?;
        writeln!(out, "{pad}{FG_GREEN}Author: {AUTHOR}{STYLE_RESET}")
    }

    pub fn write_contributors<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{FG_CYAN}Contributors:{STYLE_RESET}")?;
        for name in CONTRIBUTORS {
            writeln!(out, "  {FG_RED}•{STYLE_RESET} {name}")?;
        }
        Ok(())
    }

    /// A `≡` rule of `RULE_WIDTH`, with `title` centered in it when given.
    pub fn format_rule(&self, title: Option<&str>) -> String {
        let Some(title) = title else {
            return "≡".repeat(RULE_WIDTH);
        };
        let label = format!(" {title} ");
        let remaining = RULE_WIDTH.saturating_sub(self.util.visible_width(&label));
        let left = remaining / 2;
        format!("{}{label}{}", "≡".repeat(left), "≡".repeat(remaining - left))
    }

    pub fn write_rule<W: Write + ?Sized>(
        &self,
        out: &mut W,
        title: Option<&str>,
    ) -> io::Result<()> {
        writeln!(out, "\n{FG_YELLOW}{}{STYLE_RESET}\n", self.format_rule(title))
    }

    /// Prompt without a trailing newline; the operator types on this line.
    pub fn write_prompt<W: Write + ?Sized>(&self, out: &mut W, prompt: &str) -> io::Result<()> {
        write!(out, "\n{PROMPT_STYLE}{prompt}{STYLE_RESET} ")
    }
}
