use std::io::{self, Write};

use crate::registry::MenuEntry;
use crate::ui::ansi::{FG_CYAN, STYLE_RESET};
use crate::ui::width_util::WidthUtil;

const MODULE_HEADER: &str = "Module";
const DESCRIPTION_HEADER: &str = "Description";
const MIN_LABEL_WIDTH: usize = 12;

/// Two-column menu table: `key) label` and description.
#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the label column, grown to fit the longest label.
    pub fn label_width(&self, entries: &[MenuEntry]) -> usize {
        entries
            .iter()
            .map(|e| self.util.visible_width(e.label()))
            .fold(MIN_LABEL_WIDTH, usize::max)
    }

    /// Width of the whole `key) label` cell, headers included.
    fn module_width(&self, entries: &[MenuEntry]) -> usize {
        let label_width = self.label_width(entries);
        entries
            .iter()
            .map(|e| self.util.visible_width(e.key()) + 2 + label_width)
            .fold(self.util.visible_width(MODULE_HEADER), usize::max)
    }

    pub fn render_menu<W: Write + ?Sized>(
        &self,
        entries: &[MenuEntry],
        out: &mut W,
    ) -> io::Result<()> {
        let label_width = self.label_width(entries);
        let module_width = self.module_width(entries);

        writeln!(
            out,
            "{} {DESCRIPTION_HEADER}",
            self.util.pad_visible(MODULE_HEADER, module_width)
        )?;
        writeln!(
            out,
            "{} {}",
            self.util
                .pad_visible(&underline(MODULE_HEADER), module_width),
            underline(DESCRIPTION_HEADER)
        )?;

        for entry in entries {
            let cell = format!(
                "{}) {}",
                entry.key(),
                self.util.pad_visible(entry.label(), label_width)
            );
            writeln!(
                out,
                "{FG_CYAN}{}{STYLE_RESET} {}",
                self.util.pad_visible(&cell, module_width),
                entry.description()
            )?;
        }
        Ok(())
    }
}

fn underline(header: &str) -> String {
    "─".repeat(header.chars().count())
}
