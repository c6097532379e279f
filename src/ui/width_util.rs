use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC_BYTE;

const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// Width arithmetic that ignores ANSI styling.
#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    /// Remove CSI sequences (`ESC [ ... letter`), keeping everything else.
    pub fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            if c as u32 == u32::from(ESC_BYTE) && chars.peek() == Some(&'[') {
                chars.next();
                for nc in chars.by_ref() {
                    if nc.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
            out.push(c);
        }
        out
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    /// Right-pad `s` with spaces until its visible width reaches `width`.
    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let missing = width.saturating_sub(self.visible_width(s));
        format!("{s}{}", " ".repeat(missing))
    }

    /// Best-effort terminal width.
    pub fn terminal_width(&self) -> usize {
        match terminal_size() {
            Some((Width(w), _)) => usize::from(w),
            None => FALLBACK_TERMINAL_WIDTH,
        }
    }

    /// Left padding that centers a block of `content_width` in the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        self.terminal_width().saturating_sub(content_width) / 2
    }
}
