// ANSI/VT100 sequences used by the menu screens.

/// Clear the entire screen.
pub const CLEAR_SCREEN: &str = crate::csi!("2J");
/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = crate::csi!("H");

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
pub const STYLE_BOLD: &str = crate::csi!("1m");

pub const FG_RED: &str = crate::csi!("31m");
pub const FG_GREEN: &str = crate::csi!("32m");
pub const FG_YELLOW: &str = crate::csi!("33m");
pub const FG_CYAN: &str = crate::csi!("36m");
/// Bold blue, used for the input prompt.
pub const PROMPT_STYLE: &str = crate::csi2!("1m", "34m");
