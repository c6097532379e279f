use crate::ui::ansi::{FG_CYAN, STYLE_RESET};
use crate::ui::width_util::WidthUtil;

#[test]
fn width_util_strips_ansi_for_visible_width() {
    let util = WidthUtil::default();
    let s = format!("{FG_CYAN}Quit{STYLE_RESET}");
    assert_eq!(util.visible_width(&s), 4);
}

#[test]
fn strip_ansi_keeps_multibyte_text() {
    let s = format!("{FG_CYAN}≡ MAIN ≡{STYLE_RESET} •");
    assert_eq!(WidthUtil::strip_ansi(&s), "≡ MAIN ≡ •");
}

#[test]
fn pad_visible_ignores_styling() {
    let util = WidthUtil::default();
    let padded = util.pad_visible(&format!("{FG_CYAN}abc{STYLE_RESET}"), 5);
    assert_eq!(util.visible_width(&padded), 5);
    assert_eq!(util.pad_visible("abcdef", 3), "abcdef");
}

#[test]
fn center_pad_never_exceeds_terminal_width() {
    let util = WidthUtil::default();
    assert!(util.center_pad(10) <= util.terminal_width());
    assert_eq!(util.center_pad(usize::MAX), 0);
}
