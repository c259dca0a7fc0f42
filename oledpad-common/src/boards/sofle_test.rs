use super::*;

#[test]
fn rgb_keys_in_thumb_rows() {
    assert_eq!(KEYMAP.get(DEBUG, 4, 5), Rgb(RgbStep::NextMode));
    assert_eq!(KEYMAP.get(DEBUG, 9, 5), Rgb(RgbStep::ModeSwirl));
    assert_eq!(KEYMAP.get(DEBUG, 0, 0), Action::No);
}
