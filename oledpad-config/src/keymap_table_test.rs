use oledpad_common::boards::find;

use super::*;

#[test]
fn debug_macropad_table() {
    let board = find("macropad/debug").unwrap();

    assert_eq!(
        layer_table(board.keymap, 0),
        "0  NO  NO\n7  8   9\n4  5   6\n1  2   3\n"
    );
}

#[test]
fn single_layer() {
    let board = find("raw_hid_example").unwrap();

    let text = board_keymap(board, Some(1));
    assert!(text.starts_with("layer 1 (test):\n"), "{text}");
    assert!(text.contains("BOOT"), "{text}");
    assert!(!text.contains("layer 0"), "{text}");
}

#[test]
fn all_layers() {
    let board = find("kevinpanaro").unwrap();

    let text = board_keymap(board, None);
    assert_eq!(text.matches("layer ").count(), 7);
    assert!(text.contains("layer 6 ("), "{text}");
}

#[test]
fn board_summary() {
    let board = find("macropad/kevinpanaro").unwrap();

    assert_eq!(
        summary(board),
        "macropad/kevinpanaro: 7 layers of 4x3, 1 tap dances, protocol: compact"
    );
    assert_eq!(
        summary(find("mokapad/default").unwrap()),
        "mokapad/default: 1 layers of 4x3, 0 tap dances, protocol: none"
    );
}
