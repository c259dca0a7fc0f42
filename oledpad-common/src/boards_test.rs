use crate::keymap::Action;

use super::*;

#[test]
fn find_by_full_name() {
    let board = find("macropad/kevinpanaro").unwrap();
    assert_eq!(board.protocol, Some(Variant::Compact));
    assert_eq!(board.keymap.layer_count(), 7);
}

#[test]
fn find_by_keymap_name() {
    assert_eq!(find("raw_hid_example").unwrap().name, "macropad/raw_hid_example");
    assert_eq!(find("default").unwrap().name, "mokapad/default");
    assert_eq!(find("debug").unwrap().name, "macropad/debug");
}

#[test]
fn find_unknown() {
    assert!(find("macropad").is_none());
    assert!(find("planck/default").is_none());
    assert!(find("").is_none());
}

#[test]
fn every_keymap_validates() {
    for board in BOARDS {
        assert_eq!(board.keymap.validate(), Ok(()), "{}", board.name);
    }
}

#[test]
fn layer_names_cover_layers() {
    for board in BOARDS {
        assert_eq!(
            board.layer_names.len(),
            board.keymap.layer_count(),
            "{}",
            board.name
        );
    }
}

#[test]
fn macropad_dimensions() {
    for board in BOARDS.iter().filter(|b| b.name.starts_with("macropad/")) {
        assert_eq!(
            (board.keymap.rows(), board.keymap.cols()),
            (macropad::ROWS, macropad::COLS)
        );
        for layer in 0..board.keymap.layer_count() as u8 {
            assert_eq!(board.keymap.action(layer, 0, 1), Action::No);
            assert_eq!(board.keymap.action(layer, 0, 2), Action::No);
        }
    }
}
