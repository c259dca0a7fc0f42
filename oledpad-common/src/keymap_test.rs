use crate::keycodes::usage;

use super::*;

extern crate std;
use std::string::ToString;

use Action::{Bootloader, Key, LayerTo, ModTap, Modified, No, Rgb, Transparent, User};

const TDS: &[TapDance] = &[TapDance {
    single: usage::N1,
    double: usage::N0,
}];

#[test]
fn check_accepts_good_keymap() {
    let km = Keymap::new(
        [
            [[Key(usage::A), LayerTo(1)], [Action::TapDance(0), No]],
            [[Transparent, LayerTo(0)], [Bootloader, User(3)]],
        ],
        TDS,
    );
    assert_eq!(km.check(), Ok(()));
}

#[test]
fn check_rejects_bad_layer_target() {
    let km = Keymap::new([[[Key(usage::A), LayerTo(1)]]], &[]);
    assert_eq!(
        km.check(),
        Err(KeymapError::LayerOutOfRange {
            layer: 0,
            row: 0,
            col: 1
        })
    );
}

#[test]
fn check_rejects_bad_tap_dance() {
    let km = Keymap::new([[[No]], [[Action::TapDance(1)]]], TDS);
    assert_eq!(
        km.check(),
        Err(KeymapError::TapDanceOutOfRange {
            layer: 1,
            row: 0,
            col: 0
        })
    );
    assert_eq!(
        km.check().unwrap_err().to_string(),
        "layer 1 row 0 col 0: tap dance index out of range"
    );
}

#[test]
fn check_rejects_empty() {
    let km: Keymap<0, 1, 1> = Keymap::new([], &[]);
    assert_eq!(km.check(), Err(KeymapError::NoLayers));
}

#[test]
fn check_in_const() {
    const KM: Keymap<1, 1, 2> = Keymap::new([[[Key(usage::B), LayerTo(0)]]], &[]);
    const _: () = assert!(KM.check().is_ok());
    assert_eq!(KM.get(0, 0, 0), Key(usage::B));
}

#[test]
fn resolve_falls_through_transparent() {
    let km = Keymap::new(
        [
            [[Key(usage::A), Key(usage::B)]],
            [[Transparent, Key(usage::C)]],
            [[Transparent, Transparent]],
        ],
        &[],
    );

    assert_eq!(km.resolve(2, 0, 0), Key(usage::A));
    assert_eq!(km.resolve(2, 0, 1), Key(usage::C));
    assert_eq!(km.resolve(0, 0, 1), Key(usage::B));
    assert_eq!(km.resolve(9, 0, 1), Key(usage::C));
    assert_eq!(km.get(5, 0, 0), No);
    assert_eq!(km.get(0, 3, 0), No);
}

#[test]
fn action_names() {
    assert_eq!(Key(usage::P0).to_string(), "p0");
    assert_eq!(Key(0xa5).to_string(), "0xa5");
    assert_eq!(Modified(modifier::MEH, usage::F13).to_string(), "MEH(f13)");
    assert_eq!(
        ModTap(modifier::LCTRL | modifier::LSHIFT, usage::ESCAPE).to_string(),
        "MT(LCTL|LSFT, esc)"
    );
    assert_eq!(LayerTo(2).to_string(), "TO(2)");
    assert_eq!(Rgb(RgbStep::IncreaseHue).to_string(), "RGB_HUI");
    assert_eq!(Action::TapDance(0).to_string(), "TD(0)");
    assert_eq!(Transparent.to_string(), "TRNS");
}

#[test]
fn view_dimensions() {
    let km = Keymap::new([[[No; 4]; 3]; 2], TDS);
    let view: &dyn KeymapView = &km;
    assert_eq!(
        (view.layer_count(), view.rows(), view.cols()),
        (2, 3, 4)
    );
    assert_eq!(view.tap_dances().len(), 1);
    assert!(view.validate().is_ok());
    assert_eq!(km.tap_dance(0).map(|t| t.double), Some(usage::N0));
    assert_eq!(km.tap_dance(1), None);
}
