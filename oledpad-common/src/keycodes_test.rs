use super::*;

#[test]
fn names_round_about() {
    assert_eq!(key_code("a"), Some(usage::A));
    assert_eq!(key_code("A"), Some(usage::A));
    assert_eq!(key_code("-"), Some(usage::MINUS));
    assert_eq!(key_code("P_0"), Some(usage::P0));
    assert_eq!(key_code("pg-up"), Some(usage::PAGE_UP));
    assert_eq!(key_code("nope"), None);

    assert_eq!(key_name(usage::F19), Some("f19"));
    assert_eq!(key_name(usage::VOLUME_DOWN), Some("vold"));
}

#[test]
fn table_is_ordered_and_unique() {
    let mut prev = 0;
    for (i, (_, code)) in keycodes_iter().enumerate() {
        if i > 0 {
            assert!(code > prev, "usage {code:#x} out of order");
        }
        prev = code;
    }
}

#[test]
fn meh_is_ctrl_shift_alt() {
    assert_eq!(modifier::MEH, 0b111);
    assert_eq!(modifier::SHIFT_MASK & modifier::RSHIFT, modifier::RSHIFT);
}
