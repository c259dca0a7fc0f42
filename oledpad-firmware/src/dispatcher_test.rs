use oledpad_common::raw_hid::{self, query, scroll, REPORT_LEN};

use crate::{
    display_test_stub::{DisplayCall, TestDisplay},
    host_test_stub::TestSender,
};

use super::*;

extern crate std;

macro_rules! setup {
    ($variant:expr, $d:ident, $disp:ident, $sender:ident, $x:block) => {
        #[allow(unused_mut)]
        let mut $d = Dispatcher::new($variant);
        let mut $disp = TestDisplay::default();
        let mut $sender = TestSender::default();
        $x
    };
    ($d:ident, $disp:ident, $sender:ident, $x:block) => {
        setup!(Variant::Extended, $d, $disp, $sender, $x)
    };
}

fn report(bytes: &[u8]) -> [u8; REPORT_LEN] {
    let mut r = [0; REPORT_LEN];
    r[..bytes.len()].copy_from_slice(bytes);
    r
}

#[test]
fn write_sets_cursor_then_text() {
    setup!(d, disp, sender, {
        d.receive(
            &report(&[raw_hid::WRITE, 2, b'H', b'E', b'L', b'L', b'O']),
            &mut disp,
            0,
            &mut sender,
        );

        assert_eq!(
            disp.calls,
            [
                DisplayCall::SetCursor(0, 2),
                DisplayCall::Write("HELLO".into())
            ]
        );
        assert!(sender.reports.is_empty());
    });
}

#[test]
fn write_invalid_utf8_keeps_valid_prefix() {
    setup!(d, disp, sender, {
        d.receive(
            &report(&[raw_hid::WRITE, 0, b'o', b'k', 0xc3]),
            &mut disp,
            0,
            &mut sender,
        );

        assert_eq!(disp.take_text(), "ok");
    });
}

#[test]
fn pixels_until_end_marker() {
    setup!(d, disp, sender, {
        d.receive(
            &report(&[raw_hid::PIXEL, 1, 3, 4, 5, 6, 7, 8, raw_hid::PIXEL_END, 9]),
            &mut disp,
            0,
            &mut sender,
        );

        assert_eq!(
            disp.calls,
            [
                DisplayCall::Pixel(3, 4, true),
                DisplayCall::Pixel(5, 6, true),
                DisplayCall::Pixel(7, 8, true),
            ]
        );
    });
}

#[test]
fn compact_pixels_always_on() {
    setup!(Variant::Compact, d, disp, sender, {
        d.receive(
            &report(&[raw_hid::PIXEL, 10, 11, raw_hid::PIXEL_END]),
            &mut disp,
            0,
            &mut sender,
        );

        assert_eq!(disp.calls, [DisplayCall::Pixel(10, 11, true)]);
    });
}

#[test]
fn scroll_commands() {
    setup!(d, disp, sender, {
        for data in [
            [raw_hid::SCROLL, scroll::ON, 0, 0],
            [raw_hid::SCROLL, scroll::RIGHT, 0, 0],
            [raw_hid::SCROLL, scroll::SPEED, 3, 0],
            [raw_hid::SCROLL, scroll::AREA, 1, 4],
            [raw_hid::SCROLL, scroll::OFF, 0, 0],
        ] {
            d.receive(&report(&data), &mut disp, 0, &mut sender);
        }

        assert_eq!(
            disp.calls,
            [
                DisplayCall::ScrollLeft,
                DisplayCall::ScrollRight,
                DisplayCall::ScrollSpeed(3),
                DisplayCall::ScrollArea(1, 4),
                DisplayCall::ScrollOff,
            ]
        );
    });
}

#[test]
fn compact_scroll_ids_shift_down() {
    setup!(Variant::Compact, d, disp, sender, {
        d.receive(
            &report(&[raw_hid::SCROLL, scroll::LEFT - 1]),
            &mut disp,
            0,
            &mut sender,
        );
        d.receive(
            &report(&[raw_hid::SCROLL, scroll::SPEED - 1, 6]),
            &mut disp,
            0,
            &mut sender,
        );

        assert_eq!(
            disp.calls,
            [DisplayCall::ScrollLeft, DisplayCall::ScrollSpeed(6)]
        );
    });
}

#[test]
fn brightness_sets_level() {
    setup!(d, disp, sender, {
        d.receive(
            &report(&[raw_hid::BRIGHTNESS, 77]),
            &mut disp,
            0,
            &mut sender,
        );

        assert_eq!(disp.calls, [DisplayCall::SetBrightness(77)]);
        assert_eq!(disp.brightness, 77);
    });
}

#[test]
fn query_power_state_answers_once() {
    setup!(d, disp, sender, {
        d.receive(
            &report(&[raw_hid::QUERY, query::POWER_STATE]),
            &mut disp,
            0,
            &mut sender,
        );
        assert_eq!(sender.reports.len(), 1);
        assert_eq!(sender.reports[0][0], 1);

        disp.on = false;
        d.receive(
            &report(&[raw_hid::QUERY, query::POWER_STATE]),
            &mut disp,
            0,
            &mut sender,
        );
        assert_eq!(sender.reports.len(), 2);
        assert_eq!(sender.reports[1], [0; REPORT_LEN]);
    });
}

#[test]
fn query_power_switch_sends_nothing() {
    setup!(d, disp, sender, {
        d.receive(
            &report(&[raw_hid::QUERY, query::POWER_OFF]),
            &mut disp,
            0,
            &mut sender,
        );
        assert!(!disp.on);
        d.receive(
            &report(&[raw_hid::QUERY, query::POWER_ON]),
            &mut disp,
            0,
            &mut sender,
        );
        assert!(disp.on);

        assert_eq!(disp.calls, [DisplayCall::Off, DisplayCall::On]);
        assert!(sender.reports.is_empty());
    });
}

#[test]
fn query_values() {
    setup!(d, disp, sender, {
        disp.brightness = 200;
        disp.max_chars = 21;
        disp.max_lines = 4;

        for q in [
            query::LAYER,
            query::BRIGHTNESS,
            query::MAX_CHARS,
            query::MAX_LINES,
        ] {
            d.receive(&report(&[raw_hid::QUERY, q]), &mut disp, 5, &mut sender);
        }

        let values: std::vec::Vec<u8> = sender.reports.iter().map(|r| r[0]).collect();
        assert_eq!(values, [5, 200, 21, 4]);
        assert!(sender.reports.iter().all(|r| r[1..] == [0; REPORT_LEN - 1]));
    });
}

#[test]
fn clear_all_and_line() {
    setup!(d, disp, sender, {
        d.receive(
            &report(&[raw_hid::CLEAR, raw_hid::CLEAR_ALL]),
            &mut disp,
            0,
            &mut sender,
        );
        d.receive(&report(&[raw_hid::CLEAR, 3]), &mut disp, 0, &mut sender);

        assert_eq!(
            disp.calls,
            [
                DisplayCall::Clear,
                DisplayCall::SetCursor(0, 3),
                DisplayCall::AdvancePage(true),
            ]
        );
    });
}

#[test]
fn unknown_command_does_nothing() {
    setup!(d, disp, sender, {
        d.receive(&report(&[99, 1, 2, 3]), &mut disp, 0, &mut sender);
        d.receive(&[], &mut disp, 0, &mut sender);

        assert!(disp.calls.is_empty());
        assert!(sender.reports.is_empty());
    });
}

#[test]
fn compact_ignores_extended_only_commands() {
    setup!(Variant::Compact, d, disp, sender, {
        d.receive(
            &report(&[raw_hid::BRIGHTNESS, 10]),
            &mut disp,
            0,
            &mut sender,
        );
        d.receive(
            &report(&[raw_hid::QUERY, query::LAYER]),
            &mut disp,
            0,
            &mut sender,
        );

        assert!(disp.calls.is_empty());
        assert!(sender.reports.is_empty());
    });
}

#[test]
fn layer_change_only_reported_when_connected() {
    setup!(d, disp, sender, {
        d.layer_changed(2, &mut sender);
        assert!(sender.reports.is_empty());
        assert!(!d.is_connected());

        d.receive(&report(&[99]), &mut disp, 0, &mut sender);
        assert!(d.is_connected());

        d.layer_changed(3, &mut sender);
        assert_eq!(sender.reports, [raw_hid::answer(3)]);
    });
}
