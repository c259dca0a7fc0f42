use super::*;

extern crate std;
use std::vec::Vec;

fn report(bytes: &[u8]) -> [u8; REPORT_LEN] {
    let mut r = [0; REPORT_LEN];
    r[..bytes.len()].copy_from_slice(bytes);
    r
}

#[test]
fn write_text_stops_at_nul() {
    let r = report(&[WRITE, 2, b'H', b'E', b'L', b'L', b'O']);
    assert_eq!(
        Command::decode(&r, Variant::Extended),
        Some(Command::Write {
            row: 2,
            text: b"HELLO"
        })
    );
}

#[test]
fn write_text_runs_to_report_end() {
    let mut r = [b'x'; REPORT_LEN];
    r[0] = WRITE;
    r[1] = 0;
    let Some(Command::Write { text, .. }) = Command::decode(&r, Variant::Compact) else {
        panic!("expected write");
    };
    assert_eq!(text.len(), REPORT_LEN - 2);
}

#[test]
fn pixel_pairs_until_sentinel() {
    let r = report(&[PIXEL, 0, 1, 2, 3, 4, PIXEL_END, 9, 9, 9]);
    let cmd = Command::decode(&r, Variant::Extended).unwrap();
    assert!(matches!(cmd, Command::Pixels { on: false, .. }));
    assert_eq!(cmd.pixels().collect::<Vec<_>>(), [(1, 2), (3, 4)]);
}

#[test]
fn compact_pixels_start_at_byte_one() {
    let r = report(&[PIXEL, 5, 6, PIXEL_END]);
    let cmd = Command::decode(&r, Variant::Compact).unwrap();
    assert!(matches!(cmd, Command::Pixels { on: true, .. }));
    assert_eq!(cmd.pixels().collect::<Vec<_>>(), [(5, 6)]);
}

#[test]
fn pixels_without_sentinel_stay_in_bounds() {
    let mut r = [7; REPORT_LEN];
    r[0] = PIXEL;
    // compact: 31 bytes after the command, so 15 whole pairs and one dangling byte
    let cmd = Command::decode(&r, Variant::Compact).unwrap();
    assert_eq!(cmd.pixels().count(), 15);

    let cmd = Command::decode(&r, Variant::Extended).unwrap();
    assert_eq!(cmd.pixels().count(), 15);

    // oversized input is cut at the report length
    let long = [7u8; 100];
    let mut long = long;
    long[0] = PIXEL;
    let cmd = Command::decode(&long, Variant::Extended).unwrap();
    assert_eq!(cmd.pixels().count(), 15);
}

#[test]
fn y_may_be_the_sentinel_value() {
    let r = report(&[PIXEL, 1, 3, PIXEL_END, PIXEL_END]);
    let cmd = Command::decode(&r, Variant::Extended).unwrap();
    assert_eq!(cmd.pixels().collect::<Vec<_>>(), [(3, PIXEL_END)]);
}

#[test]
fn scroll_ids_per_variant() {
    use ScrollOp::*;
    fn ext(b: &[u8]) -> Option<Command<'_>> {
        Command::decode(b, Variant::Extended)
    }
    fn cmp(b: &[u8]) -> Option<Command<'_>> {
        Command::decode(b, Variant::Compact)
    }

    assert_eq!(ext(&[SCROLL, 1]), Some(Command::Scroll(Off)));
    assert_eq!(ext(&[SCROLL, 2]), Some(Command::Scroll(Left)));
    assert_eq!(ext(&[SCROLL, 3]), Some(Command::Scroll(Right)));
    assert_eq!(ext(&[SCROLL, 4]), Some(Command::Scroll(Left)));
    assert_eq!(ext(&[SCROLL, 5, 3]), Some(Command::Scroll(Speed(3))));
    assert_eq!(
        ext(&[SCROLL, 6, 1, 4]),
        Some(Command::Scroll(Area { start: 1, end: 4 }))
    );
    assert_eq!(ext(&[SCROLL, 0]), None);
    assert_eq!(ext(&[SCROLL, 7]), None);

    assert_eq!(cmp(&[SCROLL, 0]), Some(Command::Scroll(Off)));
    assert_eq!(cmp(&[SCROLL, 4, 6]), Some(Command::Scroll(Speed(6))));
    assert_eq!(
        cmp(&[SCROLL, 5, 2, 3]),
        Some(Command::Scroll(Area { start: 2, end: 3 }))
    );
    assert_eq!(cmp(&[SCROLL, 6]), None);
    assert_eq!(cmp(&[SCROLL, 0xff]), None);
}

#[test]
fn compact_has_no_brightness_or_query() {
    assert_eq!(Command::decode(&[BRIGHTNESS, 9], Variant::Compact), None);
    assert_eq!(Command::decode(&[QUERY, 1], Variant::Compact), None);
    assert_eq!(
        Command::decode(&[BRIGHTNESS, 9], Variant::Extended),
        Some(Command::Brightness(9))
    );
    assert_eq!(
        Command::decode(&[QUERY, 4], Variant::Extended),
        Some(Command::Query(Query::Layer))
    );
    assert_eq!(Command::decode(&[QUERY, 8], Variant::Extended), None);
}

#[test]
fn clear_all_or_line() {
    assert_eq!(
        Command::decode(&[CLEAR, CLEAR_ALL], Variant::Extended),
        Some(Command::Clear(ClearOp::All))
    );
    assert_eq!(
        Command::decode(&[CLEAR, 3], Variant::Compact),
        Some(Command::Clear(ClearOp::Line(3)))
    );
}

#[test]
fn unknown_and_empty_reports() {
    assert_eq!(Command::decode(&[], Variant::Extended), None);
    assert_eq!(Command::decode(&[0], Variant::Extended), None);
    assert_eq!(Command::decode(&report(&[99]), Variant::Extended), None);
    assert_eq!(Command::decode(&[6, 1], Variant::Extended), None);
}

#[test]
fn encode_pixels_fills_one_report() {
    let coords: Vec<u8> = (0..PIXELS_PER_REPORT as u8 * 2).collect();
    let r = Command::Pixels {
        on: true,
        coords: &coords,
    }
    .encode(Variant::Extended)
    .unwrap();

    assert_eq!(&r[..4], &[PIXEL, 1, 0, 1]);
    assert_eq!(r[2 + coords.len()], PIXEL_END);

    let cmd = Command::decode(&r, Variant::Extended).unwrap();
    assert_eq!(cmd.pixels().count(), PIXELS_PER_REPORT);
}

#[test]
fn encode_scroll_compact_ids() {
    let r = Command::Scroll(ScrollOp::Speed(4))
        .encode(Variant::Compact)
        .unwrap();
    assert_eq!(&r[..3], &[SCROLL, 4, 4]);

    let r = Command::Scroll(ScrollOp::Left)
        .encode(Variant::Extended)
        .unwrap();
    assert_eq!(&r[..2], &[SCROLL, scroll::LEFT]);
}

#[test]
fn encode_rejects_what_compact_lacks() {
    assert!(Command::Query(Query::Layer).encode(Variant::Compact).is_none());
    assert_eq!(
        Command::Query(Query::MaxLines)
            .encode(Variant::Extended)
            .unwrap()[..2],
        [QUERY, query::MAX_LINES]
    );
}

#[test]
fn answer_report() {
    let r = answer(1);
    assert_eq!(r.len(), REPORT_LEN);
    assert_eq!(r[0], 1);
    assert!(r[1..].iter().all(|&b| b == 0));
}

#[test]
fn report_usage_before_collection() {
    assert_eq!(report_usage(&[0x05, 0x01, 0x09, 0x06, 0xa1, 0x01]), Some((0x01, 0x06)));
    assert_eq!(
        report_usage(&[0x06, 0x31, 0xff, 0x09, 0x74, 0xa1, 0x01, 0x09, 0x75]),
        Some((0xff31, 0x74))
    );
    assert_eq!(
        report_usage(&[0x0b, 0x61, 0x00, 0x60, 0xff, 0xa1, 0x01]),
        Some((RAW_USAGE_PAGE, RAW_USAGE))
    );
    // only usages ahead of the first collection count
    assert_eq!(report_usage(&[0x06, 0x60, 0xff, 0xa1, 0x01, 0x09, 0x61]), None);
    assert_eq!(report_usage(&[0x09, 0x61]), None);
    assert_eq!(report_usage(&[0x06, 0x60]), None);
    assert_eq!(report_usage(&[]), None);
}
