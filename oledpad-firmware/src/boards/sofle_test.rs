extern crate std;

use crate::{
    display_test_stub::{DisplayCall, TestDisplay},
    host_test_stub::{HostCall, TestHost, TestSender},
};

use super::*;

macro_rules! cx {
    ($host:ident, $display:ident, $sender:ident) => {
        &mut Context {
            host: &mut $host,
            display: &mut $display,
            sender: &mut $sender,
        }
    };
}

fn parts(master: bool) -> (TestHost, TestDisplay, TestSender) {
    (
        TestHost {
            master,
            ..Default::default()
        },
        TestDisplay::default(),
        TestSender::default(),
    )
}

#[test]
fn rotation_by_half() {
    let mut km = SofleDebug::default();
    let (mut host, mut display, mut sender) = parts(true);
    assert_eq!(
        km.oled_init(cx!(host, display, sender), Rotation::R0),
        Rotation::R270
    );
    host.master = false;
    assert_eq!(
        km.oled_init(cx!(host, display, sender), Rotation::R0),
        Rotation::R180
    );
}

#[test]
fn master_shows_status() {
    let mut km = SofleDebug::default();
    let (mut host, mut display, mut sender) = parts(true);

    assert!(!km.oled_task(cx!(host, display, sender)));
    let text: std::string::String = display
        .calls
        .iter()
        .map(|c| match c {
            DisplayCall::Write(s) => s.as_str(),
            DisplayCall::AdvancePage(_) => "|",
            _ => "",
        })
        .collect();
    assert_eq!(text, "Sofle\n\n\nDEBUG|\n\nLayer|rgbdebug\n\n\n");
}

#[test]
fn master_status_unknown_layer() {
    let mut km = SofleDebug::default();
    let (mut host, mut display, mut sender) = parts(true);
    host.layer = 3;
    host.default_layer = 2;

    km.oled_task(cx!(host, display, sender));
    assert_eq!(display.take_text(), "Sofle\n\n\nUndef\n\nLayerUndef\n\n");
}

#[test]
fn slave_shows_logo() {
    let mut km = SofleDebug::default();
    let (mut host, mut display, mut sender) = parts(false);

    km.oled_task(cx!(host, display, sender));
    assert_eq!(display.calls, [DisplayCall::WriteRaw(512)]);
    assert_eq!(LOGO[21], 128);
    assert_eq!(LOGO.iter().filter(|b| **b != 0).count() > 100, true);
}

#[test]
fn forced_shift_drives_hue_and_val() {
    let mut km = SofleDebug::default();
    let (mut host, mut display, mut sender) = parts(true);

    for (index, cw) in [(0, true), (0, false), (1, true), (1, false)] {
        assert!(km.encoder_update(cx!(host, display, sender), index, cw));
    }
    assert_eq!(
        host.calls,
        [
            HostCall::Rgb(RgbStep::IncreaseHue),
            HostCall::Rgb(RgbStep::DecreaseHue),
            HostCall::Rgb(RgbStep::DecreaseVal),
            HostCall::Rgb(RgbStep::IncreaseVal),
        ]
    );
}

#[test]
fn unforced_branches() {
    let mut km = SofleDebug { force_shift: false };
    let (mut host, mut display, mut sender) = parts(true);

    host.oneshot_mods = modifier::RCTRL;
    km.encoder_update(cx!(host, display, sender), 1, true);
    host.mods = modifier::LSHIFT;
    km.encoder_update(cx!(host, display, sender), 0, true);
    host.mods = 0;
    host.oneshot_mods = 0;
    km.encoder_update(cx!(host, display, sender), 1, false);
    km.encoder_update(cx!(host, display, sender), 0, true);
    km.encoder_update(cx!(host, display, sender), 2, true);

    assert_eq!(
        host.calls,
        [
            HostCall::Rgb(RgbStep::IncreaseSpeed),
            HostCall::Rgb(RgbStep::IncreaseHue),
            HostCall::Tap(PAGE_DOWN),
            HostCall::TapDelay(VOLUME_DOWN, MEDIA_KEY_DELAY),
        ]
    );
}
