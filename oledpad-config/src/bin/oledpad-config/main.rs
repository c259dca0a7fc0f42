use clap::{Args, Parser, Subcommand, ValueEnum};
use oledpad_common::{
    boards::{self, Board, BOARDS},
    keycodes,
    raw_hid::{Query, ScrollOp, Variant},
};
use oledpad_config::{
    device_config::{parse_hex, DeviceConfig, Protocol},
    display_coms::{marquee_frames, DisplayCtl},
    keymap_table,
    picture::Picture,
};
use std::{path::PathBuf, process, sync::Arc, thread::spawn, time::Duration};

use anyhow::{anyhow, Result};
use log::{debug, warn};

const HID_CLASS: u8 = 3;

/// Drive the OLED of an oledpad keyboard
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// The USB vendor_id of the device to find in 4 hex digits
    #[clap(long, short)]
    vendor_id: Option<String>,
    /// The USB product_id of the device to find in 4 hex digits
    #[clap(long, short)]
    product_id: Option<String>,
    /// Device description file (oledpad.toml)
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Protocol dialect of the keymap; overrides the device file
    #[clap(long)]
    protocol: Option<Protocol>,
}

#[derive(Subcommand)]
enum Commands {
    /// List USB devices with a HID interface
    List,
    /// Clear the whole display
    Clear,
    /// Clear one line
    ClearLine(LineArgs),
    /// Replace the text of a line
    Write(WriteArgs),
    /// Turn pixels on or off
    Pixels(PixelsArgs),
    /// Draw a picture file of 0s and 1s
    Draw(DrawArgs),
    /// Hardware scrolling
    Scroll(ScrollArgs),
    /// Scroll text through a line
    ScrollText(ScrollTextArgs),
    /// Set the display brightness
    Brightness(BrightnessArgs),
    /// Turn the display on
    On,
    /// Turn the display off
    Off,
    /// Ask the keyboard for a value
    Query(QueryArgs),
    /// Print a board keymap; lists the boards when none is given
    Keymap(KeymapArgs),
    /// Validate board keymaps
    Validate(ValidateArgs),
    /// List keycode names
    Keycodes(ListKeycodesArgs),
}

#[derive(Args)]
struct LineArgs {
    /// Line number starting at 0
    line: u8,
}

#[derive(Args)]
struct WriteArgs {
    /// Line number starting at 0
    line: u8,
    /// Text to show
    text: String,
}

#[derive(Args)]
struct PixelsArgs {
    /// Turn the pixels off instead of on
    #[clap(long)]
    off: bool,

    /// Pixels as x,y pairs
    #[clap(required = true, value_parser = parse_point)]
    pixels: Vec<(u8, u8)>,
}

#[derive(Args)]
struct DrawArgs {
    /// Turn the pixels off instead of on
    #[clap(long)]
    off: bool,

    /// Where the top left of the picture goes, as x,y
    #[clap(long, short, value_parser = parse_point, default_value = "0,0")]
    origin: (u8, u8),

    /// Picture file; every 1 is a lit pixel
    file: PathBuf,
}

#[derive(Args)]
struct ScrollArgs {
    #[command(subcommand)]
    op: ScrollCmd,
}

#[derive(Subcommand)]
enum ScrollCmd {
    /// Stop scrolling
    Off,
    /// Scroll left
    Left,
    /// Scroll right
    Right,
    /// Set the scroll speed
    Speed {
        /// 0 to 7
        speed: u8,
    },
    /// Limit scrolling to a range of lines
    Area { start: u8, end: u8 },
}

#[derive(Args)]
struct ScrollTextArgs {
    /// Line number starting at 0
    line: u8,

    /// Text to scroll
    text: String,

    /// Delay between frames in milliseconds
    #[clap(long, short, default_value_t = 100)]
    delay_ms: u64,

    /// Scroll to the right; defaults to left
    #[clap(long, short)]
    right: bool,
}

#[derive(Args)]
struct BrightnessArgs {
    /// 0 to 255
    level: u8,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum QueryKind {
    PowerState,
    Layer,
    Brightness,
    MaxChars,
    MaxLines,
}
impl QueryKind {
    fn to_query(self) -> Query {
        match self {
            QueryKind::PowerState => Query::PowerState,
            QueryKind::Layer => Query::Layer,
            QueryKind::Brightness => Query::Brightness,
            QueryKind::MaxChars => Query::MaxChars,
            QueryKind::MaxLines => Query::MaxLines,
        }
    }
}

#[derive(Args)]
struct QueryArgs {
    /// The value to ask for
    what: QueryKind,
}

#[derive(Args)]
struct KeymapArgs {
    /// Board name, e.g. macropad/kevinpanaro or just kevinpanaro
    board: Option<String>,

    /// Only print this layer
    #[clap(long, short)]
    layer: Option<u8>,
}

#[derive(Args)]
struct ValidateArgs {
    /// Display information about each keymap
    #[clap(long, short)]
    verbose: bool,

    /// Board name; all boards when omitted
    board: Option<String>,
}

#[derive(Args)]
struct ListKeycodesArgs {
    /// Include the keycode hex value
    #[clap(long, short)]
    verbose: bool,

    /// Sort results by keycode; Defaults to sorting by name
    #[clap(long, short)]
    sort_by_keycode: bool,

    /// Only list key names that contain pattern (case insensitive). If pattern starts with 0x
    /// then key names matching the key code will be shown.
    #[clap()]
    pattern: Option<String>,
}

fn parse_point(v: &str) -> Result<(u8, u8), String> {
    let (x, y) = v
        .split_once(',')
        .ok_or_else(|| format!("Expected x,y found {v:?}"))?;
    let coord = |n: &str| {
        n.trim()
            .parse::<u8>()
            .map_err(|err| format!("Invalid coordinate {n:?}: {err}"))
    };
    Ok((coord(x)?, coord(y)?))
}

struct DeviceFinder {
    vendor_id: Option<u16>,
    product_id: Option<u16>,
    config: DeviceConfig,
    variant: Variant,
}
impl DeviceFinder {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => DeviceConfig::load(path)?,
            None => DeviceConfig::default(),
        };
        let vendor_id = parse_hex(cli.vendor_id.as_deref())?;
        let product_id = parse_hex(cli.product_id.as_deref())?;
        Ok(Self {
            vendor_id: vendor_id.or(config.vendor_id),
            product_id: product_id.or(config.product_id),
            variant: cli.protocol.unwrap_or(config.protocol).into(),
            config,
        })
    }

    fn no_found(&self) -> anyhow::Error {
        static ANY: &str = "any";
        fn u16_to_hex(a: &Option<u16>) -> String {
            match a {
                Some(n) => format!("{n:04x}"),
                None => ANY.to_owned(),
            }
        }
        anyhow!(
            "No matching raw HID usb device found!\n  vendor_id: {}, product_id: {}",
            u16_to_hex(&self.vendor_id),
            u16_to_hex(&self.product_id),
        )
    }

    fn iter_devices(&self) -> Result<impl Iterator<Item = nusb::DeviceInfo> + use<'_>> {
        let vendor_id = self.vendor_id;
        let product_id = self.product_id;
        let ans = nusb::list_devices().map(|i| {
            i.filter(move |d| {
                d.interfaces().any(|i| i.class() == HID_CLASS)
                    && vendor_id.is_none_or(|id| d.vendor_id() == id)
                    && product_id.is_none_or(|id| d.product_id() == id)
            })
        })?;
        Ok(ans)
    }

    fn get_display(&self) -> Result<Arc<DisplayCtl<nusb::Interface>>> {
        let Some(dev) = self.iter_devices()?.next() else {
            return Err(self.no_found());
        };
        debug!(
            "using {:04x}:{:04x} {}",
            dev.vendor_id(),
            dev.product_id(),
            dev.product_string().unwrap_or("")
        );
        let dev = dev.open()?;
        let ctl = DisplayCtl::<nusb::Interface>::find_raw_hid_interface(
            &dev,
            &self.config.raw_hid_match(),
            self.variant,
        )?;
        Ok(Arc::new(ctl))
    }

    /// A display whose answers are being read in the background.
    fn get_listening_display(&self) -> Result<Arc<DisplayCtl<nusb::Interface>>> {
        let ctl = self.get_display()?;
        let ctl2 = ctl.clone();

        spawn(move || {
            ctl2.listen();
        });

        Ok(ctl)
    }

    fn list_usb(&self) -> Result<()> {
        println!("HID devices:");
        for dev in self.iter_devices()? {
            print_dev_info(&dev);
        }

        println!();
        Ok(())
    }

    fn check_line(&self, line: u8) {
        if line >= self.config.rows {
            warn!(
                "line {line} is past the last display line {}",
                self.config.rows.saturating_sub(1)
            );
        }
    }

    fn clear_line(&self, args: &LineArgs) -> Result<()> {
        self.check_line(args.line);
        self.get_display()?.clear_line(args.line)
    }

    fn write(&self, args: &WriteArgs) -> Result<()> {
        self.check_line(args.line);
        self.get_display()?.write_line(args.line, &args.text)
    }

    fn pixels(&self, args: &PixelsArgs) -> Result<()> {
        self.get_display()?
            .pixels(!args.off, args.pixels.iter().copied())
    }

    fn draw(&self, args: &DrawArgs) -> Result<()> {
        let picture = Picture::load(&args.file)?;
        debug!("{} pixels in {}", picture.len(), args.file.display());
        self.get_display()?
            .pixels(!args.off, picture.pixels_at(args.origin))
    }

    fn scroll(&self, args: &ScrollArgs) -> Result<()> {
        let op = match args.op {
            ScrollCmd::Off => ScrollOp::Off,
            ScrollCmd::Left => ScrollOp::Left,
            ScrollCmd::Right => ScrollOp::Right,
            ScrollCmd::Speed { speed } => ScrollOp::Speed(speed),
            ScrollCmd::Area { start, end } => ScrollOp::Area { start, end },
        };
        self.get_display()?.scroll(op)
    }

    fn scroll_text(&self, args: &ScrollTextArgs) -> Result<()> {
        self.check_line(args.line);
        let frames = marquee_frames(&args.text, self.config.columns as usize, !args.right);
        self.get_display()?.scroll_text(
            args.line,
            frames,
            Duration::from_millis(args.delay_ms),
        )
    }

    fn query(&self, args: &QueryArgs) -> Result<()> {
        let value = self.get_listening_display()?.query(args.what.to_query())?;
        match args.what {
            QueryKind::PowerState => println!("{}", if value == 0 { "off" } else { "on" }),
            _ => println!("{value}"),
        }
        Ok(())
    }
}

fn print_dev_info(dev: &nusb::DeviceInfo) {
    println!(
        "Device: {:03}.{:03}, Id: {:04x}:{:04x}, Name: {} - {}, Serial: {} ",
        dev.bus_number(),
        dev.device_address(),
        dev.vendor_id(),
        dev.product_id(),
        dev.manufacturer_string().unwrap_or(""),
        dev.product_string().unwrap_or(""),
        dev.serial_number().unwrap_or(""),
    );
}

fn find_board(name: &str) -> Result<&'static Board> {
    boards::find(name).ok_or_else(|| anyhow!("Unknown board {name:?}"))
}

fn keymap(args: &KeymapArgs) -> Result<()> {
    match &args.board {
        Some(name) => {
            let board = find_board(name)?;
            if let Some(layer) = args.layer {
                if layer as usize >= board.keymap.layer_count() {
                    return Err(anyhow!("{} has no layer {layer}", board.name));
                }
            }
            print!("{}", keymap_table::board_keymap(board, args.layer));
        }
        None => {
            for board in BOARDS {
                println!("{}", board.name);
            }
        }
    }
    Ok(())
}

fn validate_board(board: &Board) -> Result<()> {
    board
        .keymap
        .validate()
        .map_err(|err| anyhow!("{}: {err}", board.name))?;
    if board.layer_names.len() != board.keymap.layer_count() {
        return Err(anyhow!(
            "{}: {} layer names for {} layers",
            board.name,
            board.layer_names.len(),
            board.keymap.layer_count()
        ));
    }
    Ok(())
}

fn validate(args: &ValidateArgs) -> Result<()> {
    let boards: Vec<&Board> = match &args.board {
        Some(name) => vec![find_board(name)?],
        None => BOARDS.iter().collect(),
    };
    for board in boards {
        validate_board(board)?;
        if args.verbose {
            println!("{}", keymap_table::summary(board));
        }
    }
    Ok(())
}

fn matching_keycodes(args: &ListKeycodesArgs) -> Result<Vec<(&'static str, u8)>> {
    let iter = keycodes::keycodes_iter();
    let mut codes = if let Some(pattern) = &args.pattern {
        let pattern = pattern.to_lowercase();
        if let Some(hex) = pattern.strip_prefix("0x") {
            let pattern = u8::from_str_radix(hex, 16)?;
            iter.filter(|p| p.1 == pattern).collect::<Vec<_>>()
        } else {
            let pattern = pattern.as_str();
            iter.filter(|p| p.0.to_lowercase().contains(pattern))
                .collect::<Vec<_>>()
        }
    } else {
        iter.collect::<Vec<_>>()
    };
    if args.sort_by_keycode {
        codes.sort_by(|a, b| match a.1.cmp(&b.1) {
            std::cmp::Ordering::Equal => a.0.cmp(b.0),
            i => i,
        });
    } else {
        codes.sort_by_key(|k| k.0);
    }
    Ok(codes)
}

fn list_keycodes(args: &ListKeycodesArgs) -> Result<()> {
    for (name, code) in matching_keycodes(args)? {
        if args.verbose {
            println!("{code:02X}: {name}");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = run(&cli);

    if let Err(message) = result {
        eprintln!("{message}");
        process::exit(1);
    };
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Keymap(args) => return keymap(args),
        Commands::Validate(args) => return validate(args),
        Commands::Keycodes(args) => return list_keycodes(args),
        _ => {}
    }

    let finder = DeviceFinder::from_cli(cli)?;

    match &cli.command {
        Commands::List => finder.list_usb(),
        Commands::Clear => finder.get_display()?.clear(),
        Commands::ClearLine(args) => finder.clear_line(args),
        Commands::Write(args) => finder.write(args),
        Commands::Pixels(args) => finder.pixels(args),
        Commands::Draw(args) => finder.draw(args),
        Commands::Scroll(args) => finder.scroll(args),
        Commands::ScrollText(args) => finder.scroll_text(args),
        Commands::Brightness(args) => finder.get_display()?.brightness(args.level),
        Commands::On => finder.get_display()?.on(),
        Commands::Off => finder.get_display()?.off(),
        Commands::Query(args) => finder.query(args),
        Commands::Keymap(_) | Commands::Validate(_) | Commands::Keycodes(_) => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn validate_cmd() {
        let args = ValidateArgs {
            verbose: true,
            board: None,
        };

        validate(&args).expect("to be valid");

        let args = ValidateArgs {
            verbose: false,
            board: Some("planck".into()),
        };
        assert_eq!(
            validate(&args).unwrap_err().to_string(),
            "Unknown board \"planck\""
        );
    }

    #[test]
    fn keymap_cmd_layer_range() {
        let args = KeymapArgs {
            board: Some("mokapad/default".into()),
            layer: Some(1),
        };
        assert_eq!(
            keymap(&args).unwrap_err().to_string(),
            "mokapad/default has no layer 1"
        );

        let args = KeymapArgs {
            board: Some("kevinpanaro".into()),
            layer: Some(6),
        };
        keymap(&args).expect("to print");
    }

    #[test]
    fn points() {
        assert_eq!(parse_point("3,4"), Ok((3, 4)));
        assert_eq!(parse_point(" 127 , 63"), Ok((127, 63)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("3,256").is_err());
    }

    #[test]
    fn cli_parses() {
        let cli = Cli::try_parse_from([
            "oledpad-config",
            "-v",
            "feed",
            "--protocol",
            "compact",
            "pixels",
            "--off",
            "1,2",
            "3,4",
        ])
        .unwrap();
        assert_eq!(cli.vendor_id.as_deref(), Some("feed"));
        assert_eq!(cli.protocol, Some(Protocol::Compact));
        let Commands::Pixels(args) = cli.command else {
            panic!("expected pixels");
        };
        assert!(args.off);
        assert_eq!(args.pixels, vec![(1, 2), (3, 4)]);

        let cli = Cli::try_parse_from(["oledpad-config", "scroll", "area", "0", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Scroll(ScrollArgs {
                op: ScrollCmd::Area { start: 0, end: 3 }
            })
        ));

        let cli = Cli::try_parse_from(["oledpad-config", "query", "max-chars"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Query(QueryArgs {
                what: QueryKind::MaxChars
            })
        ));
    }

    #[test]
    fn finder_merges_config() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            "[device]\nvendor_id = \"0x1234\"\nproduct_id = \"0x0001\"\nprotocol = \"compact\""
        )?;
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["oledpad-config", "-c", path, "-p", "0x0002", "clear"])?;
        let finder = DeviceFinder::from_cli(&cli)?;
        assert_eq!(finder.vendor_id, Some(0x1234));
        assert_eq!(finder.product_id, Some(2));
        assert_eq!(finder.variant, Variant::Compact);

        let cli = Cli::try_parse_from([
            "oledpad-config",
            "-c",
            path,
            "--protocol",
            "extended",
            "clear",
        ])?;
        assert_eq!(DeviceFinder::from_cli(&cli)?.variant, Variant::Extended);
        Ok(())
    }

    #[test]
    fn keycodes_by_pattern() {
        let args = ListKeycodesArgs {
            verbose: false,
            sort_by_keycode: true,
            pattern: Some("0x62".into()),
        };
        assert_eq!(matching_keycodes(&args).unwrap(), vec![("p0", 0x62)]);

        let args = ListKeycodesArgs {
            verbose: false,
            sort_by_keycode: false,
            pattern: Some("P".into()),
        };
        let codes = matching_keycodes(&args).unwrap();
        assert!(codes.contains(&("p0", 0x62)));
        assert!(codes.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
