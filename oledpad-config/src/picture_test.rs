use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

#[test]
fn parse_bits() {
    let pic = Picture::parse("010\n001\r\n\n1");

    assert_eq!(pic.len(), 3);
    assert_eq!(
        pic.pixels_at((0, 0)).collect::<Vec<_>>(),
        vec![(1, 0), (2, 1), (0, 3)]
    );
}

#[test]
fn offset_by_origin() {
    let pic = Picture::parse("11\n");

    assert_eq!(
        pic.pixels_at((10, 20)).collect::<Vec<_>>(),
        vec![(10, 20), (11, 20)]
    );
}

#[test]
fn drops_unaddressable_pixels() {
    let pic = Picture::parse("111");

    assert_eq!(
        pic.pixels_at((253, 0)).collect::<Vec<_>>(),
        vec![(253, 0), (254, 0)]
    );
    assert_eq!(pic.pixels_at((0, 255)).count(), 3);
    assert_eq!(Picture::parse("\n1").pixels_at((0, 255)).count(), 0);
}

#[test]
fn empty_picture() {
    assert!(Picture::parse("000\n  \n").is_empty());
}

#[test]
fn load_file() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "1001\n0110\n")?;

    let pic = Picture::load(file.path())?;
    assert_eq!(pic.len(), 4);

    let err = Picture::load(&file.path().with_extension("missing")).unwrap_err();
    assert!(err.source.is_some());
    Ok(())
}
