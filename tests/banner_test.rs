use loki::banner::{BannerRenderer, FigletRenderer};
use loki::constants::SUPPORTED_FONTS;
use loki::error::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Writes a one-row FIGlet font whose glyphs are the characters themselves.
fn write_plain_font(dir: &Path, name: &str) {
    let mut font = String::from("flf2a$ 1 1 2 0 0\n");
    for code in 32u8..=126 {
        if code == b' ' {
            font.push_str("$@\n");
        } else {
            font.push_str(&format!("{}@\n", code as char));
        }
    }
    // Deutsch glyphs, required after the ASCII range
    for _ in 0..7 {
        font.push_str("?@\n");
    }
    fs::write(dir.join(format!("{}.flf", name)), font).unwrap();
}

#[test]
fn test_standard_is_always_available() {
    let renderer = FigletRenderer::with_font_dirs(Vec::<&Path>::new());
    assert_eq!(renderer.fonts(), vec!["standard".to_string()]);
}

#[test]
fn test_installed_font_is_offered_and_renders() {
    let temp_dir = TempDir::new().unwrap();
    write_plain_font(temp_dir.path(), "mini");
    let renderer = FigletRenderer::with_font_dirs([temp_dir.path()]);

    assert_eq!(renderer.fonts(), vec!["standard".to_string(), "mini".to_string()]);
    assert_eq!(renderer.render("hi", "mini").unwrap(), vec!["hi".to_string()]);
}

#[test]
fn test_font_outside_allow_list_is_not_offered() {
    let temp_dir = TempDir::new().unwrap();
    write_plain_font(temp_dir.path(), "gothic");
    let renderer = FigletRenderer::with_font_dirs([temp_dir.path()]);

    assert!(!renderer.fonts().contains(&"gothic".to_string()));
}

#[test]
fn test_font_file_path_renders() {
    let temp_dir = TempDir::new().unwrap();
    write_plain_font(temp_dir.path(), "custom");
    let renderer = FigletRenderer::with_font_dirs(Vec::<&Path>::new());
    let path = temp_dir.path().join("custom.flf");

    assert_eq!(renderer.render("ok", path.to_str().unwrap()).unwrap(), vec!["ok".to_string()]);
}

#[test]
fn test_every_offered_font_renders() {
    let renderer = FigletRenderer::new();
    let fonts = renderer.fonts();
    assert!(fonts.contains(&"standard".to_string()));

    for font in fonts {
        assert!(SUPPORTED_FONTS.contains(&font.as_str()));
        let rows = renderer.render("loki", &font).unwrap();
        assert!(!rows.is_empty(), "font {} rendered nothing", font);
    }
}

#[test]
fn test_missing_allow_listed_font_is_unsupported() {
    let renderer = FigletRenderer::with_font_dirs(Vec::<&Path>::new());
    for font in SUPPORTED_FONTS.iter().filter(|f| **f != "standard") {
        match renderer.render("hi", font) {
            Err(Error::UnsupportedFont { font: reported }) => assert_eq!(reported, *font),
            other => panic!("Expected UnsupportedFont for {}, got {:?}", font, other),
        }
    }
}
