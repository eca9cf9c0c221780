//! CLI integration tests for the gbs binary
//!
//! Each test runs the binary inside its own temp directory with
//! XDG_CONFIG_HOME pointed there too, so no user gbs.toml leaks in.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use gbsprite::codec::{self, Separator};
use gbsprite::PixelGrid;
use tempfile::TempDir;

const DEAF_CAFE: &str = "de af ca fe 00 00 00 00 00 00 00 00 00 00 00 00\n";

fn gbs(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gbs"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute gbs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn workspace_with(name: &str, contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(name), contents).unwrap();
    dir
}

#[test]
fn test_new_prints_blank_tile() {
    let dir = TempDir::new().unwrap();
    let output = gbs(dir.path(), &["new", "-W", "8", "-H", "8"]);

    assert!(output.status.success(), "new failed: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), ["00"; 16].join(" "));
}

#[test]
fn test_new_rejects_bad_dimensions() {
    let dir = TempDir::new().unwrap();
    let output = gbs(dir.path(), &["new", "-W", "12", "-H", "8"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("12"));
}

#[test]
fn test_convert_hex_to_bin_and_back() {
    let dir = workspace_with("tile.hex", DEAF_CAFE);

    let output = gbs(dir.path(), &["convert", "tile.hex", "-W", "8", "-H", "8", "-o", "tile.2bpp"]);
    assert!(output.status.success(), "convert failed: {}", stderr(&output));

    let bytes = fs::read(dir.path().join("tile.2bpp")).unwrap();
    assert_eq!(bytes.len(), 16);
    assert_eq!(&bytes[..4], &[0xde, 0xaf, 0xca, 0xfe]);

    let output =
        gbs(dir.path(), &["convert", "tile.2bpp", "-W", "8", "-H", "8", "--separator", "none"]);
    assert!(output.status.success(), "convert failed: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), format!("deafcafe{}", "0".repeat(24)));
}

#[test]
fn test_convert_bin_to_stdout_needs_output() {
    let dir = workspace_with("tile.hex", DEAF_CAFE);
    let output = gbs(dir.path(), &["convert", "tile.hex", "-W", "8", "-H", "8", "--to", "bin"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_convert_short_input_fails() {
    let dir = workspace_with("tile.hex", "deaf cafe\n");
    let output = gbs(dir.path(), &["convert", "tile.hex", "-W", "8", "-H", "8"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("tile.hex"));
}

#[test]
fn test_show_plain_and_json() {
    let dir = workspace_with("tile.hex", DEAF_CAFE);

    let output = gbs(dir.path(), &["show", "tile.hex", "-W", "8", "-H", "8", "--plain"]);
    assert!(output.status.success(), "show failed: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("3 2 1 2 3 3 3 1"), "unexpected output:\n{}", text);
    assert!(text.contains("3 3 1 1 3 1 3 0"), "unexpected output:\n{}", text);

    let output = gbs(dir.path(), &["show", "tile.hex", "-W", "8", "-H", "8", "--json"]);
    assert!(output.status.success(), "show failed: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["width"], 8);
    assert_eq!(json["rows"][0], serde_json::json!([3, 2, 1, 2, 3, 3, 3, 1]));
}

#[test]
fn test_paint_rewrites_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tile.hex"), ["00"; 16].join(" ")).unwrap();

    let output =
        gbs(dir.path(), &["paint", "tile.hex", "-W", "8", "-H", "8", "-x", "0", "-y", "0", "-c", "3"]);
    assert!(output.status.success(), "paint failed: {}", stderr(&output));

    let text = fs::read_to_string(dir.path().join("tile.hex")).unwrap();
    assert!(text.starts_with("80 80 00"), "unexpected file: {}", text);
}

#[test]
fn test_paint_out_of_bounds_fails() {
    let dir = workspace_with("tile.hex", DEAF_CAFE);
    let output =
        gbs(dir.path(), &["paint", "tile.hex", "-W", "8", "-H", "8", "-x", "8", "-y", "0", "-c", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(dir.path().join("tile.hex")).unwrap(), DEAF_CAFE);
}

#[test]
fn test_resize_refuses_to_discard_without_force() {
    let dir = TempDir::new().unwrap();
    let mut grid = PixelGrid::new(16, 8).unwrap();
    grid.set_cell(12, 3, 2).unwrap();
    fs::write(dir.path().join("wide.hex"), codec::encode(&grid, Separator::Space)).unwrap();

    let args = ["resize", "wide.hex", "-W", "16", "-H", "8", "--to-width", "8", "--to-height", "8"];
    let output = gbs(dir.path(), &args);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--force"));

    let mut forced = args.to_vec();
    forced.push("--force");
    let output = gbs(dir.path(), &forced);
    assert!(output.status.success(), "resize failed: {}", stderr(&output));

    let text = fs::read_to_string(dir.path().join("wide.hex")).unwrap();
    assert_eq!(text.split_whitespace().count(), 16);
}

#[test]
fn test_resize_grow_keeps_pixels() {
    let dir = workspace_with("tile.hex", DEAF_CAFE);
    let output = gbs(
        dir.path(),
        &[
            "resize", "tile.hex", "-W", "8", "-H", "8", "--to-width", "16", "--to-height", "8", "-o",
            "big.hex",
        ],
    );
    assert!(output.status.success(), "resize failed: {}", stderr(&output));

    let text = fs::read_to_string(dir.path().join("big.hex")).unwrap();
    let mut grid = PixelGrid::new(16, 8).unwrap();
    codec::decode(&mut grid, &text).unwrap();
    assert_eq!(grid.get_cell(0, 0).unwrap(), 3);
    assert_eq!(grid.get_cell(7, 1).unwrap(), 0);
    assert_eq!(grid.get_cell(1, 0).unwrap(), 2);
}

#[test]
fn test_render_scaled_png() {
    let dir = workspace_with("tile.hex", DEAF_CAFE);
    let output = gbs(dir.path(), &["render", "tile.hex", "-W", "8", "-H", "8", "--scale", "4"]);
    assert!(output.status.success(), "render failed: {}", stderr(&output));

    let image = image::open(dir.path().join("tile.png")).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (32, 32));
    assert_eq!(image.get_pixel(0, 0).0, [0xff, 0xff, 0xff, 0xff]);
    assert_eq!(image.get_pixel(31, 31).0, [0, 0, 0, 0xff]);
}

#[test]
fn test_config_palette_and_scale() {
    let dir = workspace_with("tile.hex", DEAF_CAFE);
    fs::write(
        dir.path().join("gbs.toml"),
        "[palette]\ncolors = [\"#0f380f\", \"#306230\", \"#8bac0f\", \"#9bbc0f\"]\n\n[render]\nscale = 2\n",
    )
    .unwrap();

    let output = gbs(dir.path(), &["render", "tile.hex", "-W", "8", "-H", "8"]);
    assert!(output.status.success(), "render failed: {}", stderr(&output));

    let image = image::open(dir.path().join("tile.png")).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (16, 16));
    assert_eq!(image.get_pixel(0, 0).0, [0x9b, 0xbc, 0x0f, 0xff]);
}

#[test]
fn test_invalid_config_fails() {
    let dir = workspace_with("tile.hex", DEAF_CAFE);
    fs::write(dir.path().join("gbs.toml"), "[render]\nscale = 0\n").unwrap();

    let output = gbs(dir.path(), &["show", "tile.hex", "-W", "8", "-H", "8", "--plain"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("scale"));
}
