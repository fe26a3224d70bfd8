use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

const ALL_NINE: &str = "[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)]\n";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn save(&self, name: &str, img: &RgbImage) -> PathBuf {
        let path = self.path(name);
        img.save(&path).expect("Failed to write fixture");
        path
    }

    /// Runs the binary inside the workspace directory
    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_img2tuple"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run img2tuple")
    }

    fn read(&self, name: &str) -> String {
        let path = self.path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("non UTF-8 temp path")
}

fn noisy_center() -> RgbImage {
    let mut img = RgbImage::from_pixel(3, 3, BLACK);
    img.put_pixel(1, 1, Rgb([255, 0, 0]));
    img
}

#[test]
fn test_all_white_lists_every_pixel() {
    let ws = Workspace::new();
    let input = ws.save("white.png", &RgbImage::from_pixel(3, 3, WHITE));

    let output = ws.run(&["-p", arg(&input), "-W", "3", "-H", "3"]);

    assert!(output.status.success());
    assert_eq!(ws.read("tuple_array.txt"), ALL_NINE);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_all_black_writes_empty_list() {
    let ws = Workspace::new();
    let input = ws.save("black.png", &RgbImage::from_pixel(3, 3, BLACK));

    let output = ws.run(&["--path", arg(&input), "--width", "3", "--height", "3"]);

    assert!(output.status.success());
    assert_eq!(ws.read("tuple_array.txt"), "[]\n");
}

#[test]
fn test_isolated_pixel_kept_without_cleaning() {
    let ws = Workspace::new();
    let input = ws.save("noisy.png", &noisy_center());

    let output = ws.run(&["-p", arg(&input), "-W", "3", "-H", "3"]);

    assert!(output.status.success());
    assert_eq!(ws.read("tuple_array.txt"), "[(1, 1)]\n");
}

#[test]
fn test_clean_pixels_removes_isolated_pixel() {
    let ws = Workspace::new();
    let input = ws.save("noisy.png", &noisy_center());

    let output = ws.run(&["-p", arg(&input), "-W", "3", "-H", "3", "-c"]);

    assert!(output.status.success());
    assert_eq!(ws.read("tuple_array.txt"), "[]\n");
}

#[test]
fn test_show_output_prints_to_stdout() {
    let ws = Workspace::new();
    let input = ws.save("white.png", &RgbImage::from_pixel(3, 3, WHITE));
    let out = ws.path("points.txt");

    let output = ws.run(&["-p", arg(&input), "-W", "3", "-H", "3", "-o", arg(&out), "-s"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), ALL_NINE);
    assert_eq!(ws.read("points.txt"), ALL_NINE);
}

#[test]
fn test_tolerance_flag() {
    let ws = Workspace::new();
    let mut img = RgbImage::from_pixel(2, 1, Rgb([30, 30, 30]));
    img.put_pixel(1, 0, Rgb([31, 0, 0]));
    let input = ws.save("gray.png", &img);

    ws.run(&["-p", arg(&input), "-W", "2", "-H", "1", "-t", "30", "-o", "t30.txt"]);
    ws.run(&["-p", arg(&input), "-W", "2", "-H", "1", "-t", "-1", "-o", "neg.txt"]);
    ws.run(&["-p", arg(&input), "-W", "2", "-H", "1", "--tolerance=255", "-o", "max.txt"]);

    assert_eq!(ws.read("t30.txt"), "[(1, 0)]\n");
    assert_eq!(ws.read("neg.txt"), "[(0, 0), (1, 0)]\n");
    assert_eq!(ws.read("max.txt"), "[]\n");
}

#[test]
fn test_default_size_is_128_by_64() {
    let ws = Workspace::new();
    let input = ws.save("white.png", &RgbImage::from_pixel(10, 10, WHITE));

    let output = ws.run(&["-p", arg(&input), "--format", "json"]);

    assert!(output.status.success());
    let points: Vec<(u32, u32)> = serde_json::from_str(&ws.read("tuple_array.txt")).unwrap();
    assert_eq!(points.len(), 128 * 64);
    assert_eq!(points.first(), Some(&(0, 0)));
    assert_eq!(points.last(), Some(&(127, 63)));
}

#[test]
fn test_keep_aspect_ratio_fits_within_box() {
    let ws = Workspace::new();
    let input = ws.save("wide.png", &RgbImage::from_pixel(400, 100, WHITE));

    let output = ws.run(&["-p", arg(&input), "-k", "--format", "json"]);

    assert!(output.status.success());
    let points: Vec<(u32, u32)> = serde_json::from_str(&ws.read("tuple_array.txt")).unwrap();
    // 400x100 shrunk into 128x64 keeps the 4:1 ratio
    assert_eq!(points.len(), 128 * 32);
    assert_eq!(points.last(), Some(&(127, 31)));
}

#[test]
fn test_alpha_channel_is_ignored() {
    let ws = Workspace::new();
    let path = ws.path("transparent.png");
    RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0]))
        .save(&path)
        .unwrap();

    let output = ws.run(&["-p", arg(&path), "-W", "2", "-H", "2"]);

    assert!(output.status.success());
    assert_eq!(ws.read("tuple_array.txt"), "[(0, 0), (1, 0), (0, 1), (1, 1)]\n");
}

#[test]
fn test_bmp_input() {
    let ws = Workspace::new();
    let input = ws.save("white.bmp", &RgbImage::from_pixel(3, 3, WHITE));

    let output = ws.run(&["-p", arg(&input), "-W", "3", "-H", "3"]);

    assert!(output.status.success());
    assert_eq!(ws.read("tuple_array.txt"), ALL_NINE);
}

#[test]
fn test_missing_input_fails() {
    let ws = Workspace::new();

    let output = ws.run(&["-p", "does_not_exist.png"]);

    assert!(!output.status.success());
    assert!(!ws.path("tuple_array.txt").exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does_not_exist.png"));
}

#[test]
fn test_undecodable_input_fails() {
    let ws = Workspace::new();
    let path = ws.path("broken.png");
    fs::write(&path, b"not really a png").unwrap();

    let output = ws.run(&["-p", arg(&path)]);

    assert!(!output.status.success());
    assert!(!ws.path("tuple_array.txt").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let ws = Workspace::new();
    let input = ws.save("white.png", &RgbImage::from_pixel(3, 3, WHITE));
    let out = ws.path("missing_dir/out.txt");

    let output = ws.run(&["-p", arg(&input), "-o", arg(&out)]);

    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn test_path_is_required() {
    let ws = Workspace::new();
    let output = ws.run(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_width_rejected() {
    let ws = Workspace::new();
    let input = ws.save("white.png", &RgbImage::from_pixel(3, 3, WHITE));

    for width in ["abc", "0", "-5"] {
        let output = ws.run(&["-p", arg(&input), "-W", width]);
        assert!(!output.status.success(), "width {} was accepted", width);
    }
    assert!(!ws.path("tuple_array.txt").exists());
}
