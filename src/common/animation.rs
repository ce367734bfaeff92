//! フレーム列の生成とGIF出力

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};
use num_complex::Complex;

use super::constants::{FPS, SECONDS};
use super::error::Result;
use super::julia::render_frame;
use super::seeds::interpolate;

/// 1クリップの順方向フレーム数
pub const FRAME_COUNT: u32 = FPS * SECONDS;

/// 順方向のフレーム列を描画する
///
/// フレーム i のシードは start と end の i/FRAME_COUNT 補間点。
pub fn render_sequence(
    start: Complex<f64>,
    end: Complex<f64>,
    width: u32,
    height: u32,
    palette_index: u32,
) -> Result<Vec<RgbImage>> {
    let mut frames = Vec::with_capacity(FRAME_COUNT as usize);
    for i in 0..FRAME_COUNT {
        let c = interpolate(start, end, i, FRAME_COUNT);
        let buffer = render_frame(c.re, c.im, width, height, palette_index)?;
        let image = RgbImage::from_raw(width, height, buffer)
            .expect("render_frame のバッファ長は width * height * 3");
        frames.push(image);
    }
    Ok(frames)
}

/// 順方向のフレーム列から往復ループ列を作る
///
/// 逆再生部は先頭フレームを除いて反転する。折り返しの末尾
/// フレームは2回現れ、ループの継ぎ目では重複しない。
pub fn ping_pong(frames: Vec<RgbImage>) -> Vec<RgbImage> {
    if frames.len() < 2 {
        return frames;
    }
    let mut looped = frames;
    let tail: Vec<RgbImage> = looped[1..].iter().rev().cloned().collect();
    looped.extend(tail);
    looped
}

/// まだ存在しない出力パスを探す（result-1.gif, result-2.gif, ...）
pub fn next_output_path(dir: &Path) -> PathBuf {
    let mut fileno = 1;
    loop {
        let path = dir.join(format!("result-{}.gif", fileno));
        if !path.exists() {
            return path;
        }
        fileno += 1;
    }
}

/// フレーム列を無限ループのGIFとして書き出す
pub fn write_gif(path: &Path, frames: Vec<RgbImage>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = BufWriter::new(File::create(path)?);
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(1000, FPS);
    for image in frames {
        let rgba = DynamicImage::ImageRgb8(image).to_rgba8();
        encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(value: u8) -> RgbImage {
        RgbImage::from_pixel(2, 2, image::Rgb([value, value, value]))
    }

    #[test]
    fn ping_pong_doubles_only_the_turnaround_frame() {
        let frames = vec![solid_frame(0), solid_frame(1), solid_frame(2)];
        let looped = ping_pong(frames);

        // [0, 1, 2] -> [0, 1, 2, 2, 1]
        assert_eq!(looped.len(), 5);
        let values: Vec<u8> = looped.iter().map(|frame| frame.as_raw()[0]).collect();
        assert_eq!(values, vec![0, 1, 2, 2, 1]);
    }

    #[test]
    fn ping_pong_leaves_short_sequences_alone() {
        let looped = ping_pong(vec![solid_frame(7)]);
        assert_eq!(looped.len(), 1);
    }

    #[test]
    fn output_path_skips_existing_files() {
        let dir = std::env::temp_dir().join(format!("julia-set-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        assert_eq!(next_output_path(&dir), dir.join("result-1.gif"));
        std::fs::write(dir.join("result-1.gif"), b"").unwrap();
        assert_eq!(next_output_path(&dir), dir.join("result-2.gif"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
