//! カラーパレットと色変換関数

use super::constants::MAX_ITER;
use super::error::{Error, Result};
use super::julia::EscapeGrid;

/// Classic パレットのグラデーション（深い青 → クリーム → 赤 → 黒）
const CLASSIC_STOPS: [(f64, f64, f64); 10] = [
    (0.0, 0.0, 0.2), // 深い青
    (0.1, 0.2, 0.5), // 青
    (0.2, 0.5, 0.8), // 水色
    (0.5, 0.8, 0.9), // 薄い水色
    (1.0, 1.0, 0.8), // クリーム
    (1.0, 0.8, 0.3), // 黄色
    (1.0, 0.5, 0.1), // オレンジ
    (0.8, 0.2, 0.1), // 赤
    (0.5, 0.0, 0.2), // 暗い赤
    (0.0, 0.0, 0.0), // 黒
];

/// Fire パレットのグラデーション（黒 → 赤 → 橙 → 黄 → 白）
const FIRE_STOPS: [(f64, f64, f64); 5] = [
    (0.0, 0.0, 0.0),
    (0.6, 0.0, 0.0),
    (1.0, 0.4, 0.0),
    (1.0, 0.9, 0.2),
    (1.0, 1.0, 1.0),
];

/// Ocean パレットのグラデーション（深い青 → 空色 → 白）
const OCEAN_STOPS: [(f64, f64, f64); 5] = [
    (0.0, 0.0, 0.15),
    (0.0, 0.2, 0.45),
    (0.0, 0.5, 0.8),
    (0.4, 0.8, 0.95),
    (1.0, 1.0, 1.0),
];

/// Banded パレットの色表。補間せず、発散の速さで繰り返す
const BAND_TABLE: [[u8; 3]; 16] = [
    [0xFF, 0xFF, 0xFF],
    [0xCC, 0xCC, 0xCC],
    [0x99, 0x99, 0x99],
    [0x66, 0x66, 0x66],
    [0x55, 0x00, 0x00],
    [0xAA, 0x00, 0x00],
    [0xFF, 0x00, 0x00],
    [0x88, 0x88, 0x00],
    [0xFF, 0xFF, 0x00],
    [0x00, 0x88, 0x00],
    [0x00, 0xFF, 0x00],
    [0x00, 0x88, 0x88],
    [0x00, 0xFF, 0xFF],
    [0x00, 0x00, 0x88],
    [0x00, 0x00, 0xFF],
    [0x22, 0x22, 0x22],
];

/// 色パレット
///
/// 番号との対応は from_index が一元管理する。どのパレットでも
/// 発散しなかった点（max_iter 到達）は黒になる。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Classic,
    Grayscale,
    Rainbow,
    Banded,
    Fire,
    Ocean,
}

impl Palette {
    /// 登録済みパレット数
    pub const COUNT: u32 = 6;

    /// パレット番号から変換。範囲外は None
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Palette::Classic),
            1 => Some(Palette::Grayscale),
            2 => Some(Palette::Rainbow),
            3 => Some(Palette::Banded),
            4 => Some(Palette::Fire),
            5 => Some(Palette::Ocean),
            _ => None,
        }
    }

    /// 反復回数から色を計算
    pub fn color(self, iter: u32, max_iter: u32) -> [u8; 3] {
        if iter >= max_iter {
            return [0, 0, 0];
        }

        let t = iter as f64 / max_iter as f64;
        match self {
            Palette::Classic => gradient_color(&CLASSIC_STOPS, t),
            Palette::Grayscale => {
                let v = ((1.0 - t) * 255.0) as u8;
                [v, v, v]
            }
            Palette::Rainbow => {
                let (r, g, b) = hsv_to_rgb(t, 1.0, 1.0);
                [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
            }
            Palette::Banded => BAND_TABLE[iter as usize % BAND_TABLE.len()],
            Palette::Fire => gradient_color(&FIRE_STOPS, t),
            Palette::Ocean => gradient_color(&OCEAN_STOPS, t),
        }
    }
}

/// グラデーションの色表を線形補間して色を求める（t は 0.0〜1.0）
fn gradient_color(stops: &[(f64, f64, f64)], t: f64) -> [u8; 3] {
    let scaled = t * (stops.len() - 1) as f64;
    let idx = (scaled as usize).min(stops.len() - 2);
    let frac = scaled - idx as f64;

    let (r1, g1, b1) = stops[idx];
    let (r2, g2, b2) = stops[idx + 1];

    let r = ((r1 + (r2 - r1) * frac) * 255.0) as u8;
    let g = ((g1 + (g2 - g1) * frac) * 255.0) as u8;
    let b = ((b1 + (b2 - b1) * frac) * 255.0) as u8;
    [r, g, b]
}

/// HSVからRGBへの変換（h は 0.0〜1.0 の周期値）
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = h.fract();
    let h = if h < 0.0 { h + 1.0 } else { h };

    let i = (h * 6.0).floor() as i32;
    let f = h * 6.0 - i as f64;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// 発散回数グリッドをRGBバッファ（幅 × 高さ × 3 バイト）へ変換
///
/// パレットは1回だけ解決し、全ピクセルに同じものを適用する。
pub fn colorize(grid: &EscapeGrid, palette_index: u32) -> Result<Vec<u8>> {
    let palette = Palette::from_index(palette_index).ok_or(Error::UnknownPalette {
        index: palette_index,
    })?;

    let mut buffer = Vec::with_capacity(grid.values().len() * 3);
    for &iter in grid.values() {
        buffer.extend_from_slice(&palette.color(iter, MAX_ITER));
    }
    Ok(buffer)
}
