//! ジュリア集合計算関数

use num_complex::Complex;
use rayon::prelude::*;

use super::colors;
use super::constants::{ESCAPE_RADIUS, MAX_ITER, PLANE_SPAN};
use super::error::{Error, Result};

/// 1フレーム分の発散回数グリッド（行優先、左上原点）
pub struct EscapeGrid {
    pub width: u32,
    pub height: u32,
    values: Vec<u32>,
}

impl EscapeGrid {
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn get(&self, px: u32, py: u32) -> u32 {
        self.values[py as usize * self.width as usize + px as usize]
    }
}

/// ジュリア集合の反復回数を計算
///
/// z₀ から z ← z² + c を反復し、|z|² が発散判定を超えるまでの
/// 回数を返す。max_iter まで発散しなければ max_iter を返す。
pub fn julia_iter(z0: Complex<f64>, c: Complex<f64>, max_iter: u32) -> u32 {
    let mut z = z0;

    for i in 0..max_iter {
        if z.norm_sqr() > ESCAPE_RADIUS * ESCAPE_RADIUS {
            return i;
        }
        z = z * z + c;
    }
    max_iter
}

/// 1ピクセルあたりの複素平面上の幅
fn plane_scale(width: u32, height: u32) -> f64 {
    PLANE_SPAN / width.min(height) as f64
}

/// グリッド全体の発散回数を計算
///
/// 各ピクセルの中心を原点中心の複素平面へ写し、その点を初期値に
/// julia_iter を評価する。行単位でRayon並列化。
pub fn evaluate(c: Complex<f64>, width: u32, height: u32) -> Result<EscapeGrid> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    if !c.re.is_finite() || !c.im.is_finite() {
        return Err(Error::InvalidParameter { re: c.re, im: c.im });
    }

    let scale = plane_scale(width, height);
    let half_w = width as f64 / 2.0;
    let half_h = height as f64 / 2.0;

    let mut values = vec![0u32; width as usize * height as usize];
    values
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(py, row)| {
            // 虚軸は上向き（画面のy軸とは逆）
            let y = (half_h - (py as f64 + 0.5)) * scale;
            for (px, value) in row.iter_mut().enumerate() {
                let x = (px as f64 + 0.5 - half_w) * scale;
                *value = julia_iter(Complex::new(x, y), c, MAX_ITER);
            }
        });

    Ok(EscapeGrid {
        width,
        height,
        values,
    })
}

/// 1フレーム描画: 発散回数の計算とパレット適用をまとめて行う
///
/// 成功時は width * height * 3 バイトのRGBバッファを返す。
pub fn render_frame(
    c_re: f64,
    c_im: f64,
    width: u32,
    height: u32,
    palette_index: u32,
) -> Result<Vec<u8>> {
    let grid = evaluate(Complex::new(c_re, c_im), width, height)?;
    colors::colorize(&grid, palette_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_returns_zero_for_escaped_start() {
        // 初期値がすでに判定半径の外
        let n = julia_iter(Complex::new(3.0, 0.0), Complex::new(0.0, 0.0), MAX_ITER);
        assert_eq!(n, 0);
    }

    #[test]
    fn origin_never_escapes_when_c_is_zero() {
        let n = julia_iter(Complex::new(0.0, 0.0), Complex::new(0.0, 0.0), MAX_ITER);
        assert_eq!(n, MAX_ITER);
    }

    #[test]
    fn center_pixel_of_odd_grid_maps_to_origin() {
        // 5x5 の中央ピクセルはちょうど原点に写る
        let grid = evaluate(Complex::new(0.0, 0.0), 5, 5).unwrap();
        assert_eq!(grid.get(2, 2), MAX_ITER);
    }

    #[test]
    fn grid_has_width_times_height_values_in_range() {
        let grid = evaluate(Complex::new(-0.76, -0.24), 16, 9).unwrap();
        assert_eq!(grid.values().len(), 16 * 9);
        assert!(grid.values().iter().all(|&n| n <= MAX_ITER));
    }

    #[test]
    fn evaluate_is_deterministic() {
        let c = Complex::new(0.285, 0.535);
        let a = evaluate(c, 32, 32).unwrap();
        let b = evaluate(c, 32, 32).unwrap();
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let c = Complex::new(0.0, 0.0);
        assert!(matches!(
            evaluate(c, 0, 10),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            evaluate(c, 10, 0),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn non_finite_parameter_is_rejected() {
        assert!(matches!(
            evaluate(Complex::new(f64::NAN, 0.0), 10, 10),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(matches!(
            evaluate(Complex::new(0.0, f64::INFINITY), 10, 10),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn real_seed_grid_is_mirror_symmetric() {
        // c が実数なら共役対称性から上下のミラー対称になる
        let grid = evaluate(Complex::new(-1.0, 0.0), 8, 6).unwrap();
        for py in 0..3 {
            for px in 0..8 {
                assert_eq!(grid.get(px, py), grid.get(px, 5 - py));
            }
        }
    }
}
