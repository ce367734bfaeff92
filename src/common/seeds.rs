//! シード定数と補間

use num_complex::Complex;
use rand::Rng;

/// アニメーションの両端に使うシード定数
///
/// どれもジュリア集合が面白い形になることが知られている定数。
pub const SEEDS: [Complex<f64>; 14] = [
    Complex::new(-0.76, -0.24),
    Complex::new(-0.125, 0.75),
    Complex::new(0.285, 0.535),
    Complex::new(-0.687, 0.312),
    Complex::new(-0.500, 0.563),
    Complex::new(-0.79, 0.15),
    Complex::new(0.27, 0.54),
    Complex::new(-0.36, 0.64),
    Complex::new(0.42, 0.42),
    Complex::new(0.41, -0.32),
    Complex::new(0.275, 0.0),
    Complex::new(-1.0, 0.0),
    Complex::new(-1.0, 0.25),
    Complex::new(0.0, -1.0),
];

/// start から end へ実部・虚部を独立に線形補間した i 番目のシードを返す
pub fn interpolate(start: Complex<f64>, end: Complex<f64>, i: u32, steps: u32) -> Complex<f64> {
    let step = i as f64 / steps as f64;
    Complex::new(
        start.re + (end.re - start.re) * step,
        start.im + (end.im - start.im) * step,
    )
}

/// シード表から無作為に2つ選ぶ（同じものが選ばれることもある）
pub fn random_pair() -> (Complex<f64>, Complex<f64>) {
    let mut rng = rand::thread_rng();
    let start = SEEDS[rng.gen_range(0..SEEDS.len())];
    let end = SEEDS[rng.gen_range(0..SEEDS.len())];
    (start, end)
}
