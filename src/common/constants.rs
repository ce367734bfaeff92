//! 共通定数
//!
//! 発散判定と平面写像の定数は出力の再現性を決めるため、
//! ここで固定して変更しないこと。

/// 最大反復回数（これに達した点は発散しないとみなす）
pub const MAX_ITER: u32 = 256;

/// 発散判定半径。|z| がこれを超えたら発散
/// （比較は平方根を避けて |z|² > ESCAPE_RADIUS² で行う）
pub const ESCAPE_RADIUS: f64 = 2.0;

/// 複素平面上の可視範囲。短い方の辺が [-2, 2] に対応し、
/// 長い方の辺は縦横比に合わせて広がる
pub const PLANE_SPAN: f64 = 4.0;

/// アニメーションのフレームレート
pub const FPS: u32 = 24;

/// 片道アニメーションの長さ（秒）
pub const SECONDS: u32 = 3;

/// 既定の出力画像サイズ
pub const WIDTH: u32 = 1000;
pub const HEIGHT: u32 = 1000;

/// GIF の出力先ディレクトリ
pub const OUTPUT_DIR: &str = "gifs";
