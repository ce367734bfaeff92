//! ジュリア集合GIFアニメーション生成ライブラリ
//!
//! 複素定数 c の列を補間しながら z ← z² + c の発散回数を
//! ピクセルごとに計算し、パレットでRGB画像へ変換して
//! 往復ループのGIFに組み立てる。

pub mod common;
