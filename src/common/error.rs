//! エラー型

/// 計算・出力で起こりうるエラー
///
/// 先頭3つは呼び出し側の入力ミスで、再試行しても結果は変わらない。
/// `Io` / `Image` はGIF書き出し側でのみ発生する。
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("画像サイズが不正です: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("複素パラメータが有限ではありません: ({re}, {im})")]
    InvalidParameter { re: f64, im: f64 },
    #[error("未登録のパレット番号です: {index}")]
    UnknownPalette { index: u32 },
    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),
    #[error("画像エンコードエラー: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
