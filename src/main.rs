//! ジュリア集合アニメーションGIF生成ツール
//!
//! シード表から無作為に選んだ2点の間を線形補間しながら
//! ジュリア集合を1フレームずつ描画し、往復ループのGIFとして保存する。
//! 登録済みパレットごとに1本ずつ生成する。

use std::path::Path;
use std::time::Instant;

use julia_set::common::{
    animation::{next_output_path, ping_pong, render_sequence, write_gif, FRAME_COUNT},
    colors::Palette,
    constants::{HEIGHT, OUTPUT_DIR, WIDTH},
    seeds::random_pair,
};

fn main() {
    println!("ジュリア集合GIFジェネレーター");
    println!(
        "サイズ: {}x{} / 片道{}フレーム（往復で{}）",
        WIDTH,
        HEIGHT,
        FRAME_COUNT,
        FRAME_COUNT * 2 - 1
    );
    println!();

    let output_dir = Path::new(OUTPUT_DIR);

    for index in 0..Palette::COUNT {
        let (start_seed, end_seed) = random_pair();
        println!(
            "パレット{}: シード ({:.3}, {:.3}i) → ({:.3}, {:.3}i)",
            index, start_seed.re, start_seed.im, end_seed.re, end_seed.im
        );

        let begin = Instant::now();
        let frames = match render_sequence(start_seed, end_seed, WIDTH, HEIGHT, index) {
            Ok(frames) => frames,
            Err(err) => {
                eprintln!("描画に失敗しました: {}", err);
                std::process::exit(1);
            }
        };
        println!("  描画完了: {:.2?}", begin.elapsed());

        let begin = Instant::now();
        let path = next_output_path(output_dir);
        if let Err(err) = write_gif(&path, ping_pong(frames)) {
            eprintln!("書き出しに失敗しました: {}", err);
            std::process::exit(1);
        }
        println!("  '{}' に保存しました: {:.2?}", path.display(), begin.elapsed());
    }

    println!();
    println!("完了しました");
}
