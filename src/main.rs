use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info};
use rand::prelude::*;

mod basis;
mod canvas;
mod grid;
mod label;
mod layout;
mod output;
mod palette;


use crate::{canvas::Canvas, layout::Layout, palette::Palette};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a random contribution graph as a PNG image"
)]
struct Args {
    /// Destination path of the PNG image
    #[arg(default_value = "output.png")]
    output: PathBuf,
}

/// パレットを決めてから, ボックス, 月ラベル, 曜日ラベルの順に描いた画像を返す.
fn render<R: Rng + ?Sized>(layout: &Layout, rng: &mut R) -> Canvas {
    let palette = Palette::random(rng);
    debug!("palette has {} colors", palette.len());

    let mut canvas = Canvas::new(layout.width, layout.height);
    grid::paint_boxes(&mut canvas, layout, &palette, rng);
    label::draw_months(&mut canvas, layout);
    label::draw_days(&mut canvas, layout);
    canvas
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let seed = time_seed();
    debug!("seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let canvas = render(&Layout::default(), &mut rng);

    if let Err(e) = output::save(canvas, &args.output) {
        error!("{:#}", e);
        return Err(e);
    }
    info!("wrote {}", args.output.display());
    Ok(())
}
