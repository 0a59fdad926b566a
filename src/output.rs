use {
    anyhow::{Context, Result},
    image::{DynamicImage, ImageOutputFormat},
    std::{
        fs::File,
        io::{BufWriter, Write},
        path::Path,
    },
};

use crate::canvas::Canvas;

/// 画像を RGBA の PNG にエンコードしたバイト列を返す.
pub(crate) fn encode_png(canvas: Canvas) -> Result<Vec<u8>> {
    let mut data = vec![];
    DynamicImage::ImageRgba8(canvas.into_image())
        .write_to(&mut data, ImageOutputFormat::Png)
        .context("failed to encode the image as PNG")?;
    Ok(data)
}

/// PNG にエンコードして `path` に書き出す. 既存のファイルは上書きされる.
///
/// エンコードを終えてからファイルを作るので, エンコードに失敗した場合はファイルに触れない.
pub(crate) fn save(canvas: Canvas, path: &Path) -> Result<()> {
    let data = encode_png(canvas)?;

    let f = File::create(path)
        .with_context(|| format!("couldn't create the file {}", path.display()))?;
    let mut f = BufWriter::new(f);
    f.write_all(&data)
        .and_then(|_| f.flush())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
