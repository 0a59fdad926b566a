use {
    crate::basis::{Rect, WHITE},
    embedded_graphics::{pixelcolor::Rgb888, prelude::*},
    image::{Rgba, RgbaImage},
    std::convert::Infallible,
};

/// `Canvas` は描画先の RGBA 画像. 作成時は全面が白で, ボックスとラベルの描画で書き換えられる.
pub(crate) struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, WHITE),
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.image.width()
    }

    pub(crate) fn height(&self) -> u32 {
        self.image.height()
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// `rect` の内側を `color` で塗りつぶす. 画像の外にはみ出た部分は無視する.
    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        let right = (rect.x + rect.width).min(self.width());
        let bottom = (rect.y + rect.height).min(self.height());
        for y in rect.y..bottom {
            for x in rect.x..right {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    pub(crate) fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

// グリフのラスタライズ結果を受け取る側.
impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = (self.width() as i32, self.height() as i32);
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x >= width || point.y >= height {
                continue;
            }
            self.image.put_pixel(
                point.x as u32,
                point.y as u32,
                Rgba([color.r(), color.g(), color.b(), 255]),
            );
        }
        Ok(())
    }
}
