use {
    crate::{
        basis::{DAYS, MONTHS},
        canvas::Canvas,
        layout::Layout,
    },
    embedded_graphics::{
        mono_font::{ascii::FONT_7X13, MonoTextStyle},
        pixelcolor::Rgb888,
        prelude::*,
        text::{Baseline, Text},
    },
};

/// `text` を 7x13 のビットマップフォントで黒く描く. `(x, y)` はベースラインの始点.
pub(crate) fn draw_string(canvas: &mut Canvas, x: i32, y: i32, text: &str) {
    let style = MonoTextStyle::new(&FONT_7X13, Rgb888::BLACK);
    Text::with_baseline(text, Point::new(x, y), style, Baseline::Alphabetic)
        .draw(canvas)
        .unwrap_or_else(|never| match never {});
}

/// 上端に月の略称を左から右へ並べる.
pub(crate) fn draw_months(canvas: &mut Canvas, layout: &Layout) {
    let (mut x, y) = layout.month_origin;
    for month in MONTHS.iter() {
        draw_string(canvas, x, y, month);
        x += layout.month_step;
    }
}

/// 左端に曜日の略称を上から下へ並べる.
pub(crate) fn draw_days(canvas: &mut Canvas, layout: &Layout) {
    let (x, mut y) = layout.day_origin;
    for day in DAYS.iter() {
        draw_string(canvas, x, y, day);
        y += layout.day_step;
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{draw_days, draw_months, draw_string},
        crate::{basis::WHITE, canvas::Canvas, layout::Layout},
        image::Rgba,
    };

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn black_pixels(canvas: &Canvas) -> Vec<(u32, u32)> {
        let mut found = vec![];
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let p = canvas.pixel(x, y);
                if p != WHITE {
                    assert_eq!(p, BLACK, "at ({}, {})", x, y);
                    found.push((x, y));
                }
            }
        }
        found
    }

    #[test]
    fn glyphs_sit_on_baseline() {
        let mut canvas = Canvas::new(40, 30);
        draw_string(&mut canvas, 5, 20, "Mon");
        let found = black_pixels(&canvas);
        assert!(!found.is_empty());
        for &(x, y) in &found {
            assert!((5..5 + 21).contains(&x), "x = {}", x);
            assert!((20 - 13..=20 + 3).contains(&y), "y = {}", y);
        }
        // 小文字を含めてグリフの大部分はベースラインより上に乗る
        assert!(found.iter().any(|&(_, y)| y < 20));
    }

    #[test]
    fn month_clusters() {
        let layout = Layout::default();
        let mut canvas = Canvas::new(layout.width, layout.height);
        draw_months(&mut canvas, &layout);

        let mut counts = [0usize; 12];
        for (x, y) in black_pixels(&canvas) {
            assert!(y < layout.initial_y, "y = {}", y);
            let index = (0..12)
                .find(|i| {
                    let start = 70 + 66 * i;
                    (start..start + 21).contains(&x)
                })
                .unwrap_or_else(|| panic!("stray pixel at x = {}", x));
            counts[index as usize] += 1;
        }
        assert!(counts.iter().all(|&c| c > 0), "{:?}", counts);
    }

    #[test]
    fn day_clusters() {
        let layout = Layout::default();
        let mut canvas = Canvas::new(layout.width, layout.height);
        draw_days(&mut canvas, &layout);

        let mut counts = [0usize; 3];
        for (x, y) in black_pixels(&canvas) {
            assert!((15..15 + 21).contains(&x), "x = {}", x);
            assert!(x < layout.margin_left);
            let index = [48u32, 78, 108]
                .iter()
                .position(|&baseline| (baseline - 13..=baseline + 3).contains(&y))
                .unwrap_or_else(|| panic!("stray pixel at y = {}", y));
            counts[index] += 1;
        }
        assert!(counts.iter().all(|&c| c > 0), "{:?}", counts);
    }
}
