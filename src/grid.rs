use {
    crate::{
        basis::{Rect, BORDER_COLOR},
        canvas::Canvas,
        layout::Layout,
        palette::Palette,
    },
    log::debug,
    rand::Rng,
};


/// `Pos` は `Grid` に存在するセルの座標を表す.
///
/// `x` が週 (列), `y` が曜日 (行) で, それぞれは必ず `Grid` の `width` と `height` 未満になる.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub(crate) struct Pos {
    x: u8,
    y: u8,
}

impl std::fmt::Debug for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Pos {
    fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub(crate) fn x(&self) -> u8 {
        self.x
    }

    pub(crate) fn y(&self) -> u8 {
        self.y
    }
}

/// `RangePos` は `Grid` 上の全セルを行優先 (行が外側, 列が内側) で走査する `Iterator`.
pub(crate) struct RangePos {
    width: u8,
    height: u8,
    x: u8,
    y: u8,
}

impl Iterator for RangePos {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.width == 0 || self.height <= self.y {
            return None;
        }
        let ret = Pos::new(self.x, self.y);
        self.x += 1;
        if self.width <= self.x {
            self.y += 1;
            self.x = 0;
        }
        Some(ret)
    }
}

/// `Grid` はボックスを並べる週 x 曜日の格子を表す. `Pos` はこれを介してのみ作成できる.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Grid {
    width: u8,
    height: u8,
}

impl Grid {
    pub(crate) fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    #[cfg(test)]
    pub(crate) fn width(&self) -> u8 {
        self.width
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[cfg(test)]
    pub(crate) fn pos(&self, x: u8, y: u8) -> Pos {
        debug_assert!(x < self.width);
        debug_assert!(y < self.height);
        Pos::new(x, y)
    }

    pub(crate) fn all_pos(&self) -> RangePos {
        RangePos {
            width: self.width,
            height: self.height,
            x: 0,
            y: 0,
        }
    }
}

impl Layout {
    pub(crate) fn grid(&self) -> Grid {
        Grid::new(self.cols, self.rows)
    }

    /// `pos` のボックス全体 (枠線を含む) が占める矩形.
    pub(crate) fn box_rect(&self, pos: Pos) -> Rect {
        Rect::new(
            self.margin_left + pos.x() as u32 * self.pitch(),
            self.initial_y + pos.y() as u32 * self.pitch(),
            self.box_size,
            self.box_size,
        )
    }
}

/// 1 つのボックスを描く. 枠線の色で全体を塗ってから, 内側を `fill` で塗る.
pub(crate) fn draw_box(canvas: &mut Canvas, rect: Rect, border_size: u32, fill: image::Rgba<u8>) {
    canvas.fill_rect(rect, BORDER_COLOR);
    canvas.fill_rect(rect.inset(border_size), fill);
}

/// 全てのボックスを描く. 塗り色はボックスごとに `palette` から復元抽出で選ぶので,
/// 乱数は `Grid::all_pos` の順にボックス 1 つにつき 1 回消費される.
pub(crate) fn paint_boxes<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    layout: &Layout,
    palette: &Palette,
    rng: &mut R,
) {
    let grid = layout.grid();
    for pos in grid.all_pos() {
        let fill = palette.sample(rng);
        draw_box(canvas, layout.box_rect(pos), layout.border_size, fill);
    }
    debug!("painted {} boxes", grid.len());
}
