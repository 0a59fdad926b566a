use image::Rgba;

/// 背景の白.
pub(crate) const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// 各ボックスの枠線の色.
pub(crate) const BORDER_COLOR: Rgba<u8> = Rgba([27, 31, 35, 255]);

/// 活動の無い日を表す灰色.
pub(crate) const INACTIVE_COLOR: Rgba<u8> = Rgba([235, 237, 240, 255]);

/// 活動の強さを表す 4 色. 薄い順 (活動が少ない順) に並ぶ.
pub(crate) const FILL_COLORS: [Rgba<u8>; 4] = [
    Rgba([155, 233, 168, 255]),
    Rgba([64, 196, 99, 255]),
    Rgba([48, 161, 78, 255]),
    Rgba([33, 110, 57, 255]),
];

/// 上端に並べる月の略称. 現在の日付からは計算せず, この並びをそのまま描く.
pub(crate) const MONTHS: [&str; 12] = [
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun",
];

/// 左端に並べる曜日の略称.
pub(crate) const DAYS: [&str; 3] = ["Mon", "Wed", "Fri"];

/// `Rect` は画像上の矩形領域を表す. `x`, `y` が左上の座標で, 右端と下端は含まない.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Rect {
    pub(crate) fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 四辺をそれぞれ `amount` だけ内側に縮めた矩形を返す.
    pub(crate) fn inset(self, amount: u32) -> Self {
        let shrink = amount.saturating_mul(2);
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: self.width.saturating_sub(shrink),
            height: self.height.saturating_sub(shrink),
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, x: u32, y: u32) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }
}
