/// `Layout` は画像の大きさとボックス, ラベルの配置を決める定数をまとめたもの.
///
/// `Default` が基準となる 850x130 の配置を与える.
#[derive(Debug, Clone)]
pub(crate) struct Layout {
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// 1 週間の日数. グリッドの行数になる.
    pub(crate) rows: u8,
    /// 1 年の週数. グリッドの列数になる.
    pub(crate) cols: u8,
    pub(crate) box_size: u32,
    pub(crate) border_size: u32,
    pub(crate) padding: u32,
    pub(crate) margin_left: u32,
    pub(crate) initial_y: u32,
    /// 最初の月ラベルのベースライン上の点.
    pub(crate) month_origin: (i32, i32),
    pub(crate) month_step: i32,
    /// 最初の曜日ラベルのベースライン上の点.
    pub(crate) day_origin: (i32, i32),
    pub(crate) day_step: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 850,
            height: 130,
            rows: 7,
            cols: 53,
            box_size: 11,
            border_size: 1,
            padding: 4,
            margin_left: 50,
            initial_y: 22,
            month_origin: (70, 15),
            month_step: 66,
            day_origin: (15, 48),
            day_step: 30,
        }
    }
}

impl Layout {
    /// ボックスの左上から次のボックスの左上までの距離.
    pub(crate) fn pitch(&self) -> u32 {
        self.box_size + self.padding
    }
}
