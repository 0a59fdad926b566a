use {
    crate::basis::{FILL_COLORS, INACTIVE_COLOR},
    image::Rgba,
    log::info,
    rand::Rng,
};

#[cfg(test)]
mod tests;

/// `laziness` の最大値.
pub(crate) const MAX_LAZINESS: usize = 100;

/// `Palette` はボックスの塗り色を一様に選ぶための色の列.
///
/// 先頭の 4 色が活動の強さを表し, その後ろに `laziness` 個の `INACTIVE_COLOR` が続く.
/// 多くの日は活動が無いので, `laziness` が大きいほど灰色のボックスが増える.
#[derive(Debug, Clone)]
pub(crate) struct Palette {
    colors: Vec<Rgba<u8>>,
}

impl Palette {
    /// `laziness` を `1..=MAX_LAZINESS` から一様に選んでパレットを作る. 乱数を 1 回消費する.
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let laziness = rng.gen_range(1..=MAX_LAZINESS);
        info!("laziness level: {}", laziness);
        Self::with_laziness(laziness)
    }

    pub(crate) fn with_laziness(laziness: usize) -> Self {
        let mut colors = Vec::with_capacity(FILL_COLORS.len() + laziness);
        colors.extend_from_slice(&FILL_COLORS);
        colors.extend(std::iter::repeat(INACTIVE_COLOR).take(laziness));
        Self { colors }
    }

    pub(crate) fn len(&self) -> usize {
        self.colors.len()
    }

    #[cfg(test)]
    pub(crate) fn laziness(&self) -> usize {
        self.colors.len() - FILL_COLORS.len()
    }

    #[cfg(test)]
    pub(crate) fn colors(&self) -> &[Rgba<u8>] {
        &self.colors
    }

    /// 色の列から 1 つを一様に選ぶ. 乱数を 1 回消費する.
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba<u8> {
        self.colors[rng.gen_range(0..self.colors.len())]
    }
}
