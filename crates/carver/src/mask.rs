//! Binary silhouette masks.

/// Immutable binary silhouette grid for one view.
///
/// One bit per pixel, packed row-major into u64 words. Foreground means
/// inside the silhouette. Decoding source images into intensities is the
/// caller's job; this type only binarizes and stores.
#[derive(Clone, Debug)]
pub struct ViewMask {
    width: usize,
    height: usize,
    words: Vec<u64>,
}

impl ViewMask {
    /// Default binarization threshold: intensity strictly above 127 is
    /// foreground.
    pub const DEFAULT_THRESHOLD: u8 = 127;

    fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1, "mask dimensions must be >= 1");
        let word_count = (width * height + 63) / 64;
        Self {
            width,
            height,
            words: vec![0; word_count],
        }
    }

    /// Binarize 8-bit intensities in row-major order.
    ///
    /// A pixel is foreground when its intensity is strictly above
    /// `threshold`. The mask keeps the source dimensions exactly.
    pub fn from_intensities(width: usize, height: usize, pixels: &[u8], threshold: u8) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel buffer does not match {width}x{height}"
        );
        let mut mask = Self::blank(width, height);
        for (i, &intensity) in pixels.iter().enumerate() {
            if intensity > threshold {
                mask.words[i >> 6] |= 1u64 << (i & 63);
            }
        }
        mask
    }

    /// Build a mask from a per-pixel `(row, col)` predicate.
    pub fn from_fn(width: usize, height: usize, mut foreground: impl FnMut(usize, usize) -> bool) -> Self {
        let mut mask = Self::blank(width, height);
        for row in 0..height {
            for col in 0..width {
                if foreground(row, col) {
                    let i = row * width + col;
                    mask.words[i >> 6] |= 1u64 << (i & 63);
                }
            }
        }
        mask
    }

    /// Fully-foreground mask.
    pub fn filled(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    /// Fully-background mask.
    pub fn empty(width: usize, height: usize) -> Self {
        Self::blank(width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Foreground test.
    ///
    /// # Panics
    /// Debug panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(
            row < self.height && col < self.width,
            "mask index out of bounds"
        );
        let i = row * self.width + col;
        (self.words[i >> 6] >> (i & 63)) & 1 != 0
    }

    /// Number of foreground pixels.
    pub fn foreground_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// The three orthogonal silhouettes consumed by one carve.
///
/// The views need not share dimensions; each projection is parameterized
/// by its own mask size.
pub struct ViewMasks {
    pub front: ViewMask,
    pub side: ViewMask,
    pub top: ViewMask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let pixels = [0u8, 127, 128, 255];
        let mask = ViewMask::from_intensities(4, 1, &pixels, ViewMask::DEFAULT_THRESHOLD);
        assert!(!mask.get(0, 0));
        assert!(!mask.get(0, 1), "127 must stay background at threshold 127");
        assert!(mask.get(0, 2));
        assert!(mask.get(0, 3));
        assert_eq!(mask.foreground_count(), 2);
    }

    #[test]
    fn custom_threshold() {
        let pixels = [10u8, 20, 30];
        let mask = ViewMask::from_intensities(3, 1, &pixels, 20);
        assert_eq!(mask.foreground_count(), 1);
        assert!(mask.get(0, 2));
    }

    #[test]
    fn from_fn_addresses_row_col() {
        let mask = ViewMask::from_fn(5, 3, |row, col| row == 1 && col == 4);
        assert!(mask.get(1, 4));
        assert_eq!(mask.foreground_count(), 1);
    }

    #[test]
    fn filled_and_empty() {
        assert_eq!(ViewMask::filled(7, 9).foreground_count(), 63);
        assert_eq!(ViewMask::empty(7, 9).foreground_count(), 0);
    }

    #[test]
    fn crosses_word_boundaries() {
        // 100x3 = 300 bits, spanning five u64 words.
        let mask = ViewMask::from_fn(100, 3, |row, col| (row + col) % 2 == 0);
        assert_eq!(mask.foreground_count(), 150);
        assert!(mask.get(2, 98));
        assert!(!mask.get(2, 99));
    }
}
