/// A progress ratio clamped into `[0, 1]` for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    fraction: f64,
}

impl ProgressBar {
    /// Clamp a raw engine ratio. NaN renders as empty.
    pub fn from_ratio(ratio: f64) -> Self {
        let fraction = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        Self { fraction }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Rounded percentage, 0..=100.
    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0).round() as u8
    }

    /// Fixed-width text bar.
    pub fn render(&self, width: usize) -> String {
        let filled = ((self.fraction * width as f64).round() as usize).min(width);
        let mut bar = String::with_capacity(width * 3);
        bar.extend(std::iter::repeat('█').take(filled));
        bar.extend(std::iter::repeat('░').take(width - filled));
        bar
    }
}
