use crate::error::*;

/// Space-time picture of a 1D run, one row per recorded level.
pub struct Image1D {
    img_buffer: image::RgbImage,
    low: f64,
    high: f64,
}

impl Image1D {
    /// Colors span `[low, high]`, values outside are clamped.
    pub fn new(
        width: usize,
        lines: usize,
        low: f64,
        high: f64,
    ) -> Result<Self> {
        let too_large = || Error::ImageTooLarge {
            width,
            height: lines,
        };
        let w = u32::try_from(width).map_err(|_| too_large())?;
        let h = u32::try_from(lines).map_err(|_| too_large())?;
        Ok(Image1D {
            img_buffer: image::RgbImage::new(w, h),
            low,
            high,
        })
    }

    /// Normalised position of `v` on the gradient, NaN maps to the low end.
    pub fn normalise(&self, v: f64) -> f64 {
        let span = self.high - self.low;
        if span == 0.0 || v.is_nan() {
            return 0.0;
        }
        ((v - self.low) / span).clamp(0.0, 1.0)
    }

    pub fn add_line(&mut self, l: u32, v: &[f64]) {
        debug_assert!(l < self.img_buffer.height());
        debug_assert_eq!(v.len(), self.img_buffer.width() as usize);
        let gradient = colorous::TURBO;
        for x in 0..self.img_buffer.width() {
            let r = self.normalise(v[x as usize]);
            let c = gradient.eval_continuous(r);
            self.img_buffer.put_pixel(x, l, image::Rgb(c.as_array()));
        }
    }

    pub fn from_history(
        history: &[Vec<f64>],
        low: f64,
        high: f64,
    ) -> Result<Self> {
        let width = history.first().map_or(0, |h| h.len());
        let mut img = Image1D::new(width, history.len(), low, high)?;
        for (l, line) in (0..img.height()).zip(history) {
            img.add_line(l, line);
        }
        Ok(img)
    }

    pub fn width(&self) -> u32 {
        self.img_buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.img_buffer.height()
    }

    pub fn write<F: AsRef<std::path::Path>>(self, s: &F) -> Result<()> {
        self.img_buffer.save(s)?;
        Ok(())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn normalise_clamps() {
        let img = Image1D::new(1, 1, 38.0, 149.0).unwrap();
        assert_approx_eq!(f64, img.normalise(38.0), 0.0);
        assert_approx_eq!(f64, img.normalise(149.0), 1.0);
        assert_approx_eq!(f64, img.normalise(1.0e9), 1.0);
        assert_approx_eq!(f64, img.normalise(-1.0e9), 0.0);
        assert_approx_eq!(f64, img.normalise(f64::NAN), 0.0);
    }

    #[test]
    fn history_size() {
        let history = vec![vec![38.0; 7], vec![60.0; 7], vec![149.0; 7]];
        let img = Image1D::from_history(&history, 38.0, 149.0).unwrap();
        assert_eq!(img.width(), 7);
        assert_eq!(img.height(), 3);
    }

    #[test]
    fn rejects_oversized() {
        let too_wide = u32::MAX as usize + 1;
        assert!(matches!(
            Image1D::new(too_wide, 1, 0.0, 1.0),
            Err(Error::ImageTooLarge { height: 1, .. })
        ));
        assert!(matches!(
            Image1D::new(1, too_wide, 0.0, 1.0),
            Err(Error::ImageTooLarge { width: 1, .. })
        ));
    }
}
