use crate::error::*;

/// Largest node count a grid may hold.
pub const MAX_NODES: usize = 1 << 28;

/// Uniform 1D grid over `[0, L]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid1D {
    length: f64,
    dx: f64,
    coords: Vec<f64>,
}

impl Grid1D {
    /// Number of nodes is `floor(length / dx) + 1`,
    /// so a length that is not a multiple of `dx` is truncated.
    /// Grids above [`MAX_NODES`] nodes are rejected.
    pub fn new(length: f64, dx: f64) -> Result<Self> {
        let invalid = || Error::InvalidGrid { length, dx };
        let valid = length.is_finite() && dx.is_finite();
        if !(valid && length > 0.0 && dx > 0.0) {
            return Err(invalid());
        }

        let cells = (length / dx).floor();
        if !(cells < MAX_NODES as f64) {
            return Err(invalid());
        }
        let n = (cells as usize).checked_add(1).ok_or_else(invalid)?;
        if n > MAX_NODES {
            return Err(invalid());
        }

        let mut coords = Vec::new();
        coords.try_reserve_exact(n).map_err(|_| invalid())?;
        coords.extend((0..n).map(|i| i as f64 * dx));
        Ok(Grid1D { length, dx, coords })
    }

    pub fn size(&self) -> usize {
        self.coords.len()
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    #[track_caller]
    pub fn x(&self, i: usize) -> f64 {
        self.coords[i]
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }
}
