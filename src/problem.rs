use crate::error::*;
use crate::grid::*;

/// Rod initially at a uniform temperature whose ends are held at a
/// fixed surface temperature.
#[derive(Debug, Clone)]
pub struct HeatProblem<'a> {
    grid: &'a Grid1D,
    diffusivity: f64,
    t_in: f64,
    t_sur: f64,
}

impl<'a> HeatProblem<'a> {
    pub fn new(
        grid: &'a Grid1D,
        diffusivity: f64,
        t_in: f64,
        t_sur: f64,
    ) -> Result<Self> {
        if !diffusivity.is_finite() || diffusivity <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "diffusivity",
                value: diffusivity,
            });
        }
        if !t_in.is_finite() {
            return Err(Error::InvalidParameter {
                name: "t_in",
                value: t_in,
            });
        }
        if !t_sur.is_finite() {
            return Err(Error::InvalidParameter {
                name: "t_sur",
                value: t_sur,
            });
        }
        Ok(HeatProblem {
            grid,
            diffusivity,
            t_in,
            t_sur,
        })
    }

    pub fn grid(&self) -> &'a Grid1D {
        self.grid
    }

    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    pub fn t_in(&self) -> f64 {
        self.t_in
    }

    pub fn t_sur(&self) -> f64 {
        self.t_sur
    }

    /// `r = D dt / dx^2`
    pub fn mesh_fourier_number(&self, dt: f64) -> f64 {
        let dx = self.grid.dx();
        self.diffusivity * dt / (dx * dx)
    }

    pub fn set_initial_condition(&self, field: &mut [f64]) {
        field.fill(self.t_in);
    }

    pub fn apply_boundary_conditions(&self, field: &mut [f64]) {
        if let Some(first) = field.first_mut() {
            *first = self.t_sur;
        }
        if let Some(last) = field.last_mut() {
            *last = self.t_sur;
        }
    }

    /// Fields handed to a scheme must cover the whole grid.
    pub(crate) fn check_field(
        &self,
        what: &'static str,
        field: &[f64],
    ) -> Result<()> {
        let expected = self.grid.size();
        if field.len() != expected {
            return Err(Error::SizeMismatch {
                what,
                expected,
                found: field.len(),
            });
        }
        Ok(())
    }
}
