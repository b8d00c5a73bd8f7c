use super::*;

/// DuFort-Frankel explicit three-level scheme, unconditionally stable.
///
/// The first call has no valid level `n - 1` and takes a single FTCS
/// step instead. Grids with fewer than 3 nodes are left untouched.
pub struct DuFortFrankelScheme<'a> {
    problem: &'a HeatProblem<'a>,
    first_step: bool,
    next: Vec<f64>,
}

impl<'a> DuFortFrankelScheme<'a> {
    pub fn new(problem: &'a HeatProblem<'a>) -> Self {
        DuFortFrankelScheme {
            problem,
            first_step: true,
            next: Vec::new(),
        }
    }
}

impl TimeScheme for DuFortFrankelScheme<'_> {
    fn kind(&self) -> SchemeKind {
        SchemeKind::DuFortFrankel
    }

    fn step(
        &mut self,
        current: &mut [f64],
        previous: &mut [f64],
        _t: f64,
        dt: f64,
    ) -> Result<()> {
        profiling::scope!("dufort_frankel::step");
        let n = self.problem.grid().size();
        if n < 3 {
            return Ok(());
        }
        let n = check_step_inputs(self.problem, current, previous)?;
        let r = self.problem.mesh_fourier_number(dt);

        // Both known levels carry the fixed boundary
        self.problem.apply_boundary_conditions(current);
        self.problem.apply_boundary_conditions(previous);

        self.next.resize(n, 0.0);

        if self.first_step {
            ftcs_interior(current, &mut self.next, r);
            self.first_step = false;
        } else {
            let a = 1.0 - 2.0 * r;
            let b = 2.0 * r;
            let denom = 1.0 + 2.0 * r;
            for i in 1..n - 1 {
                self.next[i] =
                    (a * previous[i] + b * (current[i - 1] + current[i + 1]))
                        / denom;
            }
        }

        self.problem.apply_boundary_conditions(&mut self.next);
        rotate(current, previous, &self.next);
        Ok(())
    }
}
