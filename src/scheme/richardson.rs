use super::*;

/// Richardson (CTCS leapfrog) explicit three-level scheme.
/// Choosing a stable `r` is up to the caller.
pub struct RichardsonScheme<'a> {
    problem: &'a HeatProblem<'a>,
    next: Vec<f64>,
}

impl<'a> RichardsonScheme<'a> {
    pub fn new(problem: &'a HeatProblem<'a>) -> Self {
        RichardsonScheme {
            problem,
            next: Vec::new(),
        }
    }
}

impl TimeScheme for RichardsonScheme<'_> {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Richardson
    }

    fn step(
        &mut self,
        current: &mut [f64],
        previous: &mut [f64],
        t: f64,
        dt: f64,
    ) -> Result<()> {
        profiling::scope!("richardson::step");
        let n = check_step_inputs(self.problem, current, previous)?;
        let r = self.problem.mesh_fourier_number(dt);

        self.next.resize(n, 0.0);

        // Level n - 1 does not exist yet at t = 0
        if t == 0.0 {
            ftcs_interior(current, &mut self.next, r);
        } else {
            for i in 1..n - 1 {
                self.next[i] = 2.0
                    * r
                    * (current[i - 1] - 2.0 * current[i] + current[i + 1])
                    + previous[i];
            }
        }

        self.problem.apply_boundary_conditions(&mut self.next);
        rotate(current, previous, &self.next);
        Ok(())
    }
}
