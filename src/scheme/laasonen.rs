use super::*;
use crate::tridiagonal::*;

/// Laasonen (backward Euler) implicit two-level scheme.
///
/// Interior unknowns satisfy
/// `-r T[i-1] + (1 + 2r) T[i] - r T[i+1] = T_curr[i]`,
/// with the Dirichlet ends moved to the right hand side.
pub struct LaasonenScheme<'a> {
    problem: &'a HeatProblem<'a>,
    system: TridiagonalSystem,
    next: Vec<f64>,
}

impl<'a> LaasonenScheme<'a> {
    pub fn new(problem: &'a HeatProblem<'a>) -> Self {
        LaasonenScheme {
            problem,
            system: TridiagonalSystem::new(),
            next: Vec::new(),
        }
    }
}

impl TimeScheme for LaasonenScheme<'_> {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Laasonen
    }

    fn step(
        &mut self,
        current: &mut [f64],
        previous: &mut [f64],
        _t: f64,
        dt: f64,
    ) -> Result<()> {
        profiling::scope!("laasonen::step");
        let n = check_step_inputs(self.problem, current, previous)?;
        let r = self.problem.mesh_fourier_number(dt);
        let t_sur = self.problem.t_sur();

        let n_internal = n - 2;
        self.system.assemble(n_internal, -r, 1.0 + 2.0 * r, -r);
        for k in 0..n_internal {
            let i = k + 1;
            let mut value = current[i];
            if i == 1 {
                value += r * t_sur;
            }
            if i == n - 2 {
                value += r * t_sur;
            }
            self.system.rhs[k] = value;
        }

        let interior = self.system.solve()?;

        self.next.resize(n, 0.0);
        self.next[1..n - 1].copy_from_slice(interior);
        self.problem.apply_boundary_conditions(&mut self.next);
        rotate(current, previous, &self.next);
        Ok(())
    }
}
