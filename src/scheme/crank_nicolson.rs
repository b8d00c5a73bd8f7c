use super::*;
use crate::tridiagonal::*;

/// Crank-Nicolson implicit two-level scheme, second order in time.
///
/// Same tridiagonal shape as Laasonen with halved off-diagonal weights,
/// the right hand side averages the current level with weights
/// `r/2, 1 - r, r/2`.
pub struct CrankNicolsonScheme<'a> {
    problem: &'a HeatProblem<'a>,
    system: TridiagonalSystem,
    next: Vec<f64>,
}

impl<'a> CrankNicolsonScheme<'a> {
    pub fn new(problem: &'a HeatProblem<'a>) -> Self {
        CrankNicolsonScheme {
            problem,
            system: TridiagonalSystem::new(),
            next: Vec::new(),
        }
    }
}

impl TimeScheme for CrankNicolsonScheme<'_> {
    fn kind(&self) -> SchemeKind {
        SchemeKind::CrankNicolson
    }

    fn step(
        &mut self,
        current: &mut [f64],
        previous: &mut [f64],
        _t: f64,
        dt: f64,
    ) -> Result<()> {
        profiling::scope!("crank_nicolson::step");
        let n = check_step_inputs(self.problem, current, previous)?;
        let r = self.problem.mesh_fourier_number(dt);
        let t_sur = self.problem.t_sur();
        let half_r = r / 2.0;

        let n_internal = n - 2;
        self.system.assemble(n_internal, -half_r, 1.0 + r, -half_r);
        for k in 0..n_internal {
            let i = k + 1;
            let mut value = half_r * current[i - 1]
                + (1.0 - r) * current[i]
                + half_r * current[i + 1];
            if i == 1 {
                value += half_r * t_sur;
            }
            if i == n - 2 {
                value += half_r * t_sur;
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
