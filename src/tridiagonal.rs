//! Thomas algorithm for tridiagonal systems.
//!
//! Rows are stored as three diagonals of equal length `n`:
//! `a` (sub, `a[0]` unused), `b` (main) and `c` (super, `c[n - 1]` unused).
//! There is no pivoting, callers must hand in diagonally dominant
//! systems. The implicit heat schemes always do.

use crate::error::*;

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(Error::SizeMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}

/// Reusable Thomas solver, keeps the modified coefficients between calls.
#[derive(Debug, Default, Clone)]
pub struct TridiagonalSolver {
    c_prime: Vec<f64>,
    d_prime: Vec<f64>,
}

impl TridiagonalSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-off solve of `A x = d`, the solution overwrites `d`.
    pub fn solve(a: &[f64], b: &[f64], c: &[f64], d: &mut [f64]) -> Result<()> {
        TridiagonalSolver::new().apply(a, b, c, d)
    }

    /// Same as [`TridiagonalSolver::solve`] but reuses this solver's scratch.
    /// `d` is left untouched when an error is returned.
    pub fn apply(
        &mut self,
        a: &[f64],
        b: &[f64],
        c: &[f64],
        d: &mut [f64],
    ) -> Result<()> {
        profiling::scope!("tridiagonal::solve");
        let n = d.len();
        check_len("sub-diagonal", n, a.len())?;
        check_len("main diagonal", n, b.len())?;
        check_len("super-diagonal", n, c.len())?;
        if n == 0 {
            return Ok(());
        }

        self.c_prime.clear();
        self.c_prime.resize(n, 0.0);
        self.d_prime.clear();
        self.d_prime.resize(n, 0.0);
        let cp = &mut self.c_prime;
        let dp = &mut self.d_prime;

        // Forward sweep
        let mut beta = b[0];
        if beta == 0.0 {
            return Err(Error::SingularSystem { row: 0 });
        }
        cp[0] = c[0] / beta;
        dp[0] = d[0] / beta;

        for i in 1..n {
            beta = b[i] - a[i] * cp[i - 1];
            if beta == 0.0 {
                return Err(Error::SingularSystem { row: i });
            }
            cp[i] = if i == n - 1 { 0.0 } else { c[i] / beta };
            dp[i] = (d[i] - a[i] * dp[i - 1]) / beta;
        }

        // Back substitution
        d[n - 1] = dp[n - 1];
        for i in (0..n - 1).rev() {
            d[i] = dp[i] - cp[i] * d[i + 1];
        }
        Ok(())
    }
}

/// Constant-coefficient tridiagonal system over the interior nodes,
/// owned by an implicit scheme and resized on every assembly.
#[derive(Debug, Default, Clone)]
pub struct TridiagonalSystem {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub rhs: Vec<f64>,
    solver: TridiagonalSolver,
}

impl TridiagonalSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Fill all three diagonals with constants and zero the rhs.
    pub fn assemble(&mut self, n: usize, sub: f64, main: f64, sup: f64) {
        fn assign(v: &mut Vec<f64>, n: usize, value: f64) {
            v.clear();
            v.resize(n, value);
        }
        assign(&mut self.a, n, sub);
        assign(&mut self.b, n, main);
        assign(&mut self.c, n, sup);
        assign(&mut self.rhs, n, 0.0);
    }

    /// Solve in place, afterwards `rhs` holds the solution.
    pub fn solve(&mut self) -> Result<&[f64]> {
        self.solver.apply(&self.a, &self.b, &self.c, &mut self.rhs)?;
        Ok(&self.rhs)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use nalgebra::{DMatrix, DVector};
    use rand::{Rng, SeedableRng};

    fn dense_solve(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> Vec<f64> {
        let n = d.len();
        let m = DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                b[i]
            } else if j + 1 == i {
                a[i]
            } else if i + 1 == j {
                c[i]
            } else {
                0.0
            }
        });
        let rhs = DVector::from_column_slice(d);
        m.lu().solve(&rhs).unwrap().as_slice().to_vec()
    }

    #[test]
    fn identity() {
        let n = 5;
        let a = vec![0.0; n];
        let b = vec![1.0; n];
        let c = vec![0.0; n];
        let mut d = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        TridiagonalSolver::solve(&a, &b, &c, &mut d).unwrap();
        for (i, x) in d.iter().enumerate() {
            assert_approx_eq!(f64, *x, (i + 1) as f64);
        }
    }

    #[test]
    fn laplacian() {
        let a = vec![0.0, -1.0, -1.0, -1.0];
        let b = vec![2.0, 2.0, 2.0, 2.0];
        let c = vec![-1.0, -1.0, -1.0, 0.0];
        let mut d = vec![1.0, 0.0, 0.0, 1.0];
        TridiagonalSolver::solve(&a, &b, &c, &mut d).unwrap();
        for x in &d {
            assert_approx_eq!(f64, *x, 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn single_row() {
        let mut d = vec![6.0];
        TridiagonalSolver::solve(&[7.0], &[3.0], &[11.0], &mut d).unwrap();
        assert_approx_eq!(f64, d[0], 2.0);
    }

    #[test]
    fn empty_is_noop() {
        let mut d: Vec<f64> = vec![];
        TridiagonalSolver::solve(&[], &[], &[], &mut d).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn random_against_dense() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1024);
        let mut solver = TridiagonalSolver::new();
        for n in 1..40 {
            let a: Vec<f64> =
                (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let c: Vec<f64> =
                (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let b: Vec<f64> = (0..n)
                .map(|i| a[i].abs() + c[i].abs() + rng.gen_range(0.5..2.0))
                .collect();
            let d: Vec<f64> =
                (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect();

            let expected = dense_solve(&a, &b, &c, &d);
            let mut x = d.clone();
            solver.apply(&a, &b, &c, &mut x).unwrap();
            for i in 0..n {
                let scale = expected[i].abs().max(1.0);
                assert!(
                    (x[i] - expected[i]).abs() <= 1e-10 * scale,
                    "n: {}, i: {}, thomas: {}, dense: {}",
                    n,
                    i,
                    x[i],
                    expected[i]
                );
            }
        }
    }

    #[test]
    fn size_mismatch_leaves_rhs() {
        let a = vec![0.0; 2];
        let b = vec![1.0; 3];
        let c = vec![0.0; 3];
        let mut d = vec![1.0, 2.0, 3.0];
        let r = TridiagonalSolver::solve(&a, &b, &c, &mut d);
        assert!(matches!(
            r,
            Err(Error::SizeMismatch {
                expected: 3,
                found: 2,
                ..
            })
        ));
        assert_eq!(d, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn zero_pivot() {
        let mut d = vec![1.0, 2.0];
        let a = [0.0, 1.0];
        let c = [1.0, 0.0];
        let r = TridiagonalSolver::solve(&a, &[0.0, 1.0], &c, &mut d);
        assert!(matches!(r, Err(Error::SingularSystem { row: 0 })));

        let r = TridiagonalSolver::solve(&a, &[1.0, 1.0], &c, &mut d);
        assert!(matches!(r, Err(Error::SingularSystem { row: 1 })));
        assert_eq!(d, vec![1.0, 2.0]);
    }

    #[test]
    fn system_assembly() {
        let mut system = TridiagonalSystem::new();
        system.assemble(3, -1.0, 4.0, -1.0);
        assert_eq!(system.len(), 3);
        system.rhs.copy_from_slice(&[3.0, 2.0, 3.0]);
        let x = system.solve().unwrap();
        for v in x {
            assert_approx_eq!(f64, *v, 1.0, epsilon = 1e-14);
        }

        system.assemble(1, -1.0, 2.0, -1.0);
        assert_eq!(system.a.len(), 1);
        assert_eq!(system.rhs, vec![0.0]);
    }
}
