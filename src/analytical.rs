use crate::problem::*;

/// Closed form Fourier series solution for a rod at uniform `Tin` whose
/// ends are held at `Tsur`:
///
/// `T(x, t) = Tsur + 2 (Tin - Tsur) sum_m exp(-D (m pi / L)^2 t)
///     (1 - (-1)^m) / (m pi) sin(m pi x / L)`
///
/// truncated after `max_terms` terms.
#[derive(Debug, Clone)]
pub struct AnalyticalSolution<'a> {
    problem: &'a HeatProblem<'a>,
    max_terms: usize,
}

impl<'a> AnalyticalSolution<'a> {
    pub const DEFAULT_TERMS: usize = 100;

    pub fn new(problem: &'a HeatProblem<'a>) -> Self {
        Self::with_terms(problem, Self::DEFAULT_TERMS)
    }

    pub fn with_terms(problem: &'a HeatProblem<'a>, max_terms: usize) -> Self {
        AnalyticalSolution { problem, max_terms }
    }

    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    pub fn evaluate(&self, x: f64, t: f64) -> f64 {
        const PI: f64 = std::f64::consts::PI;

        let d = self.problem.diffusivity();
        let t_in = self.problem.t_in();
        let t_sur = self.problem.t_sur();
        let length = self.problem.grid().length();

        let mut series = 0.0;
        for m in 1..=self.max_terms {
            // (1 - (-1)^m) vanishes for even m
            if m % 2 == 0 {
                continue;
            }
            let m_f = m as f64;
            let k = m_f * PI / length;
            let decay = (-d * k * k * t).exp();
            let coef = 2.0 / (m_f * PI);
            series += decay * coef * (k * x).sin();
        }

        t_sur + 2.0 * (t_in - t_sur) * series
    }

    /// Exact field at every grid node.
    pub fn evaluate_grid(&self, t: f64) -> Vec<f64> {
        self.problem
            .grid()
            .coords()
            .iter()
            .map(|x| self.evaluate(*x, t))
            .collect()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::grid::*;
    use float_cmp::assert_approx_eq;

    fn rod() -> Grid1D {
        Grid1D::new(31.0, 0.05).unwrap()
    }

    #[test]
    fn ends_are_surface_temperature() {
        let grid = rod();
        let problem = HeatProblem::new(&grid, 93.0, 38.0, 149.0).unwrap();
        let exact = AnalyticalSolution::new(&problem);
        assert_approx_eq!(f64, exact.evaluate(0.0, 0.3), 149.0);
        assert_approx_eq!(
            f64,
            exact.evaluate(31.0, 0.3),
            149.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn initial_interior() {
        let grid = rod();
        let problem = HeatProblem::new(&grid, 93.0, 38.0, 149.0).unwrap();
        let exact = AnalyticalSolution::new(&problem);
        // Truncated square wave, Gibbs ripple stays within a degree
        assert!((exact.evaluate(15.5, 0.0) - 38.0).abs() < 1.0);

        let fine = AnalyticalSolution::with_terms(&problem, 1000);
        assert!((fine.evaluate(15.5, 0.0) - 38.0).abs() < 0.1);
    }

    #[test]
    fn rod_midpoint() {
        let grid = rod();
        let problem = HeatProblem::new(&grid, 93.0, 38.0, 149.0).unwrap();
        let exact = AnalyticalSolution::new(&problem);
        let v = exact.evaluate(15.5, 0.5);
        assert!(v > 38.0 && v < 149.0);
        assert_approx_eq!(f64, v, 61.974358, epsilon = 1e-4);
    }

    #[test]
    fn symmetric() {
        let grid = rod();
        let problem = HeatProblem::new(&grid, 93.0, 38.0, 149.0).unwrap();
        let exact = AnalyticalSolution::new(&problem);
        assert_approx_eq!(
            f64,
            exact.evaluate(5.0, 0.5),
            exact.evaluate(26.0, 0.5),
            epsilon = 1e-9
        );
    }

    #[test]
    fn long_time_is_flat() {
        let grid = Grid1D::new(1.0, 0.1).unwrap();
        let problem = HeatProblem::new(&grid, 1.0, 0.0, 100.0).unwrap();
        let exact = AnalyticalSolution::new(&problem);
        for v in exact.evaluate_grid(10.0) {
            assert_approx_eq!(f64, v, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn single_term() {
        let grid = Grid1D::new(1.0, 0.1).unwrap();
        let problem = HeatProblem::new(&grid, 1.0, 0.0, 100.0).unwrap();
        let exact = AnalyticalSolution::with_terms(&problem, 1);
        assert_eq!(exact.max_terms(), 1);
        let pi = std::f64::consts::PI;
        let expected = 100.0 - 200.0 * (-pi * pi * 0.1).exp() * 2.0 / pi;
        assert_approx_eq!(
            f64,
            exact.evaluate(0.5, 0.1),
            expected,
            epsilon = 1e-12
        );
    }
}
