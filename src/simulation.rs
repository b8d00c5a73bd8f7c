use crate::analytical::*;
use crate::error::*;
use crate::problem::*;
use crate::scheme::*;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Final state of one scheme run next to the exact solution.
#[derive(Debug, Clone)]
pub struct SchemeResult {
    pub kind: SchemeKind,
    pub final_time: f64,
    pub steps: usize,
    pub numerical: Vec<f64>,
    pub exact: Vec<f64>,

    /// Recorded levels, oldest first, empty unless requested.
    pub history: Vec<Vec<f64>>,
}

impl SchemeResult {
    pub fn max_abs_error(&self) -> f64 {
        self.numerical
            .iter()
            .zip(&self.exact)
            .map(|(n, e)| (n - e).abs())
            .fold(0.0, f64::max)
    }

    pub fn rms_error(&self) -> f64 {
        if self.numerical.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .numerical
            .iter()
            .zip(&self.exact)
            .map(|(n, e)| (n - e) * (n - e))
            .sum();
        (sum / self.numerical.len() as f64).sqrt()
    }
}

/// Drives one scheme from the initial condition to `t_end`.
pub struct Simulation<'a> {
    problem: &'a HeatProblem<'a>,
    scheme: Box<dyn TimeScheme + 'a>,
    dt: f64,
    t_end: f64,
    analytical_terms: usize,
    record_every: Option<usize>,
}

impl<'a> Simulation<'a> {
    pub fn new(
        problem: &'a HeatProblem<'a>,
        scheme: Box<dyn TimeScheme + 'a>,
        dt: f64,
        t_end: f64,
    ) -> Result<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "dt",
                value: dt,
            });
        }
        if !t_end.is_finite() || t_end < 0.0 {
            return Err(Error::InvalidParameter {
                name: "t_end",
                value: t_end,
            });
        }
        Ok(Simulation {
            problem,
            scheme,
            dt,
            t_end,
            analytical_terms: AnalyticalSolution::DEFAULT_TERMS,
            record_every: None,
        })
    }

    pub fn analytical_terms(mut self, terms: usize) -> Self {
        self.analytical_terms = terms;
        self
    }

    /// Keep the initial field and every `every`-th level afterwards.
    pub fn record_every(mut self, every: usize) -> Self {
        self.record_every = Some(every.max(1));
        self
    }

    pub fn n_steps(&self) -> usize {
        (self.t_end / self.dt).round() as usize
    }

    pub fn run(mut self) -> Result<SchemeResult> {
        let kind = self.scheme.kind();
        let n = self.problem.grid().size();
        let n_steps = self.n_steps();
        info!(
            scheme = %kind,
            nodes = n,
            steps = n_steps,
            r = self.problem.mesh_fourier_number(self.dt),
            "starting run"
        );

        let mut current = vec![0.0; n];
        self.problem.set_initial_condition(&mut current);
        // Multi-level schemes read this on their first step
        let mut previous = current.clone();

        let mut history = Vec::new();
        if self.record_every.is_some() {
            history.push(current.clone());
        }

        let mut t = 0.0;
        for step in 0..n_steps {
            self.scheme.step(&mut current, &mut previous, t, self.dt)?;
            t += self.dt;
            if let Some(every) = self.record_every {
                if (step + 1) % every == 0 {
                    history.push(current.clone());
                }
            }
        }
        debug!(scheme = %kind, t, "time loop finished");

        let exact = AnalyticalSolution::with_terms(
            self.problem,
            self.analytical_terms,
        )
        .evaluate_grid(t);

        let result = SchemeResult {
            kind,
            final_time: t,
            steps: n_steps,
            numerical: current,
            exact,
            history,
        };

        if result.numerical.iter().all(|v| v.is_finite()) {
            info!(
                scheme = %kind,
                max_error = result.max_abs_error(),
                rms_error = result.rms_error(),
                "finished run"
            );
        } else {
            warn!(scheme = %kind, "run diverged");
        }
        Ok(result)
    }
}

/// Settings shared by every scheme in a comparison.
#[derive(Debug, Clone, Copy)]
pub struct RunParameters {
    pub dt: f64,
    pub t_end: f64,
    pub analytical_terms: usize,
    pub record_every: Option<usize>,
}

impl Default for RunParameters {
    fn default() -> Self {
        RunParameters {
            dt: 0.01,
            t_end: 0.5,
            analytical_terms: AnalyticalSolution::DEFAULT_TERMS,
            record_every: None,
        }
    }
}

pub fn run_scheme(
    problem: &HeatProblem,
    kind: SchemeKind,
    params: &RunParameters,
) -> Result<SchemeResult> {
    let mut sim =
        Simulation::new(problem, kind.build(problem), params.dt, params.t_end)?
            .analytical_terms(params.analytical_terms);
    if let Some(every) = params.record_every {
        sim = sim.record_every(every);
    }
    sim.run()
}

/// Run each scheme on its own buffers, in order or on the rayon pool.
/// Results come back in the order of `kinds`.
pub fn run_schemes(
    problem: &HeatProblem,
    kinds: &[SchemeKind],
    params: &RunParameters,
    parallel: bool,
) -> Vec<Result<SchemeResult>> {
    if parallel {
        kinds
            .par_iter()
            .map(|kind| run_scheme(problem, *kind, params))
            .collect()
    } else {
        kinds
            .iter()
            .map(|kind| run_scheme(problem, *kind, params))
            .collect()
    }
}
