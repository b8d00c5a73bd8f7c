use crate::build_info;
use crate::csv::*;
use crate::error::*;
use crate::grid::*;
use crate::image::*;
use crate::problem::*;
use crate::scheme::*;
use crate::simulation::*;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// 1D heat conduction: compare finite difference schemes with the
/// exact series solution.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Rod length (cm).
    #[arg(long, default_value = "31.0")]
    pub length: f64,

    /// Grid spacing (cm).
    #[arg(long, default_value = "0.05")]
    pub dx: f64,

    /// Thermal diffusivity (cm^2/hr).
    #[arg(long, default_value = "93.0")]
    pub diffusivity: f64,

    /// Initial uniform temperature.
    #[arg(long, default_value = "38.0")]
    pub t_in: f64,

    /// Fixed surface temperature at both ends.
    #[arg(long, default_value = "149.0")]
    pub t_sur: f64,

    /// Time step (hr).
    #[arg(long, default_value = "0.01")]
    pub dt: f64,

    /// Final time (hr).
    #[arg(long, default_value = "0.5")]
    pub t_end: f64,

    /// Terms kept in the exact series solution.
    #[arg(long, default_value = "100")]
    pub terms: usize,

    /// Schemes to run, all of them when omitted.
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub schemes: Vec<SchemeKind>,

    /// Combined CSV output file.
    #[arg(short, long, default_value = DEFAULT_CSV_NAME)]
    pub output: PathBuf,

    /// Directory for space-time images, one per scheme, will be created.
    #[arg(short, long)]
    pub image_dir: Option<PathBuf>,

    /// Steps between image rows.
    #[arg(long, default_value = "1")]
    pub record_every: usize,

    /// Run the schemes concurrently.
    #[arg(short, long)]
    pub parallel: bool,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .thread_name(|i| format!("rayon_thread_{}", i))
            .build_global()
        {
            warn!("using existing thread pool: {e}");
        }

        args
    }

    pub fn schemes(&self) -> Vec<SchemeKind> {
        if self.schemes.is_empty() {
            SchemeKind::ALL.to_vec()
        } else {
            self.schemes.clone()
        }
    }

    pub fn run_parameters(&self) -> RunParameters {
        RunParameters {
            dt: self.dt,
            t_end: self.t_end,
            analytical_terms: self.terms,
            record_every: self.image_dir.as_ref().map(|_| self.record_every),
        }
    }

    pub fn image_path(&self, kind: SchemeKind) -> Option<PathBuf> {
        self.image_dir.as_ref().map(|dir| {
            let mut path = dir.clone();
            path.push(format!("{}.png", kind.name()));
            path
        })
    }

    /// Runs every selected scheme and writes the combined CSV.
    /// A failing scheme is reported and skipped, the first failure is
    /// returned once the others have been written out.
    pub fn run(&self) -> Result<()> {
        #[cfg(feature = "profile-with-puffin")]
        let _puffin_server = start_puffin_server()?;

        let grid = Grid1D::new(self.length, self.dx)?;
        let problem =
            HeatProblem::new(&grid, self.diffusivity, self.t_in, self.t_sur)?;
        let params = self.run_parameters();
        let kinds = self.schemes();

        if let Some(dir) = &self.image_dir {
            std::fs::create_dir_all(dir)?;
        }

        let results = run_schemes(&problem, &kinds, &params, self.parallel);
        profiling::finish_frame!();

        let mut table = ResultTable::new();
        let mut first_error = None;
        for (kind, result) in kinds.iter().zip(results) {
            match result {
                Ok(result) => {
                    table.store(&grid, &result)?;
                    if let Some(path) = self.image_path(*kind) {
                        info!("Writing: {:?}", path);
                        Image1D::from_history(
                            &result.history,
                            self.t_in,
                            self.t_sur,
                        )?
                        .write(&path)?;
                    }
                }
                Err(e) => {
                    error!(scheme = %kind, "run halted: {e}");
                    first_error.get_or_insert(e);
                }
            }
        }

        if !table.is_empty() {
            table.write_combined_csv_file(&self.output)?;
            info!("Combined CSV written to: {:?}", self.output);
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> Result<puffin_http::Server> {
    let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    println!("Run this to view profiling data:  puffin_viewer {server_addr}");
    let server = puffin_http::Server::new(&server_addr)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    profiling::puffin::set_scopes_on(true);
    Ok(server)
}
