use crate::error::*;
use crate::grid::*;
use crate::scheme::*;
use crate::simulation::*;
use std::collections::BTreeMap;
use std::io::prelude::*;

pub const DEFAULT_CSV_NAME: &str = "1D_Heat_Equation_Solution.csv";

/// Column order of the combined file.
const COLUMNS: [(SchemeKind, &str); 4] = [
    (SchemeKind::DuFortFrankel, "T (K) DuFort_Frankel_Explicit_Scheme"),
    (SchemeKind::Richardson, "T (K) Richardson_Explicit_Scheme"),
    (SchemeKind::Laasonen, "T (K) Laasonen_Simple_Implicit_Scheme"),
    (SchemeKind::CrankNicolson, "T (K) Crank_Nicholson_Implicit_Scheme"),
];

/// Final fields of every scheme, sharing one coordinate and exact column.
/// Grid coordinates are in cm and written out in m.
#[derive(Debug, Default)]
pub struct ResultTable {
    x_m: Vec<f64>,
    exact: Vec<f64>,
    schemes: BTreeMap<SchemeKind, Vec<f64>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.x_m.is_empty()
    }

    pub fn scheme(&self, kind: SchemeKind) -> Option<&[f64]> {
        self.schemes.get(&kind).map(|v| v.as_slice())
    }

    /// The first stored result fixes the coordinates and exact column.
    pub fn store(
        &mut self,
        grid: &Grid1D,
        result: &SchemeResult,
    ) -> Result<()> {
        let n = grid.size();
        for (what, field) in [
            ("numerical field", &result.numerical),
            ("exact field", &result.exact),
        ] {
            if field.len() != n {
                return Err(Error::SizeMismatch {
                    what,
                    expected: n,
                    found: field.len(),
                });
            }
        }

        if self.is_empty() {
            self.x_m = grid.coords().iter().map(|x| x / 100.0).collect();
            self.exact = result.exact.clone();
        }
        self.schemes.insert(result.kind, result.numerical.clone());
        Ok(())
    }

    /// Schemes that were not stored are written as zeros.
    pub fn write_combined_csv<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.is_empty() {
            return Err(Error::NoResults);
        }

        write!(output, "x (m),T (K) Exact_Solution")?;
        for (_, header) in COLUMNS {
            write!(output, ",{header}")?;
        }
        writeln!(output)?;

        for i in 0..self.x_m.len() {
            write!(output, "{:.4},{:.4}", self.x_m[i], self.exact[i])?;
            for (kind, _) in COLUMNS {
                let v = self.schemes.get(&kind).map_or(0.0, |column| column[i]);
                write!(output, ",{:.4}", v)?;
            }
            writeln!(output)?;
        }
        Ok(())
    }

    pub fn write_combined_csv_file<P: AsRef<std::path::Path>>(
        &self,
        path: &P,
    ) -> Result<()> {
        let mut output =
            std::io::BufWriter::new(std::fs::File::create(path)?);
        self.write_combined_csv(&mut output)?;
        output.flush()?;
        Ok(())
    }
}
