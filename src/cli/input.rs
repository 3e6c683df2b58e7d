//! Sample loading for CLI commands
//!
//! Measurements come from exactly one source: a CSV file (or `-` for
//! stdin), an inline list, a simulation, or piped stdin when nothing else
//! is given.

use miette::{miette, IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use crate::core::simulate_normal;

/// Where the measurements come from
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SampleArgs {
    /// CSV file of measurements ("-" reads stdin)
    #[arg(long, short = 'd', conflicts_with_all = ["values", "simulate"])]
    pub data: Option<PathBuf>,

    /// CSV column: header name or 0-based index (default: first column)
    #[arg(long, short = 'c', requires = "data")]
    pub column: Option<String>,

    /// Inline measurements, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "simulate"
    )]
    pub values: Option<Vec<f64>>,

    /// Simulate N normally distributed measurements
    #[arg(long, value_name = "N", requires_all = ["sim_mean", "sim_std"])]
    pub simulate: Option<usize>,

    /// Mean of simulated measurements
    #[arg(long, requires = "simulate", allow_negative_numbers = true)]
    pub sim_mean: Option<f64>,

    /// Standard deviation of simulated measurements
    #[arg(long, requires = "simulate")]
    pub sim_std: Option<f64>,

    /// Seed for reproducible simulation
    #[arg(long, requires = "simulate")]
    pub seed: Option<u64>,
}

/// Resolve the sample source and load the measurements
pub fn load_samples(args: &SampleArgs) -> Result<Vec<f64>> {
    if let Some(values) = &args.values {
        log::debug!("using {} inline values", values.len());
        return Ok(values.clone());
    }

    if let Some(n) = args.simulate {
        let mean = args
            .sim_mean
            .ok_or_else(|| miette!("--sim-mean is required with --simulate"))?;
        let std_dev = args
            .sim_std
            .ok_or_else(|| miette!("--sim-std is required with --simulate"))?;
        return Ok(simulate_normal(mean, std_dev, n, args.seed)?);
    }

    let column = args.column.as_deref();
    match &args.data {
        Some(path) if path.as_os_str() == "-" => read_csv(io::stdin().lock(), column),
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| miette!("Cannot open data file '{}': {}", path.display(), e))?;
            log::debug!("reading samples from {}", path.display());
            read_csv(file, column)
        }
        None => {
            if io::stdin().is_terminal() {
                // Nothing to read; the generator reports the empty sample
                return Ok(Vec::new());
            }
            read_csv(io::stdin().lock(), None)
        }
    }
}

/// Parse one numeric column from CSV text
///
/// A leading row whose selected cell is not a finite number is treated
/// as a header. Blank cells are skipped; any other non-numeric cell is an
/// error naming its line.
pub fn read_csv<R: Read>(reader: R, column: Option<&str>) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = rdr.records();
    let mut values = Vec::new();

    let first = match records.next() {
        Some(record) => record.into_diagnostic()?,
        None => return Ok(values),
    };

    let index = match column {
        Some(col) => match col.parse::<usize>() {
            Ok(i) => i,
            Err(_) => first
                .iter()
                .position(|h| h == col)
                .ok_or_else(|| miette!("Column '{}' not found in CSV header", col))?,
        },
        None => 0,
    };

    let named_column = column.is_some_and(|c| c.parse::<usize>().is_err());
    let first_is_header = named_column
        || first
            .get(index)
            .is_some_and(|cell| {
                !cell.is_empty() && !cell.parse::<f64>().is_ok_and(f64::is_finite)
            });
    if !first_is_header {
        push_cell(&mut values, first.get(index), 1)?;
    }

    for (i, record) in records.enumerate() {
        let record = record.into_diagnostic()?;
        push_cell(&mut values, record.get(index), i + 2)?;
    }

    log::debug!("parsed {} samples from column {}", values.len(), index);
    Ok(values)
}

fn push_cell(values: &mut Vec<f64>, cell: Option<&str>, line: usize) -> Result<()> {
    match cell {
        None | Some("") => Ok(()),
        Some(text) => {
            let value = text
                .parse::<f64>()
                .map_err(|_| miette!("Line {}: '{}' is not a number", line, text))?;
            values.push(value);
            Ok(())
        }
    }
}
