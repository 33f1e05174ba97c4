use std::{
    io::{
        BufRead,
        BufWriter,
        Write,
    },
    time::{
        Duration,
        Instant,
    },
};

use eratosthenes_lib::{
    parse_bound,
    read_bound,
    Report,
    Sieve,
};

use crate::{
    cli::Cli,
    error::CliError,
};

/// Runs one invocation: obtains the bound, sieves, and prints the report to
/// `out`. Prompts and progress go to `diagnostics` so `out` holds only the
/// report. Returns the number of primes found.
pub fn execute(
    cli: &Cli,
    input: impl BufRead,
    out: impl Write,
    mut diagnostics: impl Write,
) -> Result<usize, CliError> {
    let mut out = BufWriter::new(out);

    let bound = match &cli.bound {
        Some(text) => parse_bound(text)?,
        None => {
            writeln!(diagnostics, "Sieve of Eratosthenes")?;
            write!(diagnostics, "Calculate primes between 2 and ")?;
            diagnostics.flush()?;
            read_bound(input)?
        },
    };

    if cli.verbose {
        write!(diagnostics, "Allocating memory... ")?;
    }
    let started = Instant::now();
    let sieve = Sieve::new(bound)?;
    let allocation = started.elapsed();
    if cli.verbose {
        writeln!(diagnostics, "{} msecs", millis(allocation))?;
        writeln!(diagnostics, "Running algorithm...")?;
    }

    let started = Instant::now();
    let primes = sieve.into_primes();
    let elapsed = started.elapsed();

    if cli.count_only {
        writeln!(out, "{}", primes.summary())?;
    } else {
        write!(out, "{}", Report::new(&primes))?;
    }
    if !cli.no_timing {
        writeln!(out, "Time taken: {} msecs", millis(elapsed))?;
    }
    out.flush()?;

    Ok(primes.count())
}

fn millis(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * 1000.0)
}
