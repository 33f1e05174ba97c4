use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "eratosthenes",
    about = "Prints every prime between 2 and a bound using the Sieve of Eratosthenes",
    version
)]
pub struct Cli {
    /// Upper bound of the search, read from standard input when omitted
    #[arg(allow_negative_numbers = true)]
    pub bound: Option<String>,
    /// Print only the summary line
    #[arg(long = "count-only")]
    pub count_only: bool,
    /// Leave out the elapsed time
    #[arg(long = "no-timing")]
    pub no_timing: bool,
    /// Report progress on standard error
    #[arg(short, long)]
    pub verbose: bool,
}
