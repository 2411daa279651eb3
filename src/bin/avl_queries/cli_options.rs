use clap::Parser;
use std::path::PathBuf;

/// Answers insert / remove / lower-bound queries against an ordered set.
///
/// The input starts with the number of queries, followed by one query per
/// line: `1 x` inserts `x`, `2 x` removes `x` and `3 x` prints the smallest
/// stored key that is at least `x`.
#[derive(Debug, Parser)]
#[command(name = "avl_queries", version)]
pub struct CliOpts {
    /// File to read the queries from. Reads standard input when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Printed for a lower-bound query when no stored key is large enough.
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub not_found: i64,
}

impl CliOpts {
    /// The input path, unless the queries come from standard input.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
