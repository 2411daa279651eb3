//! Text-driven query processing on top of [`Tree`].
//!
//! The input is a query count on its first line followed by that many
//! lines of the form `t x`:
//!
//! | `t` | meaning |
//! |-----|---------|
//! | `1` | insert `x` |
//! | `2` | remove `x` |
//! | `3` | print the smallest stored key that is at least `x` |
//!
//! # Examples
//!
//! ```
//! use avl_set::query;
//!
//! let queries = query::parse_queries("4\n1 5\n1 8\n3 6\n3 9\n").unwrap();
//!
//! let mut out = Vec::new();
//! query::run(&queries, &mut out, -1).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "8\n-1\n");
//! ```

use std::io::Write;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use log::{debug, warn};

use crate::avl::Tree;

/// A single command against the set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Command `1`: add the key.
    Insert(i64),
    /// Command `2`: remove the key.
    Remove(i64),
    /// Command `3`: report the smallest key at least this one.
    LowerBound(i64),
}

impl FromStr for Query {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut fields = line.split_whitespace();
        let (Some(code), Some(key)) = (fields.next(), fields.next()) else {
            bail!("expected `<command> <key>`, got {:?}", line);
        };
        if fields.next().is_some() {
            bail!("unexpected trailing fields in {:?}", line);
        }

        let key = key
            .parse::<i64>()
            .with_context(|| format!("invalid key {:?}", key))?;
        match code {
            "1" => Ok(Self::Insert(key)),
            "2" => Ok(Self::Remove(key)),
            "3" => Ok(Self::LowerBound(key)),
            _ => bail!("unknown command {:?}", code),
        }
    }
}

/// Parses a query count followed by that many queries. Blank lines are skipped everywhere and
/// lines past the announced count are ignored.
pub fn parse_queries(input: &str) -> Result<Vec<Query>> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((line_no, count)) = lines.next() else {
        bail!("missing query count");
    };
    let count = count
        .parse::<usize>()
        .with_context(|| format!("line {}: invalid query count {:?}", line_no, count))?;

    let mut queries = Vec::new();
    for (line_no, line) in lines.by_ref().take(count) {
        let query = line
            .parse::<Query>()
            .with_context(|| format!("line {}", line_no))?;
        queries.push(query);
    }
    if queries.len() < count {
        bail!("expected {} queries, found {}", count, queries.len());
    }

    let surplus = lines.count();
    if surplus > 0 {
        warn!("ignoring {} lines after the last query", surplus);
    }
    debug!("parsed {} queries", count);
    Ok(queries)
}

/// Owns the set that a sequence of queries runs against.
#[derive(Debug, Default)]
pub struct Session {
    tree: Tree<i64>,
}

impl Session {
    /// Starts a session with an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one query. Only lower-bound queries produce an answer, which is `Some(None)` when
    /// no stored key is large enough.
    pub fn apply(&mut self, query: &Query) -> Option<Option<i64>> {
        match *query {
            Query::Insert(key) => {
                self.tree.insert(key);
                None
            }
            Query::Remove(key) => {
                self.tree.remove(&key);
                None
            }
            Query::LowerBound(key) => Some(self.tree.lower_bound(&key).copied()),
        }
    }

    /// The set as it stands after the queries applied so far.
    pub fn tree(&self) -> &Tree<i64> {
        &self.tree
    }
}

/// Runs the queries in order against a fresh [`Session`], writing each lower-bound answer on its
/// own line. `not_found` is written when no stored key is large enough.
pub fn run<W: Write>(queries: &[Query], mut out: W, not_found: i64) -> Result<()> {
    let mut session = Session::new();
    for query in queries {
        if let Some(answer) = session.apply(query) {
            writeln!(out, "{}", answer.unwrap_or(not_found)).context("failed to write answer")?;
        }
    }
    out.flush().context("failed to flush output")?;

    debug!(
        "finished with {} keys, height {}",
        session.tree().len(),
        session.tree().height()
    );
    Ok(())
}
