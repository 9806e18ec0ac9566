#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod output;

use anyhow::{bail, Context, Result};
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    time::{Duration, Instant},
};
use tracing::debug;

pub trait Reader: Read + BufRead {}

impl<T> Reader for T where T: BufRead + Read {}

pub type FRead = BufReader<File>;

pub fn file_reader<P: AsRef<Path>>(path: P) -> Result<FRead> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("unable to open `{}`", path.display()))?;
    let meta = file.metadata()?;

    if meta.is_dir() {
        bail!("`{}` is a directory", path.display());
    }

    Ok(BufReader::new(file))
}

pub fn parse_string<R: Reader>(mut r: R) -> Result<String> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)
        .with_context(|| "unable to read input")?;
    Ok(buf)
}

/// A solved value together with the wall-clock time spent solving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

pub trait Solver {
    type Input;
    type Output: Display;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input>;
    fn solve(&self, input: &Self::Input) -> Result<Self::Output>;

    fn load_input<P: AsRef<Path>>(&self, p: P) -> Result<Self::Input> {
        let f = file_reader(p)?;
        self.parse_input(f)
    }

    /// Times `solve` alone; parsing and printing are not included.
    fn solve_timed(&self, input: &Self::Input) -> Result<Timed<Self::Output>> {
        let now = Instant::now();
        let value = self.solve(input)?;
        Ok(Timed {
            value,
            elapsed: now.elapsed(),
        })
    }

    fn run(&self, title: &str, input: &Self::Input) -> Result<()> {
        output::print_header(title);

        let Timed { value, elapsed } = self.solve_timed(input)?;
        debug!(?elapsed, "solved {}", title);

        output::print_answer(&value);
        output::print_time(elapsed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct Sum;

    impl Solver for Sum {
        type Input = Vec<u64>;
        type Output = u64;

        fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
            parse_string(r)?
                .split_whitespace()
                .map(|n| n.parse::<u64>().with_context(|| "invalid input"))
                .collect()
        }

        fn solve(&self, input: &Self::Input) -> Result<Self::Output> {
            Ok(input.iter().sum())
        }
    }

    #[test]
    fn solve_timed_keeps_value() {
        let input = Sum.parse_input(Cursor::new("1 2\n3\n")).unwrap();
        assert_eq!(input, vec![1, 2, 3]);
        assert_eq!(Sum.solve_timed(&input).unwrap().value, 6);
    }

    #[test]
    fn parse_error_propagates() {
        assert!(Sum.parse_input(Cursor::new("1 two")).is_err());
    }

    #[test]
    fn directory_is_not_an_input() {
        let err = file_reader(std::env::temp_dir()).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = Sum.load_input("no/such/input.txt").unwrap_err();
        assert!(err.to_string().contains("no/such/input.txt"));
    }
}
