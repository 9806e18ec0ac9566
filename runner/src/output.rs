use colored::Colorize;
use std::{fmt::Display, time::Duration};

pub const NUMBER_DASHES: usize = 80;

/// Decorative banner. Goes to stderr so stdout only carries the results.
pub fn print_header(title: &str) {
    let side = NUMBER_DASHES.saturating_sub(title.len() + 2) / 2;
    let rest = NUMBER_DASHES.saturating_sub(side + title.len() + 2);
    eprintln!("{}", "-".repeat(NUMBER_DASHES).green().bold());
    eprintln!(
        "{} {} {}",
        "-".repeat(side).red().bold(),
        title.bold(),
        "-".repeat(rest).red().bold()
    );
    eprintln!("{}", "-".repeat(NUMBER_DASHES).green().bold());
}

pub fn print_answer<T: Display>(answer: &T) {
    println!("{}", answer);
}

pub fn print_time(d: Duration) {
    println!("{}", format_time(d));
}

#[must_use]
pub fn format_time(d: Duration) -> String {
    format!("Took {} secs", d.as_secs_f64())
}
