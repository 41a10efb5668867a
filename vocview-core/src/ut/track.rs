// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use chrono::Local;
use colored::Colorize;
use kdam::{Bar, tqdm};

/// Timestamped `[ date | time | vocview ]` prefix for console lines
fn stamp() -> String {
    format!(
        "{} {} {} {} {}",
        "[".bold(),
        Local::now().format("%Y-%m-%d | %H:%M:%S"),
        "|".bold(),
        "vocview".truecolor(88, 166, 255).bold(),
        "]".bold(),
    )
}

/// Print a timestamped line when verbose output is enabled
pub fn progress_log(desc: &str, verbose: bool) {
    if verbose {
        println!("{} {}", stamp(), desc);
    }
}

/// Progress bar over `n` items, hidden unless verbose output is enabled
pub fn progress_bar(n: usize, desc: &str, verbose: bool) -> Bar {
    if !verbose {
        return tqdm!(disable = true);
    }

    tqdm!(
        total = n,
        desc = format!("{} {}", stamp(), desc),
        bar_format =
            "{desc suffix=' '}[{percentage:.0}%] ({rate:.1}/s, eta: {remaining human=true})"
    )
}

/// Group digits into thousands for readable counts
///
/// Counts of four digits or fewer are left ungrouped.
pub fn thousands_format<T: std::fmt::Display>(number: T) -> String {
    let digits = number.to_string();

    if digits.len() <= 4 {
        return digits;
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_thousands_format() {
        assert_eq!(thousands_format(999), "999");
        assert_eq!(thousands_format(1234), "1234");
        assert_eq!(thousands_format(12345), "12,345");
        assert_eq!(thousands_format(123456), "123,456");
        assert_eq!(thousands_format(1234567), "1,234,567");
    }

    #[test]
    fn test_stamp_carries_project_name() {
        assert!(stamp().contains("vocview"));
    }
}
