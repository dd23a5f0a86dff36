//! hostsort - sort host inventory tables by column
//!
//! Reads a delimited table of inventory hosts, sorts the data rows by one
//! column, and writes the table back out. Cells that look like IPv4
//! addresses compare numerically; everything else compares
//! case-insensitively as text.

use clap::{Arg, Command};
use std::process;

use hostsort::{
    config::{SortConfig, SortDirection},
    error::{SortError, SortResult},
    sort,
};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("hostsort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;
    sort(&config)
}

fn build_cli() -> Command {
    Command::new("hostsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("hostsort [OPTION]... [FILE]...")
        .about("Sort a host inventory table by column")
        .long_about(
            "Sort the data rows of a delimited host table by one column. \
             \n\nCells that are dotted-quad IPv4 addresses compare numerically, so \
             2.2.2.2 orders before 10.0.0.5; all other cells compare \
             case-insensitively as text. The decision is made per pair of cells, \
             so mixed columns are fine.\
             \n\nWithout -a or -r the sort starts ascending and toggles to \
             descending when the column is already in ascending order, the way \
             clicking a column header twice flips it.",
        )
        // Input files
        .arg(
            Arg::new("files")
                .help("Input files to sort (use '-' or omit for stdin)")
                .num_args(0..)
                .value_name("FILE"),
        )
        // Column selection
        .arg(
            Arg::new("column")
                .short('k')
                .long("column")
                .help("Zero-based index of the column to sort by")
                .value_name("N")
                .default_value("0"),
        )
        // Direction (mutually exclusive; default is the toggle)
        .arg(
            Arg::new("ascending")
                .short('a')
                .long("ascending")
                .help("Always sort ascending, disabling the direction toggle")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("reverse"),
        )
        .arg(
            Arg::new("reverse")
                .short('r')
                .long("reverse")
                .help("Always sort descending, disabling the direction toggle")
                .action(clap::ArgAction::SetTrue),
        )
        // Table shape
        .arg(
            Arg::new("field-separator")
                .short('t')
                .long("field-separator")
                .help("Use SEP to split cells within a line (default: tab)")
                .value_name("SEP"),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .help("Treat every row as data; by default the first row is a header")
                .action(clap::ArgAction::SetTrue),
        )
        // I/O options
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write result to FILE instead of standard output")
                .value_name("FILE"),
        )
        // Diagnostics
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Report passes, swaps, and the final direction to stderr")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut config = SortConfig::default();

    if let Some(column_str) = matches.get_one::<String>("column") {
        config.column = column_str
            .parse()
            .map_err(|_| SortError::parse_error(&format!("invalid column index: {column_str}")))?;
    }

    config.direction = if matches.get_flag("ascending") {
        Some(SortDirection::Ascending)
    } else if matches.get_flag("reverse") {
        Some(SortDirection::Descending)
    } else {
        None
    };

    if let Some(sep_str) = matches.get_one::<String>("field-separator") {
        let mut chars = sep_str.chars();
        match (chars.next(), chars.next()) {
            (Some(sep), None) => config.field_separator = sep,
            _ => return Err(SortError::invalid_field_separator(sep_str)),
        }
    }

    config.has_header = !matches.get_flag("no-header");
    config.debug = matches.get_flag("debug");

    if let Some(output) = matches.get_one::<String>("output") {
        config.output_file = Some(output.clone());
    }

    config.input_files = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .cloned()
        .collect();

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_config() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(["hostsort", "-k", "2", "-r"])
            .expect("Failed to parse test arguments");

        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");

        assert_eq!(config.column, 2);
        assert_eq!(config.direction, Some(SortDirection::Descending));
    }

    #[test]
    fn test_default_direction_is_toggle() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(["hostsort"])
            .expect("Failed to parse test arguments");

        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");

        assert_eq!(config.column, 0);
        assert_eq!(config.direction, None);
        assert!(config.has_header);
        assert!(config.reading_from_stdin());
    }

    #[test]
    fn test_parse_complex_config() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from([
                "hostsort",
                "-k",
                "1",
                "-t",
                ",",
                "--no-header",
                "-o",
                "sorted.csv",
                "hosts.csv",
            ])
            .expect("Failed to parse test arguments");

        let config = parse_config_from_matches(&matches).expect("Failed to parse test config");

        assert_eq!(config.column, 1);
        assert_eq!(config.field_separator, ',');
        assert!(!config.has_header);
        assert_eq!(config.output_file, Some("sorted.csv".to_string()));
        assert_eq!(config.input_files, vec!["hosts.csv".to_string()]);
    }

    #[test]
    fn test_conflicting_directions_rejected() {
        let app = build_cli();
        assert!(app.try_get_matches_from(["hostsort", "-a", "-r"]).is_err());
    }

    #[test]
    fn test_invalid_column_index() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(["hostsort", "-k", "first"])
            .expect("Failed to parse test arguments");

        assert!(parse_config_from_matches(&matches).is_err());
    }
}
