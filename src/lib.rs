//! Column sorting of host inventory tables
//!
//! This crate sorts the rows of a delimited host table by one column, with a
//! special case for IPv4 addresses so that "2.2.2.2" orders before
//! "10.0.0.5" instead of after it. Everything else compares
//! case-insensitively as text, decided per pair of cells rather than per
//! column.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

// Core sorting implementation
pub mod ipv4;
pub mod compare;
pub mod table;
pub mod sort;

// Re-export commonly used types
pub use config::{SortConfig, SortDirection};
pub use error::{SortError, SortResult};
pub use sort::{SortOutcome, TableSorter};
pub use table::Table;

/// Exit codes matching GNU sort conventions
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Main entry point: read the table, sort it by the configured column, and
/// write it back out
pub fn sort(config: &SortConfig) -> SortResult<i32> {
    config.validate()?;

    let mut table = read_input(config)?;

    let sorter = TableSorter::new(config.column).with_direction(config.direction);
    let outcome = sorter.sort(&mut table)?;

    if config.debug {
        eprintln!("hostsort: column={}", config.column);
        eprintln!("hostsort: direction={}", outcome.direction);
        eprintln!("hostsort: passes={} swaps={}", outcome.passes, outcome.swaps);
    }

    table.write_output(config.output_file.as_deref(), config.field_separator)?;
    Ok(EXIT_SUCCESS)
}

/// Read the input table from stdin or the configured file.
///
/// Multiple input files concatenate into one table; only the first file's
/// header row is kept when headers are enabled.
fn read_input(config: &SortConfig) -> SortResult<Table> {
    if config.reading_from_stdin() {
        let stdin = std::io::stdin();
        return Table::parse(stdin.lock(), config.field_separator, config.has_header);
    }

    let mut combined: Option<Table> = None;
    for file in &config.input_files {
        // Headers on later files would land in the data rows, so only the
        // first file is parsed with one
        let has_header = config.has_header && combined.is_none();
        let table = Table::from_file(file, config.field_separator, has_header)?;
        combined = Some(match combined {
            None => table,
            Some(acc) => Table::new(
                acc.header().map(|h| h.to_vec()),
                acc.rows()
                    .iter()
                    .chain(table.rows())
                    .cloned()
                    .collect(),
            ),
        });
    }

    combined.ok_or(SortError::EmptyTable)
}
