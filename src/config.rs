//! Configuration management for table sort operations

use crate::error::{SortError, SortResult};
use std::str::FromStr;

/// Sort direction threaded through the sorter.
///
/// When no direction is pinned, a sort starts ascending and toggles to
/// descending only if the ascending run converges without a single swap
/// (the table was already in ascending order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The direction the toggle switches to from this one
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(SortError::parse_error(&format!(
                "unknown sort direction: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        };
        write!(f, "{name}")
    }
}

/// Main configuration structure for table sort operations
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Zero-based column index the sort compares
    pub column: usize,
    /// Pinned sort direction; `None` enables the zero-swap toggle
    pub direction: Option<SortDirection>,
    /// Field separator character splitting cells within a line
    pub field_separator: char,
    /// Whether the first input row is a header (never compared, never moved)
    pub has_header: bool,
    /// Files to read from (if not specified, use stdin)
    pub input_files: Vec<String>,
    /// Output file path
    pub output_file: Option<String>,
    /// Debug mode (pass/swap diagnostics to stderr)
    pub debug: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            column: 0,
            direction: None,
            field_separator: '\t',
            has_header: true,
            input_files: Vec::new(),
            output_file: None,
            debug: false,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column index to sort by
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Pin the sort direction, disabling the toggle
    pub fn with_direction(mut self, direction: Option<SortDirection>) -> Self {
        self.direction = direction;
        self
    }

    /// Set field separator
    pub fn with_field_separator(mut self, separator: char) -> Self {
        self.field_separator = separator;
        self
    }

    /// Set whether the first row is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set input files
    pub fn with_input_files(mut self, files: Vec<String>) -> Self {
        self.input_files = files;
        self
    }

    /// Set output file
    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.field_separator == '\n' {
            return Err(SortError::invalid_field_separator(
                "newline cannot separate fields",
            ));
        }

        Ok(())
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        self.input_files.is_empty() || (self.input_files.len() == 1 && self.input_files[0] == "-")
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        self.output_file.is_none()
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    /// Set the column index
    pub fn column(mut self, column: usize) -> Self {
        self.config.column = column;
        self
    }

    /// Pin the direction
    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.config.direction = Some(direction);
        self
    }

    /// Set field separator
    pub fn field_separator(mut self, separator: char) -> Self {
        self.config.field_separator = separator;
        self
    }

    /// Treat all rows as data (no header)
    pub fn no_header(mut self) -> Self {
        self.config.has_header = false;
        self
    }

    /// Set output file
    pub fn output_file(mut self, file: String) -> Self {
        self.config.output_file = Some(file);
        self
    }

    /// Enable debug mode
    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SortConfig::default();
        assert_eq!(config.column, 0);
        assert_eq!(config.direction, None);
        assert_eq!(config.field_separator, '\t');
        assert!(config.has_header);
    }

    #[test]
    fn test_config_builder() {
        let config = SortConfigBuilder::new()
            .column(2)
            .direction(SortDirection::Descending)
            .field_separator(',')
            .build()
            .expect("Failed to build test config");

        assert_eq!(config.column, 2);
        assert_eq!(config.direction, Some(SortDirection::Descending));
        assert_eq!(config.field_separator, ',');
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!(
            "asc"
                .parse::<SortDirection>()
                .expect("Failed to parse ascending"),
            SortDirection::Ascending
        );
        assert_eq!(
            "descending"
                .parse::<SortDirection>()
                .expect("Failed to parse descending"),
            SortDirection::Descending
        );
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_direction_flipped() {
        assert_eq!(
            SortDirection::Ascending.flipped(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.flipped(),
            SortDirection::Ascending
        );
    }

    #[test]
    fn test_validate_newline_separator() {
        let config = SortConfig::default().with_field_separator('\n');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reading_from_stdin() {
        let config = SortConfig::default();
        assert!(config.reading_from_stdin());

        let config = SortConfig::default().with_input_files(vec!["-".to_string()]);
        assert!(config.reading_from_stdin());

        let config = SortConfig::default().with_input_files(vec!["hosts.tsv".to_string()]);
        assert!(!config.reading_from_stdin());
    }
}
