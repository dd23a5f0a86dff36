//! Owned table model and delimited-text I/O
//!
//! A [`Table`] is an optional header row plus an ordered sequence of data
//! rows, each row an ordered sequence of cell strings. Sorting only ever
//! permutes the data rows; the header never moves and cell content is never
//! touched.

use crate::error::{SortContext, SortError, SortResult};
use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// A parsed host table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from already-split rows
    pub fn new(header: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Parse delimited text: one row per line, cells split on `separator`.
    /// When `has_header` is set, the first line becomes the header row.
    pub fn parse<R: Read>(reader: R, separator: char, has_header: bool) -> SortResult<Self> {
        let mut header = None;
        let mut rows = Vec::new();

        for line in BufReader::new(reader).lines() {
            let line = line?;
            let cells: Vec<String> = line.split(separator).map(str::to_string).collect();
            if has_header && header.is_none() && rows.is_empty() {
                header = Some(cells);
            } else {
                rows.push(cells);
            }
        }

        Ok(Self { header, rows })
    }

    /// Parse a table from a file
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        separator: char,
        has_header: bool,
    ) -> SortResult<Self> {
        let filename = path.as_ref().display().to_string();
        let file = File::open(path.as_ref()).with_file_context(&filename)?;
        Self::parse(file, separator, has_header).with_file_context(&filename)
    }

    /// The header row, if the table has one
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// The data rows in their current order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Text of cell `column` in data row `row`, or an error when the row has
    /// no such cell
    pub fn cell(&self, row: usize, column: usize) -> SortResult<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .ok_or_else(|| SortError::column_out_of_range(column, row))
    }

    /// Rendering adapter: apply a row permutation computed by the sorter.
    ///
    /// `order[i]` names the current index of the row that ends up at
    /// position `i`. The permutation must cover every data row exactly once.
    pub fn apply_order(&mut self, order: &[usize]) -> SortResult<()> {
        if order.len() != self.rows.len() {
            return Err(SortError::internal(&format!(
                "row order has {} entries for {} rows",
                order.len(),
                self.rows.len()
            )));
        }

        let mut taken = vec![false; self.rows.len()];
        for &idx in order {
            if idx >= self.rows.len() || taken[idx] {
                return Err(SortError::internal("row order is not a permutation"));
            }
            taken[idx] = true;
        }

        let old = std::mem::take(&mut self.rows);
        let mut slots: Vec<Option<Vec<String>>> = old.into_iter().map(Some).collect();
        self.rows = order
            .iter()
            .map(|&idx| slots[idx].take().expect("permutation checked above"))
            .collect();
        Ok(())
    }

    /// Write the table back as delimited text, header first
    pub fn write<W: Write>(&self, writer: &mut W, separator: char) -> SortResult<()> {
        if let Some(header) = &self.header {
            writeln!(writer, "{}", header.iter().join(&separator.to_string()))?;
        }
        for row in &self.rows {
            writeln!(writer, "{}", row.iter().join(&separator.to_string()))?;
        }
        Ok(())
    }

    /// Write the table to a file or stdout
    pub fn write_output(&self, output_file: Option<&str>, separator: char) -> SortResult<()> {
        let mut output: Box<dyn Write> = if let Some(path) = output_file {
            Box::new(BufWriter::new(File::create(path).with_file_context(path)?))
        } else {
            Box::new(BufWriter::new(std::io::stdout()))
        };

        self.write(&mut output, separator)?;
        output.flush()?;
        Ok(())
    }
}
