//! Per-pair cell comparison
//!
//! The IPv4-vs-text decision is made for each pair of cells, never for a
//! whole column: both sides must look like dotted quads for the numeric
//! comparison to apply, otherwise the pair falls back to case-insensitive
//! lexical order.

use crate::ipv4::{ipv4_key, is_ipv4};
use std::cmp::Ordering;

/// Compare two cell values.
///
/// Numeric over packed IPv4 keys when both cells are dotted quads,
/// lowercase-folded lexical otherwise. Empty cells are ordinary empty
/// strings on the lexical path.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    if is_ipv4(a) && is_ipv4(b) {
        ipv4_key(a).cmp(&ipv4_key(b))
    } else {
        a.to_lowercase().cmp(&b.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_ipv4_compares_numerically() {
        // Naive string order would put "10.0.0.5" first
        assert_eq!(compare_cells("2.2.2.2", "10.0.0.5"), Ordering::Less);
        assert_eq!(compare_cells("10.0.0.2", "10.0.0.10"), Ordering::Less);
        assert_eq!(compare_cells("192.168.1.1", "192.168.1.1"), Ordering::Equal);
    }

    #[test]
    fn test_text_compares_case_insensitively() {
        assert_eq!(compare_cells("Alpha", "beta"), Ordering::Less);
        assert_eq!(compare_cells("WEB01", "web01"), Ordering::Equal);
        // Lexical, not numeric: "host10" sorts before "host2"
        assert_eq!(compare_cells("host10", "host2"), Ordering::Less);
    }

    #[test]
    fn test_mixed_pair_falls_back_to_lexical() {
        // One side not IPv4-shaped: both compared as strings
        assert_eq!(compare_cells("10.0.0.5", "abc"), Ordering::Less);
        assert_eq!(compare_cells("abc", "2.2.2.2"), Ordering::Greater);
    }

    #[test]
    fn test_empty_cell_is_plain_string() {
        assert_eq!(compare_cells("", "a"), Ordering::Less);
        assert_eq!(compare_cells("", ""), Ordering::Equal);
        assert_eq!(compare_cells("10.0.0.1", ""), Ordering::Greater);
    }
}
