//! Dotted-quad IPv4 detection and value packing
//!
//! Host inventory columns mix hostnames with IPv4 addresses. Addresses must
//! order numerically (2.2.2.2 before 10.0.0.5), so cells that look like a
//! dotted quad are packed into a `u32` before comparison.

use regex::Regex;
use std::sync::OnceLock;

static IPV4_PATTERN: OnceLock<Regex> = OnceLock::new();

fn ipv4_pattern() -> &'static Regex {
    IPV4_PATTERN.get_or_init(|| {
        // Anchored: each octet is a decimal value in 0..=255. Leading zeros
        // like "01.2.3.4" pass, matching the upstream pattern.
        Regex::new(
            r"^(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
        )
        .expect("IPv4 pattern must compile")
    })
}

/// Returns true iff the string is exactly four dot-separated decimal octets,
/// each in [0,255]. No partial matches, no IPv6.
pub fn is_ipv4(s: &str) -> bool {
    ipv4_pattern().is_match(s)
}

/// Pack a detected dotted quad into its numeric value.
///
/// Callers must have checked [`is_ipv4`] first; octets that fail to parse
/// contribute zero rather than panicking.
pub fn ipv4_key(s: &str) -> u32 {
    s.split('.')
        .map(|octet| octet.parse::<u32>().unwrap_or(0))
        .fold(0, |acc, octet| (acc << 8) + octet)
}
