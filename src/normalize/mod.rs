use regex::Regex;
use std::sync::LazyLock;

const IDEOGRAPHIC_SPACE: char = '\u{3000}';
const FULL_WIDTH_FIRST: u32 = 0xFF01;
const FULL_WIDTH_LAST: u32 = 0xFF5E;
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

pub(crate) const APPLE_PAY_PREFIX: &str = "APE";
pub(crate) const LINE_PAY_PREFIX: &str = "連加*";
pub(crate) const JKOPAY_PREFIX: &str = "街口電支-";

#[allow(clippy::expect_used)]
static APPLE_PAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^APE(?:[0-9]{1,4} ?)?").expect("Apple Pay marker pattern is valid"));

/// Convert full-width characters to their half-width equivalents.
///
/// The ideographic space becomes an ASCII space and the full-width ASCII
/// variants (U+FF01..=U+FF5E) map onto `!`..=`~`. Everything else passes
/// through untouched.
pub(crate) fn to_half_width(s: &str) -> String {
    s.chars()
        .map(|c| {
            let code = c as u32;
            if c == IDEOGRAPHIC_SPACE {
                ' '
            } else if (FULL_WIDTH_FIRST..=FULL_WIDTH_LAST).contains(&code) {
                char::from_u32(code - FULL_WIDTH_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Strip the payment provider marker from a normalized description.
///
/// At most one marker is removed: Apple Pay (`APE` plus up to four card
/// digits and the single space separating them from the merchant), then
/// LINE Pay, then Jkopay.
pub(crate) fn clean_description(normalized: &str) -> &str {
    if let Some(m) = APPLE_PAY_MARKER.find(normalized) {
        return &normalized[m.end()..];
    }
    normalized
        .strip_prefix(LINE_PAY_PREFIX)
        .or_else(|| normalized.strip_prefix(JKOPAY_PREFIX))
        .unwrap_or(normalized)
}
