use crate::consts::FRAME_RE;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

/// A frame number of arbitrary length.
///
/// Frame tokens may carry up to 100 digits, which is past what any integer
/// type holds, so the value is kept as its canonical decimal digits (no
/// leading zeros, `"0"` for zero) and ordered numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FrameNumber(String);

impl FrameNumber {
    /// Parse an ASCII digit run. Returns `None` for empty input or non-digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        let canonical = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self(canonical.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for FrameNumber {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl Ord for FrameNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical form has no leading zeros, so longer means larger.
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for FrameNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A frame token found in a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameMatch {
    pub value: FrameNumber,
    /// Byte range of the whole token, both dots included.
    pub span: Range<usize>,
}

impl FrameMatch {
    /// Number of digits in the token.
    pub fn width(&self) -> usize {
        self.span.len() - 2
    }

    /// The digit run as written in `path`, leading zeros included.
    pub fn digits<'a>(&self, path: &'a str) -> &'a str {
        &path[self.span.start + 1..self.span.end - 1]
    }
}

/// Find the leftmost dot-delimited frame token in `path`.
///
/// Returns `None` when the path has no token, which is the normal case for
/// anything that is not part of a sequence.
pub fn extract_frame(path: &str) -> Option<FrameMatch> {
    let caps = FRAME_RE.captures(path)?;
    let whole = caps.get(0)?;
    let value = FrameNumber::from_digits(caps.get(1)?.as_str())?;
    tracing::trace!(path, frame = %value, start = whole.start(), end = whole.end());
    Some(FrameMatch {
        value,
        span: whole.range(),
    })
}
