use regex::Regex;
use std::sync::LazyLock;

/// Matches a dot-delimited frame token like `.0001.`, capturing the digit run.
/// Runs longer than 100 digits are not frame tokens.
pub static FRAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([0-9]{1,100})\.").unwrap());

/// Stands in for each digit of a frame token inside a template.
pub const PLACEHOLDER: char = '#';

/// Separates start and end frame in a collapsed entry.
pub const RANGE_SEP: char = '-';
