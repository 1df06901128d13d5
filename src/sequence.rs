use crate::consts::{PLACEHOLDER, RANGE_SEP};
use crate::frame::{FrameMatch, FrameNumber, extract_frame};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

/// A path with its frame token's digits swapped for placeholders.
///
/// Paths share a sequence exactly when their templates are equal, so the
/// digit width is part of the identity: `a.01.png` and `a.001.png` differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    pub prefix: String,
    pub width: usize,
    pub suffix: String,
}

impl Template {
    pub fn new(prefix: impl Into<String>, width: usize, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            width,
            suffix: suffix.into(),
        }
    }

    pub fn from_match(path: &str, m: &FrameMatch) -> Self {
        Self {
            prefix: path[..m.span.start].to_string(),
            width: m.width(),
            suffix: path[m.span.end..].to_string(),
        }
    }

    /// Render the collapsed form `prefix.START-END.suffix`. Frames are unpadded.
    pub fn collapsed(&self, start: &FrameNumber, end: &FrameNumber) -> String {
        format!(
            "{}.{start}{RANGE_SEP}{end}.{}",
            self.prefix, self.suffix
        )
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let holes: String = std::iter::repeat_n(PLACEHOLDER, self.width).collect();
        write!(f, "{}.{holes}.{}", self.prefix, self.suffix)
    }
}

/// What the grouper records for each path in a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub span: Range<usize>,
    pub width: usize,
    pub value: FrameNumber,
}

/// All paths sharing one template.
#[derive(Debug, Clone)]
pub struct SequenceBucket {
    pub template: Template,
    pub members: HashMap<String, Member>,
}

impl SequenceBucket {
    fn new(template: Template) -> Self {
        Self {
            template,
            members: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn start_frame(&self) -> Option<&FrameNumber> {
        self.members.values().map(|m| &m.value).min()
    }

    pub fn end_frame(&self) -> Option<&FrameNumber> {
        self.members.values().map(|m| &m.value).max()
    }

    /// The collapsed entry for this bucket, `None` only when it has no members.
    pub fn collapsed(&self) -> Option<String> {
        let start = self.start_frame()?;
        let end = self.end_frame()?;
        Some(self.template.collapsed(start, end))
    }

    pub fn summary(&self) -> Option<Sequence> {
        let start = self.start_frame()?.clone();
        let end = self.end_frame()?.clone();
        Some(Sequence {
            template: self.template.to_string(),
            collapsed: self.template.collapsed(&start, &end),
            start,
            end,
            count: self.len(),
        })
    }
}

/// Serialisable description of one collapsed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    pub template: String,
    pub collapsed: String,
    pub start: FrameNumber,
    pub end: FrameNumber,
    pub count: usize,
}

/// Collapsed sequences next to the paths left as they were.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub sequences: Vec<Sequence>,
    pub files: Vec<String>,
}

/// Tuning for the rewrite step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseOptions {
    /// Smallest bucket that gets collapsed. Smaller buckets keep their paths.
    /// `0` behaves like `1`.
    pub min_members: usize,
}

impl Default for CollapseOptions {
    fn default() -> Self {
        Self { min_members: 1 }
    }
}

impl CollapseOptions {
    fn collapses(&self, bucket: &SequenceBucket) -> bool {
        bucket.len() >= self.min_members.max(1)
    }
}

/// Paths split into template buckets and pass-through entries.
///
/// Buckets are keyed by the structured template, not its rendering: a `#`
/// already in a path can make two different templates render alike.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    pub buckets: HashMap<Template, SequenceBucket>,
    pub passthrough: Vec<String>,
}

/// Bucket every path by its template. Paths without a frame token are kept,
/// in input order and with duplicates, as pass-through entries.
pub fn group<I, S>(paths: I) -> Grouping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grouping = Grouping::default();
    for path in paths {
        let path = path.as_ref();
        let Some(m) = extract_frame(path) else {
            grouping.passthrough.push(path.to_string());
            continue;
        };
        let template = Template::from_match(path, &m);
        tracing::trace!(path, template = %template);
        grouping
            .buckets
            .entry(template.clone())
            .or_insert_with(|| SequenceBucket::new(template))
            .members
            .insert(
                path.to_string(),
                Member {
                    width: m.width(),
                    span: m.span,
                    value: m.value,
                },
            );
    }
    tracing::debug!(
        buckets = grouping.buckets.len(),
        passthrough = grouping.passthrough.len(),
        "grouped paths"
    );
    grouping
}

impl Grouping {
    /// Build the output list: pass-through paths, one entry per collapsed
    /// bucket, and the member paths of buckets too small to collapse. Sorted.
    pub fn rewrite(&self, opts: &CollapseOptions) -> Vec<String> {
        let mut out = self.passthrough.clone();
        for bucket in self.buckets.values() {
            if opts.collapses(bucket) {
                if let Some(entry) = bucket.collapsed() {
                    tracing::trace!(entry = %entry, members = bucket.len());
                    out.push(entry);
                }
            } else {
                out.extend(bucket.members.keys().cloned());
            }
        }
        out.sort_unstable();
        out
    }

    /// Same partition as [`Grouping::rewrite`], keeping sequences separate.
    pub fn listing(&self, opts: &CollapseOptions) -> Listing {
        let mut listing = Listing {
            sequences: Vec::new(),
            files: self.passthrough.clone(),
        };
        for bucket in self.buckets.values() {
            if !opts.collapses(bucket) {
                listing.files.extend(bucket.members.keys().cloned());
            } else if let Some(seq) = bucket.summary() {
                listing.sequences.push(seq);
            }
        }
        listing
            .sequences
            .sort_unstable_by(|a, b| {
                a.collapsed
                    .cmp(&b.collapsed)
                    .then_with(|| a.template.cmp(&b.template))
            });
        listing.files.sort_unstable();
        listing
    }
}

/// Collapse every frame sequence in `paths` into a single range entry.
///
/// ```
/// let out = framefold::collapse(["shot.0001.exr", "shot.0002.exr", "readme.txt"]);
/// assert_eq!(out, ["readme.txt", "shot.1-2.exr"]);
/// ```
pub fn collapse<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    collapse_with(paths, &CollapseOptions::default())
}

pub fn collapse_with<I, S>(paths: I, opts: &CollapseOptions) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    group(paths).rewrite(opts)
}
