/// Parse a whitespace-separated extension list like `"png exr tif"`.
pub fn parse_filter(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Keep paths ending in one of `filters`, written either all lowercase or all
/// uppercase (`png` keeps `a.png` and `a.PNG`, not `a.Png`). No filters keeps
/// everything.
pub fn filter_extensions<S: AsRef<str>>(paths: Vec<String>, filters: &[S]) -> Vec<String> {
    if filters.is_empty() {
        return paths;
    }
    let suffixes: Vec<(String, String)> = filters
        .iter()
        .map(|f| (f.as_ref().to_lowercase(), f.as_ref().to_uppercase()))
        .collect();
    let before = paths.len();
    let kept: Vec<String> = paths
        .into_iter()
        .filter(|p| {
            suffixes
                .iter()
                .any(|(lower, upper)| p.ends_with(lower.as_str()) || p.ends_with(upper.as_str()))
        })
        .collect();
    tracing::debug!(before, after = kept.len(), "applied extension filter");
    kept
}
