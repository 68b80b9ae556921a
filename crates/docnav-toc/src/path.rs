//! Source-relative path arithmetic.
//!
//! All paths handed to a [`TocSource`](crate::TocSource) are `/`-separated and
//! relative to the source root, without `.` or `..` segments.

/// Folder containing `path` (`""` for files at the source root).
pub(crate) fn parent_dir(path: &str) -> &str {
    path.rfind('/').map_or("", |i| &path[..i])
}

/// Join a relative reference onto a folder and normalize the result.
///
/// Both `/` and `\` separate segments. Returns `None` if the reference climbs
/// above the source root.
pub(crate) fn join(dir: &str, relative: &str) -> Option<String> {
    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in relative.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s => segments.push(s),
        }
    }
    Some(segments.join("/"))
}

/// Express `target` relative to `base_dir`.
///
/// Both arguments are normalized source-relative paths.
pub(crate) fn relative_to(target: &str, base_dir: &str) -> String {
    let target: Vec<&str> = target.split('/').filter(|s| !s.is_empty()).collect();
    let base: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    let common = target
        .iter()
        .zip(&base)
        .take_while(|(t, b)| t == b)
        .count();

    let mut parts = vec![".."; base.len() - common];
    parts.extend_from_slice(&target[common..]);
    parts.join("/")
}

/// Split an href into its path and any `?query` / `#fragment` suffix.
pub(crate) fn split_suffix(href: &str) -> (&str, &str) {
    match href.find(['?', '#']) {
        Some(i) => href.split_at(i),
        None => (href, ""),
    }
}
