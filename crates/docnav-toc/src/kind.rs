//! TOC source file detection.

/// Notation of a TOC source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TocKind {
    /// Heading-based outline (`toc.md`).
    Outline,
    /// Hierarchical list (`toc.yml`, `toc.yaml`).
    List,
}

impl TocKind {
    /// Detect the TOC kind from a path's file name (case-insensitive).
    ///
    /// Returns `None` for anything that is not a TOC source file.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        if name.eq_ignore_ascii_case("toc.md") {
            Some(Self::Outline)
        } else if name.eq_ignore_ascii_case("toc.yml") || name.eq_ignore_ascii_case("toc.yaml") {
            Some(Self::List)
        } else {
            None
        }
    }
}
