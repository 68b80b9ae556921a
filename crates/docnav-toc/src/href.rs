//! Href classification.
//!
//! A TOC href is a single string whose meaning depends on what it points at.
//! [`classify`] turns it into a tagged [`Href`] by consulting the source.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::TocError;
use crate::kind::TocKind;
use crate::path::{join, parent_dir, split_suffix};
use crate::source::TocSource;

static SCHEME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap());

/// Content file target with any `?query` / `#fragment` suffix kept aside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Page {
    /// Normalized source-relative path.
    pub path: String,
    /// Suffix to reattach to the rewritten link.
    pub suffix: String,
}

/// Classified href.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Href {
    /// URI or root-absolute link, kept verbatim.
    External(String),
    /// Existing non-TOC file.
    ContentFile(Page),
    /// Folder whose TOC is linked as a separate tree.
    FolderRef(String),
    /// TOC file whose entries are inlined.
    TocRef(String),
}

/// Whether the href is left verbatim.
pub(crate) fn is_external(href: &str) -> bool {
    href.starts_with(['/', '\\', '#']) || SCHEME_PATTERN.is_match(href)
}

/// Classify a non-empty href found in `toc`.
///
/// Relative hrefs are resolved against the folder of `toc`.
pub(crate) fn classify<S: TocSource + ?Sized>(
    href: &str,
    toc: &str,
    source: &S,
) -> Result<Href, TocError> {
    if is_external(href) {
        return Ok(Href::External(href.to_owned()));
    }

    let (path, suffix) = split_suffix(href);
    let target = join(parent_dir(toc), path).ok_or_else(|| TocError::InvalidPath {
        href: href.to_owned(),
        toc: toc.to_owned(),
    })?;

    if path.ends_with(['/', '\\']) || source.is_dir(&target) {
        return Ok(Href::FolderRef(target));
    }

    if !source.exists(&target) {
        return Err(TocError::UnresolvableReference {
            href: href.to_owned(),
            toc: toc.to_owned(),
        });
    }

    if TocKind::from_path(&target).is_some() {
        Ok(Href::TocRef(target))
    } else {
        Ok(Href::ContentFile(Page {
            path: target,
            suffix: suffix.to_owned(),
        }))
    }
}

/// Resolve an explicit homepage, which must name an existing content file.
pub(crate) fn classify_homepage<S: TocSource + ?Sized>(
    homepage: &str,
    toc: &str,
    source: &S,
) -> Result<Page, TocError> {
    match classify(homepage, toc, source)? {
        Href::ContentFile(page) => Ok(page),
        Href::External(_) | Href::FolderRef(_) | Href::TocRef(_) => {
            Err(TocError::UnresolvableReference {
                href: homepage.to_owned(),
                toc: toc.to_owned(),
            })
        }
    }
}
