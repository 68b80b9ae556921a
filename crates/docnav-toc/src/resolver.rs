//! TOC resolution.
//!
//! Turns parsed [`RawNode`] trees into a single [`ResolvedNode`] tree:
//!
//! - content-file hrefs are rewritten relative to the top-level TOC folder
//! - folder references link to the folder's TOC through `tocHref` and land on
//!   the nested tree's homepage
//! - TOC-file references are inlined: the referenced entries are appended to
//!   the referencing node's children
//! - homepages are inferred bottom-up from the first descendant that has one
//!
//! Referenced TOC files are resolved recursively. A stack of the TOC files
//! currently being resolved rejects any reference back into that stack.

use std::path::PathBuf;

use crate::error::TocError;
use crate::href::{Href, Page, classify, classify_homepage};
use crate::node::{RawNode, ResolvedNode};
use crate::path::{parent_dir, relative_to};
use crate::source::TocSource;

/// Resolve a parsed TOC file.
///
/// `toc_path` is the source-relative path of the TOC file the nodes were
/// parsed from. The returned root has no name; its children are the top-level
/// entries and its homepage is the first homepage found in the tree.
///
/// # Errors
///
/// Fails on the first unresolvable reference, missing homepage, malformed
/// referenced TOC, or circular reference. No partial tree is returned.
pub fn resolve<S: TocSource + ?Sized>(
    toc_path: &str,
    raw: Vec<RawNode>,
    source: &S,
) -> Result<ResolvedNode, TocError> {
    let mut context = ResolutionContext::new(source, parent_dir(toc_path));

    let canonical = source.canonicalize(toc_path)?;
    context.active.push(canonical);
    let result = context.resolve_nodes(toc_path, raw);
    context.active.pop();
    let (children, homepage) = result?;

    Ok(ResolvedNode {
        homepage,
        children,
        ..ResolvedNode::default()
    })
}

/// Read, parse, and resolve a TOC file.
///
/// # Errors
///
/// See [`resolve`]; additionally fails if the file cannot be read or parsed.
pub fn resolve_file<S: TocSource + ?Sized>(
    toc_path: &str,
    source: &S,
) -> Result<ResolvedNode, TocError> {
    let raw = source.read_and_parse(toc_path)?;
    resolve(toc_path, raw, source)
}

/// Resolved siblings plus the first effective homepage among them.
type Siblings = (Vec<ResolvedNode>, Option<String>);

/// Resolved node plus its effective homepage.
struct Resolved {
    node: ResolvedNode,
    homepage: Option<String>,
}

/// State for one top-level resolution.
struct ResolutionContext<'a, S: ?Sized> {
    source: &'a S,
    /// Folder of the top-level TOC; every emitted path is relative to it.
    root_dir: String,
    /// Canonical paths of the TOC files currently being resolved.
    active: Vec<PathBuf>,
}

impl<'a, S: TocSource + ?Sized> ResolutionContext<'a, S> {
    fn new(source: &'a S, root_dir: &str) -> Self {
        Self {
            source,
            root_dir: root_dir.to_owned(),
            active: Vec::new(),
        }
    }

    fn display(&self, path: &str) -> String {
        relative_to(path, &self.root_dir)
    }

    fn display_page(&self, page: &Page) -> String {
        let mut link = self.display(&page.path);
        link.push_str(&page.suffix);
        link
    }

    fn resolve_nodes(&mut self, toc: &str, raw: Vec<RawNode>) -> Result<Siblings, TocError> {
        let mut nodes = Vec::with_capacity(raw.len());
        let mut homepage = None;
        for raw_node in raw {
            let resolved = self.resolve_node(toc, raw_node)?;
            if homepage.is_none() {
                homepage = resolved.homepage;
            }
            nodes.push(resolved.node);
        }
        Ok((nodes, homepage))
    }

    /// Resolve a referenced TOC file with the cycle stack pushed.
    fn resolve_referenced(&mut self, from_toc: &str, target_toc: &str) -> Result<Siblings, TocError> {
        let canonical = self.source.canonicalize(target_toc)?;
        if self.active.contains(&canonical) {
            return Err(TocError::CircularReference {
                introduced_by: from_toc.to_owned(),
                closed_by: target_toc.to_owned(),
            });
        }

        self.active.push(canonical);
        let result = match self.source.read_and_parse(target_toc) {
            Ok(raw) => self.resolve_nodes(target_toc, raw),
            Err(err) => Err(err),
        };
        self.active.pop();
        result
    }

    fn resolve_node(&mut self, toc: &str, raw: RawNode) -> Result<Resolved, TocError> {
        let RawNode {
            name,
            href,
            homepage,
            children,
            ..
        } = raw;

        let explicit = match homepage.as_deref().filter(|h| !h.is_empty()) {
            Some(homepage) => {
                let page = classify_homepage(homepage, toc, self.source)?;
                Some(self.display_page(&page))
            }
            None => None,
        };

        let (mut children, mut inferred) = self.resolve_nodes(toc, children)?;
        let mut own_page = None;
        let mut toc_href = None;

        let link = match href {
            Some(authored) if !authored.is_empty() => match classify(&authored, toc, self.source)? {
                Href::External(link) => Some(link),
                Href::ContentFile(page) => {
                    let link = self.display_page(&page);
                    own_page = Some(link.clone());
                    Some(link)
                }
                Href::FolderRef(folder) => {
                    let nested_toc = self.source.find_toc_in_folder(&folder).ok_or_else(|| {
                        TocError::UnresolvableReference {
                            href: authored.clone(),
                            toc: toc.to_owned(),
                        }
                    })?;
                    let (_, nested_homepage) = self.resolve_referenced(toc, &nested_toc)?;
                    let landing = explicit.clone().or(nested_homepage).ok_or_else(|| {
                        TocError::UnresolvedHomepage {
                            name: name.clone(),
                            toc: toc.to_owned(),
                        }
                    })?;
                    toc_href = Some(self.display(&nested_toc));
                    own_page = Some(landing.clone());
                    Some(landing)
                }
                Href::TocRef(nested_toc) => {
                    let (nested, nested_homepage) = self.resolve_referenced(toc, &nested_toc)?;
                    children.extend(nested);
                    inferred = inferred.or(nested_homepage);
                    explicit.clone()
                }
            },
            unlinked => unlinked,
        };

        let exported = explicit
            .clone()
            .or_else(|| inferred.clone().filter(|_| !children.is_empty()));
        let effective = explicit.or(own_page).or(inferred);

        Ok(Resolved {
            node: ResolvedNode {
                name,
                href: link,
                homepage: exported,
                toc_href,
                children,
            },
            homepage: effective,
        })
    }
}
