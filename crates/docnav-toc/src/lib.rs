//! Table-of-contents engine for docnav.
//!
//! This crate turns TOC source files into navigation trees. Two notations are
//! supported and converge on the same [`RawNode`] shape:
//!
//! - **Outline** (`toc.md`): headings whose depth gives nesting, with optional
//!   `[name](href)` link markup ([`parse_outline`])
//! - **List** (`toc.yml`): YAML entries with `name`, `href`, `homepage`, and
//!   nested `items` ([`parse_list`])
//!
//! [`resolve`] links parsed nodes into a single [`ResolvedNode`] tree. Hrefs
//! that point at other TOC files are inlined, hrefs that point at folders link
//! to the folder's own TOC, and every branch gets a landing page inferred from
//! its descendants. References that loop back into a TOC already being
//! resolved fail with [`TocError::CircularReference`].
//!
//! # Architecture
//!
//! - [`TocSource`] trait: the file-system oracle consulted during resolution
//! - [`FsTocSource`]: implementation over a directory on disk
//! - [`MockTocSource`]: in-memory implementation (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docnav_toc::{FsTocSource, resolve_file};
//!
//! let source = FsTocSource::new(PathBuf::from("docs"));
//! let tree = resolve_file("toc.yml", &source)?;
//! for item in &tree.children {
//!     println!("{} -> {:?}", item.name, item.href);
//! }
//! ```

mod error;
mod fs;
mod href;
mod kind;
mod list;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod node;
mod outline;
mod path;
mod resolver;
mod source;

pub use error::{ParseError, TocError};
pub use fs::{DEFAULT_TOC_NAMES, FsTocSource};
pub use kind::TocKind;
pub use list::parse_list;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTocSource;
pub use node::{RawNode, ResolvedNode};
pub use outline::parse_outline;
pub use resolver::{resolve, resolve_file};
pub use source::TocSource;
