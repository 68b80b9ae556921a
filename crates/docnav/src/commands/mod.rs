//! CLI command implementations.

pub(crate) mod toc;
pub(crate) mod xref;

pub(crate) use toc::TocArgs;
pub(crate) use xref::XrefArgs;
