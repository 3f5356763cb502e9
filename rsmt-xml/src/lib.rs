//! rsmt-xml: the benchmark XML reader and solution XML writer.
//!
//! These are the external collaborators `rsmt-core` deliberately keeps out
//! of its own dependency tree: reading a `<net>` benchmark document into
//! pin coordinates, and writing a finalized [`rsmt_core::Smt`] snapshot back
//! out as a `<net>` solution document.

mod error;
mod reader;
mod writer;

pub use crate::error::{Result, XmlError, XmlErrorCode};
pub use crate::reader::{Benchmark, read_benchmark};
pub use crate::writer::write_solution;
