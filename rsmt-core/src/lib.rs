//! rsmt-core: the rectilinear Steiner minimal tree solver.
//!
//! Given a grid size and a set of pin coordinates, builds an approximately
//! minimum-length rectilinear interconnection tree using a Hanan-point
//! greedy heuristic, then finalizes it into a two-layer (M2/M3) routing with
//! via points. No I/O, no CLI: those live in the `rsmt-xml` and `rsmt-cli`
//! crates.

mod edge;
mod error;
mod finalize;
mod geometry;
mod hanan;
mod marker;
mod mst;
mod point;
mod smt;

pub use crate::error::{Result, SmtError, SmtErrorCode};
pub use crate::finalize::{Edge, Layer};
pub use crate::geometry::Axis;
pub use crate::point::{Point, PointType};
pub use crate::smt::Smt;
