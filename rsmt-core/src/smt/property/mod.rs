//! Property-based tests for the [`crate::Smt`] solver.
//!
//! Verifies the structural invariants and laws from the builder's test
//! suite across randomly generated pin sets: no diagonal edges survive
//! finalization, every pin gets exactly the via duplicates it should,
//! `build` is idempotent, and the finalized length never regresses past
//! the plain pin-to-pin MST it started from.

mod strategies;
