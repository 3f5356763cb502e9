//! The public [`Smt`] entry point tying the solver stages together.

use tracing::{info, instrument, warn};

use crate::edge::{EdgeStore, Status};
use crate::error::{Result, SmtError};
use crate::finalize::{self, Edge};
use crate::geometry::Axis;
use crate::hanan;
use crate::marker::MarkerTable;
use crate::mst::{self, CommittedEdge, Mode};
use crate::point::{ActivePoint, Point, PointType};

#[cfg(test)]
mod property;

/// A rectilinear Steiner minimal tree builder on an `N x N` grid.
///
/// Construct with [`Smt::new`], register terminals with [`Smt::add_pin`],
/// then call [`Smt::build`] once to run the Hanan-point greedy heuristic and
/// the two-layer finalization pass. [`Smt::points`] and [`Smt::edges`]
/// return the finalized routing.
///
/// # Examples
/// ```
/// use rsmt_core::Smt;
///
/// let mut smt = Smt::new(5, 2);
/// smt.add_pin(0, 0).expect("in range");
/// smt.add_pin(4, 0).expect("in range");
/// let length = smt.build().expect("complete graph always connects");
/// assert_eq!(length, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Smt {
    grid_size: usize,
    active: Vec<ActivePoint>,
    edges: EdgeStore,
    markers: MarkerTable,
    hanan_candidates: Vec<(usize, usize)>,
    committed: Vec<CommittedEdge>,
    current_mst_length: usize,
    finalized: bool,
    final_points: Vec<Point>,
    final_edges: Vec<Edge>,
}

impl Smt {
    /// Constructs an empty instance on an `grid_size x grid_size` grid.
    ///
    /// `pin_count` is an informational capacity hint only (matching the
    /// scalar the original carries alongside `grid_size`); it is never
    /// validated against the number of [`Smt::add_pin`] calls that follow.
    #[must_use]
    pub fn new(grid_size: usize, pin_count: usize) -> Self {
        Self {
            grid_size,
            active: Vec::with_capacity(pin_count),
            edges: EdgeStore::new(),
            markers: MarkerTable::new(),
            hanan_candidates: Vec::new(),
            committed: Vec::new(),
            current_mst_length: 0,
            finalized: false,
            final_points: Vec::new(),
            final_edges: Vec::new(),
        }
    }

    /// Registers a pin terminal.
    ///
    /// # Errors
    /// Returns [`SmtError::InvalidCoord`] if `x` or `y` is outside
    /// `[0, grid_size)`, or [`SmtError::AlreadyFinalized`] if called after
    /// [`Smt::build`]. Duplicate pins are accepted; they produce a
    /// zero-length edge and one extra active point.
    pub fn add_pin(&mut self, x: usize, y: usize) -> Result<()> {
        if self.finalized {
            return Err(SmtError::AlreadyFinalized);
        }
        if x >= self.grid_size {
            return Err(SmtError::InvalidCoord {
                axis: Axis::X,
                value: x,
                grid_size: self.grid_size,
            });
        }
        if y >= self.grid_size {
            return Err(SmtError::InvalidCoord {
                axis: Axis::Y,
                value: y,
                grid_size: self.grid_size,
            });
        }
        self.add_active_point(x, y, PointType::Pin, Status::Valid);
        Ok(())
    }

    /// Runs the greedy Steiner heuristic and the finalization pass, and
    /// returns the total tree length.
    ///
    /// Idempotent: a second call returns the cached length without mutating
    /// outputs.
    ///
    /// # Errors
    /// Returns [`SmtError::Disconnected`] if the MST engine that computes
    /// the initial pin spanning tree fails to connect every active point.
    /// This is a structural invariant violation; it should never happen
    /// against the complete graph this solver always builds.
    #[instrument(skip(self), fields(grid_size = self.grid_size, pins = self.active.len()), err)]
    pub fn build(&mut self) -> Result<usize> {
        if self.finalized {
            return Ok(self.current_mst_length);
        }

        let pins: Vec<(usize, usize)> = self.active.iter().map(|p| (p.x, p.y)).collect();
        self.hanan_candidates = hanan::collect(self.grid_size, &pins);
        info!(candidates = self.hanan_candidates.len(), "collected hanan candidates");

        self.current_mst_length = self.run_real_mst()?;

        while self.try_commit_best_candidate() {
            self.current_mst_length = self.run_real_mst()?;
        }

        let finalized = finalize::run(&mut self.active, &self.committed);
        self.final_points = finalized.points;
        self.final_edges = finalized.edges;
        self.finalized = true;
        Ok(self.current_mst_length)
    }

    /// Snapshot of the finalized points, empty until [`Smt::build`] has run.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.final_points
    }

    /// Snapshot of the finalized edges, empty until [`Smt::build`] has run.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.final_edges
    }

    /// Adds a new active point, wiring it to every previously active point.
    ///
    /// The new edge's pre-existing endpoint is always `p1`, the newly
    /// inserted point is always `p2`; this order is never renormalized and
    /// is load-bearing for the diagonal-split corner formula in
    /// [`crate::finalize`].
    fn add_active_point(
        &mut self,
        x: usize,
        y: usize,
        point_type: PointType,
        status: Status,
    ) -> usize {
        let new_index = self.active.len();
        for existing_index in 0..new_index {
            let existing = self.active[existing_index];
            self.edges
                .insert(existing_index, new_index, existing.x, existing.y, x, y, status);
        }
        self.active.push(ActivePoint::new(x, y, point_type));
        self.markers.push(new_index);
        new_index
    }

    fn run_real_mst(&mut self) -> Result<usize> {
        mst::run(
            self.edges.iter().copied(),
            &mut self.markers,
            Mode::Real,
            self.active.len(),
            &mut self.committed,
        )
    }

    /// Trials every remaining Hanan candidate as a temporary insertion and
    /// commits the one that most improves `current_mst_length`, if any.
    ///
    /// Returns whether a candidate was committed (the loop in [`Smt::build`]
    /// repeats until this returns `false`, i.e. until a fixpoint).
    fn try_commit_best_candidate(&mut self) -> bool {
        let mut best: Option<(usize, usize)> = None;

        for index in 0..self.hanan_candidates.len() {
            let (x, y) = self.hanan_candidates[index];
            self.markers.reset();
            self.add_active_point(x, y, PointType::Pseudo, Status::Temporary);

            let trial = mst::run(
                self.edges.iter().copied(),
                &mut self.markers,
                Mode::Pseudo,
                self.active.len(),
                &mut self.committed,
            );

            self.edges.retain_valid();
            self.active.pop();
            self.markers.pop();

            if let Ok(length) = trial {
                if length < self.current_mst_length {
                    let improves_best = best.is_none_or(|(_, best_length)| length < best_length);
                    if improves_best {
                        best = Some((index, length));
                    }
                }
            } else {
                warn!(candidate = index, "trial insertion left the graph disconnected");
            }
        }

        let Some((winner_index, length)) = best else {
            return false;
        };
        let (x, y) = self.hanan_candidates.remove(winner_index);
        self.add_active_point(x, y, PointType::Pseudo, Status::Valid);
        info!(x, y, length, "committed steiner point");
        true
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests require contextual panics")]
mod tests {
    use super::*;
    use rstest::rstest;

    fn build_smt(grid_size: usize, pins: &[(usize, usize)]) -> Smt {
        let mut smt = Smt::new(grid_size, pins.len());
        for &(x, y) in pins {
            smt.add_pin(x, y).expect("pins are in range");
        }
        smt
    }

    #[test]
    fn add_pin_rejects_out_of_range_coordinates() {
        let mut smt = Smt::new(5, 1);
        let err = smt.add_pin(5, 0).unwrap_err();
        assert_eq!(
            err,
            SmtError::InvalidCoord {
                axis: Axis::X,
                value: 5,
                grid_size: 5,
            }
        );
    }

    #[test]
    fn add_pin_after_build_fails() {
        let mut smt = build_smt(5, &[(0, 0)]);
        smt.build().expect("single pin trivially connects");
        let err = smt.add_pin(1, 1).unwrap_err();
        assert_eq!(err, SmtError::AlreadyFinalized);
    }

    #[test]
    fn build_is_idempotent() {
        let mut smt = build_smt(5, &[(0, 0), (4, 0), (4, 4)]);
        let first = smt.build().expect("connects");
        let points_before = smt.points().to_vec();
        let second = smt.build().expect("connects");
        assert_eq!(first, second);
        assert_eq!(smt.points(), points_before.as_slice());
    }

    #[rstest]
    #[case::empty_trivial(5, &[(2, 2)], 0)]
    #[case::two_colinear(5, &[(0, 0), (4, 0)], 4)]
    #[case::two_diagonal(5, &[(0, 0), (3, 2)], 5)]
    #[case::l_shape_triple(5, &[(0, 0), (4, 0), (4, 4)], 8)]
    #[case::plus_shape_quad(5, &[(0, 2), (4, 2), (2, 0), (2, 4)], 8)]
    fn literal_scenarios_match_expected_length(
        #[case] grid_size: usize,
        #[case] pins: &[(usize, usize)],
        #[case] expected_length: usize,
    ) {
        let mut smt = build_smt(grid_size, pins);
        assert_eq!(smt.build().expect("connects"), expected_length);
    }

    #[test]
    fn empty_trivial_has_one_pin_and_one_via() {
        let mut smt = build_smt(5, &[(2, 2)]);
        smt.build().expect("connects");
        assert_eq!(
            smt.points(),
            &[
                Point::new(2, 2, PointType::Pin),
                Point::new(2, 2, PointType::PinsM2),
            ]
        );
        assert!(smt.edges().is_empty());
    }

    #[test]
    fn plus_shape_adds_a_steiner_point() {
        let mut smt = build_smt(5, &[(0, 2), (4, 2), (2, 0), (2, 4)]);
        smt.build().expect("connects");
        assert_eq!(smt.edges().len(), 4);
        assert!(smt.edges().iter().all(|e| e.layer() != finalize::Layer::Undef));
    }
}
