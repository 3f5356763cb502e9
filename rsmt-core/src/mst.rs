//! Kruskal-style MST engine over the length-sorted candidate-edge list.

use tracing::instrument;

use crate::edge::CandidateEdge;
use crate::error::SmtError;
use crate::marker::MarkerTable;

/// Whether a run links edges permanently or is a throwaway cost trial.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Mode {
    /// Union-find only, no point/edge linking. Used to cost a trial
    /// insertion before committing to it.
    Pseudo,
    /// Also registers accepted edges on the committed-edges list. Clears and
    /// rebuilds the committed-edges list and unlinks all points at entry, so
    /// every real recomputation starts from a fresh partition.
    Real,
}

/// A committed tree edge, copied out of the candidate-edge store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CommittedEdge {
    pub(crate) p1: usize,
    pub(crate) p2: usize,
    pub(crate) length: usize,
}

/// Runs Kruskal over `edges` (assumed length-sorted), unioning components in
/// `markers` until every one of `num_of_points` active points is connected.
///
/// `Real` mode resets `markers` and clears `committed` before scanning;
/// `Pseudo` mode assumes the caller already reset `markers` to the partition
/// it wants to trial from.
#[instrument(level = "debug", skip(edges, markers, committed), fields(num_of_points, mode = ?mode))]
pub(crate) fn run(
    edges: impl Iterator<Item = CandidateEdge>,
    markers: &mut MarkerTable,
    mode: Mode,
    num_of_points: usize,
    committed: &mut Vec<CommittedEdge>,
) -> Result<usize, SmtError> {
    if mode == Mode::Real {
        markers.reset();
        committed.clear();
    }

    let mut length = 0usize;
    let mut components = 1usize;

    for edge in edges {
        if components == num_of_points {
            break;
        }
        if markers.find(edge.p1) == markers.find(edge.p2) {
            continue;
        }
        length += edge.length;
        markers.union(edge.p1, edge.p2);
        if mode == Mode::Real {
            committed.push(CommittedEdge {
                p1: edge.p1,
                p2: edge.p2,
                length: edge.length,
            });
        }
        let merged = markers.counter_of(markers.find(edge.p1));
        components = components.max(merged);
    }

    if components != num_of_points {
        tracing::warn!(components, num_of_points, "mst run failed to connect all active points");
        return Err(SmtError::Disconnected);
    }

    Ok(length)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests require contextual panics")]
mod tests {
    use super::*;
    use crate::edge::{EdgeStore, Status};

    fn markers_for(n: usize) -> MarkerTable {
        let mut markers = MarkerTable::new();
        for i in 0..n {
            markers.push(i);
        }
        markers
    }

    #[test]
    fn pseudo_mode_does_not_commit_edges() {
        let mut store = EdgeStore::new();
        store.insert(0, 1, 0, 0, 4, 0, Status::Valid);
        let mut markers = markers_for(2);
        let mut committed = Vec::new();
        let length = run(
            store.iter().copied(),
            &mut markers,
            Mode::Pseudo,
            2,
            &mut committed,
        )
        .expect("complete graph connects");
        assert_eq!(length, 4);
        assert!(committed.is_empty());
        assert_eq!(markers.find(0), markers.find(1));
    }

    #[test]
    fn real_mode_commits_edges_and_resets_first() {
        let mut store = EdgeStore::new();
        store.insert(0, 1, 0, 0, 4, 0, Status::Valid);
        let mut markers = markers_for(2);
        markers.union(0, 1);
        let mut committed = vec![CommittedEdge {
            p1: 9,
            p2: 9,
            length: 9,
        }];
        let length = run(
            store.iter().copied(),
            &mut markers,
            Mode::Real,
            2,
            &mut committed,
        )
        .expect("complete graph connects");
        assert_eq!(length, 4);
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0].length, 4);
    }

    #[test]
    fn disconnected_graph_is_an_error() {
        let store = EdgeStore::new();
        let mut markers = markers_for(2);
        let mut committed = Vec::new();
        let err = run(
            store.iter().copied(),
            &mut markers,
            Mode::Pseudo,
            2,
            &mut committed,
        )
        .unwrap_err();
        assert_eq!(err, SmtError::Disconnected);
    }
}
