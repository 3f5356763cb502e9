//! Union-find with rollback semantics ("markers" in the domain vocabulary).
//!
//! One marker per currently-active point. Unlike a classical path-compressed
//! disjoint-set, a marker keeps an explicit member list so a component can be
//! enumerated (needed by the committed-tree step) and so the whole structure
//! can be rebuilt to the trivial partition in one linear pass, cheaply enough
//! to redo before every trial insertion.

/// Parallel union-find state, one slot per active point.
///
/// Slot `i`'s own id never changes (`owner[i] == i` right after a reset), but
/// `owner[i]` tracks which slot currently *owns* point `i` once unions have
/// run.
#[derive(Clone, Debug, Default)]
pub(crate) struct MarkerTable {
    owner: Vec<usize>,
    counter: Vec<usize>,
    members: Vec<Vec<usize>>,
}

impl MarkerTable {
    pub(crate) fn new() -> Self {
        Self {
            owner: Vec::new(),
            counter: Vec::new(),
            members: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.owner.len()
    }

    /// Appends a fresh singleton marker for a newly-added active point.
    /// The caller must push points and markers in lockstep.
    pub(crate) fn push(&mut self, point: usize) {
        self.owner.push(point);
        self.counter.push(1);
        self.members.push(vec![point]);
    }

    /// Removes the marker at the tail (rollback of a temporary point).
    pub(crate) fn pop(&mut self) {
        self.owner.pop();
        self.counter.pop();
        self.members.pop();
    }

    /// Reinitializes every marker to the singleton state for its owning
    /// point. A single linear pass since the marker list parallels the
    /// active-point list in insertion order.
    pub(crate) fn reset(&mut self) {
        for (index, (owner, counter)) in self
            .owner
            .iter_mut()
            .zip(self.counter.iter_mut())
            .enumerate()
        {
            *owner = index;
            *counter = 1;
        }
        for (index, members) in self.members.iter_mut().enumerate() {
            members.clear();
            members.push(index);
        }
    }

    /// Returns the id of the marker currently owning `point`.
    pub(crate) fn find(&self, point: usize) -> usize {
        self.owner[point]
    }

    /// Returns the component size of marker `marker_id`.
    pub(crate) fn counter_of(&self, marker_id: usize) -> usize {
        self.counter[marker_id]
    }

    /// Unions the components owning `p` and `q`. Returns `false` if they
    /// already share a marker.
    ///
    /// Orients so the larger-counter marker absorbs the smaller, keeping
    /// each union bounded by the size of the smaller side.
    pub(crate) fn union(&mut self, p: usize, q: usize) -> bool {
        let marker_p = self.owner[p];
        let marker_q = self.owner[q];
        if marker_p == marker_q {
            return false;
        }
        let (big, small) = if self.counter[marker_p] >= self.counter[marker_q] {
            (marker_p, marker_q)
        } else {
            (marker_q, marker_p)
        };
        let absorbed = std::mem::take(&mut self.members[small]);
        for &member in &absorbed {
            self.owner[member] = big;
        }
        self.members[big].extend(absorbed);
        self.counter[big] += self.counter[small];
        self.counter[small] = 0;
        true
    }
}
