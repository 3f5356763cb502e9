//! Layer assignment and via insertion: turns the committed tree into a
//! routable two-layer (M2/M3) realization.

use crate::mst::CommittedEdge;
use crate::point::{ActivePoint, Point, PointType};

/// The routing layer of a finalized segment.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Layer {
    /// Horizontal metal.
    M2,
    /// Vertical metal.
    M3,
    /// Neither axis matched; never valid post-finalization.
    Undef,
}

/// A finalized routing segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
    layer: Layer,
}

impl Edge {
    const fn new(x1: usize, y1: usize, x2: usize, y2: usize, layer: Layer) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            layer,
        }
    }

    /// The first endpoint's horizontal coordinate.
    #[must_use]
    pub const fn x1(&self) -> usize {
        self.x1
    }

    /// The first endpoint's vertical coordinate.
    #[must_use]
    pub const fn y1(&self) -> usize {
        self.y1
    }

    /// The second endpoint's horizontal coordinate.
    #[must_use]
    pub const fn x2(&self) -> usize {
        self.x2
    }

    /// The second endpoint's vertical coordinate.
    #[must_use]
    pub const fn y2(&self) -> usize {
        self.y2
    }

    /// The segment's routing layer.
    #[must_use]
    pub const fn layer(&self) -> Layer {
        self.layer
    }
}

pub(crate) struct Finalized {
    pub(crate) points: Vec<Point>,
    pub(crate) edges: Vec<Edge>,
}

/// Builds incidence tables for whether each active point touches at least
/// one M2 (horizontal) or M3 (vertical) committed edge.
///
/// A diagonal committed edge splits, via the corner formula, into a vertical
/// segment at its `p1` endpoint and a horizontal segment at its `p2`
/// endpoint (see [`split`]); that future split is anticipated here so a pin
/// or pseudo point's classification already reflects the layer it will
/// actually route on.
fn incidence(active: &[ActivePoint], committed: &[CommittedEdge]) -> (Vec<bool>, Vec<bool>) {
    let mut has_m2 = vec![false; active.len()];
    let mut has_m3 = vec![false; active.len()];
    for edge in committed {
        let p1 = active[edge.p1];
        let p2 = active[edge.p2];
        if p1.y == p2.y {
            has_m2[edge.p1] = true;
            has_m2[edge.p2] = true;
        } else if p1.x == p2.x {
            has_m3[edge.p1] = true;
            has_m3[edge.p2] = true;
        } else {
            has_m3[edge.p1] = true;
            has_m2[edge.p2] = true;
        }
    }
    (has_m2, has_m3)
}

/// Splits a diagonal committed edge into an L-shape at the corner
/// `(x1_of_p1, y2_of_p2)`, returning the new corner point and the two
/// replacement segments (`p1`-corner, then `p2`-corner).
///
/// The corner takes `x` from endpoint 1 and `y` from endpoint 2, where
/// endpoint 1/2 are whichever order the edge was constructed in (the
/// pre-existing point is always `p1`; see [`crate::smt`]). This order is not
/// renormalized, so swapping which pin was added first changes the corner.
fn split(p1: ActivePoint, p2: ActivePoint) -> ((usize, usize), [Edge; 2]) {
    let corner = (p1.x, p2.y);
    let first = Edge::new(p1.x, p1.y, corner.0, corner.1, Layer::M3);
    let second = Edge::new(p2.x, p2.y, corner.0, corner.1, Layer::M2);
    (corner, [first, second])
}

pub(crate) fn run(active: &mut [ActivePoint], committed: &[CommittedEdge]) -> Finalized {
    let (has_m2, has_m3) = incidence(active, committed);

    for (index, point) in active.iter_mut().enumerate() {
        if point.point_type == PointType::Pseudo {
            point.point_type = if has_m2[index] && has_m3[index] {
                PointType::M2M3
            } else {
                PointType::Invalid
            };
        }
    }

    let mut points = Vec::new();
    for (index, point) in active.iter().enumerate() {
        points.push(Point::new(point.x, point.y, point.point_type));
        if point.point_type == PointType::Pin {
            points.push(Point::new(point.x, point.y, PointType::PinsM2));
            if has_m3[index] {
                points.push(Point::new(point.x, point.y, PointType::M2M3));
            }
        }
    }

    let mut extras = Vec::new();
    let mut singles = Vec::new();
    for edge in committed {
        let p1 = active[edge.p1];
        let p2 = active[edge.p2];
        if p1.y == p2.y {
            singles.push(Edge::new(p1.x, p1.y, p2.x, p2.y, Layer::M2));
        } else if p1.x == p2.x {
            singles.push(Edge::new(p1.x, p1.y, p2.x, p2.y, Layer::M3));
        } else {
            let (corner, segments) = split(p1, p2);
            points.push(Point::new(corner.0, corner.1, PointType::M2M3));
            extras.extend(segments);
        }
    }

    extras.extend(singles);
    Finalized {
        points,
        edges: extras,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(x: usize, y: usize) -> ActivePoint {
        ActivePoint::new(x, y, PointType::Pin)
    }

    fn pseudo(x: usize, y: usize) -> ActivePoint {
        ActivePoint::new(x, y, PointType::Pseudo)
    }

    #[test]
    fn single_pin_gets_one_via_and_no_edges() {
        let mut active = vec![pin(2, 2)];
        let finalized = run(&mut active, &[]);
        assert_eq!(
            finalized.points,
            vec![
                Point::new(2, 2, PointType::Pin),
                Point::new(2, 2, PointType::PinsM2),
            ]
        );
        assert!(finalized.edges.is_empty());
    }

    #[test]
    fn colinear_pins_keep_single_layer_edge() {
        let mut active = vec![pin(0, 0), pin(4, 0)];
        let committed = vec![CommittedEdge {
            p1: 0,
            p2: 1,
            length: 4,
        }];
        let finalized = run(&mut active, &committed);
        assert_eq!(finalized.edges.len(), 1);
        assert_eq!(finalized.edges[0].layer(), Layer::M2);
        assert!(!finalized.points.contains(&Point::new(0, 0, PointType::M2M3)));
    }

    #[test]
    fn diagonal_edge_splits_at_corner_from_p1_x_p2_y() {
        let mut active = vec![pin(0, 0), pin(3, 2)];
        let committed = vec![CommittedEdge {
            p1: 0,
            p2: 1,
            length: 5,
        }];
        let finalized = run(&mut active, &committed);
        assert_eq!(finalized.edges.len(), 2);
        assert_eq!(finalized.edges[0], Edge::new(0, 0, 0, 2, Layer::M3));
        assert_eq!(finalized.edges[1], Edge::new(3, 2, 0, 2, Layer::M2));
        assert!(finalized.points.contains(&Point::new(0, 2, PointType::M2M3)));
        // pin (0,0) picks up an M2_M3 via since it now has an M3 segment.
        assert!(finalized.points.contains(&Point::new(0, 0, PointType::M2M3)));
        // pin (3,2) only ever has an M2 segment.
        assert!(!finalized.points.contains(&Point::new(3, 2, PointType::M2M3)));
    }

    #[test]
    fn degenerate_pseudo_point_becomes_invalid() {
        let mut active = vec![pin(0, 0), pin(4, 0), pseudo(2, 0)];
        let committed = vec![
            CommittedEdge {
                p1: 0,
                p2: 2,
                length: 2,
            },
            CommittedEdge {
                p1: 2,
                p2: 1,
                length: 2,
            },
        ];
        let finalized = run(&mut active, &committed);
        assert_eq!(active[2].point_type, PointType::Invalid);
        assert!(finalized.points.contains(&Point::new(2, 0, PointType::Invalid)));
    }
}
