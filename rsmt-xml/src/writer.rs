//! Serializes finalized solver snapshots into the solution XML document.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use rsmt_core::{Edge, Layer, Point, PointType};

use crate::error::{Result, XmlError};

fn point_fields(point_type: PointType) -> (&'static str, &'static str) {
    match point_type {
        PointType::Pin => ("pins", "pin"),
        PointType::PinsM2 => ("pins_m2", "via"),
        PointType::M2M3 => ("m2_m3", "via"),
        PointType::Hanan | PointType::Pseudo | PointType::Invalid => ("undef", "undef"),
    }
}

fn edge_layer(layer: Layer) -> &'static str {
    match layer {
        Layer::M2 => "m2",
        Layer::M3 => "m3",
        Layer::Undef => "undef",
    }
}

/// Serializes a `<net>` document from a finalized [`rsmt_core::Smt`]
/// snapshot, following the internal-to-emitted mapping: `Pin` -> (`pins`,
/// `pin`), `Pins_M2` -> (`pins_m2`, `via`), `M2_M3` -> (`m2_m3`, `via`), and
/// everything else -> (`undef`, `undef`).
///
/// # Errors
/// Returns [`XmlError`] if the underlying XML writer fails.
pub fn write_solution(
    grid_size: usize,
    pin_count: usize,
    points: &[Point],
    edges: &[Edge],
) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let mut net = BytesStart::new("net");
    net.push_attribute(("grid_size", grid_size.to_string().as_str()));
    net.push_attribute(("pin_count", pin_count.to_string().as_str()));
    writer
        .write_event(Event::Start(net))
        .map_err(XmlError::Xml)?;

    for point in points {
        let (layer, kind) = point_fields(point.point_type());
        let mut element = BytesStart::new("point");
        element.push_attribute(("x", point.x().to_string().as_str()));
        element.push_attribute(("y", point.y().to_string().as_str()));
        element.push_attribute(("layer", layer));
        element.push_attribute(("type", kind));
        writer
            .write_event(Event::Empty(element))
            .map_err(XmlError::Xml)?;
    }

    for edge in edges {
        let mut element = BytesStart::new("segment");
        element.push_attribute(("x1", edge.x1().to_string().as_str()));
        element.push_attribute(("y1", edge.y1().to_string().as_str()));
        element.push_attribute(("x2", edge.x2().to_string().as_str()));
        element.push_attribute(("y2", edge.y2().to_string().as_str()));
        element.push_attribute(("layer", edge_layer(edge.layer())));
        writer
            .write_event(Event::Empty(element))
            .map_err(XmlError::Xml)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("net")))
        .map_err(XmlError::Xml)?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
