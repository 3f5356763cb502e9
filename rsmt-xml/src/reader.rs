//! Parses the benchmark XML document into structured pin data.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Result, XmlError};

/// A parsed benchmark: a grid size and the pins to route on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Benchmark {
    grid_size: usize,
    pins: Vec<(usize, usize)>,
}

impl Benchmark {
    /// The grid's declared side length.
    #[must_use]
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// The parsed pin coordinates, in document order.
    #[must_use]
    pub fn pins(&self) -> &[(usize, usize)] {
        &self.pins
    }
}

fn required_attr(
    element: &BytesStart<'_>,
    element_name: &'static str,
    attribute: &'static str,
) -> Result<usize> {
    let value = element
        .try_get_attribute(attribute)
        .map_err(XmlError::Xml)?
        .ok_or(XmlError::MissingAttribute {
            element: element_name,
            attribute,
        })?
        .unescape_value()
        .map_err(XmlError::Xml)?;
    value
        .parse::<usize>()
        .map_err(|_err| XmlError::InvalidInteger {
            element: element_name,
            attribute,
            value: value.into_owned(),
        })
}

/// Parses a `<net grid_size="N" pin_count="M"><point type="pin" x="X"
/// y="Y"/>...</net>` document.
///
/// `pin_count` is read (to validate it is a well-formed integer) but is not
/// compared against the number of `<point>` children, matching the format's
/// own looseness on that point.
///
/// # Errors
/// Returns [`XmlError`] for malformed XML, a missing `net` root, an
/// unexpected child element, a missing or unparseable attribute, or a pin
/// coordinate outside `[0, grid_size)`.
pub fn read_benchmark(xml: &str) -> Result<Benchmark> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut grid_size = None;
    let mut pins = Vec::new();

    loop {
        let event = reader.read_event_into(&mut buf).map_err(XmlError::Xml)?;
        match event {
            Event::Start(element) | Event::Empty(element) => match element.name().as_ref() {
                b"net" => {
                    grid_size = Some(required_attr(&element, "net", "grid_size")?);
                    let _pin_count = required_attr(&element, "net", "pin_count")?;
                }
                b"point" => {
                    let x = required_attr(&element, "point", "x")?;
                    let y = required_attr(&element, "point", "y")?;
                    pins.push((x, y));
                }
                other => {
                    return Err(XmlError::UnexpectedElement {
                        name: String::from_utf8_lossy(other).into_owned(),
                    });
                }
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let grid_size = grid_size.ok_or(XmlError::MissingRoot)?;
    for &(x, y) in &pins {
        if x >= grid_size || y >= grid_size {
            return Err(XmlError::CoordinateOutOfRange { x, y, grid_size });
        }
    }

    Ok(Benchmark { grid_size, pins })
}
