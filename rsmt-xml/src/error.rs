//! Errors produced while reading benchmarks or writing solutions.

use thiserror::Error;

/// Stable codes describing [`XmlError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum XmlErrorCode {
    /// The XML document could not be parsed at all.
    Malformed,
    /// An expected element was missing or nested unexpectedly.
    UnexpectedStructure,
    /// A required attribute was missing from an element.
    MissingAttribute,
    /// An attribute's value was not a valid non-negative decimal integer.
    InvalidInteger,
    /// A pin coordinate fell outside `[0, grid_size)`.
    CoordinateOutOfRange,
}

impl XmlErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "RSMT_XML_MALFORMED",
            Self::UnexpectedStructure => "RSMT_XML_UNEXPECTED_STRUCTURE",
            Self::MissingAttribute => "RSMT_XML_MISSING_ATTRIBUTE",
            Self::InvalidInteger => "RSMT_XML_INVALID_INTEGER",
            Self::CoordinateOutOfRange => "RSMT_XML_COORDINATE_OUT_OF_RANGE",
        }
    }
}

impl core::fmt::Display for XmlErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type produced by [`crate::reader::read_benchmark`] and
/// [`crate::writer::write_solution`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum XmlError {
    /// The underlying XML parse failed.
    #[error("malformed xml: {0}")]
    Xml(#[from] quick_xml::Error),
    /// The document had no `<net>` root element.
    #[error("document has no `net` root element")]
    MissingRoot,
    /// An element appeared where it was not expected.
    #[error("unexpected element `{name}`")]
    UnexpectedElement {
        /// Name of the offending element.
        name: String,
    },
    /// A required attribute was missing from an element.
    #[error("element `{element}` is missing attribute `{attribute}`")]
    MissingAttribute {
        /// Name of the element missing the attribute.
        element: &'static str,
        /// Name of the missing attribute.
        attribute: &'static str,
    },
    /// An attribute's value was not a valid non-negative decimal integer.
    #[error("element `{element}` attribute `{attribute}` is not a valid non-negative integer: {value}")]
    InvalidInteger {
        /// Name of the element with the invalid attribute.
        element: &'static str,
        /// Name of the offending attribute.
        attribute: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },
    /// A pin coordinate fell outside `[0, grid_size)`.
    #[error("point ({x}, {y}) is outside the [0, {grid_size}) grid")]
    CoordinateOutOfRange {
        /// The offending horizontal coordinate.
        x: usize,
        /// The offending vertical coordinate.
        y: usize,
        /// The grid's declared side length.
        grid_size: usize,
    },
}

impl XmlError {
    /// Retrieve the stable [`XmlErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> XmlErrorCode {
        match self {
            Self::Xml(_) => XmlErrorCode::Malformed,
            Self::MissingRoot | Self::UnexpectedElement { .. } => XmlErrorCode::UnexpectedStructure,
            Self::MissingAttribute { .. } => XmlErrorCode::MissingAttribute,
            Self::InvalidInteger { .. } => XmlErrorCode::InvalidInteger,
            Self::CoordinateOutOfRange { .. } => XmlErrorCode::CoordinateOutOfRange,
        }
    }
}

/// Convenient alias for results returned by this crate.
pub type Result<T> = core::result::Result<T, XmlError>;
