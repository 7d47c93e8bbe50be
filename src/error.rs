use core::fmt;

/// An error occurred when creating or modifying a component.
///
/// The variants fall into three groups:
///
/// - A value was rejected by a component: [`InvalidScheme`], [`InvalidPort`],
///   [`InvalidHostLabel`] and [`MissingHost`].
/// - A host broke a structural limit: [`LabelTooLong`], [`HostTooLong`]
///   and [`TooManyLabels`].
/// - An anchored insertion asked for an occurrence that does not exist:
///   [`OccurrenceOutOfRange`].
///
/// A failed call never leaves a partially modified value behind, since
/// every operation that can fail returns a new value on success.
///
/// [`InvalidScheme`]: Self::InvalidScheme
/// [`InvalidPort`]: Self::InvalidPort
/// [`InvalidHostLabel`]: Self::InvalidHostLabel
/// [`MissingHost`]: Self::MissingHost
/// [`LabelTooLong`]: Self::LabelTooLong
/// [`HostTooLong`]: Self::HostTooLong
/// [`TooManyLabels`]: Self::TooManyLabels
/// [`OccurrenceOutOfRange`]: Self::OccurrenceOutOfRange
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The scheme does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    InvalidScheme {
        /// The index of the first offending byte.
        index: usize,
    },
    /// The port is not a decimal number between 0 and 65535.
    InvalidPort,
    /// A host label is empty, contains a character other than an ASCII letter,
    /// digit or hyphen, or begins or ends with a hyphen.
    InvalidHostLabel {
        /// The position of the label in the host.
        index: usize,
    },
    /// A host label is longer than 63 bytes.
    LabelTooLong,
    /// A host is longer than 255 bytes.
    HostTooLong,
    /// A host has more than 127 labels.
    TooManyLabels,
    /// A URL has userinfo or a port but no host.
    MissingHost,
    /// The anchor value was found, but fewer times than the requested occurrence.
    OccurrenceOutOfRange {
        /// The requested occurrence, counted from zero.
        occurrence: usize,
        /// The number of times the anchor value was found.
        found: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidScheme { index } => {
                write!(f, "invalid scheme character at index {index}")
            }
            Self::InvalidPort => {
                f.write_str("port should be a decimal number no greater than 65535")
            }
            Self::InvalidHostLabel { index } => write!(f, "invalid host label at position {index}"),
            Self::LabelTooLong => f.write_str("host label should be no longer than 63 bytes"),
            Self::HostTooLong => f.write_str("host should be no longer than 255 bytes"),
            Self::TooManyLabels => f.write_str("host should have no more than 127 labels"),
            Self::MissingHost => {
                f.write_str("when userinfo or port is present, host should not be empty")
            }
            Self::OccurrenceOutOfRange { occurrence, found } => write!(
                f,
                "occurrence {occurrence} of the anchor requested, but only {found} found"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
