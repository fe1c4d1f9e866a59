//! Error kinds and the is-a relation between them

use std::fmt;

/// The kind of error that occurred.
///
/// Kinds form a single-inheritance tree rooted at [`ErrorKind::Fault`].
/// A kind *is a* another kind when the other one is itself or one of its
/// ancestors, so asking for `InvalidArgument` also accepts `ParseFailed`.
///
/// ```text
/// Fault
/// ├── Unexpected ─── MissingValue, AssertionFailed
/// ├── Unsupported ── NotImplemented
/// ├── InvalidArgument ── ConfigInvalid, InvalidRange, ParseFailed ── SerializationFailed
/// ├── NotFound ───── FileNotFound, StorageNotFound
/// ├── IoFailed ───── PermissionDenied, NetworkFailed ── ChannelClosed
/// ├── Timeout
/// └── Unavailable ── RateLimited
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The root of every kind - any error is a fault
    Fault,

    // =========================================================================
    // Programming errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// A required value was absent
    MissingValue,

    /// An internal assertion did not hold
    AssertionFailed,

    // =========================================================================
    // Unsupported operations
    // =========================================================================
    /// The requested feature or operation is not supported
    Unsupported,

    /// Feature or operation not yet implemented
    NotImplemented,

    // =========================================================================
    // Argument errors
    // =========================================================================
    /// Invalid argument passed to function
    InvalidArgument,

    /// Invalid configuration or parameters
    ConfigInvalid,

    /// Invalid range specified
    InvalidRange,

    /// Failed to parse input
    ParseFailed,

    /// Serialization/deserialization failed
    SerializationFailed,

    // =========================================================================
    // Lookup errors
    // =========================================================================
    /// The requested item does not exist
    NotFound,

    /// File not found
    FileNotFound,

    /// Storage key not found
    StorageNotFound,

    // =========================================================================
    // IO errors
    // =========================================================================
    /// IO operation failed
    IoFailed,

    /// Permission denied
    PermissionDenied,

    /// Network error
    NetworkFailed,

    /// Channel closed unexpectedly
    ChannelClosed,

    // =========================================================================
    // Availability errors
    // =========================================================================
    /// The operation did not complete in time
    Timeout,

    /// The peer or service is not available
    Unavailable,

    /// Rate limit exceeded
    RateLimited,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Fault => "Fault",

            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::MissingValue => "MissingValue",
            ErrorKind::AssertionFailed => "AssertionFailed",

            ErrorKind::Unsupported => "Unsupported",
            ErrorKind::NotImplemented => "NotImplemented",

            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::ConfigInvalid => "ConfigInvalid",
            ErrorKind::InvalidRange => "InvalidRange",
            ErrorKind::ParseFailed => "ParseFailed",
            ErrorKind::SerializationFailed => "SerializationFailed",

            ErrorKind::NotFound => "NotFound",
            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::StorageNotFound => "StorageNotFound",

            ErrorKind::IoFailed => "IoFailed",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::NetworkFailed => "NetworkFailed",
            ErrorKind::ChannelClosed => "ChannelClosed",

            ErrorKind::Timeout => "Timeout",
            ErrorKind::Unavailable => "Unavailable",
            ErrorKind::RateLimited => "RateLimited",
        }
    }

    /// The direct parent of this kind, `None` only for [`ErrorKind::Fault`]
    pub fn parent(&self) -> Option<ErrorKind> {
        let parent = match self {
            ErrorKind::Fault => return None,

            ErrorKind::MissingValue | ErrorKind::AssertionFailed => ErrorKind::Unexpected,
            ErrorKind::NotImplemented => ErrorKind::Unsupported,
            ErrorKind::ConfigInvalid | ErrorKind::InvalidRange | ErrorKind::ParseFailed => {
                ErrorKind::InvalidArgument
            }
            ErrorKind::SerializationFailed => ErrorKind::ParseFailed,
            ErrorKind::FileNotFound | ErrorKind::StorageNotFound => ErrorKind::NotFound,
            ErrorKind::PermissionDenied | ErrorKind::NetworkFailed => ErrorKind::IoFailed,
            ErrorKind::ChannelClosed => ErrorKind::NetworkFailed,
            ErrorKind::RateLimited => ErrorKind::Unavailable,

            ErrorKind::Unexpected
            | ErrorKind::Unsupported
            | ErrorKind::InvalidArgument
            | ErrorKind::NotFound
            | ErrorKind::IoFailed
            | ErrorKind::Timeout
            | ErrorKind::Unavailable => ErrorKind::Fault,
        };
        Some(parent)
    }

    /// Iterate over this kind followed by each of its ancestors up to `Fault`
    pub fn ancestors(&self) -> impl Iterator<Item = ErrorKind> {
        std::iter::successors(Some(*self), |kind| kind.parent())
    }

    /// Check whether this kind is `other` or one of its descendants
    pub fn is_a(&self, other: ErrorKind) -> bool {
        self.ancestors().any(|kind| kind == other)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::InvalidArgument.to_string(), "InvalidArgument");
        assert_eq!(ErrorKind::Fault.to_string(), "Fault");
    }

    #[test]
    fn test_ancestors() {
        let chain: Vec<_> = ErrorKind::SerializationFailed.ancestors().collect();
        assert_eq!(
            chain,
            vec![
                ErrorKind::SerializationFailed,
                ErrorKind::ParseFailed,
                ErrorKind::InvalidArgument,
                ErrorKind::Fault,
            ]
        );
        assert_eq!(ErrorKind::Fault.ancestors().count(), 1);
    }

    #[test]
    fn test_is_a() {
        assert!(ErrorKind::ParseFailed.is_a(ErrorKind::ParseFailed));
        assert!(ErrorKind::ParseFailed.is_a(ErrorKind::InvalidArgument));
        assert!(ErrorKind::ParseFailed.is_a(ErrorKind::Fault));

        // is-a only goes towards the root
        assert!(!ErrorKind::InvalidArgument.is_a(ErrorKind::ParseFailed));
        assert!(!ErrorKind::Unexpected.is_a(ErrorKind::MissingValue));
        assert!(!ErrorKind::Unsupported.is_a(ErrorKind::InvalidArgument));
    }

    #[test]
    fn test_every_kind_is_a_fault() {
        let kinds = [
            ErrorKind::Unexpected,
            ErrorKind::MissingValue,
            ErrorKind::NotImplemented,
            ErrorKind::ConfigInvalid,
            ErrorKind::StorageNotFound,
            ErrorKind::ChannelClosed,
            ErrorKind::RateLimited,
        ];
        for kind in kinds {
            assert!(kind.is_a(ErrorKind::Fault), "{} should be a Fault", kind);
        }
    }
}
