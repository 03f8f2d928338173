use raves_makernote_types::exif::primitives::PrimitiveTy;

/// The result of reading a value out of a [`crate::directory::Directory`].
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Something went wrong while accessing a directory's values.
///
/// Descriptors never catch these. They're handed straight back to whoever
/// asked for the description, who decides whether to skip the tag or give up.
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Hash)]
pub enum MetadataError {
    /// The directory has no value for this tag.
    TagNotFound { tag: u16 },

    /// The tag exists, but its value's type can't be read the way it was
    /// requested.
    IncompatibleType {
        tag: u16,
        expected: &'static str,
        found: PrimitiveTy,
    },

    /// A single value was requested, but the tag stores a different number
    /// of them.
    ValueCount { tag: u16, count: u32 },
}

impl MetadataError {
    /// The tag the failed access was for.
    pub fn tag(&self) -> u16 {
        match self {
            Self::TagNotFound { tag }
            | Self::IncompatibleType { tag, .. }
            | Self::ValueCount { tag, .. } => *tag,
        }
    }
}

impl core::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TagNotFound { tag } => {
                write!(f, "No value was found for tag `0x{tag:04x}`.")
            }
            Self::IncompatibleType {
                tag,
                expected,
                found,
            } => write!(
                f,
                "Tag `0x{tag:04x}` can't be read as {expected}. found type: `{found:?}`"
            ),
            Self::ValueCount { tag, count } => write!(
                f,
                "Tag `0x{tag:04x}` was asked for one value, but it stores `{count}`."
            ),
        }
    }
}

impl core::error::Error for MetadataError {}
