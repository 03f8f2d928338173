//! A directory holds the decoded values of one metadata segment.
//!
//! It's filled in once by whoever decoded the segment, then only read from.
//! Every reading method takes `&self`, so a directory can be described from
//! many threads at once.

use raves_makernote_types::{
    exif::{Field, FieldData, primitives::Primitive},
    makernote::DirectoryKind,
};
use rustc_hash::FxHashMap;

use crate::error::{MetadataError, MetadataResult};

/// Decoded values keyed by tag ID, scoped to one [`DirectoryKind`].
#[derive(Clone, Debug, PartialEq)]
pub struct Directory {
    kind: DirectoryKind,
    values: FxHashMap<u16, FieldData>,

    /// Tag IDs in the order they were first inserted.
    order: Vec<u16>,
}

impl Directory {
    /// Creates an empty directory of the given kind.
    pub fn new(kind: DirectoryKind) -> Self {
        Self {
            kind,
            values: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Creates a directory from fields that were already decoded.
    ///
    /// If a tag appears more than once, the last value wins.
    pub fn from_fields(kind: DirectoryKind, fields: impl IntoIterator<Item = Field>) -> Self {
        let mut directory = Self::new(kind);
        for field in fields {
            directory.insert(field.tag, field.data);
        }
        directory
    }

    /// Stores a value for a tag.
    ///
    /// Replacing an existing value keeps the tag's original position.
    pub fn insert(&mut self, tag: u16, data: FieldData) {
        // warn if the value doesn't look like the tag table says it should
        if !self.kind.accepts(tag, data.ty(), data.count()) {
            log::warn!(
                "`{}` in {} doesn't match its table entry! \
                Storing it anyway... got: `{:?}` x{}",
                self.kind.tag_name(tag),
                self.kind,
                data.ty(),
                data.count()
            );
        }

        if self.values.insert(tag, data).is_some() {
            log::trace!("Replaced value for tag `0x{tag:04x}` in {}", self.kind);
        } else {
            self.order.push(tag);
        }
    }

    pub fn kind(&self) -> DirectoryKind {
        self.kind
    }

    /// The display name of this directory.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All populated tags, in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = u16> + '_ {
        self.order.iter().copied()
    }

    /// The display name of a tag in this directory.
    pub fn tag_name(&self, tag: u16) -> String {
        self.kind.tag_name(tag)
    }

    pub fn contains_tag(&self, tag: u16) -> bool {
        self.values.contains_key(&tag)
    }

    /// The raw data stored for a tag, if any.
    pub fn get(&self, tag: u16) -> Option<&FieldData> {
        self.values.get(&tag)
    }

    /// Like [`Directory::get`], but a missing tag is an error.
    fn require(&self, tag: u16) -> MetadataResult<&FieldData> {
        self.values.get(&tag).ok_or_else(|| {
            log::trace!("Tag `0x{tag:04x}` isn't in {}", self.kind);
            MetadataError::TagNotFound { tag }
        })
    }

    /// Grabs a tag's value as raw bytes.
    ///
    /// Only byte-wide types (`Byte`, `SByte`, `Undefined`, `Ascii`, `Utf8`)
    /// can be read this way. A tag with zero values gives an empty array.
    ///
    /// # Errors
    ///
    /// Fails if the tag is missing, or if it stores a wider type.
    pub fn get_byte_array(&self, tag: u16) -> MetadataResult<Vec<u8>> {
        let data = self.require(tag)?;
        let ty = data.ty();

        if !ty.is_byte_like() {
            log::error!("Tag `0x{tag:04x}` holds `{ty:?}`, not bytes.");
            return Err(MetadataError::IncompatibleType {
                tag,
                expected: "a byte array",
                found: ty,
            });
        }

        data.primitives()
            .iter()
            .map(|p| p.as_byte())
            .collect::<Option<Vec<u8>>>()
            .ok_or(MetadataError::IncompatibleType {
                tag,
                expected: "a byte array",
                found: ty,
            })
    }

    /// Grabs a tag's value as a single unsigned integer.
    ///
    /// # Errors
    ///
    /// Fails if the tag is missing, holds a signed or fractional type, or
    /// doesn't store exactly one value.
    pub fn get_u32(&self, tag: u16) -> MetadataResult<u32> {
        let data = self.require(tag)?;

        match data {
            FieldData::Primitive(p) => match *p {
                Primitive::Byte(v) | Primitive::Undefined(v) => Ok(v as u32),
                Primitive::Short(v) => Ok(v as u32),
                Primitive::Long(v) => Ok(v),
                other => Err(MetadataError::IncompatibleType {
                    tag,
                    expected: "an unsigned integer",
                    found: other.ty(),
                }),
            },
            FieldData::None(_) | FieldData::List { .. } => Err(MetadataError::ValueCount {
                tag,
                count: data.count(),
            }),
        }
    }

    /// Renders a tag's value as a string, without knowing what it means.
    ///
    /// - text is decoded (lossily) with its trailing NULs removed
    /// - numbers are written in decimal, separated by single spaces
    /// - fractions are written as `numerator/denominator`
    /// - a tag with zero values renders as an empty string
    ///
    /// # Errors
    ///
    /// Fails if the tag is missing, or if text data holds values that aren't
    /// one byte wide.
    pub fn get_string(&self, tag: u16) -> MetadataResult<String> {
        let data = self.require(tag)?;

        if data.ty().is_text() {
            let bytes: Vec<u8> = data
                .primitives()
                .iter()
                .map(Primitive::as_byte)
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(|| {
                    log::error!("Tag `0x{tag:04x}` claims to be text, but holds wider values.");
                    MetadataError::IncompatibleType {
                        tag,
                        expected: "text",
                        found: data.ty(),
                    }
                })?;
            let trimmed_len = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);

            return Ok(String::from_utf8_lossy(&bytes[..trimmed_len]).into_owned());
        }

        Ok(data
            .primitives()
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<String>>()
            .join(" "))
    }
}
