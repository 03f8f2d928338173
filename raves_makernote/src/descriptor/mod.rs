//! Descriptors turn a directory's raw values into human-readable text.
//!
//! There's one descriptor per [`DirectoryKind`]. Each borrows its directory,
//! so the directory always outlives it, and none of them hold any state of
//! their own.

use raves_makernote_types::makernote::DirectoryKind;

use crate::{directory::Directory, error::MetadataResult};

pub use self::kyocera::KyoceraMakernoteDescriptor;

pub mod kyocera;

/// Describes the tags of one kind of directory.
pub trait TagDescriptor {
    /// The directory this descriptor reads from.
    fn directory(&self) -> &Directory;

    /// Describes a tag's value.
    ///
    /// By default, this is the directory's generic string rendering.
    ///
    /// `Ok(None)` means there's nothing to describe. It's not an error.
    ///
    /// # Errors
    ///
    /// Any failure reading from the directory is returned as-is.
    fn description(&self, tag: u16) -> MetadataResult<Option<String>> {
        self.directory().get_string(tag).map(Some)
    }

    /// The display name of a tag.
    fn tag_name(&self, tag: u16) -> String {
        self.directory().tag_name(tag)
    }
}

/// A descriptor with no special cases.
#[derive(Clone, Copy, Debug)]
pub struct GenericDescriptor<'dir> {
    directory: &'dir Directory,
}

impl<'dir> GenericDescriptor<'dir> {
    pub fn new(directory: &'dir Directory) -> Self {
        Self { directory }
    }
}

impl TagDescriptor for GenericDescriptor<'_> {
    fn directory(&self) -> &Directory {
        self.directory
    }
}

/// Any descriptor, picked by the kind of directory it describes.
#[derive(Clone, Copy, Debug)]
pub enum Descriptor<'dir> {
    Kyocera(KyoceraMakernoteDescriptor<'dir>),
    Generic(GenericDescriptor<'dir>),
}

impl<'dir> Descriptor<'dir> {
    /// Picks the matching descriptor for a directory.
    pub fn for_directory(directory: &'dir Directory) -> Self {
        match directory.kind() {
            DirectoryKind::Kyocera => {
                Descriptor::Kyocera(KyoceraMakernoteDescriptor::new(directory))
            }
            DirectoryKind::Generic => Descriptor::Generic(GenericDescriptor::new(directory)),
        }
    }
}

impl TagDescriptor for Descriptor<'_> {
    fn directory(&self) -> &Directory {
        match self {
            Descriptor::Kyocera(d) => d.directory(),
            Descriptor::Generic(d) => d.directory(),
        }
    }

    fn description(&self, tag: u16) -> MetadataResult<Option<String>> {
        match self {
            Descriptor::Kyocera(d) => d.description(tag),
            Descriptor::Generic(d) => d.description(tag),
        }
    }

    fn tag_name(&self, tag: u16) -> String {
        match self {
            Descriptor::Kyocera(d) => d.tag_name(tag),
            Descriptor::Generic(d) => d.tag_name(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use raves_makernote_types::{
        exif::{FieldData, primitives::PrimitiveTy},
        makernote::{DirectoryKind, kyocera::KyoceraTag},
    };

    use super::{Descriptor, GenericDescriptor, TagDescriptor};
    use crate::{directory::Directory, error::MetadataError, util::logger};

    #[test]
    fn dispatch_follows_the_directory_kind() {
        logger();
        let kyocera = Directory::new(DirectoryKind::Kyocera);
        let generic = Directory::new(DirectoryKind::Generic);

        assert!(matches!(
            Descriptor::for_directory(&kyocera),
            Descriptor::Kyocera(_)
        ));
        assert!(matches!(
            Descriptor::for_directory(&generic),
            Descriptor::Generic(_)
        ));
    }

    #[test]
    fn generic_renders_blobs_as_numbers() {
        logger();
        let mut d = Directory::new(DirectoryKind::Generic);
        let thumbnail = KyoceraTag::ProprietaryThumbnail.tag_id();
        d.insert(
            thumbnail,
            FieldData::from_bytes(PrimitiveTy::Undefined, &[1, 2, 3]).expect("byte-wide"),
        );

        // no special case outside of the Kyocera directory
        let descriptor = GenericDescriptor::new(&d);
        assert_eq!(descriptor.description(thumbnail), Ok(Some("1 2 3".into())));
        assert_eq!(descriptor.tag_name(thumbnail), "Unknown tag (0x0001)");
    }

    #[test]
    fn generic_missing_tag_is_an_error() {
        logger();
        let d = Directory::new(DirectoryKind::Generic);

        assert_eq!(
            Descriptor::for_directory(&d).description(5),
            Err(MetadataError::TagNotFound { tag: 5 })
        );
    }
}
