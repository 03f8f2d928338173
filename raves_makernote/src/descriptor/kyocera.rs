//! Descriptions for the Kyocera MakerNote.
//!
//! Both documented tags are blobs with no published layout, so the only thing
//! we can safely say about them is how big they are. Everything else goes
//! through the directory's generic rendering.
//!
//! Kyocera, like Fujifilm, counts its data offsets from the start of the
//! MakerNote rather than the TIFF header. That's the decoder's problem; by
//! the time a directory reaches us, its values are already resolved.

use raves_makernote_types::makernote::kyocera::KyoceraTag;

use super::TagDescriptor;
use crate::{directory::Directory, error::MetadataResult};

/// Describes tags in a Kyocera MakerNote directory.
#[derive(Clone, Copy, Debug)]
pub struct KyoceraMakernoteDescriptor<'dir> {
    directory: &'dir Directory,
}

impl<'dir> KyoceraMakernoteDescriptor<'dir> {
    pub fn new(directory: &'dir Directory) -> Self {
        Self { directory }
    }

    /// Describes the Print Image Matching info by its size.
    ///
    /// Returns `Ok(None)` if the directory doesn't have it.
    pub fn print_image_matching_info_description(&self) -> MetadataResult<Option<String>> {
        self.byte_count_description(KyoceraTag::PrintImageMatchingInfo)
    }

    /// Describes the proprietary thumbnail by its size.
    ///
    /// Returns `Ok(None)` if the directory doesn't have it.
    pub fn proprietary_thumbnail_description(&self) -> MetadataResult<Option<String>> {
        self.byte_count_description(KyoceraTag::ProprietaryThumbnail)
    }

    fn byte_count_description(&self, tag: KyoceraTag) -> MetadataResult<Option<String>> {
        let tag_id = tag.tag_id();
        if !self.directory.contains_tag(tag_id) {
            log::trace!("No `{tag:?}` in directory. Nothing to describe.");
            return Ok(None);
        }

        let bytes: Vec<u8> = self.directory.get_byte_array(tag_id)?;
        Ok(Some(format!("({} bytes)", bytes.len())))
    }
}

impl TagDescriptor for KyoceraMakernoteDescriptor<'_> {
    fn directory(&self) -> &Directory {
        self.directory
    }

    fn description(&self, tag: u16) -> MetadataResult<Option<String>> {
        match KyoceraTag::try_from(tag) {
            Ok(KyoceraTag::PrintImageMatchingInfo) => self.print_image_matching_info_description(),
            Ok(KyoceraTag::ProprietaryThumbnail) => self.proprietary_thumbnail_description(),
            _ => self.directory.get_string(tag).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use raves_makernote_types::{
        exif::{
            FieldData,
            primitives::{Primitive, PrimitiveTy, Rational},
        },
        makernote::{DirectoryKind, kyocera::KyoceraTag},
    };

    use super::KyoceraMakernoteDescriptor;
    use crate::{
        descriptor::TagDescriptor, directory::Directory, error::MetadataError, util::logger,
    };

    const PIM: u16 = KyoceraTag::PrintImageMatchingInfo.tag_id();
    const THUMBNAIL: u16 = KyoceraTag::ProprietaryThumbnail.tag_id();

    fn blob(len: usize) -> FieldData {
        FieldData::from_bytes(PrimitiveTy::Undefined, &vec![0xaa_u8; len])
            .expect("undefined is byte-wide")
    }

    #[test]
    fn missing_blobs_have_no_description() {
        logger();
        let d = Directory::new(DirectoryKind::Kyocera);
        let descriptor = KyoceraMakernoteDescriptor::new(&d);

        assert_eq!(descriptor.description(PIM), Ok(None));
        assert_eq!(descriptor.description(THUMBNAIL), Ok(None));
    }

    #[test]
    fn each_blob_is_checked_on_its_own() {
        logger();
        let mut d = Directory::new(DirectoryKind::Kyocera);
        d.insert(PIM, blob(12));
        let descriptor = KyoceraMakernoteDescriptor::new(&d);

        assert_eq!(descriptor.description(PIM), Ok(Some("(12 bytes)".into())));
        assert_eq!(descriptor.description(THUMBNAIL), Ok(None));
    }

    #[test]
    fn blob_sizes() {
        logger();
        for len in [0_usize, 1, 2, 12, 1000, 65_536] {
            let mut d = Directory::new(DirectoryKind::Kyocera);
            d.insert(THUMBNAIL, blob(len));
            let descriptor = KyoceraMakernoteDescriptor::new(&d);

            assert_eq!(
                descriptor.proprietary_thumbnail_description(),
                Ok(Some(format!("({len} bytes)")))
            );
        }
    }

    #[test]
    fn empty_thumbnail_is_zero_bytes() {
        logger();
        let mut d = Directory::new(DirectoryKind::Kyocera);
        d.insert(THUMBNAIL, FieldData::None(PrimitiveTy::Undefined));

        assert_eq!(
            KyoceraMakernoteDescriptor::new(&d).description(THUMBNAIL),
            Ok(Some("(0 bytes)".into()))
        );
    }

    #[test]
    fn wrong_type_is_propagated() {
        logger();
        let mut d = Directory::new(DirectoryKind::Kyocera);
        d.insert(
            PIM,
            FieldData::Primitive(Primitive::Rational(Rational {
                numerator: 1,
                denominator: 2,
            })),
        );

        assert_eq!(
            KyoceraMakernoteDescriptor::new(&d).description(PIM),
            Err(MetadataError::IncompatibleType {
                tag: PIM,
                expected: "a byte array",
                found: PrimitiveTy::Rational,
            })
        );
    }

    #[test]
    fn other_tags_use_the_generic_rendering() {
        logger();
        let mut d = Directory::new(DirectoryKind::Kyocera);
        d.insert(0x0002, FieldData::from_ascii("N Digital"));
        d.insert(0x0003, FieldData::Primitive(Primitive::Short(400)));
        let descriptor = KyoceraMakernoteDescriptor::new(&d);

        for tag in [0x0002_u16, 0x0003] {
            assert_eq!(descriptor.description(tag), d.get_string(tag).map(Some));
        }
        assert_eq!(descriptor.description(0x0002), Ok(Some("N Digital".into())));
        assert_eq!(
            descriptor.description(0x0004),
            Err(MetadataError::TagNotFound { tag: 0x0004 })
        );
    }

    #[test]
    fn repeated_calls_agree() {
        logger();
        let mut d = Directory::new(DirectoryKind::Kyocera);
        d.insert(PIM, blob(3));
        let descriptor = KyoceraMakernoteDescriptor::new(&d);

        let first = descriptor.description(PIM);
        for _ in 0..5 {
            assert_eq!(descriptor.description(PIM), first);
        }
    }
}
