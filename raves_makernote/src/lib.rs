//! # `raves_makernote`
//!
//! Human-readable descriptions for the tags inside camera MakerNotes.
//!
//! A decoder hands us a [`Directory`](directory::Directory) full of already
//! decoded values. We pick the matching
//! [`Descriptor`](descriptor::Descriptor) for its kind and ask it to describe
//! each tag. Most tags just print their value, but some (like Kyocera's
//! opaque blobs) get special treatment.
//!
//! ```
//! use raves_makernote::{
//!     descriptor::{Descriptor, TagDescriptor},
//!     directory::Directory,
//! };
//! use raves_makernote_types::{
//!     exif::{FieldData, primitives::PrimitiveTy},
//!     makernote::{DirectoryKind, kyocera::KyoceraTag},
//! };
//!
//! let mut directory = Directory::new(DirectoryKind::Kyocera);
//! directory.insert(
//!     KyoceraTag::PrintImageMatchingInfo.tag_id(),
//!     FieldData::from_bytes(PrimitiveTy::Undefined, &[0; 12]).unwrap(),
//! );
//!
//! let descriptor = Descriptor::for_directory(&directory);
//! assert_eq!(
//!     descriptor.description(KyoceraTag::PrintImageMatchingInfo.tag_id()),
//!     Ok(Some("(12 bytes)".to_string()))
//! );
//! ```
//!
//! ## License
//!
//! This project is dual-licensed under either the Apache License 2.0 or the MIT License at your option.

#![forbid(unsafe_code)]

use std::sync::Arc;

use parking_lot::RwLock;
use raves_makernote_types::makernote::DirectoryKind;

use crate::{
    directory::Directory,
    error::MetadataResult,
    report::{ReportPolicy, TagLine},
};

pub mod descriptor;
pub mod directory;
pub mod error;
pub mod report;

/// A directory that can be shared between threads.
///
/// Describing only ever takes a read lock.
pub type SharedDirectory = Arc<RwLock<Directory>>;

/// All the directories found in one file.
#[derive(Clone, Debug, Default)]
pub struct Metadata {
    directories: Vec<SharedDirectory>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory, returning a handle to it.
    pub fn push(&mut self, directory: Directory) -> SharedDirectory {
        let shared: SharedDirectory = Arc::new(RwLock::new(directory));
        self.directories.push(Arc::clone(&shared)); // cheap clone.
        shared
    }

    /// Every directory, in the order they were added.
    pub fn directories(&self) -> &[SharedDirectory] {
        self.directories.as_slice()
    }

    /// Finds the first directory of the given kind.
    pub fn find(&self, kind: DirectoryKind) -> Option<SharedDirectory> {
        self.directories
            .iter()
            .find(|d| d.read().kind() == kind)
            .map(Arc::clone)
    }

    /// Describes every tag in every directory.
    ///
    /// # Errors
    ///
    /// With [`ReportPolicy::Abort`], the first failure in any directory is
    /// returned.
    pub fn report(&self, policy: ReportPolicy) -> MetadataResult<Vec<TagLine>> {
        let mut lines = Vec::new();
        for directory in &self.directories {
            let locked = directory.read();
            log::trace!("Describing {}...", locked.name());
            lines.extend(report::describe_all(&locked, policy)?);
        }
        Ok(lines)
    }
}

/// Internal utility methods.
pub(crate) mod util {
    /// Helper function to initialize the logger for testing.
    #[cfg(test)]
    pub fn logger() {
        _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::max())
            .format_file(true)
            .format_line_number(true)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use raves_makernote_types::{
        exif::{FieldData, primitives::PrimitiveTy},
        makernote::{DirectoryKind, kyocera::KyoceraTag},
    };

    use crate::{Metadata, directory::Directory, report::ReportPolicy, util::logger};

    #[test]
    fn reports_span_directories() {
        logger();
        let mut kyocera = Directory::new(DirectoryKind::Kyocera);
        kyocera.insert(
            KyoceraTag::ProprietaryThumbnail.tag_id(),
            FieldData::from_bytes(PrimitiveTy::Undefined, &[1, 2]).expect("byte-wide"),
        );
        let mut generic = Directory::new(DirectoryKind::Generic);
        generic.insert(0x0110, FieldData::from_ascii("KC-N"));

        let mut metadata = Metadata::new();
        metadata.push(kyocera);
        metadata.push(generic);

        let lines: Vec<String> = metadata
            .report(ReportPolicy::Abort)
            .expect("all tags are describable")
            .iter()
            .map(|l| l.to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "[Kyocera/Contax Makernote] Proprietary Thumbnail Format Data - (2 bytes)",
                "[Generic] Unknown tag (0x0110) - KC-N",
            ]
        );
    }

    #[test]
    fn find_returns_the_same_directory() {
        logger();
        let mut metadata = Metadata::new();
        let pushed = metadata.push(Directory::new(DirectoryKind::Kyocera));

        let found = metadata.find(DirectoryKind::Kyocera).expect("was pushed");
        assert!(Arc::ptr_eq(&pushed, &found));
        assert!(metadata.find(DirectoryKind::Generic).is_none());
        assert_eq!(metadata.directories().len(), 1);
    }
}
