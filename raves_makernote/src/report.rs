//! A plain-text dump of every tag in a directory.
//!
//! Each line looks like:
//!
//! ```text
//! [Kyocera/Contax Makernote] Print Image Matching (PIM) Info - (12 bytes)
//! ```

use crate::{
    descriptor::{Descriptor, TagDescriptor},
    directory::Directory,
    error::MetadataResult,
};

/// What to do when a tag can't be described.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum ReportPolicy {
    /// Leave the tag out of the report and keep going.
    #[default]
    Skip,

    /// Stop at the first failure and return it.
    Abort,
}

/// One described tag.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct TagLine {
    /// The name of the directory the tag is from.
    pub directory: &'static str,
    pub tag: u16,
    pub tag_name: String,
    pub description: String,
}

impl core::fmt::Display for TagLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {} - {}", self.directory, self.tag_name, self.description)
    }
}

/// Describes one tag for the report.
///
/// A descriptor that has nothing to say falls back to the raw rendering, so
/// every populated tag still gets a line.
fn describe_tag<D: TagDescriptor>(descriptor: &D, tag: u16) -> MetadataResult<TagLine> {
    let directory = descriptor.directory();

    let description = match descriptor.description(tag)? {
        Some(description) => description,
        None => format!(
            "{} (unable to formulate description)",
            directory.get_string(tag)?
        ),
    };

    Ok(TagLine {
        directory: directory.name(),
        tag,
        tag_name: descriptor.tag_name(tag),
        description,
    })
}

/// Describes every populated tag in a directory, in insertion order.
///
/// # Errors
///
/// With [`ReportPolicy::Abort`], the first failure is returned. With
/// [`ReportPolicy::Skip`], this never fails.
pub fn describe_all(directory: &Directory, policy: ReportPolicy) -> MetadataResult<Vec<TagLine>> {
    describe_all_with(&Descriptor::for_directory(directory), policy)
}

/// Like [`describe_all`], but with a descriptor of the caller's choosing.
///
/// The descriptor's own directory is the one that gets walked.
///
/// # Errors
///
/// See [`describe_all`].
pub fn describe_all_with<D: TagDescriptor>(
    descriptor: &D,
    policy: ReportPolicy,
) -> MetadataResult<Vec<TagLine>> {
    let directory = descriptor.directory();
    let mut lines = Vec::with_capacity(directory.len());

    for tag in directory.tags() {
        match describe_tag(descriptor, tag) {
            Ok(line) => lines.push(line),

            Err(e) => match policy {
                ReportPolicy::Skip => {
                    log::warn!(
                        "Skipping `{}` in {} report. err: {e}",
                        directory.tag_name(tag),
                        directory.name()
                    );
                }
                ReportPolicy::Abort => {
                    log::error!("Aborting {} report! err: {e}", directory.name());
                    return Err(e);
                }
            },
        }
    }

    log::trace!("Described {} of {} tags.", lines.len(), directory.len());
    Ok(lines)
}

/// Renders a whole directory as text, one tag per line.
///
/// # Errors
///
/// See [`describe_all`].
pub fn render(directory: &Directory, policy: ReportPolicy) -> MetadataResult<String> {
    Ok(describe_all(directory, policy)?
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<String>>()
        .join("\n"))
}
