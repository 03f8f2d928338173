//! # `raves_makernote_types`
//!
//! Plain data types shared by `raves_makernote`: Exif primitives, decoded
//! field data, and the tag tables for each supported MakerNote.
//!
//! Nothing in here parses or describes anything. It's just the vocabulary.

#![forbid(unsafe_code)]

pub mod exif;
pub mod makernote;
