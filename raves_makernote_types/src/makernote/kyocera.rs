//! Tags in the Kyocera MakerNote.
//!
//! Kyocera (and Contax, which shares its cameras) only documents two tags,
//! and both are opaque blobs. See
//! <http://www.ozhiker.com/electronics/pjmt/jpeg_info/kyocera_mn.html>.

use super::DirectoryKind;
use crate::exif::primitives::{PrimitiveCount, PrimitiveTy};

use {PrimitiveCount as Pc, PrimitiveTy as Pt};

make_tag_list!(enum KyoceraTag => DirectoryKind::Kyocera,
    /// A thumbnail in Kyocera's own format.
    ProprietaryThumbnail = 0x0001 => {
        name: "Proprietary Thumbnail Format Data",
        types: &[Pt::Undefined],
        count: Pc::Any,
    },
    /// Epson's Print Image Matching calibration data.
    PrintImageMatchingInfo = 0x0E00 => {
        name: "Print Image Matching (PIM) Info",
        types: &[Pt::Undefined],
        count: Pc::Any,
    },
);
