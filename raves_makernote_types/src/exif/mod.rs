use crate::exif::primitives::{Primitive, PrimitiveTy};

pub mod primitives;

/// One decoded entry of a MakerNote IFD.
///
/// Upstream parsers hand these over once they've resolved offsets and byte
/// order. The tag is kept raw, since its meaning depends on which MakerNote
/// it came from.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct Field {
    /// A number to identify the field we're talking about.
    pub tag: u16,

    /// Data stored with this tag.
    ///
    /// The data also specifies the type of primitive used, and how many we're
    /// storing.
    pub data: FieldData,
}

impl Field {
    /// How many primitives are present in the field.
    pub fn count(&self) -> u32 {
        self.data.count()
    }

    /// Describes which primitive is stored inside.
    pub fn ty(&self) -> PrimitiveTy {
        self.data.ty()
    }
}

/// Data associated with a field.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum FieldData {
    /// There's no primitive stored here.
    None(PrimitiveTy),

    /// Stores one primitive.
    Primitive(Primitive),

    /// Stores a number of primitives.
    List {
        /// The actual list of primitives.
        list: Vec<Primitive>,

        /// The type of primitive we're storing.
        ty: PrimitiveTy,
    },
}

impl FieldData {
    /// How many primitives are stored.
    pub fn count(&self) -> u32 {
        match self {
            FieldData::None(_) => 0_u32,
            FieldData::Primitive(_) => 1_u32,
            FieldData::List { list, .. } => list.len() as u32,
        }
    }

    /// The primitive type of the stored data.
    pub fn ty(&self) -> PrimitiveTy {
        match self {
            FieldData::None(primitive_ty) => *primitive_ty,
            FieldData::Primitive(primitive) => primitive.ty(),
            FieldData::List { ty, .. } => *ty,
        }
    }

    /// All stored primitives, in order.
    pub fn primitives(&self) -> &[Primitive] {
        match self {
            FieldData::None(_) => &[],
            FieldData::Primitive(p) => core::slice::from_ref(p),
            FieldData::List { list, .. } => list.as_slice(),
        }
    }

    /// Wraps a blob of bytes as data of a byte-wide type.
    ///
    /// Returns `None` when `ty` isn't one byte wide.
    ///
    /// ```
    /// use raves_makernote_types::exif::{FieldData, primitives::PrimitiveTy};
    ///
    /// let data = FieldData::from_bytes(PrimitiveTy::Undefined, &[1, 2, 3]).unwrap();
    /// assert_eq!(data.count(), 3);
    ///
    /// let empty = FieldData::from_bytes(PrimitiveTy::Undefined, &[]).unwrap();
    /// assert_eq!(empty, FieldData::None(PrimitiveTy::Undefined));
    ///
    /// assert!(FieldData::from_bytes(PrimitiveTy::Short, &[1, 2]).is_none());
    /// ```
    pub fn from_bytes(ty: PrimitiveTy, bytes: &[u8]) -> Option<Self> {
        if !ty.is_byte_like() {
            return None;
        }

        let mut list = bytes
            .iter()
            .map(|b| Primitive::from_byte(ty, *b))
            .collect::<Option<Vec<Primitive>>>()?;

        Some(match list.len() {
            0 => FieldData::None(ty),
            1 => FieldData::Primitive(list.remove(0)),
            _ => FieldData::List { list, ty },
        })
    }

    /// Wraps a string as `Ascii` data, with its NUL terminator.
    pub fn from_ascii(text: &str) -> Self {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);

        FieldData::List {
            list: bytes.into_iter().map(Primitive::Ascii).collect(),
            ty: PrimitiveTy::Ascii,
        }
    }
}
