/// An enumeration of the possible values of a primitive.
///
/// Used in each IFD entry, including the ones found inside a MakerNote.
#[repr(u16)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum PrimitiveTy {
    Byte = 1,
    Ascii = 2,
    Short = 3,
    Long = 4,
    Rational = 5,
    SByte = 6,
    Undefined = 7,
    SShort = 8,
    SLong = 9,
    SRational = 10,
    Utf8 = 129,
}

impl PrimitiveTy {
    /// Grabs the primitive type's size in bytes.
    ///
    /// ```
    /// use raves_makernote_types::exif::primitives::PrimitiveTy;
    ///
    /// let slong: PrimitiveTy = PrimitiveTy::SLong;
    /// assert_eq!(slong.size_bytes(), 4_u8);
    /// ```
    pub const fn size_bytes(&self) -> u8 {
        match self {
            PrimitiveTy::Byte
            | PrimitiveTy::Ascii
            | PrimitiveTy::SByte
            | PrimitiveTy::Utf8
            | PrimitiveTy::Undefined => 1_u8,
            PrimitiveTy::Short | PrimitiveTy::SShort => 2_u8,
            PrimitiveTy::Long | PrimitiveTy::SLong => 4_u8,
            PrimitiveTy::Rational | PrimitiveTy::SRational => 8_u8,
        }
    }

    /// Whether values of this type are stored one byte at a time.
    ///
    /// Only these can be handed out as a raw byte array.
    ///
    /// ```
    /// use raves_makernote_types::exif::primitives::PrimitiveTy;
    ///
    /// assert!(PrimitiveTy::Undefined.is_byte_like());
    /// assert!(!PrimitiveTy::Short.is_byte_like());
    /// ```
    pub const fn is_byte_like(&self) -> bool {
        matches!(
            self,
            PrimitiveTy::Byte
                | PrimitiveTy::Ascii
                | PrimitiveTy::SByte
                | PrimitiveTy::Undefined
                | PrimitiveTy::Utf8
        )
    }

    /// Whether this type holds text.
    pub const fn is_text(&self) -> bool {
        matches!(self, PrimitiveTy::Ascii | PrimitiveTy::Utf8)
    }
}

impl TryFrom<u16> for PrimitiveTy {
    type Error = ();

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Byte),
            2 => Ok(Self::Ascii),
            3 => Ok(Self::Short),
            4 => Ok(Self::Long),
            5 => Ok(Self::Rational),
            6 => Ok(Self::SByte),
            7 => Ok(Self::Undefined),
            8 => Ok(Self::SShort),
            9 => Ok(Self::SLong),
            10 => Ok(Self::SRational),
            129 => Ok(Self::Utf8),

            _ => Err(()),
        }
    }
}

/// How many primitives a tag is expected to hold.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum PrimitiveCount {
    /// Exactly this many.
    Known(u32),

    /// Any number, including zero. Common for opaque blobs.
    Any,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum Primitive {
    Byte(Byte),
    Ascii(Ascii),
    Short(Short),
    Long(Long),
    Rational(Rational),
    SByte(SByte),
    Undefined(Undefined),
    SShort(SShort),
    SLong(SLong),
    SRational(SRational),
    Utf8(Utf8),
}

impl Primitive {
    /// Grabs the type describing this primitive.
    pub fn ty(&self) -> PrimitiveTy {
        match self {
            Primitive::Byte(_) => PrimitiveTy::Byte,
            Primitive::Ascii(_) => PrimitiveTy::Ascii,
            Primitive::Short(_) => PrimitiveTy::Short,
            Primitive::Long(_) => PrimitiveTy::Long,
            Primitive::Rational(_) => PrimitiveTy::Rational,
            Primitive::SByte(_) => PrimitiveTy::SByte,
            Primitive::Undefined(_) => PrimitiveTy::Undefined,
            Primitive::SShort(_) => PrimitiveTy::SShort,
            Primitive::SLong(_) => PrimitiveTy::SLong,
            Primitive::SRational(_) => PrimitiveTy::SRational,
            Primitive::Utf8(_) => PrimitiveTy::Utf8,
        }
    }

    /// Returns the raw byte, if this primitive is one byte wide.
    ///
    /// Signed bytes keep their bit pattern.
    pub fn as_byte(&self) -> Option<u8> {
        match *self {
            Primitive::Byte(b)
            | Primitive::Ascii(b)
            | Primitive::Undefined(b)
            | Primitive::Utf8(b) => Some(b),
            Primitive::SByte(b) => Some(b as u8),
            _ => None,
        }
    }

    /// Makes a byte-wide primitive of the given type.
    ///
    /// Returns `None` if `ty` isn't one byte wide.
    pub fn from_byte(ty: PrimitiveTy, byte: u8) -> Option<Self> {
        Some(match ty {
            PrimitiveTy::Byte => Primitive::Byte(byte),
            PrimitiveTy::Ascii => Primitive::Ascii(byte),
            PrimitiveTy::SByte => Primitive::SByte(byte as i8),
            PrimitiveTy::Undefined => Primitive::Undefined(byte),
            PrimitiveTy::Utf8 => Primitive::Utf8(byte),
            _ => return None,
        })
    }
}

/// Numeric primitives print as plain decimals. Text bytes print as their
/// code, since a lone byte of a string means nothing by itself.
impl core::fmt::Display for Primitive {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Primitive::Byte(v)
            | Primitive::Ascii(v)
            | Primitive::Undefined(v)
            | Primitive::Utf8(v) => write!(f, "{v}"),
            Primitive::SByte(v) => write!(f, "{v}"),
            Primitive::Short(v) => write!(f, "{v}"),
            Primitive::SShort(v) => write!(f, "{v}"),
            Primitive::Long(v) => write!(f, "{v}"),
            Primitive::SLong(v) => write!(f, "{v}"),
            Primitive::Rational(r) => write!(f, "{r}"),
            Primitive::SRational(r) => write!(f, "{r}"),
        }
    }
}

/// A `u8` to represent a byte.
pub type Byte = u8;

/// A single ASCII code.
pub type Ascii = u8;

/// A `u16`.
pub type Short = u16;

/// A `u32`.
pub type Long = u32;

/// A fraction that can't be negative.
///
/// Both the numerator (top number) and denominator (bottom number) are always
/// positive numbers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl core::fmt::Display for Rational {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A signed byte.
pub type SByte = i8;

/// A byte with no defined meaning.
///
/// MakerNotes use this type for their opaque blobs.
pub type Undefined = u8;

/// A signed short - just a `i16`.
pub type SShort = i16;

/// A signed long - just a `i32`.
pub type SLong = i32;

/// A signed fraction.
///
/// Both the numerator (top number) and denominator (bottom number) can be
/// negative.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl core::fmt::Display for SRational {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A single byte representing a part or whole UTF-8 codepoint.
pub type Utf8 = u8;

#[cfg(test)]
mod tests {
    use super::{Primitive, PrimitiveTy, Rational, SRational};

    #[test]
    fn type_codes_round_trip_through_u16() {
        for code in [1_u16, 2, 3, 4, 5, 6, 7, 8, 9, 10, 129] {
            let ty = PrimitiveTy::try_from(code).expect("known code");
            assert_eq!(ty as u16, code);
        }

        assert_eq!(PrimitiveTy::try_from(11_u16), Err(()));
        assert_eq!(PrimitiveTy::try_from(0_u16), Err(()));
    }

    #[test]
    fn rationals_display_as_fractions() {
        let r = Rational {
            numerator: 10,
            denominator: 3,
        };
        let s = SRational {
            numerator: -1,
            denominator: 2,
        };

        assert_eq!(r.to_string(), "10/3");
        assert_eq!(s.to_string(), "-1/2");
        assert_eq!(Primitive::SRational(s).to_string(), "-1/2");
    }

    #[test]
    fn signed_bytes_keep_their_bits() {
        let p = Primitive::from_byte(PrimitiveTy::SByte, 0xff).expect("byte-wide");
        assert_eq!(p, Primitive::SByte(-1));
        assert_eq!(p.as_byte(), Some(0xff));
        assert_eq!(Primitive::from_byte(PrimitiveTy::Long, 1), None);
    }
}
