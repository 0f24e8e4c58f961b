//! Record type tables for both container dialects
//!
//! Each dialect numbers its element types `1..6`. The numeric codes are what
//! gets stored and compared, while the tags are what users see in reports.
//!
//! | Code | Ecl    | width | Roff     | width    |
//! | ---- | ------ | ----- | -------- | -------- |
//! | 1    | `INTE` | 4     | `int`    | 4        |
//! | 2    | `REAL` | 4     | `float`  | 4        |
//! | 3    | `DOUB` | 8     | `double` | 8        |
//! | 4    | `CHAR` | 8     | `char`   | variable |
//! | 5    | `LOGI` | 4     | `bool`   | 1        |
//! | 6    | `MESS` | 0     | `byte`   | 1        |
//! | -1   | `????` | -     |          |          |

// crate modules
use crate::dialect::Dialect;

// external crates
use serde::{Serialize, Serializer};

/// Element types of [Dialect::Ecl] records
///
/// Vendor extensions and newer simulators write types outside the classic
/// six, so anything unrecognised becomes [EclType::Unknown] rather than an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EclType {
    /// 4 byte signed integers
    Inte = 1,
    /// 4 byte floats
    Real = 2,
    /// 8 byte floats
    Doub = 3,
    /// 8 character strings
    Char = 4,
    /// 4 byte logicals
    Logi = 5,
    /// Message records with no data
    Mess = 6,
    /// Anything else
    Unknown = -1,
}

impl EclType {
    /// Type from a numeric code, [EclType::Unknown] if not in the table
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Inte,
            2 => Self::Real,
            3 => Self::Doub,
            4 => Self::Char,
            5 => Self::Logi,
            6 => Self::Mess,
            _ => Self::Unknown,
        }
    }

    /// Type from the 4 character tag stored in a record header
    ///
    /// ```rust
    /// # use restools_scan::EclType;
    /// assert_eq!(EclType::from_tag("DOUB"), EclType::Doub);
    /// assert_eq!(EclType::from_tag("C099"), EclType::Unknown);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "INTE" => Self::Inte,
            "REAL" => Self::Real,
            "DOUB" => Self::Doub,
            "CHAR" => Self::Char,
            "LOGI" => Self::Logi,
            "MESS" => Self::Mess,
            _ => Self::Unknown,
        }
    }

    /// Numeric type code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Symbolic tag, `????` for unknown types
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Inte => "INTE",
            Self::Real => "REAL",
            Self::Doub => "DOUB",
            Self::Char => "CHAR",
            Self::Logi => "LOGI",
            Self::Mess => "MESS",
            Self::Unknown => "????",
        }
    }

    /// Bytes per element, `None` when the type is not known
    pub fn width(&self) -> Option<u64> {
        match self {
            Self::Inte | Self::Real | Self::Logi => Some(4),
            Self::Doub | Self::Char => Some(8),
            Self::Mess => Some(0),
            Self::Unknown => None,
        }
    }
}

/// Element types of [Dialect::Roff] records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoffType {
    /// 4 byte signed integers
    Int = 1,
    /// 4 byte floats
    Float = 2,
    /// 8 byte floats
    Double = 3,
    /// Null terminated strings
    Char = 4,
    /// Single byte booleans
    Bool = 5,
    /// Raw bytes
    Byte = 6,
}

impl RoffType {
    /// Type from a numeric code, `None` if not in the table
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Int),
            2 => Some(Self::Float),
            3 => Some(Self::Double),
            4 => Some(Self::Char),
            5 => Some(Self::Bool),
            6 => Some(Self::Byte),
            _ => None,
        }
    }

    /// Type from the token written before a key name
    ///
    /// ```rust
    /// # use restools_scan::RoffType;
    /// assert_eq!(RoffType::from_tag("float"), Some(RoffType::Float));
    /// assert_eq!(RoffType::from_tag("short"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "char" => Some(Self::Char),
            "bool" => Some(Self::Bool),
            "byte" => Some(Self::Byte),
            _ => None,
        }
    }

    /// Numeric type code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Symbolic tag as written in the file
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::Byte => "byte",
        }
    }

    /// Bytes per element, `None` for variable length strings
    pub fn width(&self) -> Option<u64> {
        match self {
            Self::Int | Self::Float => Some(4),
            Self::Double => Some(8),
            Self::Bool | Self::Byte => Some(1),
            Self::Char => None,
        }
    }
}

/// Type of a record from either dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Record from a [Dialect::Ecl] file
    Ecl(EclType),
    /// Record from a [Dialect::Roff] file
    Roff(RoffType),
}

impl RecordType {
    /// Symbolic tag for reports, e.g. `INTE`, `float`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Ecl(kind) => kind.tag(),
            Self::Roff(kind) => kind.tag(),
        }
    }

    /// Numeric code within the owning dialect's table
    pub fn code(&self) -> i32 {
        match self {
            Self::Ecl(kind) => kind.code(),
            Self::Roff(kind) => kind.code(),
        }
    }

    /// Bytes per element where fixed
    pub fn width(&self) -> Option<u64> {
        match self {
            Self::Ecl(kind) => kind.width(),
            Self::Roff(kind) => kind.width(),
        }
    }

    /// Dialect the type table belongs to
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::Ecl(_) => Dialect::Ecl,
            Self::Roff(_) => Dialect::Roff,
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// Reports only ever want the tag
impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}
