//! Container dialect selection

// crate modules
use crate::error::Error;
use crate::kind::{EclType, RecordType, RoffType};

// standard library
use std::str::FromStr;

/// The binary container layouts that can be scanned
///
/// There is no auto-detection. The caller decides which layout a file uses,
/// either directly or by parsing a name:
///
/// ```rust
/// # use restools_scan::Dialect;
/// assert_eq!("ecl".parse::<Dialect>().unwrap(), Dialect::Ecl);
/// assert_eq!("ROFF".parse::<Dialect>().unwrap(), Dialect::Roff);
/// assert!("segy".parse::<Dialect>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Big-endian Fortran records of restart/init style simulator output
    Ecl,
    /// Binary ROFF grid exchange files
    Roff,
}

impl Dialect {
    /// Translate a numeric type code into the dialect's symbolic type
    ///
    /// The `Ecl` table is not exhaustive, so unrecognised codes map to
    /// [EclType::Unknown]. The `Roff` table is complete by format definition
    /// and anything else is `None`.
    ///
    /// ```rust
    /// # use restools_scan::{Dialect, EclType, RecordType, RoffType};
    /// assert_eq!(Dialect::Ecl.lookup(2), Some(RecordType::Ecl(EclType::Real)));
    /// assert_eq!(Dialect::Ecl.lookup(42), Some(RecordType::Ecl(EclType::Unknown)));
    /// assert_eq!(Dialect::Roff.lookup(6), Some(RecordType::Roff(RoffType::Byte)));
    /// assert_eq!(Dialect::Roff.lookup(42), None);
    /// ```
    pub fn lookup(&self, code: i32) -> Option<RecordType> {
        match self {
            Dialect::Ecl => Some(RecordType::Ecl(EclType::from_code(code))),
            Dialect::Roff => RoffType::from_code(code).map(RecordType::Roff),
        }
    }

    /// Short lowercase name, i.e. 'ecl', 'roff'
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Ecl => "ecl",
            Dialect::Roff => "roff",
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ecl" | "xecl" | "eclipse" => Ok(Dialect::Ecl),
            "roff" | "roff_binary" | "roffbin" => Ok(Dialect::Roff),
            _ => Err(Error::UnsupportedDialect(s.to_string())),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
