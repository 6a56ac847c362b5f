use std::fmt::Display;
use std::str::FromStr;

use crate::error::ParseEndianError;

#[cfg(not(any(target_endian = "big", target_endian = "little")))]
compile_error!("unsupported target: byte order is neither big nor little endian");

/// `true` when the target stores the most-significant byte first.
pub const IS_BIG_ENDIAN: bool = cfg!(target_endian = "big");

/// `true` when the target stores the least-significant byte first.
pub const IS_LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

const _: () = assert!(IS_BIG_ENDIAN != IS_LITTLE_ENDIAN);

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum Endian {
    Big,
    Little,
}

impl Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_big() { "BE" } else { "LE" })
    }
}

impl FromStr for Endian {
    type Err = ParseEndianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "be" | "big" | "big-endian" | "network" => Ok(Self::Big),
            "le" | "little" | "little-endian" => Ok(Self::Little),
            "native" => Ok(Self::HOST),
            _ => Err(ParseEndianError(s.to_owned())),
        }
    }
}

impl Default for Endian {
    fn default() -> Self {
        Self::HOST
    }
}

impl Endian {
    /// The byte order of the target this crate was compiled for.
    pub const HOST: Self = if IS_BIG_ENDIAN { Self::Big } else { Self::Little };

    pub const fn native() -> Self {
        Self::HOST
    }

    /// Network byte order, i.e., big-endian.
    pub const fn network() -> Self {
        Self::Big
    }

    pub const fn is_big(&self) -> bool {
        matches!(self, Self::Big)
    }

    pub const fn is_little(&self) -> bool {
        matches!(self, Self::Little)
    }

    /// `true` if values in this order can be copied without reversing their bytes.
    pub const fn is_native(&self) -> bool {
        self.is_big() == IS_BIG_ENDIAN
    }

    pub const fn swapped(&self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }
}
