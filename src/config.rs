use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lower bound used when reporting indices back to callers.
///
/// The host model code indexes its arrays from 1, so that is the default.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IndexBase {
    Zero,
    One,
    Custom(isize),
}

impl Default for IndexBase {
    fn default() -> Self {
        IndexBase::One
    }
}

impl IndexBase {
    pub fn lower_bound(&self) -> isize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
            IndexBase::Custom(lb) => *lb,
        }
    }
}

impl FromStr for IndexBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" => Ok(IndexBase::Zero),
            "one" => Ok(IndexBase::One),
            other => other.parse::<isize>().map(IndexBase::Custom).map_err(|_| {
                format!(
                    "Unknown index base: {}. Expected `zero`, `one` or an integer lower bound",
                    s
                )
            }),
        }
    }
}

impl From<isize> for IndexBase {
    fn from(lb: isize) -> Self {
        match lb {
            0 => IndexBase::Zero,
            1 => IndexBase::One,
            other => IndexBase::Custom(other),
        }
    }
}
