use serde::Serialize;

use crate::error::AgeUnavailable;

/// Cell text written for an age that could not be inferred.
pub const AGE_UNAVAILABLE: &str = "N/A";

/// Outcome of an age inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeResult {
    Known(u32),
    Unavailable(AgeUnavailable),
}

impl AgeResult {
    pub fn age(self) -> Option<u32> {
        match self {
            Self::Known(age) => Some(age),
            Self::Unavailable(_) => None,
        }
    }

    /// Renders the age, or `sentinel` when it is unavailable.
    pub fn render(self, sentinel: &str) -> String {
        match self {
            Self::Known(age) => age.to_string(),
            Self::Unavailable(_) => sentinel.to_string(),
        }
    }
}

impl From<AgeUnavailable> for AgeResult {
    fn from(reason: AgeUnavailable) -> Self {
        Self::Unavailable(reason)
    }
}
