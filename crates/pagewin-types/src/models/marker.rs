//! Page markers: one entry of the rendered page-number row.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const ELLIPSIS_TAG: &str = "ellipsis";

/// One entry in the page-number row.
///
/// On the wire a concrete page is its number and an ellipsis is the string
/// `"ellipsis"`, so a marker list reads as `[1, "ellipsis", 8, 9, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// Concrete, clickable page number (1-based)
    Page(usize),
    /// Gap indicator standing in for hidden pages; carries no page number
    Ellipsis,
}

impl PageMarker {
    /// Page number for concrete markers, `None` for an ellipsis.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }

    /// Returns true if this marker is a gap indicator.
    pub fn is_ellipsis(self) -> bool {
        self == Self::Ellipsis
    }
}

impl From<usize> for PageMarker {
    fn from(page: usize) -> Self {
        Self::Page(page)
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Page(n) => write!(f, "{}", n),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Page(n) => n.serialize(serializer),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS_TAG),
        }
    }
}

impl<'de> Deserialize<'de> for PageMarker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Page(usize),
            Tag(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Page(n) => Ok(Self::Page(n)),
            Repr::Tag(tag) if tag == ELLIPSIS_TAG => Ok(Self::Ellipsis),
            Repr::Tag(other) => Err(serde::de::Error::custom(format!(
                "unknown page marker `{}`, expected a page number or `{}`",
                other, ELLIPSIS_TAG
            ))),
        }
    }
}
