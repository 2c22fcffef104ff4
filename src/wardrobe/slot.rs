//! Body slots an outfit canvas can hold a garment in

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::io::error::{WardrobeError, invalid_parameter};

/// One of the six fixed body regions of an outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySlot {
    /// Shirts, jumpers and other upper-body layers
    Top,
    /// Trousers, skirts and shorts
    Bottom,
    /// Jackets, coats and cardigans
    Outer,
    /// Footwear
    Shoes,
    /// Hats, bags, belts, scarves and anything uncategorised
    Accessory,
    /// One-piece garments covering top and bottom
    Full,
}

impl BodySlot {
    /// Every slot, in the order assignments are listed and saved
    pub const ALL: [Self; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Outer,
        Self::Shoes,
        Self::Accessory,
        Self::Full,
    ];

    /// Wire value used in JSON and on the command line
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Outer => "outer",
            Self::Shoes => "shoes",
            Self::Accessory => "accessory",
            Self::Full => "full",
        }
    }

    /// Human readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Outer => "Outerwear",
            Self::Shoes => "Shoes",
            Self::Accessory => "Accessories",
            Self::Full => "Full outfit",
        }
    }
}

impl fmt::Display for BodySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodySlot {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| {
                invalid_parameter(
                    "slot",
                    &s,
                    &"expected one of top, bottom, outer, shoes, accessory, full",
                )
            })
    }
}
