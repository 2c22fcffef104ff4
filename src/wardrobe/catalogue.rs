//! Fixed garment vocabularies: categories, seasons, formality and occasions
//!
//! Categories stay plain strings on the garment so rows written by other
//! clients still load; the static table below decides which body slot a
//! category belongs to.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::io::error::{WardrobeError, invalid_parameter};
use crate::wardrobe::slot::BodySlot;

/// One entry of the category catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Stored category value
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
    /// Body slot garments of this category occupy
    pub slot: BodySlot,
}

const fn category(value: &'static str, label: &'static str, slot: BodySlot) -> CategoryInfo {
    CategoryInfo { value, label, slot }
}

/// Every known category in catalogue order
pub const CATEGORIES: [CategoryInfo; 27] = [
    category("t-shirt", "T-shirt", BodySlot::Top),
    category("camicia", "Shirt", BodySlot::Top),
    category("polo", "Polo", BodySlot::Top),
    category("maglia", "Knit top", BodySlot::Top),
    category("felpa", "Sweatshirt", BodySlot::Top),
    category("maglione", "Sweater", BodySlot::Top),
    category("cardigan", "Cardigan", BodySlot::Outer),
    category("giacca", "Jacket", BodySlot::Outer),
    category("blazer", "Blazer", BodySlot::Outer),
    category("cappotto", "Coat", BodySlot::Outer),
    category("piumino", "Down jacket", BodySlot::Outer),
    category("pantaloni", "Trousers", BodySlot::Bottom),
    category("jeans", "Jeans", BodySlot::Bottom),
    category("chino", "Chinos", BodySlot::Bottom),
    category("shorts", "Shorts", BodySlot::Bottom),
    category("gonna", "Skirt", BodySlot::Bottom),
    category("abito", "Dress", BodySlot::Full),
    category("tuta", "Jumpsuit", BodySlot::Full),
    category("scarpe", "Shoes", BodySlot::Shoes),
    category("sneakers", "Sneakers", BodySlot::Shoes),
    category("stivali", "Boots", BodySlot::Shoes),
    category("sandali", "Sandals", BodySlot::Shoes),
    category("accessorio", "Accessory", BodySlot::Accessory),
    category("cappello", "Hat", BodySlot::Accessory),
    category("sciarpa", "Scarf", BodySlot::Accessory),
    category("borsa", "Bag", BodySlot::Accessory),
    category("cintura", "Belt", BodySlot::Accessory),
];

/// Look up a category in the catalogue
pub fn category_info(value: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|info| info.value == value)
}

/// Map a category to its body slot; unknown categories are accessories
pub fn category_to_slot(value: &str) -> BodySlot {
    category_info(value).map_or(BodySlot::Accessory, |info| info.slot)
}

/// Season tag of a garment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// primavera
    #[serde(rename = "primavera")]
    Spring,
    /// estate
    #[serde(rename = "estate")]
    Summer,
    /// autunno
    #[serde(rename = "autunno")]
    Autumn,
    /// inverno
    #[serde(rename = "inverno")]
    Winter,
    /// tutto-anno
    #[serde(rename = "tutto-anno")]
    AllYear,
}

impl Season {
    /// Every season tag
    pub const ALL: [Self; 5] = [
        Self::Spring,
        Self::Summer,
        Self::Autumn,
        Self::Winter,
        Self::AllYear,
    ];

    /// Stored value of the season
    pub const fn value(self) -> &'static str {
        match self {
            Self::Spring => "primavera",
            Self::Summer => "estate",
            Self::Autumn => "autunno",
            Self::Winter => "inverno",
            Self::AllYear => "tutto-anno",
        }
    }
}

impl FromStr for Season {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|season| season.value() == s)
            .ok_or_else(|| invalid_parameter("season", &s, &"not a known season"))
    }
}

/// How dressy a garment is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    /// casual
    Casual,
    /// smart-casual
    SmartCasual,
    /// business
    Business,
    /// elegante
    #[serde(rename = "elegante")]
    Elegant,
    /// sport
    Sport,
    /// home
    Home,
}

/// Occasion a garment suits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occasion {
    /// lavoro
    #[serde(rename = "lavoro")]
    Work,
    /// ufficio
    #[serde(rename = "ufficio")]
    Office,
    /// weekend
    #[serde(rename = "weekend")]
    Weekend,
    /// serata
    #[serde(rename = "serata")]
    Evening,
    /// cerimonia
    #[serde(rename = "cerimonia")]
    Ceremony,
    /// viaggio
    #[serde(rename = "viaggio")]
    Travel,
    /// allenamento
    #[serde(rename = "allenamento")]
    Training,
    /// casa
    #[serde(rename = "casa")]
    Home,
}
