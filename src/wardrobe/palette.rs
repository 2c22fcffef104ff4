//! Garment colours and the static colour-clash rules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::io::error::{WardrobeError, invalid_parameter};

/// Closed colour palette; wire values follow the stored garment rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    /// nero
    #[serde(rename = "nero")]
    Black,
    /// bianco
    #[serde(rename = "bianco")]
    White,
    /// grigio
    #[serde(rename = "grigio")]
    Grey,
    /// blu
    #[serde(rename = "blu")]
    Blue,
    /// azzurro
    #[serde(rename = "azzurro")]
    LightBlue,
    /// rosso
    #[serde(rename = "rosso")]
    Red,
    /// verde
    #[serde(rename = "verde")]
    Green,
    /// giallo
    #[serde(rename = "giallo")]
    Yellow,
    /// arancione
    #[serde(rename = "arancione")]
    Orange,
    /// viola
    #[serde(rename = "viola")]
    Purple,
    /// rosa
    #[serde(rename = "rosa")]
    Pink,
    /// beige
    #[serde(rename = "beige")]
    Beige,
    /// marrone
    #[serde(rename = "marrone")]
    Brown,
    /// bordeaux
    #[serde(rename = "bordeaux")]
    Burgundy,
    /// multicolore
    #[serde(rename = "multicolore")]
    Multicolor,
}

impl Color {
    /// Palette order, used when listing the colours in use
    pub const ALL: [Self; 15] = [
        Self::Black,
        Self::White,
        Self::Grey,
        Self::Blue,
        Self::LightBlue,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
        Self::Pink,
        Self::Beige,
        Self::Brown,
        Self::Burgundy,
        Self::Multicolor,
    ];

    /// Stored value of the colour
    pub const fn value(self) -> &'static str {
        match self {
            Self::Black => "nero",
            Self::White => "bianco",
            Self::Grey => "grigio",
            Self::Blue => "blu",
            Self::LightBlue => "azzurro",
            Self::Red => "rosso",
            Self::Green => "verde",
            Self::Yellow => "giallo",
            Self::Orange => "arancione",
            Self::Purple => "viola",
            Self::Pink => "rosa",
            Self::Beige => "beige",
            Self::Brown => "marrone",
            Self::Burgundy => "bordeaux",
            Self::Multicolor => "multicolore",
        }
    }

    /// Display label of the colour
    pub const fn label(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
            Self::Grey => "Grey",
            Self::Blue => "Blue",
            Self::LightBlue => "Light blue",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
            Self::Pink => "Pink",
            Self::Beige => "Beige",
            Self::Brown => "Brown",
            Self::Burgundy => "Burgundy",
            Self::Multicolor => "Multicolour",
        }
    }

    /// Swatch shown next to the colour name
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Black => "#1f1f1f",
            Self::White => "#f6f2ea",
            Self::Grey => "#9b9b9b",
            Self::Blue => "#2b4a78",
            Self::LightBlue => "#7fb8d4",
            Self::Red => "#b13a2f",
            Self::Green => "#3d6b3d",
            Self::Yellow => "#e0b44c",
            Self::Orange => "#d9792d",
            Self::Purple => "#6b4b8a",
            Self::Pink => "#d99aa7",
            Self::Beige => "#d7c5a5",
            Self::Brown => "#6b4f3a",
            Self::Burgundy => "#5a1e2d",
            Self::Multicolor => "#8c8c8c",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Color {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.value() == s)
            .ok_or_else(|| invalid_parameter("color", &s, &"not a palette colour"))
    }
}

/// Colour pairs considered visually incompatible (unordered)
pub const CLASH_PAIRS: [(Color, Color); 3] = [
    (Color::Red, Color::Green),
    (Color::Purple, Color::Yellow),
    (Color::Orange, Color::Pink),
];

/// Test whether two colours form a clash pair, in either order
pub fn colors_clash(a: Color, b: Color) -> bool {
    CLASH_PAIRS
        .iter()
        .any(|&(first, second)| (a == first && b == second) || (a == second && b == first))
}

/// Test whether any two colours of a selection clash
pub fn has_clash(colors: &[Color]) -> bool {
    colors.iter().enumerate().any(|(i, &a)| {
        colors
            .iter()
            .skip(i + 1)
            .any(|&b| colors_clash(a, b))
    })
}

/// Human readable "no-go" hints for every clash pair
pub fn clash_labels() -> Vec<String> {
    CLASH_PAIRS
        .iter()
        .map(|(first, second)| format!("No-go: {first} + {second}"))
        .collect()
}
