//! Font selection for input field labels and values.
//!
//! A [`Font`] names a family, weight and base pixel size. Per-field scales are applied on
//! top of the base size by the field itself, so one font can serve both title and value.

use cosmic_text::{Attrs, Family, Weight};

/// Font family specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// Sans-serif font (default system sans-serif)
    #[default]
    SansSerif,
    /// Serif font (default system serif)
    Serif,
    /// Monospace font (default system monospace)
    Monospace,
    /// Custom font by name
    Name(String),
}

impl FontFamily {
    /// Convert to cosmic-text Family type for shaping.
    pub fn to_cosmic(&self) -> Family<'_> {
        match self {
            FontFamily::SansSerif => Family::SansSerif,
            FontFamily::Serif => Family::Serif,
            FontFamily::Monospace => Family::Monospace,
            FontFamily::Name(name) => Family::Name(name),
        }
    }
}

/// Font weight on a 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const BOLD: Self = Self(700);

    pub fn to_cosmic(self) -> Weight {
        Weight(self.0)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A loaded font: family, weight and base size in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: f32,
}

impl Font {
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            weight: FontWeight::NORMAL,
            size,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Shaping attributes for cosmic-text.
    pub fn attrs(&self) -> Attrs<'_> {
        Attrs::new()
            .family(self.family.to_cosmic())
            .weight(self.weight.to_cosmic())
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 24.0)
    }
}
