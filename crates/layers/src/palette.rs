use foundation::color::Rgb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub category: String,
    pub color: Rgb,
}

/// POI circle colors by exact category name, with a fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoiPalette {
    pub entries: Vec<PaletteEntry>,
    pub fallback: Rgb,
}

const DEFAULT_ENTRIES: &[(&str, Rgb)] = &[
    ("Restaurant", Rgb::new(0xff, 0x99, 0x00)),
    ("Cafe", Rgb::new(0xcc, 0x66, 0x00)),
    ("Bar", Rgb::new(0x99, 0x00, 0x99)),
    ("Fast Food", Rgb::new(0xff, 0x66, 0x00)),
    ("Shop", Rgb::new(0x00, 0x66, 0xff)),
    ("Grocery", Rgb::new(0x00, 0xcc, 0x00)),
    ("Mall", Rgb::new(0x33, 0x66, 0xff)),
    ("Market", Rgb::new(0x00, 0x99, 0x33)),
    ("Museum", Rgb::new(0xcc, 0x33, 0x00)),
    ("Theater", Rgb::new(0xcc, 0x00, 0x66)),
    ("Cinema", Rgb::new(0x99, 0x00, 0x33)),
    ("Gallery", Rgb::new(0xcc, 0x33, 0x66)),
    ("Park", Rgb::new(0x33, 0xcc, 0x33)),
    ("Garden", Rgb::new(0x33, 0x99, 0x33)),
    ("Sports", Rgb::new(0x33, 0x99, 0xff)),
    ("Hotel", Rgb::new(0x99, 0x33, 0xff)),
    ("Bank", Rgb::new(0x66, 0x66, 0x99)),
    ("Post", Rgb::new(0x66, 0x66, 0x66)),
    ("School", Rgb::new(0xff, 0x33, 0x33)),
    ("Hospital", Rgb::new(0xff, 0x00, 0x00)),
];

impl Default for PoiPalette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(category, color)| PaletteEntry {
                    category: (*category).to_string(),
                    color: *color,
                })
                .collect(),
            fallback: Rgb::new(0x99, 0x99, 0x99),
        }
    }
}

impl PoiPalette {
    /// First entry wins when a category is listed twice.
    pub fn color_for(&self, category: &str) -> Rgb {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.color)
            .unwrap_or(self.fallback)
    }

    /// Adds or replaces the color for `category`.
    pub fn set(&mut self, category: impl Into<String>, color: Rgb) {
        let category = category.into();
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.color = color,
            None => self.entries.push(PaletteEntry { category, color }),
        }
    }
}
