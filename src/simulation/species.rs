//! The twelve creature species and their color classes.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Color class shared by a group of related species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorClass {
    /// Fungal species (brown).
    Fungi,
    /// Bacterial species (green).
    Bacteria,
    /// Arthropod species (orange).
    Arthropods,
    /// Worm-like species (pink).
    Worms,
}

impl ColorClass {
    /// All classes in display order.
    pub const ALL: [ColorClass; 4] = [
        ColorClass::Fungi,
        ColorClass::Bacteria,
        ColorClass::Arthropods,
        ColorClass::Worms,
    ];

    /// Display color as an RGB triple.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ColorClass::Fungi => [166, 118, 72],
            ColorClass::Bacteria => [96, 200, 110],
            ColorClass::Arthropods => [240, 150, 50],
            ColorClass::Worms => [230, 120, 170],
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            ColorClass::Fungi => "Fungi",
            ColorClass::Bacteria => "Bacteria",
            ColorClass::Arthropods => "Arthropods",
            ColorClass::Worms => "Worms",
        }
    }
}

/// One of the twelve fixed creature species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Root-associated fungus.
    Mycorrhiza,
    /// Saprophytic mold.
    Mold,
    /// Single-celled fungus.
    Yeast,
    /// Nitrogen-fixing bacterium.
    Rhizobium,
    /// Filamentous soil bacterium.
    Actinomycete,
    /// Photosynthetic bacterium.
    Cyanobacterium,
    /// Tiny hexapod.
    Springtail,
    /// Soil mite.
    Mite,
    /// Ground beetle.
    Beetle,
    /// Earthworm.
    Earthworm,
    /// Small white worm.
    Potworm,
    /// Roundworm.
    Nematode,
}

/// Species to color class, indexed by [`Species::index`].
const COLOR_CLASSES: [(Species, ColorClass); 12] = [
    (Species::Mycorrhiza, ColorClass::Fungi),
    (Species::Mold, ColorClass::Fungi),
    (Species::Yeast, ColorClass::Fungi),
    (Species::Rhizobium, ColorClass::Bacteria),
    (Species::Actinomycete, ColorClass::Bacteria),
    (Species::Cyanobacterium, ColorClass::Bacteria),
    (Species::Springtail, ColorClass::Arthropods),
    (Species::Mite, ColorClass::Arthropods),
    (Species::Beetle, ColorClass::Arthropods),
    (Species::Earthworm, ColorClass::Worms),
    (Species::Potworm, ColorClass::Worms),
    (Species::Nematode, ColorClass::Worms),
];

impl Species {
    /// Number of species.
    pub const COUNT: usize = COLOR_CLASSES.len();

    /// All species in index order.
    pub const ALL: [Species; 12] = [
        Species::Mycorrhiza,
        Species::Mold,
        Species::Yeast,
        Species::Rhizobium,
        Species::Actinomycete,
        Species::Cyanobacterium,
        Species::Springtail,
        Species::Mite,
        Species::Beetle,
        Species::Earthworm,
        Species::Potworm,
        Species::Nematode,
    ];

    /// Stable index in `0..12`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a species by index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Picks a species uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::COUNT)]
    }

    /// Color class the species is drawn with.
    pub fn color_class(self) -> ColorClass {
        COLOR_CLASSES[self.index()].1
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Species::Mycorrhiza => "Mycorrhiza",
            Species::Mold => "Mold",
            Species::Yeast => "Yeast",
            Species::Rhizobium => "Rhizobium",
            Species::Actinomycete => "Actinomycete",
            Species::Cyanobacterium => "Cyanobacterium",
            Species::Springtail => "Springtail",
            Species::Mite => "Mite",
            Species::Beetle => "Beetle",
            Species::Earthworm => "Earthworm",
            Species::Potworm => "Potworm",
            Species::Nematode => "Nematode",
        }
    }
}
