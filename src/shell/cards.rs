//! Static information cards shown in the Species and Organisms tabs.

use crate::simulation::species::{ColorClass, Species};

/// Identifies a card so it can be opened in the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardId {
    /// A color-class overview card (Species tab).
    Class(ColorClass),
    /// A single-species card (Organisms tab).
    Organism(Species),
}

/// Display data for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Card identity.
    pub id: CardId,
    /// Heading.
    pub title: &'static str,
    /// One-line role in the soil ecosystem.
    pub role: &'static str,
    /// Longer text shown in the modal.
    pub description: &'static str,
    /// Accent color.
    pub color: [u8; 3],
}

/// One card per color class.
pub fn species_cards() -> Vec<Card> {
    ColorClass::ALL.iter().map(|class| card(CardId::Class(*class))).collect()
}

/// One card per species.
pub fn organism_cards() -> Vec<Card> {
    Species::ALL
        .iter()
        .map(|species| card(CardId::Organism(*species)))
        .collect()
}

/// Builds the card for `id`.
pub fn card(id: CardId) -> Card {
    match id {
        CardId::Class(class) => {
            let (role, description) = class_text(class);
            Card {
                id,
                title: class.name(),
                role,
                description,
                color: class.rgb(),
            }
        }
        CardId::Organism(species) => {
            let (role, description) = species_text(species);
            Card {
                id,
                title: species.name(),
                role,
                description,
                color: species.color_class().rgb(),
            }
        }
    }
}

fn class_text(class: ColorClass) -> (&'static str, &'static str) {
    match class {
        ColorClass::Fungi => (
            "Decomposers and root partners",
            "Fungi break down tough plant material such as lignin and spread hyphae \
             that bind soil particles together. Many form partnerships with plant roots.",
        ),
        ColorClass::Bacteria => (
            "Nutrient cyclers",
            "Bacteria are the most numerous soil organisms. They fix nitrogen, \
             release nutrients from organic matter and thrive in moist, neutral soil.",
        ),
        ColorClass::Arthropods => (
            "Shredders and predators",
            "Arthropods shred leaf litter into smaller pieces and keep microbial \
             populations in check. They are sensitive to drying out.",
        ),
        ColorClass::Worms => (
            "Soil engineers",
            "Worms tunnel through the soil, mixing organic matter into deeper layers \
             and improving drainage and aeration.",
        ),
    }
}

fn species_text(species: Species) -> (&'static str, &'static str) {
    match species {
        Species::Mycorrhiza => (
            "Root partner",
            "Trades minerals gathered by its hyphae for sugars from plant roots.",
        ),
        Species::Mold => (
            "Decomposer",
            "Colonises dead leaves and fruit, breaking down sugars and cellulose.",
        ),
        Species::Yeast => (
            "Fermenter",
            "A single-celled fungus that ferments sugars near plant surfaces.",
        ),
        Species::Rhizobium => (
            "Nitrogen fixer",
            "Lives in root nodules of legumes and turns air nitrogen into plant food.",
        ),
        Species::Actinomycete => (
            "Decomposer",
            "Gives fresh soil its earthy smell while breaking down chitin and cellulose.",
        ),
        Species::Cyanobacterium => (
            "Producer",
            "Photosynthesises at the soil surface and forms crusts that hold moisture.",
        ),
        Species::Springtail => (
            "Grazer",
            "Feeds on fungal hyphae and jumps away from danger with a tail-like spring.",
        ),
        Species::Mite => (
            "Shredder",
            "Chews through leaf litter; some mites hunt nematodes and springtails.",
        ),
        Species::Beetle => (
            "Predator",
            "Hunts slugs and insect larvae on and below the soil surface.",
        ),
        Species::Earthworm => (
            "Engineer",
            "Eats soil and leaves, leaving nutrient-rich casts and deep burrows.",
        ),
        Species::Potworm => (
            "Decomposer",
            "A small white worm common in compost, feeding on fungi and bacteria.",
        ),
        Species::Nematode => (
            "Grazer",
            "A microscopic roundworm that grazes bacteria and releases nitrogen.",
        ),
    }
}
