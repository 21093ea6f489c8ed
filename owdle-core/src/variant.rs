use owdle_types::{GameVariant, Hero, QuoteLine};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::daily::SeedOffset;

/// Salt of the nested daily quote pick, applied to the answer's quote list.
pub const QUOTE_LINE_SEED: SeedOffset = SeedOffset::named("70218");

const SILHOUETTE_ROTATIONS: [u16; 4] = [0, 90, 180, 270];
const SILHOUETTE_MAX_REVEAL: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOrder {
    NewestFirst,
    Chronological,
}

/// What distinguishes one game variant from another on top of the shared engine.
#[derive(Debug, Clone)]
pub struct VariantRules {
    pub variant: GameVariant,
    pub seed: SeedOffset,
    pub guess_order: GuessOrder,
}

impl VariantRules {
    pub fn for_variant(variant: GameVariant) -> Self {
        match variant {
            GameVariant::Classic => Self {
                variant,
                seed: SeedOffset::named("1"),
                guess_order: GuessOrder::NewestFirst,
            },
            GameVariant::Silhouette => Self {
                variant,
                seed: SeedOffset::named("silhouette"),
                guess_order: GuessOrder::Chronological,
            },
            GameVariant::Quote => Self {
                variant,
                seed: SeedOffset::named("9937"),
                guess_order: GuessOrder::Chronological,
            },
        }
    }
}

/// Framing of the answer's portrait in the silhouette variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SilhouetteFrame {
    pub rotation: u16,
    pub focus_x: f64,
    pub focus_y: f64,
}

impl SilhouetteFrame {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rotation = SILHOUETTE_ROTATIONS.choose(rng).copied().unwrap_or_default();
        Self {
            rotation,
            focus_x: rng.random_range(20.0..80.0),
            focus_y: rng.random_range(20.0..80.0),
        }
    }

    /// Portrait blur in pixels: sharper with each guess, clear once solved.
    pub fn blur(guess_count: usize, solved: bool) -> f64 {
        if solved {
            return 0.0;
        }
        let reveal = guess_count.min(SILHOUETTE_MAX_REVEAL) as f64;
        (9.0 - reveal * 1.2).max(0.0)
    }
}

/// Stand-in line for heroes that have no recorded quote yet.
pub fn missing_quote(hero: &Hero) -> QuoteLine {
    let name_fr = hero.name_fr.as_deref().unwrap_or(&hero.name);
    QuoteLine {
        en: format!("We do not have any voice line yet for {}", hero.name),
        fr: format!("Nous n'avons pas ajouté de réplique pour {}", name_fr),
    }
}
