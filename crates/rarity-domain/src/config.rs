//! Trait configuration shared by every pipeline stage

use std::collections::BTreeSet;

/// Trait types excluded from scoring out of the box
pub const DEFAULT_EXCLUDED_TRAIT_TYPES: [&str; 3] = ["Wisdom/Magic", "Power/Strength", "Speed/Agility"];

/// Names of the trait types with special meaning
///
/// `rank` and `rarity` are matched case-insensitively. `featured` is matched
/// exactly. `rarity` is also the label written when a rank is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedTraitTypes {
    /// Rank metadata trait, stripped on write-back
    pub rank: String,
    /// Rarity metadata trait, receives the rank number on write-back
    pub rarity: String,
    /// Marks an item as featured
    pub featured: String,
}

impl Default for ReservedTraitTypes {
    fn default() -> Self {
        Self {
            rank: "Rank".to_string(),
            rarity: "Rarity".to_string(),
            featured: "Featured Artist".to_string(),
        }
    }
}

impl ReservedTraitTypes {
    /// Whether `trait_type` names the rank metadata trait (any case)
    pub fn is_rank(&self, trait_type: &str) -> bool {
        trait_type.to_lowercase() == self.rank.to_lowercase()
    }

    /// Whether `trait_type` names the rarity metadata trait (any case)
    pub fn is_rarity(&self, trait_type: &str) -> bool {
        trait_type.to_lowercase() == self.rarity.to_lowercase()
    }

    /// Whether `trait_type` is the featured marker (exact)
    pub fn is_featured(&self, trait_type: &str) -> bool {
        trait_type == self.featured
    }
}

/// Configuration for frequency counting and scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitConfig {
    /// Trait types ignored entirely (exact match)
    pub excluded_trait_types: BTreeSet<String>,
    /// Reserved metadata and featured trait names
    pub reserved: ReservedTraitTypes,
}

impl Default for TraitConfig {
    fn default() -> Self {
        Self {
            excluded_trait_types: DEFAULT_EXCLUDED_TRAIT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            reserved: ReservedTraitTypes::default(),
        }
    }
}

impl TraitConfig {
    /// Configuration with no configured exclusions, only the reserved names
    pub fn without_exclusions() -> Self {
        Self {
            excluded_trait_types: BTreeSet::new(),
            reserved: ReservedTraitTypes::default(),
        }
    }

    /// Whether a trait type is kept out of frequency counting and scoring
    pub fn is_excluded(&self, trait_type: &str) -> bool {
        self.excluded_trait_types.contains(trait_type)
            || self.reserved.is_featured(trait_type)
            || self.reserved.is_rank(trait_type)
            || self.reserved.is_rarity(trait_type)
    }
}
