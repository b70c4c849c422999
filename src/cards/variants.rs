//! Deck-art variants: identity-to-asset mapping for the presentation layer.
//!
//! The menu lets the player pick which card art a session uses. That choice
//! never touches game logic: a variant is a table from `PairId` to a face
//! asset key, plus the card-back key. The registry stores the variants the
//! shell may select.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::PairId;

/// Identifier for a deck-art variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckVariantId(pub u32);

impl DeckVariantId {
    /// Create a new variant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One deck-art set: a display name, a card-back asset key, and one face
/// asset key per pairing identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckVariant {
    /// Unique identifier for this variant.
    pub id: DeckVariantId,
    /// Display name for the menu.
    pub name: String,
    /// Asset key for the card back.
    pub back: String,
    /// Face asset keys, indexed by `PairId` raw value.
    faces: Vec<String>,
}

impl DeckVariant {
    /// Create a variant from its face asset keys.
    #[must_use]
    pub fn new(
        id: DeckVariantId,
        name: impl Into<String>,
        back: impl Into<String>,
        faces: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            back: back.into(),
            faces,
        }
    }

    /// Face asset key for a pairing identity, if this variant has one.
    #[must_use]
    pub fn face(&self, pair: PairId) -> Option<&str> {
        self.faces.get(pair.raw() as usize).map(String::as_str)
    }

    /// Number of face assets in this variant.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Does this variant have art for every identity a board of
    /// `pair_count` pairs will deal?
    #[must_use]
    pub fn covers(&self, pair_count: usize) -> bool {
        self.faces.len() >= pair_count
    }
}

/// Registry of deck-art variants the shell may select.
///
/// ## Example
///
/// ```
/// use cardmind::cards::{DeckRegistry, DeckVariantId};
///
/// let registry = DeckRegistry::builtin();
///
/// let classic = registry.get(DeckVariantId::new(0)).unwrap();
/// assert!(classic.covers(12));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckRegistry {
    variants: FxHashMap<DeckVariantId, DeckVariant>,
}

impl DeckRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the stock deck sets.
    ///
    /// Both cover 12 pairs, the largest board any mode deals.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Self::stock_variant(0, "Classic", "classic"));
        registry.register(Self::stock_variant(1, "Cosmos", "cosmos"));
        registry
    }

    fn stock_variant(id: u32, name: &str, dir: &str) -> DeckVariant {
        let faces = (0..12)
            .map(|i| format!("decks/{}/face_{:02}.png", dir, i))
            .collect();
        DeckVariant::new(
            DeckVariantId::new(id),
            name,
            format!("decks/{}/back.png", dir),
            faces,
        )
    }

    /// Register a variant.
    ///
    /// Panics if a variant with the same ID already exists.
    pub fn register(&mut self, variant: DeckVariant) {
        if self.variants.contains_key(&variant.id) {
            panic!("Deck variant {:?} already registered", variant.id);
        }
        self.variants.insert(variant.id, variant);
    }

    /// Get a variant by ID.
    #[must_use]
    pub fn get(&self, id: DeckVariantId) -> Option<&DeckVariant> {
        self.variants.get(&id)
    }

    /// Check if a variant ID is registered.
    #[must_use]
    pub fn contains(&self, id: DeckVariantId) -> bool {
        self.variants.contains_key(&id)
    }

    /// Number of registered variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Is the registry empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterate over all variants.
    pub fn iter(&self) -> impl Iterator<Item = &DeckVariant> {
        self.variants.values()
    }
}
