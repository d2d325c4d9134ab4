//! Logical cards - name-level identity independent of printing.
//!
//! A `Card` is what a deck list names ("Forest", "Lightning Bolt").
//! Which exact art/edition variant fills that slot is a `Printing`
//! concern; the card itself never changes across printings.
//!
//! Cards are ordered by `CardId` so that every pass over a deck's
//! card multiset iterates in the same order regardless of hash state.

use serde::{Deserialize, Serialize};

/// Unique identifier for a logical card.
///
/// Identifies the name-level card ("Forest"), not any specific
/// printed variant of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The five basic land types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicLand {
    Plains,
    Island,
    Swamp,
    Mountain,
    Forest,
}

impl BasicLand {
    /// All five basic land types, in color order.
    pub const ALL: [BasicLand; 5] = [
        BasicLand::Plains,
        BasicLand::Island,
        BasicLand::Swamp,
        BasicLand::Mountain,
        BasicLand::Forest,
    ];

    /// The card name of the non-snow variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BasicLand::Plains => "Plains",
            BasicLand::Island => "Island",
            BasicLand::Swamp => "Swamp",
            BasicLand::Mountain => "Mountain",
            BasicLand::Forest => "Forest",
        }
    }
}

impl std::fmt::Display for BasicLand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A logical card.
///
/// Immutable once registered in a `Spoiler`. The `basic`/`snow` flags
/// exist so selection scopes can test membership without a full type
/// taxonomy.
///
/// ## Example
///
/// ```
/// use printpick::catalog::{BasicLand, Card, CardId};
///
/// let forest = Card::basic(CardId::new(1), BasicLand::Forest);
/// assert_eq!(forest.name, "Forest");
/// assert!(forest.is_basic());
///
/// let snow = Card::snow_basic(CardId::new(2), BasicLand::Forest);
/// assert_eq!(snow.name, "Snow-Covered Forest");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this logical card.
    pub id: CardId,

    /// Card name (the identity a deck list uses).
    pub name: String,

    /// Which basic land this is, if any.
    pub basic: Option<BasicLand>,

    /// Whether this is a snow-covered variant.
    pub snow: bool,
}

impl Card {
    /// Create a non-basic card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            basic: None,
            snow: false,
        }
    }

    /// Create a basic land card.
    #[must_use]
    pub fn basic(id: CardId, land: BasicLand) -> Self {
        Self {
            id,
            name: land.name().to_string(),
            basic: Some(land),
            snow: false,
        }
    }

    /// Create a snow-covered basic land card.
    #[must_use]
    pub fn snow_basic(id: CardId, land: BasicLand) -> Self {
        Self {
            id,
            name: format!("Snow-Covered {}", land.name()),
            basic: Some(land),
            snow: true,
        }
    }

    /// Check whether this card is a basic land (snow or not).
    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.basic.is_some()
    }
}
