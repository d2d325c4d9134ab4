//! Printings - edition-scoped realizations of logical cards.
//!
//! A `Printing` is one concrete art/edition variant of a `Card`: Forest
//! as printed in a specific expansion, by a specific artist, with a
//! specific frame. Many printings reference one card; a printing never
//! changes card.
//!
//! Printings are shared as `Arc<Printing>` - the catalog owns nothing
//! twice, candidate lists and assignments hold cheap clones.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::{AttributeKey, AttributeValue, Attributes};
use super::card::CardId;

/// Unique identifier for a printing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PrintingId(pub u32);

impl PrintingId {
    /// Create a new printing ID.
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

impl std::fmt::Display for PrintingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Printing({})", self.0)
    }
}

/// Printing rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
    Special,
}

/// One edition-scoped realization of a logical card.
///
/// ## Example
///
/// ```
/// use printpick::catalog::{CardId, Printing, PrintingId, Rarity};
///
/// let forest = Printing::new(PrintingId::new(10), CardId::new(1), "ZEN")
///     .with_artist("Vincent Proce")
///     .with_release(20091002)
///     .with_rarity(Rarity::Common);
///
/// assert_eq!(forest.set_code, "ZEN");
/// assert_eq!(forest.sole_artist(), Some("Vincent Proce"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Printing {
    /// Unique identifier for this printing.
    pub id: PrintingId,

    /// The logical card this printing realizes.
    pub card: CardId,

    /// Expansion code (e.g. "ZEN").
    pub set_code: String,

    /// Credited artists. Almost always exactly one.
    pub artists: SmallVec<[String; 1]>,

    /// Release date as yyyymmdd, 0 when unknown.
    pub release: u32,

    /// Printing rarity.
    pub rarity: Rarity,

    /// Descriptive edition attributes (watermark, frame, promo type, ...).
    pub attributes: Attributes,
}

impl Printing {
    /// Create a new printing.
    #[must_use]
    pub fn new(id: PrintingId, card: CardId, set_code: impl Into<String>) -> Self {
        Self {
            id,
            card,
            set_code: set_code.into(),
            artists: SmallVec::new(),
            release: 0,
            rarity: Rarity::Common,
            attributes: Attributes::default(),
        }
    }

    /// Add an artist credit (builder pattern).
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artists.push(artist.into());
        self
    }

    /// Set the release date (builder pattern).
    #[must_use]
    pub fn with_release(mut self, release: u32) -> Self {
        self.release = release;
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Add a descriptive attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The single credited artist, if there is exactly one.
    ///
    /// Returns `None` for zero or multiple credits. Callers that require
    /// a sole credit (the artist grouper) treat `None` as bad input data.
    #[must_use]
    pub fn sole_artist(&self) -> Option<&str> {
        match self.artists.as_slice() {
            [artist] => Some(artist),
            _ => None,
        }
    }

    /// Get a descriptive attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(|v| v.as_text())
    }

    /// Get a boolean attribute with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_attr(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }
}

/// Minimal capability the selection engine requires of a version kind.
///
/// The engine is written once and reused for distinct printing kinds
/// (paper, digital); all it ever needs is the owning logical card.
pub trait CardVersion {
    /// The logical card this version realizes.
    fn card(&self) -> CardId;
}

impl CardVersion for Printing {
    fn card(&self) -> CardId {
        self.card
    }
}

impl CardVersion for Arc<Printing> {
    fn card(&self) -> CardId {
        self.as_ref().card
    }
}
