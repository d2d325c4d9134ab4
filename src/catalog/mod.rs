//! Catalog: logical cards, printings, and the spoiler.
//!
//! ## Key Types
//!
//! - `CardId` / `Card`: name-level identity, independent of printing
//! - `PrintingId` / `Printing`: one edition-scoped realization of a card
//! - `CardVersion`: the capability trait the selection engine is generic over
//! - `Spoiler`: the card/printing registry, with name lookup and extraction
//!
//! Cards and printings are immutable once registered; printings are shared
//! as `Arc<Printing>`.

pub mod attributes;
pub mod card;
pub mod printing;
pub mod spoiler;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use card::{BasicLand, Card, CardId};
pub use printing::{CardVersion, Printing, PrintingId, Rarity};
pub use spoiler::Spoiler;
