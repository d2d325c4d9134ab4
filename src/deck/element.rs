//! Deck elements - what one slot of a deck actually holds.
//!
//! An element always resolves to a printing. It is either that printing
//! directly or a wrapper that also carries caller payload (a tag, a note,
//! a sleeve choice - the engine never reads it). Replacement swaps the
//! printing and keeps the payload.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, Printing};

/// One deck slot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Element {
    /// A plain printing.
    Printing(Arc<Printing>),
    /// A printing plus caller payload that must survive replacement.
    Annotated {
        printing: Arc<Printing>,
        note: String,
    },
}

impl Element {
    /// The printing this element resolves to.
    #[must_use]
    pub fn printing(&self) -> &Arc<Printing> {
        match self {
            Element::Printing(p) => p,
            Element::Annotated { printing, .. } => printing,
        }
    }

    /// The logical card this element counts as.
    #[must_use]
    pub fn card(&self) -> CardId {
        self.printing().card
    }

    /// Rebuild this element around a different printing.
    ///
    /// Annotated elements keep their payload.
    #[must_use]
    pub fn with_printing(&self, printing: Arc<Printing>) -> Element {
        match self {
            Element::Printing(_) => Element::Printing(printing),
            Element::Annotated { note, .. } => Element::Annotated {
                printing,
                note: note.clone(),
            },
        }
    }
}

impl From<Arc<Printing>> for Element {
    fn from(printing: Arc<Printing>) -> Self {
        Element::Printing(printing)
    }
}
