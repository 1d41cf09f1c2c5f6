//! Relation expansion for outlet reads.
//!
//! Callers pick relations from a fixed set; each selected relation maps to one optional
//! point read when the outlet is loaded.

use std::collections::BTreeSet;

use crate::model::outlet::OutletExpandQuery;

/// A relation that can be loaded alongside an outlet
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutletRelation {
    Owner,
    Details,
    LegalDocument,
    Manager,
    Bartender,
    /// Always includes the timing's slots
    Timing,
    /// Gold, Silver and Crystal collections with their liquors
    Collections,
    InfinityPass,
}

/// The set of relations to load with an outlet
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutletExpansion(BTreeSet<OutletRelation>);

impl OutletExpansion {
    /// No relations, only the outlet row
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, relation: OutletRelation) -> Self {
        self.0.insert(relation);
        self
    }

    pub fn contains(&self, relation: OutletRelation) -> bool {
        self.0.contains(&relation)
    }
}

impl FromIterator<OutletRelation> for OutletExpansion {
    fn from_iter<I: IntoIterator<Item = OutletRelation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&OutletExpandQuery> for OutletExpansion {
    fn from(query: &OutletExpandQuery) -> Self {
        [
            (query.owner, OutletRelation::Owner),
            (query.details, OutletRelation::Details),
            (query.legal_document, OutletRelation::LegalDocument),
            (query.manager, OutletRelation::Manager),
            (query.bartender, OutletRelation::Bartender),
            (query.timing, OutletRelation::Timing),
            (query.collections, OutletRelation::Collections),
            (query.infinity_pass, OutletRelation::InfinityPass),
        ]
        .into_iter()
        .filter_map(|(selected, relation)| selected.then_some(relation))
        .collect()
    }
}
