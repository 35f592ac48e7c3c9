use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry from the participants file.
///
/// The address is used as the mapping key for the exchange, so it is assumed
/// unique within a run. Names carry no such assumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub address: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// The assignment for a single participant: who they are, who they gift to,
/// and where to reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub giver: String,
    pub recipient: String,
    pub address: String,
}

/// A complete set of pairings, keyed by the giver's address.
///
/// Built fresh each run. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pairings: HashMap<String, Pairing>,
}

impl Exchange {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairings: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, pairing: Pairing) {
        self.pairings.insert(pairing.address.clone(), pairing);
    }

    pub fn get(&self, address: &str) -> Option<&Pairing> {
        self.pairings.get(address)
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    pub fn pairings(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.values()
    }
}
