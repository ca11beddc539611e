//! Derived participant balances
//!
//! A `Balances` value is always computed from the expense history and is
//! never persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;
use super::participant::Participant;

/// Net position of every participant relative to the group
///
/// Positive means the group owes the participant; negative means the
/// participant owes the group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balances(BTreeMap<String, Money>);

impl Balances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start every given participant at zero
    pub fn zeroed<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            names
                .into_iter()
                .map(|name| (name.to_string(), Money::zero()))
                .collect(),
        )
    }

    /// Add a signed amount to a participant's balance, creating the entry if needed
    pub fn adjust(&mut self, name: &str, delta: Money) {
        match self.0.get_mut(name) {
            Some(balance) => *balance += delta,
            None => {
                self.0.insert(name.to_string(), delta);
            }
        }
    }

    /// Balance of one participant, if they appear at all
    pub fn get(&self, name: &str) -> Option<Money> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sum over all participants; zero for any consistent history
    pub fn total(&self) -> Money {
        self.0.values().sum()
    }

    /// True when nobody owes anybody anything
    pub fn is_settled(&self) -> bool {
        self.0.values().all(Money::is_zero)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(name, balance)| (name.as_str(), *balance))
    }

    /// Entries in display order: current participants first, in their
    /// insertion order, then names only present in past expenses
    pub fn ordered(&self, participants: &[Participant]) -> Vec<(String, Money)> {
        let mut rows: Vec<(String, Money)> = participants
            .iter()
            .filter_map(|p| self.get(&p.name).map(|b| (p.name.clone(), b)))
            .collect();

        rows.extend(
            self.iter()
                .filter(|(name, _)| !participants.iter().any(|p| p.name == *name))
                .map(|(name, balance)| (name.to_string(), balance)),
        );

        rows
    }
}

impl<'a> IntoIterator for &'a Balances {
    type Item = (&'a String, &'a Money);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
