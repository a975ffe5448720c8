use crate::error::{DiscoveryError, Result};
use crate::models::{PropertyId, PropertyRecord};
use std::collections::HashSet;

/// Observable fill level of a comparison set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonState {
    Empty,
    Partial(usize),
    Full(usize),
}

/// Bounded, insertion-ordered selection of properties to compare side by side
///
/// A full set rejects further adds instead of evicting; the caller must
/// remove or clear first.
#[derive(Debug, Clone)]
pub struct ComparisonSet {
    order: Vec<PropertyId>,
    members: HashSet<PropertyId>,
    capacity: usize,
}

impl ComparisonSet {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(DiscoveryError::InvalidCapacity(capacity));
        }

        Ok(Self {
            order: Vec::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
            capacity,
        })
    }

    /// Append an id; `false` if already a member or the set is full
    pub fn add(&mut self, id: PropertyId) -> bool {
        if self.members.contains(&id) {
            return false;
        }
        if self.is_full() {
            tracing::debug!("Comparison set full ({}), rejected {}", self.capacity, id);
            return false;
        }

        self.members.insert(id);
        self.order.push(id);
        true
    }

    /// Remove an id; `false` if it was not a member
    pub fn remove(&mut self, id: PropertyId) -> bool {
        if !self.members.remove(&id) {
            return false;
        }
        self.order.retain(|member| *member != id);
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    #[inline]
    pub fn is_member(&self, id: PropertyId) -> bool {
        self.members.contains(&id)
    }

    pub fn state(&self) -> ComparisonState {
        match self.order.len() {
            0 => ComparisonState::Empty,
            n if n >= self.capacity => ComparisonState::Full(n),
            n => ComparisonState::Partial(n),
        }
    }

    pub fn is_full(&self) -> bool {
        self.order.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.order.len()
    }

    /// Member ids in insertion order
    pub fn ids(&self) -> &[PropertyId] {
        &self.order
    }

    /// One entry per slot; slots past the current size are `None`
    pub fn slots(&self) -> Vec<Option<PropertyId>> {
        (0..self.capacity)
            .map(|slot| self.order.get(slot).copied())
            .collect()
    }

    /// Member records in set order, skipping ids missing from the snapshot
    pub fn selected<'a>(&self, properties: &'a [PropertyRecord]) -> Vec<&'a PropertyRecord> {
        self.order
            .iter()
            .filter_map(|id| properties.iter().find(|property| property.id == *id))
            .collect()
    }
}
