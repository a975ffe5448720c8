use crate::core::{filters::matches_criteria, ranking::sort_properties, viewport::restrict_to_viewport};
use crate::models::{FilterCriteria, GeoBounds, PropertyRecord};
use std::borrow::Borrow;

/// Result of one discovery pass
#[derive(Debug)]
pub struct DiscoveryResult<T> {
    pub properties: Vec<T>,
    pub total_candidates: usize,
    /// Count after criteria filtering, before the viewport was applied
    pub matched_criteria: usize,
}

/// Discovery orchestrator - predicate composition followed by a stable sort
///
/// # Pipeline Stages
/// 1. Criteria predicates (text, stars, amenities, price), combined with AND
/// 2. Stable sort by the selected sort option
/// 3. Viewport containment, map view only
///
/// The engine holds no state; criteria and the candidate snapshot are
/// supplied on every call, so it can be rerun on each keystroke.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEngine;

impl FilterEngine {
    pub fn new() -> Self {
        Self
    }

    /// Filter and order candidates
    ///
    /// Works over owned records or references; the output is always a
    /// subset of the input and the criteria are never modified.
    pub fn filter<T, I>(&self, properties: I, criteria: &FilterCriteria) -> Vec<T>
    where
        T: Borrow<PropertyRecord>,
        I: IntoIterator<Item = T>,
    {
        let needle = criteria.search_needle();

        let mut matched: Vec<T> = properties
            .into_iter()
            .filter(|property| matches_criteria(property.borrow(), criteria, needle.as_deref()))
            .collect();

        sort_properties(&mut matched, criteria.sort_option);

        matched
    }

    /// Run the full discovery flow: criteria, sort, then optional viewport
    ///
    /// # Arguments
    /// * `candidates` - The already-fetched candidate snapshot
    /// * `criteria` - Current filter panel state
    /// * `viewport` - Map bounds when in map view and established, else `None`
    pub fn discover<T, I>(
        &self,
        candidates: I,
        criteria: &FilterCriteria,
        viewport: Option<&GeoBounds>,
    ) -> DiscoveryResult<T>
    where
        T: Borrow<PropertyRecord>,
        I: IntoIterator<Item = T>,
    {
        let candidates: Vec<T> = candidates.into_iter().collect();
        let total_candidates = candidates.len();

        let matched = self.filter(candidates, criteria);
        let matched_criteria = matched.len();

        let properties = restrict_to_viewport(matched, viewport);

        tracing::debug!(
            "Discovery: {} candidates, {} matched criteria, {} visible (sort: {:?}, viewport: {})",
            total_candidates,
            matched_criteria,
            properties.len(),
            criteria.sort_option,
            viewport.is_some()
        );

        DiscoveryResult {
            properties,
            total_candidates,
            matched_criteria,
        }
    }
}
