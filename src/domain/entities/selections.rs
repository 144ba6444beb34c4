//! # Selections
//!
//! The selection map of one wizard: dimension key to selected option id(s).
//!
//! Single-select dimensions hold one id, multi-select dimensions hold a
//! list in the order the options were added. Lookups against a catalog
//! skip ids the catalog does not list, so stale state never breaks pricing.
//!
//! # Examples
//!
//! ```
//! use quote_configurator::domain::entities::Selections;
//! use quote_configurator::domain::value_objects::DimensionKey;
//!
//! let mut selections = Selections::new();
//! selections.set_single(DimensionKey::ProjectType, "landing-page");
//! selections.toggle(DimensionKey::Features, "blog");
//! selections.toggle(DimensionKey::Features, "cms");
//!
//! assert_eq!(selections.single(DimensionKey::ProjectType), Some("landing-page"));
//! assert!(selections.contains(DimensionKey::Features, "cms"));
//! assert_eq!(selections.len(), 2);
//! ```

use crate::domain::catalog::{Dimension, PricingOption, ServiceCatalog};
use crate::domain::value_objects::DimensionKey;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// The selected value(s) of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Choice {
    /// One option id.
    One(String),
    /// Zero or more option ids, in selection order.
    Many(Vec<String>),
}

impl Choice {
    /// Returns the selected ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        let ids: &[String] = match self {
            Self::One(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
        };
        ids.iter().map(String::as_str)
    }

    /// Returns true if `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids().any(|selected| selected == id)
    }
}

/// Selected option ids keyed by dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Selections(BTreeMap<DimensionKey, Choice>);

impl Selections {
    /// Creates an empty selection map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the choice recorded for a dimension.
    #[must_use]
    pub fn get(&self, key: DimensionKey) -> Option<&Choice> {
        self.0.get(&key)
    }

    /// Returns the single selected id of a dimension.
    ///
    /// For a multi-select dimension this is the first id added.
    #[must_use]
    pub fn single(&self, key: DimensionKey) -> Option<&str> {
        self.get(key).and_then(|choice| choice.ids().next())
    }

    /// Returns true if `id` is selected in the dimension.
    #[must_use]
    pub fn contains(&self, key: DimensionKey, id: &str) -> bool {
        self.get(key).is_some_and(|choice| choice.contains(id))
    }

    /// Replaces the dimension's selection with a single id.
    pub fn set_single(&mut self, key: DimensionKey, id: impl Into<String>) {
        self.0.insert(key, Choice::One(id.into()));
    }

    /// Adds `id` to the dimension if absent, removes it otherwise.
    ///
    /// Returns true if the id is selected afterwards. A dimension whose
    /// last id is removed disappears from the map.
    pub fn toggle(&mut self, key: DimensionKey, id: &str) -> bool {
        let mut ids: Vec<String> = self
            .0
            .remove(&key)
            .map(|choice| choice.ids().map(str::to_owned).collect())
            .unwrap_or_default();

        let selected = if let Some(position) = ids.iter().position(|selected| selected == id) {
            ids.remove(position);
            false
        } else {
            ids.push(id.to_owned());
            true
        };

        if !ids.is_empty() {
            self.0.insert(key, Choice::Many(ids));
        }
        selected
    }

    /// Removes a dimension's selection. Returns true if one existed.
    pub fn clear(&mut self, key: DimensionKey) -> bool {
        self.0.remove(&key).is_some()
    }

    /// Returns the number of dimensions with a selection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates dimensions and their choices in key order.
    pub fn iter(&self) -> impl Iterator<Item = (DimensionKey, &Choice)> {
        self.0.iter().map(|(key, choice)| (*key, choice))
    }

    /// Resolves the selected options of a dimension against its catalog.
    ///
    /// Ids the dimension does not list are skipped.
    pub fn selected_options<'a>(
        &'a self,
        dimension: &'static Dimension,
    ) -> impl Iterator<Item = &'static PricingOption> + 'a {
        self.get(dimension.key)
            .into_iter()
            .flat_map(Choice::ids)
            .filter_map(|id| dimension.option(id))
    }

    /// Resolves the options that count for a dimension: every resolvable id
    /// of a multi-select dimension, the first resolvable id otherwise.
    pub fn effective_options<'a>(
        &'a self,
        dimension: &'static Dimension,
    ) -> impl Iterator<Item = &'static PricingOption> + 'a {
        let limit = if dimension.is_multi_select() { usize::MAX } else { 1 };
        self.selected_options(dimension).take(limit)
    }

    /// Rebuilds selections from raw persisted entries, keeping only
    /// references the catalog still offers.
    ///
    /// Unknown dimension keys and unknown option ids are dropped, duplicate
    /// ids collapse, and each choice is reshaped to the dimension's
    /// selection mode. Returns the selections and the number of dropped
    /// references.
    #[must_use]
    pub fn from_raw<'a, I>(catalog: &ServiceCatalog, raw: I) -> (Self, usize)
    where
        I: IntoIterator<Item = (&'a str, &'a Choice)>,
    {
        let mut selections = Self::new();
        let mut dropped = 0;

        for (name, choice) in raw {
            let Some(dimension) = DimensionKey::from_str(name)
                .ok()
                .and_then(|key| catalog.dimension(key))
            else {
                dropped += choice.ids().count();
                continue;
            };

            let mut ids: Vec<String> = Vec::new();
            for id in choice.ids() {
                if dimension.option(id).is_none() {
                    dropped += 1;
                } else if !ids.iter().any(|kept| kept == id) {
                    ids.push(id.to_owned());
                }
            }

            if dimension.is_multi_select() {
                if !ids.is_empty() {
                    selections.0.insert(dimension.key, Choice::Many(ids));
                }
            } else if let Some(first) = ids.first() {
                dropped += ids.len() - 1;
                selections.set_single(dimension.key, first.clone());
            }
        }

        (selections, dropped)
    }

    /// Returns the entries keyed by their string identifiers, the form
    /// persisted between sessions.
    #[must_use]
    pub fn to_raw(&self) -> BTreeMap<String, Choice> {
        self.0
            .iter()
            .map(|(key, choice)| (key.as_str().to_owned(), choice.clone()))
            .collect()
    }
}
