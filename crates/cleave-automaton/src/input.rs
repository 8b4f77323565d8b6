//! JSON transition lists: named NFA transitions in priority order.
//!
//! ```json
//! { "transitions": [ { "name": "kw", "guard": "[a-c]" }, { "name": "id", "guard": "[b-d]" } ] }
//! ```
//!
//! Guards use regex character-class syntax. Names are interned into
//! [`TransitionId`]s in order of appearance, so the first transition is `#0`.
//! A repeated name is the same NFA transition under another guard; each
//! occurrence is still a separate input in priority order.

use std::borrow::Cow;
use std::collections::HashMap;

use cleave_core::CodePointSet;
use serde::Deserialize;

use crate::builder::TransitionBuilder;
use crate::transition_set::{TransitionId, TransitionSet};

/// Errors from loading a transition list.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid transition list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("transition name must not be empty (entry {0})")]
    EmptyName(usize),
}

pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTransitionList {
    transitions: Vec<RawTransition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTransition {
    name: String,
    guard: CodePointSet,
}

/// Transition names by id. Ids are dense, starting at 0.
#[derive(Debug, Clone, Default)]
pub struct TransitionNames {
    lookup: HashMap<String, TransitionId>,
    names: Vec<String>,
}

impl TransitionNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `name`, allocating the next one on first sight.
    pub fn intern(&mut self, name: &str) -> TransitionId {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = TransitionId::from_raw(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.lookup.insert(name.to_owned(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<TransitionId> {
        self.lookup.get(name).copied()
    }

    pub fn try_resolve(&self, id: TransitionId) -> Option<&str> {
        self.names.get(id.as_u32() as usize).map(String::as_str)
    }

    /// Display name for `id`; unnamed ids render as `#n`.
    pub fn label(&self, id: TransitionId) -> Cow<'_, str> {
        match self.try_resolve(id) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(id.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A loaded transition list, in priority order.
#[derive(Debug, Clone, Default)]
pub struct TransitionList {
    names: TransitionNames,
    entries: Vec<(TransitionId, CodePointSet)>,
}

impl TransitionList {
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawTransitionList = serde_json::from_str(text)?;

        let mut list = Self::default();
        for (index, t) in raw.transitions.into_iter().enumerate() {
            if t.name.is_empty() {
                return Err(InputError::EmptyName(index));
            }
            let id = list.names.intern(&t.name);
            list.entries.push((id, t.guard));
        }
        Ok(list)
    }

    pub fn names(&self) -> &TransitionNames {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Transitions with their guards, in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (TransitionId, &CodePointSet)> + '_ {
        self.entries.iter().map(|(id, guard)| (*id, guard))
    }

    /// Fresh single-transition builders, ready for the canonicalizer.
    pub fn builders<S: TransitionSet>(&self) -> Vec<TransitionBuilder<S>> {
        self.entries
            .iter()
            .map(|(id, guard)| TransitionBuilder::single(*id, guard.clone()))
            .collect()
    }
}
