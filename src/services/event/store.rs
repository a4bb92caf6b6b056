//! Owned event collection for the calendar page.
//!
//! The page is the only owner; views borrow `events()` read-only and every
//! change to an existing event goes through [`EventStore::update`], which
//! bumps the version so callers can tell a rebuilt grid from a stale one.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::event::{Event, EventValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no event with id '{0}'")]
    NotFound(String),
    #[error("an event with id '{0}' already exists")]
    DuplicateId(String),
    #[error("event '{id}' is invalid: {source}")]
    Invalid {
        id: String,
        #[source]
        source: EventValidationError,
    },
    #[error("update may not change the id of event '{0}'")]
    IdChanged(String),
}

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    version: u64,
}

impl EventStore {
    /// Build a store, rejecting invalid events and repeated ids.
    pub fn new(events: Vec<Event>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            validate(event)?;
            if !seen.insert(event.id.as_str()) {
                return Err(StoreError::DuplicateId(event.id.clone()));
            }
        }
        Ok(Self { events, version: 0 })
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Incremented on every successful mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append a new event.
    pub fn insert(&mut self, event: Event) -> Result<&Event, StoreError> {
        validate(&event)?;
        if self.get(&event.id).is_some() {
            return Err(StoreError::DuplicateId(event.id));
        }
        self.events.push(event);
        self.version += 1;
        log::debug!("Event store now at version {}", self.version);
        Ok(&self.events[self.events.len() - 1])
    }

    /// Replace the event `id` with `f` applied to a copy of it.
    ///
    /// The stored entry is untouched unless the edited copy validates and
    /// keeps its id. Other events are never affected.
    pub fn update<F>(&mut self, id: &str, f: F) -> Result<&Event, StoreError>
    where
        F: FnOnce(&mut Event),
    {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut edited = self.events[index].clone();
        f(&mut edited);

        if edited.id != id {
            return Err(StoreError::IdChanged(id.to_string()));
        }
        validate(&edited)?;

        self.events[index] = edited;
        self.version += 1;
        log::debug!("Updated event '{}' (store version {})", id, self.version);
        Ok(&self.events[index])
    }
}

fn validate(event: &Event) -> Result<(), StoreError> {
    event.validate().map_err(|source| StoreError::Invalid {
        id: event.id.clone(),
        source,
    })
}
