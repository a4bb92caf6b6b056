//! Calendar event service entry point.
//! The owned event collection and the providers that fill it.

pub mod source;
pub mod store;

pub use source::{EventSource, JsonEventSource, SampleEventSource};
pub use store::{EventStore, StoreError};
