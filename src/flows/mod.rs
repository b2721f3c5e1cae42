//! Flow registry
//!
//! A flow is a named, ordered registry of uniquely named action resolvers.
//! Drivers read it by index; it never reorders or removes entries.

pub mod entry;
pub mod flow;

pub use entry::{resolver, ActionEntry, Resolver};
pub use flow::{Flow, NamePolicy};
