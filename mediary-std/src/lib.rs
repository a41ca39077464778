//! # mediary-std
//!
//! Standard implementations for the Mediary message dispatch library.
//!
//! This crate provides:
//! - **Registration**: [`RegistryBuilder`], the append-only setup surface
//! - **Storage**: [`Registry`], the frozen, shareable entry snapshot
//! - **Dispatch**: [`Mediator`], the `send`/`publish` entry point
//! - **Testing**: reusable handler doubles in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use mediary_core;

// Modules
mod mediator;
mod registry;
pub mod testing;

pub use mediator::Mediator;
pub use registry::{Registry, RegistryBuilder};
