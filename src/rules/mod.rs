//! Scoring rule tables.
//!
//! The decision core treats scoring as an external collaborator. This module
//! ships the standard Zonk table so the core can run without a host-supplied
//! validator (tests, simulation, headless play).

pub mod standard;

pub use standard::StandardRules;
