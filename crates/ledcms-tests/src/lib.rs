//! Integration tests for ledcms crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the ledcms crates: illuminant models against the observer,
//! profiles against their value types, and profile files against the
//! profiles they describe.
