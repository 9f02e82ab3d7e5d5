//! Maquette core - vocabulary types for architecture workspace models.
//!
//! This crate holds the value types shared across the Maquette stack:
//! colors, tags, diagram positions, and the tag-keyed style rules applied
//! to rendered views. It carries no model semantics; the element graph and
//! views live in the `maquette` crate.

pub mod color;
pub mod geometry;
pub mod style;
pub mod tags;
