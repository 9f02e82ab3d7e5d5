//! Maquette - a library for modeling and persisting software architecture
//! workspaces.
//!
//! A [`Workspace`] holds an architecture model (people, software systems,
//! containers, and the relationships between them), diagram views over that
//! model, and tag-keyed style rules. Workspaces serialize to JSON; saving
//! through [`Workspace::persist`] merges forward any diagram layout
//! coordinates found in a previously saved file, so manual diagram
//! arrangement survives regeneration.

pub mod model;
pub mod views;

mod error;
mod workspace;

pub use maquette_core::{color, geometry, style, tags};

pub use error::MaquetteError;
pub use workspace::Workspace;
