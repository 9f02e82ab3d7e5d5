//! Error types for Maquette operations.

use std::io;

use thiserror::Error;

use crate::model::ElementId;

/// The main error type for Maquette operations.
///
/// Model and view construction errors carry the offending name, id, or key
/// so that callers can report exactly which declaration was wrong.
#[derive(Debug, Error)]
pub enum MaquetteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate element name `{0}` in this scope")]
    DuplicateElementName(String),

    #[error("unknown element id {0}")]
    UnknownElement(ElementId),

    #[error("element {0} is not a software system")]
    NotASoftwareSystem(ElementId),

    #[error("duplicate view key `{0}`")]
    DuplicateViewKey(String),

    #[error("unknown view key `{0}`")]
    UnknownView(String),

    #[error("element {element} cannot be shown in view `{view}`")]
    ElementNotAllowed { element: ElementId, view: String },
}
