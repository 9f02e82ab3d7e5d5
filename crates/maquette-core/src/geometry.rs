//! Geometric types for diagram layout data.

use serde::{Deserialize, Serialize};

/// A 2D diagram position for an element within a view.
///
/// Positions are never computed by this library; they are opaque layout
/// data set by hand (or by an external editor) and carried forward across
/// regenerations of the workspace file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate in diagram canvas units.
    pub x: i32,
    /// Vertical coordinate in diagram canvas units.
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip() {
        let position = Position::new(120, -45);
        let json = serde_json::to_string(&position).unwrap();
        assert_eq!(json, r#"{"x":120,"y":-45}"#);

        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, position);
    }
}
