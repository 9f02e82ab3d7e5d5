//! Tag-keyed style rules for diagram views.
//!
//! A style rule is pure data: a tag key plus a bundle of optional visual
//! attributes. Rules are applied at render time by whatever tool consumes
//! the workspace file; nothing in this library enforces them against the
//! model. The rule store is append-only, so a later rule for the same tag
//! is added after the earlier one rather than replacing it.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Shape used when rendering an element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// Plain rectangle (default).
    #[default]
    Box,
    /// Rectangle with rounded corners.
    RoundedBox,
    Circle,
    Ellipse,
    /// Database cylinder.
    Cylinder,
    /// Stick-figure person.
    Person,
}

/// Border line style for an element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Border {
    /// Continuous border line (default).
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// A style rule for elements carrying a given tag.
///
/// All visual attributes are optional; unset attributes fall back to the
/// renderer's defaults. Construction uses `with_*` builder methods:
///
/// ```
/// use maquette_core::{color::Color, style::{ElementStyle, Shape}};
///
/// let style = ElementStyle::new("Software System")
///     .with_width(650)
///     .with_height(400)
///     .with_background(Color::new("#801515").unwrap())
///     .with_shape(Shape::RoundedBox);
///
/// assert_eq!(style.tag(), "Software System");
/// assert_eq!(style.shape(), Some(Shape::RoundedBox));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    border: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    opacity: Option<u8>,
}

impl ElementStyle {
    /// Create a rule for the given tag with no attributes set.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            width: None,
            height: None,
            background: None,
            color: None,
            font_size: None,
            shape: None,
            border: None,
            opacity: None,
        }
    }

    /// Set the rendered element width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the rendered element height.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the background fill color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the label font size.
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Set the element shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Set the border line style.
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Set the opacity, from 0 (transparent) to 100 (opaque).
    pub fn with_opacity(mut self, opacity: u8) -> Self {
        self.opacity = Some(opacity.min(100));
        self
    }

    /// The tag this rule applies to.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn background(&self) -> Option<&Color> {
        self.background.as_ref()
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn font_size(&self) -> Option<u32> {
        self.font_size
    }

    pub fn shape(&self) -> Option<Shape> {
        self.shape
    }

    pub fn border(&self) -> Option<Border> {
        self.border
    }

    pub fn opacity(&self) -> Option<u8> {
        self.opacity
    }
}

/// A style rule for relationships carrying a given tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipStyle {
    tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thickness: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dashed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    opacity: Option<u8>,
}

impl RelationshipStyle {
    /// Create a rule for the given tag with no attributes set.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            thickness: None,
            color: None,
            dashed: None,
            font_size: None,
            width: None,
            opacity: None,
        }
    }

    /// Set the line thickness.
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Set the line color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set whether the line is dashed.
    pub fn with_dashed(mut self, dashed: bool) -> Self {
        self.dashed = Some(dashed);
        self
    }

    /// Set the label font size.
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Set the label wrapping width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the opacity, from 0 (transparent) to 100 (opaque).
    pub fn with_opacity(mut self, opacity: u8) -> Self {
        self.opacity = Some(opacity.min(100));
        self
    }

    /// The tag this rule applies to.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn thickness(&self) -> Option<u32> {
        self.thickness
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn dashed(&self) -> Option<bool> {
        self.dashed
    }

    pub fn font_size(&self) -> Option<u32> {
        self.font_size
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn opacity(&self) -> Option<u8> {
        self.opacity
    }
}

/// Append-only store of element and relationship style rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styles {
    #[serde(default)]
    elements: Vec<ElementStyle>,
    #[serde(default)]
    relationships: Vec<RelationshipStyle>,
}

impl Styles {
    /// Create an empty style store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element style rule.
    pub fn add_element_style(&mut self, style: ElementStyle) {
        self.elements.push(style);
    }

    /// Append a relationship style rule.
    pub fn add_relationship_style(&mut self, style: RelationshipStyle) {
        self.relationships.push(style);
    }

    /// Element style rules in declaration order.
    pub fn element_styles(&self) -> &[ElementStyle] {
        &self.elements
    }

    /// Relationship style rules in declaration order.
    pub fn relationship_styles(&self) -> &[RelationshipStyle] {
        &self.relationships
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_style_builder() {
        let style = ElementStyle::new("Person")
            .with_width(550)
            .with_background(Color::new("#d46a6a").unwrap())
            .with_shape(Shape::Person);

        assert_eq!(style.tag(), "Person");
        assert_eq!(style.width(), Some(550));
        assert_eq!(style.height(), None);
        assert_eq!(style.background().unwrap().as_str(), "#d46a6a");
        assert_eq!(style.shape(), Some(Shape::Person));
    }

    #[test]
    fn test_relationship_style_builder() {
        let style = RelationshipStyle::new("Relationship")
            .with_thickness(4)
            .with_dashed(false)
            .with_font_size(32)
            .with_width(400);

        assert_eq!(style.thickness(), Some(4));
        assert_eq!(style.dashed(), Some(false));
        assert_eq!(style.font_size(), Some(32));
        assert_eq!(style.width(), Some(400));
    }

    #[test]
    fn test_opacity_clamped_to_100() {
        let style = ElementStyle::new("Modification").with_opacity(130);
        assert_eq!(style.opacity(), Some(100));
    }

    #[test]
    fn test_styles_append_for_same_tag() {
        let mut styles = Styles::new();
        styles.add_element_style(ElementStyle::new("Element").with_font_size(34));
        styles.add_element_style(ElementStyle::new("Element").with_width(100));

        // Both rules survive; later rules never replace earlier ones.
        assert_eq!(styles.element_styles().len(), 2);
        assert_eq!(styles.element_styles()[0].font_size(), Some(34));
        assert_eq!(styles.element_styles()[1].width(), Some(100));
    }

    #[test]
    fn test_unset_attributes_not_serialized() {
        let style = ElementStyle::new("Risk System")
            .with_background(Color::new("#550000").unwrap());
        let json = serde_json::to_string(&style).unwrap();

        assert_eq!(json, r##"{"tag":"Risk System","background":"#550000"}"##);
    }

    #[test]
    fn test_shape_serialization() {
        assert_eq!(
            serde_json::to_string(&Shape::RoundedBox).unwrap(),
            "\"RoundedBox\""
        );
        assert_eq!(serde_json::to_string(&Border::Dashed).unwrap(), "\"dashed\"");
    }
}
