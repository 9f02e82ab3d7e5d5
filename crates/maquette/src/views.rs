//! Diagram views over a model, plus their style configuration.
//!
//! A view is a named, described subset of the model's elements intended for
//! one diagram. Two kinds exist: a system context view (a system and its
//! neighbors) and a container view (one system's containers and their
//! external neighbors). Views also carry the per-element layout positions
//! that survive workspace regeneration.
//!
//! Operations that need to validate element references take the [`Model`]
//! as an explicit argument; the view set itself never holds a reference
//! into the model.

use serde::{Deserialize, Serialize};

use maquette_core::{geometry::Position, style::Styles};

use crate::{
    error::MaquetteError,
    model::{ElementId, ElementKind, Model},
};

/// An element's entry in a view: which element to show, and where.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementView {
    id: ElementId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
}

impl ElementView {
    fn new(id: ElementId) -> Self {
        Self { id, position: None }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// A diagram scoped to one software system and its direct neighbors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContextView {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    software_system: ElementId,
    #[serde(default)]
    elements: Vec<ElementView>,
}

impl SystemContextView {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The system this view is scoped to.
    pub fn software_system(&self) -> ElementId {
        self.software_system
    }

    pub fn elements(&self) -> &[ElementView] {
        &self.elements
    }
}

/// A diagram decomposing one software system into its containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerView {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    software_system: ElementId,
    #[serde(default)]
    elements: Vec<ElementView>,
}

impl ContainerView {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The system whose containers this view decomposes.
    pub fn software_system(&self) -> ElementId {
        self.software_system
    }

    pub fn elements(&self) -> &[ElementView] {
        &self.elements
    }
}

/// View-level configuration; currently just the style rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    styles: Styles,
}

impl Configuration {
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut Styles {
        &mut self.styles
    }
}

/// All views of a workspace plus their shared configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSet {
    #[serde(default)]
    system_context_views: Vec<SystemContextView>,
    #[serde(default)]
    container_views: Vec<ContainerView>,
    #[serde(default)]
    configuration: Configuration,
}

impl ViewSet {
    /// Create an empty view set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a system context view scoped to `software_system`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is already used by any view, if the
    /// element does not exist, or if it is not a software system.
    pub fn create_system_context_view(
        &mut self,
        model: &Model,
        software_system: ElementId,
        key: &str,
        description: Option<&str>,
    ) -> Result<(), MaquetteError> {
        self.check_new_view(model, software_system, key)?;
        self.system_context_views.push(SystemContextView {
            key: key.to_string(),
            description: description.map(str::to_string),
            software_system,
            elements: Vec::new(),
        });
        Ok(())
    }

    /// Create a container view scoped to `software_system`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is already used by any view, if the
    /// element does not exist, or if it is not a software system.
    pub fn create_container_view(
        &mut self,
        model: &Model,
        software_system: ElementId,
        key: &str,
        description: Option<&str>,
    ) -> Result<(), MaquetteError> {
        self.check_new_view(model, software_system, key)?;
        self.container_views.push(ContainerView {
            key: key.to_string(),
            description: description.map(str::to_string),
            software_system,
            elements: Vec::new(),
        });
        Ok(())
    }

    /// Add an element to the view with the given key.
    ///
    /// Adding an element that is already in the view is a no-op.
    ///
    /// System context views accept people and software systems (including
    /// the scoped one), never containers. Container views accept people,
    /// systems other than the scoped one, and containers owned by the
    /// scoped system.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::UnknownView`] for an unknown key,
    /// [`MaquetteError::UnknownElement`] for an unknown element, and
    /// [`MaquetteError::ElementNotAllowed`] when the membership rules
    /// above reject the element.
    pub fn add_element(
        &mut self,
        model: &Model,
        key: &str,
        element: ElementId,
    ) -> Result<(), MaquetteError> {
        let kind = model
            .element_kind(element)
            .ok_or(MaquetteError::UnknownElement(element))?;

        if let Some(view) = self.system_context_views.iter_mut().find(|v| v.key == key) {
            let allowed = matches!(kind, ElementKind::Person | ElementKind::SoftwareSystem);
            if !allowed {
                return Err(MaquetteError::ElementNotAllowed {
                    element,
                    view: key.to_string(),
                });
            }
            push_unique(&mut view.elements, element);
            return Ok(());
        }

        if let Some(view) = self.container_views.iter_mut().find(|v| v.key == key) {
            let allowed = match kind {
                ElementKind::Person => true,
                ElementKind::SoftwareSystem => element != view.software_system,
                ElementKind::Container => {
                    model.parent_system(element) == Some(view.software_system)
                }
            };
            if !allowed {
                return Err(MaquetteError::ElementNotAllowed {
                    element,
                    view: key.to_string(),
                });
            }
            push_unique(&mut view.elements, element);
            return Ok(());
        }

        Err(MaquetteError::UnknownView(key.to_string()))
    }

    /// Set the layout position of an element within a view.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::UnknownView`] for an unknown key and
    /// [`MaquetteError::UnknownElement`] if the element is not a member
    /// of that view.
    pub fn set_position(
        &mut self,
        key: &str,
        element: ElementId,
        position: Position,
    ) -> Result<(), MaquetteError> {
        let elements = self
            .elements_mut(key)
            .ok_or_else(|| MaquetteError::UnknownView(key.to_string()))?;
        let entry = elements
            .iter_mut()
            .find(|e| e.id == element)
            .ok_or(MaquetteError::UnknownElement(element))?;
        entry.position = Some(position);
        Ok(())
    }

    /// System context views in declaration order.
    pub fn system_context_views(&self) -> &[SystemContextView] {
        &self.system_context_views
    }

    /// Container views in declaration order.
    pub fn container_views(&self) -> &[ContainerView] {
        &self.container_views
    }

    /// The shared view configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Mutable access to the shared view configuration.
    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    /// Copy element positions from a previously saved view set.
    ///
    /// Views are matched by kind and key; elements within a matched view
    /// are matched by canonical name, so coordinates follow renamed-free
    /// elements even when id numbering differs between the two files.
    /// Only positions are copied; nothing else in `self` changes.
    pub fn copy_layout_from(&mut self, model: &Model, old_model: &Model, old_views: &ViewSet) {
        for view in &mut self.system_context_views {
            if let Some(old) = old_views
                .system_context_views
                .iter()
                .find(|v| v.key == view.key)
            {
                copy_positions(&mut view.elements, model, &old.elements, old_model);
            }
        }
        for view in &mut self.container_views {
            if let Some(old) = old_views.container_views.iter().find(|v| v.key == view.key) {
                copy_positions(&mut view.elements, model, &old.elements, old_model);
            }
        }
    }

    fn elements_mut(&mut self, key: &str) -> Option<&mut Vec<ElementView>> {
        if let Some(view) = self.system_context_views.iter_mut().find(|v| v.key == key) {
            return Some(&mut view.elements);
        }
        self.container_views
            .iter_mut()
            .find(|v| v.key == key)
            .map(|v| &mut v.elements)
    }

    fn check_new_view(
        &self,
        model: &Model,
        software_system: ElementId,
        key: &str,
    ) -> Result<(), MaquetteError> {
        let key_taken = self.system_context_views.iter().any(|v| v.key == key)
            || self.container_views.iter().any(|v| v.key == key);
        if key_taken {
            return Err(MaquetteError::DuplicateViewKey(key.to_string()));
        }
        match model.element_kind(software_system) {
            Some(ElementKind::SoftwareSystem) => Ok(()),
            Some(_) => Err(MaquetteError::NotASoftwareSystem(software_system)),
            None => Err(MaquetteError::UnknownElement(software_system)),
        }
    }
}

fn push_unique(elements: &mut Vec<ElementView>, element: ElementId) {
    if !elements.iter().any(|e| e.id == element) {
        elements.push(ElementView::new(element));
    }
}

fn copy_positions(
    elements: &mut [ElementView],
    model: &Model,
    old_elements: &[ElementView],
    old_model: &Model,
) {
    for entry in elements {
        let Some(name) = model.canonical_name(entry.id) else {
            continue;
        };
        let old_position = old_elements
            .iter()
            .find(|old| old_model.canonical_name(old.id).as_deref() == Some(name.as_str()))
            .and_then(|old| old.position);
        if let Some(position) = old_position {
            entry.position = Some(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Model, ViewSet, ElementId, ElementId, ElementId) {
        let mut model = Model::new();
        let user = model.add_person("User", None).unwrap();
        let shop = model.add_software_system("Shop", None).unwrap();
        let api = model.add_container(shop, "API", None).unwrap();
        (model, ViewSet::new(), user, shop, api)
    }

    #[test]
    fn test_duplicate_view_key_rejected_across_kinds() {
        let (model, mut views, _, shop, _) = sample();
        views
            .create_system_context_view(&model, shop, "Overview", None)
            .unwrap();

        let result = views.create_container_view(&model, shop, "Overview", None);
        assert!(matches!(result, Err(MaquetteError::DuplicateViewKey(_))));
    }

    #[test]
    fn test_view_scope_must_be_software_system() {
        let (model, mut views, user, _, _) = sample();

        let result = views.create_system_context_view(&model, user, "Bad", None);
        assert!(matches!(result, Err(MaquetteError::NotASoftwareSystem(_))));
    }

    #[test]
    fn test_context_view_rejects_containers() {
        let (model, mut views, user, shop, api) = sample();
        views
            .create_system_context_view(&model, shop, "Context", None)
            .unwrap();

        views.add_element(&model, "Context", user).unwrap();
        views.add_element(&model, "Context", shop).unwrap();

        let result = views.add_element(&model, "Context", api);
        assert!(matches!(
            result,
            Err(MaquetteError::ElementNotAllowed { .. })
        ));
        assert_eq!(views.system_context_views()[0].elements().len(), 2);
    }

    #[test]
    fn test_container_view_rejects_scoped_system_and_foreign_containers() {
        let (mut model, mut views, user, shop, api) = sample();
        let billing = model.add_software_system("Billing", None).unwrap();
        let ledger = model.add_container(billing, "Ledger", None).unwrap();

        views
            .create_container_view(&model, shop, "Decomposition", None)
            .unwrap();

        views.add_element(&model, "Decomposition", user).unwrap();
        views.add_element(&model, "Decomposition", api).unwrap();
        views.add_element(&model, "Decomposition", billing).unwrap();

        // The scoped system itself is implied, not a member.
        assert!(matches!(
            views.add_element(&model, "Decomposition", shop),
            Err(MaquetteError::ElementNotAllowed { .. })
        ));
        // Containers of other systems do not belong in this decomposition.
        assert!(matches!(
            views.add_element(&model, "Decomposition", ledger),
            Err(MaquetteError::ElementNotAllowed { .. })
        ));
    }

    #[test]
    fn test_add_element_is_idempotent() {
        let (model, mut views, user, shop, _) = sample();
        views
            .create_system_context_view(&model, shop, "Context", None)
            .unwrap();

        views.add_element(&model, "Context", user).unwrap();
        views.add_element(&model, "Context", user).unwrap();

        assert_eq!(views.system_context_views()[0].elements().len(), 1);
    }

    #[test]
    fn test_set_position_requires_membership() {
        let (model, mut views, user, shop, _) = sample();
        views
            .create_system_context_view(&model, shop, "Context", None)
            .unwrap();
        views.add_element(&model, "Context", user).unwrap();

        views
            .set_position("Context", user, Position::new(100, 200))
            .unwrap();
        assert_eq!(
            views.system_context_views()[0].elements()[0].position(),
            Some(Position::new(100, 200))
        );

        assert!(matches!(
            views.set_position("Context", shop, Position::new(0, 0)),
            Err(MaquetteError::UnknownElement(_))
        ));
        assert!(matches!(
            views.set_position("Nope", user, Position::new(0, 0)),
            Err(MaquetteError::UnknownView(_))
        ));
    }

    #[test]
    fn test_copy_layout_matches_by_canonical_name() {
        // Old workspace: declaration order user-then-shop.
        let mut old_model = Model::new();
        let old_user = old_model.add_person("User", None).unwrap();
        let old_shop = old_model.add_software_system("Shop", None).unwrap();
        let mut old_views = ViewSet::new();
        old_views
            .create_system_context_view(&old_model, old_shop, "Context", None)
            .unwrap();
        old_views.add_element(&old_model, "Context", old_user).unwrap();
        old_views.add_element(&old_model, "Context", old_shop).unwrap();
        old_views
            .set_position("Context", old_user, Position::new(10, 20))
            .unwrap();

        // New workspace: same elements declared in the opposite order, so
        // the ids are swapped relative to the old file.
        let mut model = Model::new();
        let shop = model.add_software_system("Shop", None).unwrap();
        let user = model.add_person("User", None).unwrap();
        let mut views = ViewSet::new();
        views
            .create_system_context_view(&model, shop, "Context", None)
            .unwrap();
        views.add_element(&model, "Context", user).unwrap();
        views.add_element(&model, "Context", shop).unwrap();

        views.copy_layout_from(&model, &old_model, &old_views);

        let context = &views.system_context_views()[0];
        let user_entry = context.elements().iter().find(|e| e.id() == user).unwrap();
        assert_eq!(user_entry.position(), Some(Position::new(10, 20)));
        let shop_entry = context.elements().iter().find(|e| e.id() == shop).unwrap();
        assert_eq!(shop_entry.position(), None);
    }

    #[test]
    fn test_copy_layout_ignores_unmatched_views() {
        let (model, mut views, user, shop, _) = sample();
        views
            .create_system_context_view(&model, shop, "Context", None)
            .unwrap();
        views.add_element(&model, "Context", user).unwrap();

        let old_model = Model::new();
        let old_views = ViewSet::new();
        views.copy_layout_from(&model, &old_model, &old_views);

        assert_eq!(views.system_context_views()[0].elements()[0].position(), None);
    }
}
