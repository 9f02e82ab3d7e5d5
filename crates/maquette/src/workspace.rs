//! The workspace: root object tying the model and views together, plus
//! JSON persistence and the layout-merge cycle.

use std::{fs, io, path::Path};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use maquette_core::geometry::Position;

use crate::{
    error::MaquetteError,
    model::{ElementId, Model},
    views::ViewSet,
};

/// The top-level container for an architecture model and its views.
///
/// A workspace is built fresh on every run; the only state that survives
/// across runs is the per-view element layout, carried forward by
/// [`Workspace::persist`].
///
/// # Examples
///
/// ```
/// use maquette::Workspace;
///
/// let mut workspace = Workspace::new("Web shop", Some("Example workspace"));
/// let user = workspace.model_mut().add_person("User", None).unwrap();
/// let shop = workspace
///     .model_mut()
///     .add_software_system("Shop", None)
///     .unwrap();
/// workspace.model_mut().add_relationship(user, shop, "Buys").unwrap();
///
/// workspace
///     .create_system_context_view(shop, "Context", Some("Shop and its users"))
///     .unwrap();
/// workspace.add_to_view("Context", user).unwrap();
/// workspace.add_to_view("Context", shop).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    model: Model,
    #[serde(default)]
    views: ViewSet,
}

impl Workspace {
    /// Create an empty workspace.
    pub fn new(name: &str, description: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            description: description.map(str::to_string),
            model: Model::new(),
            views: ViewSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The element and relationship registry.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Mutable access to the model, for building the element graph.
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    /// The views and their style configuration.
    pub fn views(&self) -> &ViewSet {
        &self.views
    }

    /// Mutable access to the views, for style configuration.
    pub fn views_mut(&mut self) -> &mut ViewSet {
        &mut self.views
    }

    /// Create a system context view scoped to `software_system`.
    ///
    /// # Errors
    ///
    /// See [`ViewSet::create_system_context_view`].
    pub fn create_system_context_view(
        &mut self,
        software_system: ElementId,
        key: &str,
        description: Option<&str>,
    ) -> Result<(), MaquetteError> {
        self.views
            .create_system_context_view(&self.model, software_system, key, description)
    }

    /// Create a container view scoped to `software_system`.
    ///
    /// # Errors
    ///
    /// See [`ViewSet::create_container_view`].
    pub fn create_container_view(
        &mut self,
        software_system: ElementId,
        key: &str,
        description: Option<&str>,
    ) -> Result<(), MaquetteError> {
        self.views
            .create_container_view(&self.model, software_system, key, description)
    }

    /// Add an element to the view with the given key.
    ///
    /// # Errors
    ///
    /// See [`ViewSet::add_element`].
    pub fn add_to_view(&mut self, key: &str, element: ElementId) -> Result<(), MaquetteError> {
        self.views.add_element(&self.model, key, element)
    }

    /// Set the layout position of an element within a view.
    ///
    /// # Errors
    ///
    /// See [`ViewSet::set_position`].
    pub fn set_position(
        &mut self,
        key: &str,
        element: ElementId,
        position: Position,
    ) -> Result<(), MaquetteError> {
        self.views.set_position(key, element, position)
    }

    /// Copy diagram layout positions from a previously saved workspace.
    ///
    /// Only positions are copied; the semantic content of `self` is left
    /// untouched.
    pub fn copy_layout_from(&mut self, previous: &Workspace) {
        self.views
            .copy_layout_from(&self.model, &previous.model, &previous.views);
    }

    /// Serialize the workspace to a pretty-printed JSON string.
    ///
    /// Output is deterministic: fields and collections serialize in
    /// declaration order, so the same workspace always produces the same
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, MaquetteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a workspace from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::Json`] if the string is not a valid
    /// workspace document.
    pub fn from_json_str(json: &str) -> Result<Self, MaquetteError> {
        let mut workspace: Workspace = serde_json::from_str(json)?;
        workspace.model.restore_counters();
        Ok(workspace)
    }

    /// Write the workspace to a file, overwriting any existing content.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MaquetteError> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json)?;
        info!(path = path.display().to_string(); "Workspace saved");
        Ok(())
    }

    /// Load a workspace from a file.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::Io`] if the file cannot be read and
    /// [`MaquetteError::Json`] if its content is not a valid workspace.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MaquetteError> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Save the workspace to `path`, first merging in layout positions
    /// from any previously saved file at the same path.
    ///
    /// A missing previous file and an unreadable one both result in a
    /// fresh save with no layout merged; both cases are logged. Any other
    /// I/O failure while reading the previous file propagates, so that
    /// unrelated problems (e.g. permissions) are not masked.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::Io`] or [`MaquetteError::Json`] from the
    /// final write.
    pub fn persist(&mut self, path: impl AsRef<Path>) -> Result<(), MaquetteError> {
        let path = path.as_ref();

        match Self::load(path) {
            Ok(previous) => {
                info!(path = path.display().to_string(); "Merging layout from previous workspace");
                self.copy_layout_from(&previous);
            }
            Err(MaquetteError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = path.display().to_string(); "No previous workspace, starting fresh");
            }
            Err(MaquetteError::Json(err)) => {
                warn!(
                    path = path.display().to_string(),
                    error = err.to_string();
                    "Previous workspace is unreadable, starting fresh"
                );
            }
            Err(err) => return Err(err),
        }

        self.save(path)
    }
}
