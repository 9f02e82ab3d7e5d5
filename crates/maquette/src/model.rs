//! The architecture model: elements and the relationships between them.
//!
//! A [`Model`] is a registry of named elements (people, software systems,
//! and the containers owned by systems) plus directed, described
//! relationships between them. Elements are referenced by lightweight
//! [`ElementId`] handles returned from the `add_*` constructors.

use std::fmt;

use serde::{Deserialize, Serialize};

use maquette_core::tags::{Tags, builtin};

use crate::error::MaquetteError;

/// Identifier of an element within a model.
///
/// Ids are assigned sequentially in declaration order and are stable for
/// the lifetime of a serialized workspace file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a relationship within a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipId(u32);

impl fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of an element, derived from where it lives in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Person,
    SoftwareSystem,
    Container,
}

/// A person interacting with the modeled systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    id: ElementId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    tags: Tags,
}

impl Person {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

/// A software system, owning zero or more containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSystem {
    id: ElementId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    tags: Tags,
    #[serde(default)]
    containers: Vec<Container>,
}

impl SoftwareSystem {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Containers owned by this system, in declaration order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }
}

/// A deployable/runnable unit inside exactly one software system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    id: ElementId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    tags: Tags,
}

impl Container {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

/// A directed, described edge between two elements.
///
/// Several relationships may connect the same pair of elements; they are
/// distinguished by description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    id: RelationshipId,
    source: ElementId,
    destination: ElementId,
    description: String,
    tags: Tags,
}

impl Relationship {
    pub fn id(&self) -> RelationshipId {
        self.id
    }

    pub fn source(&self) -> ElementId {
        self.source
    }

    pub fn destination(&self) -> ElementId {
        self.destination
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Append a tag to this relationship.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.add(tag);
    }
}

/// Registry of all elements and relationships in a workspace.
///
/// # Examples
///
/// ```
/// use maquette::model::Model;
///
/// let mut model = Model::new();
/// let user = model.add_person("User", Some("An end user")).unwrap();
/// let shop = model.add_software_system("Shop", None).unwrap();
/// let api = model.add_container(shop, "API", None).unwrap();
///
/// model.add_relationship(user, shop, "Places orders").unwrap();
/// assert_eq!(model.canonical_name(api).as_deref(), Some("Shop/API"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default)]
    people: Vec<Person>,
    #[serde(default)]
    software_systems: Vec<SoftwareSystem>,
    #[serde(default)]
    relationships: Vec<Relationship>,
    #[serde(skip)]
    next_element_id: u32,
    #[serde(skip)]
    next_relationship_id: u32,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person to the model.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::DuplicateElementName`] if a person or
    /// software system with this name already exists.
    pub fn add_person(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ElementId, MaquetteError> {
        self.check_top_level_name(name)?;
        let id = self.next_element_id();
        self.people.push(Person {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            tags: Tags::from_iter([builtin::ELEMENT, builtin::PERSON]),
        });
        Ok(id)
    }

    /// Add a software system to the model.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::DuplicateElementName`] if a person or
    /// software system with this name already exists.
    pub fn add_software_system(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ElementId, MaquetteError> {
        self.check_top_level_name(name)?;
        let id = self.next_element_id();
        self.software_systems.push(SoftwareSystem {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            tags: Tags::from_iter([builtin::ELEMENT, builtin::SOFTWARE_SYSTEM]),
            containers: Vec::new(),
        });
        Ok(id)
    }

    /// Add a container owned by the given software system.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::UnknownElement`] if `system` does not exist,
    /// [`MaquetteError::NotASoftwareSystem`] if it names a person or a
    /// container, and [`MaquetteError::DuplicateElementName`] if the system
    /// already owns a container with this name.
    pub fn add_container(
        &mut self,
        system: ElementId,
        name: &str,
        description: Option<&str>,
    ) -> Result<ElementId, MaquetteError> {
        match self.element_kind(system) {
            Some(ElementKind::SoftwareSystem) => {}
            Some(_) => return Err(MaquetteError::NotASoftwareSystem(system)),
            None => return Err(MaquetteError::UnknownElement(system)),
        }

        let id = self.next_element_id();
        let owner = self
            .software_systems
            .iter_mut()
            .find(|s| s.id == system)
            .expect("kind check guarantees the system exists");

        if owner.containers.iter().any(|c| c.name == name) {
            return Err(MaquetteError::DuplicateElementName(name.to_string()));
        }

        owner.containers.push(Container {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            tags: Tags::from_iter([builtin::ELEMENT, builtin::CONTAINER]),
        });
        Ok(id)
    }

    /// Add a directed relationship between two elements.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::UnknownElement`] if either endpoint does
    /// not exist in the model.
    pub fn add_relationship(
        &mut self,
        source: ElementId,
        destination: ElementId,
        description: &str,
    ) -> Result<RelationshipId, MaquetteError> {
        for endpoint in [source, destination] {
            if self.element_kind(endpoint).is_none() {
                return Err(MaquetteError::UnknownElement(endpoint));
            }
        }

        let id = RelationshipId(self.next_relationship_id + 1);
        self.next_relationship_id += 1;
        self.relationships.push(Relationship {
            id,
            source,
            destination,
            description: description.to_string(),
            tags: Tags::from_iter([builtin::RELATIONSHIP]),
        });
        Ok(id)
    }

    /// People in declaration order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Software systems in declaration order.
    pub fn software_systems(&self) -> &[SoftwareSystem] {
        &self.software_systems
    }

    /// Relationships in declaration order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Look up a software system by id.
    pub fn software_system(&self, id: ElementId) -> Option<&SoftwareSystem> {
        self.software_systems.iter().find(|s| s.id == id)
    }

    /// Mutable access to a relationship, for tagging after creation.
    pub fn relationship_mut(&mut self, id: RelationshipId) -> Option<&mut Relationship> {
        self.relationships.iter_mut().find(|r| r.id == id)
    }

    /// The kind of the element with the given id, if it exists.
    pub fn element_kind(&self, id: ElementId) -> Option<ElementKind> {
        if self.people.iter().any(|p| p.id == id) {
            return Some(ElementKind::Person);
        }
        for system in &self.software_systems {
            if system.id == id {
                return Some(ElementKind::SoftwareSystem);
            }
            if system.containers.iter().any(|c| c.id == id) {
                return Some(ElementKind::Container);
            }
        }
        None
    }

    /// The id of the software system owning the given container.
    pub fn parent_system(&self, container: ElementId) -> Option<ElementId> {
        self.software_systems
            .iter()
            .find(|s| s.containers.iter().any(|c| c.id == container))
            .map(|s| s.id)
    }

    /// Canonical name of an element: the plain name for people and
    /// systems, `System/Container` for containers.
    ///
    /// Canonical names identify elements across workspace files even when
    /// declaration order (and therefore id numbering) has changed.
    pub fn canonical_name(&self, id: ElementId) -> Option<String> {
        if let Some(person) = self.people.iter().find(|p| p.id == id) {
            return Some(person.name.clone());
        }
        for system in &self.software_systems {
            if system.id == id {
                return Some(system.name.clone());
            }
            if let Some(container) = system.containers.iter().find(|c| c.id == id) {
                return Some(format!("{}/{}", system.name, container.name));
            }
        }
        None
    }

    /// Find an element by canonical name.
    pub fn find_by_name(&self, name: &str) -> Option<ElementId> {
        if let Some(person) = self.people.iter().find(|p| p.name == name) {
            return Some(person.id);
        }
        for system in &self.software_systems {
            if system.name == name {
                return Some(system.id);
            }
            for container in &system.containers {
                if format!("{}/{}", system.name, container.name) == name {
                    return Some(container.id);
                }
            }
        }
        None
    }

    /// Rebuild the id counters after deserialization.
    ///
    /// The counters are not part of the persisted format; without this,
    /// adding to a loaded model would reissue already-used ids.
    pub(crate) fn restore_counters(&mut self) {
        let max_element = self
            .people
            .iter()
            .map(|p| p.id.0)
            .chain(self.software_systems.iter().flat_map(|s| {
                std::iter::once(s.id.0).chain(s.containers.iter().map(|c| c.id.0))
            }))
            .max()
            .unwrap_or(0);
        let max_relationship = self.relationships.iter().map(|r| r.id.0).max().unwrap_or(0);

        self.next_element_id = max_element;
        self.next_relationship_id = max_relationship;
    }

    fn next_element_id(&mut self) -> ElementId {
        self.next_element_id += 1;
        ElementId(self.next_element_id)
    }

    fn check_top_level_name(&self, name: &str) -> Result<(), MaquetteError> {
        let taken = self.people.iter().any(|p| p.name == name)
            || self.software_systems.iter().any(|s| s.name == name);
        if taken {
            return Err(MaquetteError::DuplicateElementName(name.to_string()));
        }
        Ok(())
    }
}
