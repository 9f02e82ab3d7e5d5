//! Integration tests for the save / load / layout-merge cycle.

use std::fs;

use tempfile::tempdir;

use maquette::{MaquetteError, Workspace, geometry::Position, model::ElementId};

fn build_workspace() -> (Workspace, ElementId, ElementId) {
    let mut workspace = Workspace::new("Web shop", None);
    let user = workspace.model_mut().add_person("User", None).unwrap();
    let shop = workspace
        .model_mut()
        .add_software_system("Shop", None)
        .unwrap();
    workspace
        .model_mut()
        .add_relationship(user, shop, "Buys")
        .unwrap();

    workspace
        .create_system_context_view(shop, "Context", None)
        .unwrap();
    workspace.add_to_view("Context", user).unwrap();
    workspace.add_to_view("Context", shop).unwrap();

    (workspace, user, shop)
}

#[test]
fn test_persist_without_previous_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");

    let (mut workspace, ..) = build_workspace();
    workspace.persist(&path).unwrap();

    let loaded = Workspace::load(&path).unwrap();
    assert_eq!(loaded.name(), "Web shop");
    assert_eq!(
        loaded.views().system_context_views()[0].elements().len(),
        2
    );
}

#[test]
fn test_persist_twice_is_byte_identical_without_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");

    let (mut first, ..) = build_workspace();
    first.persist(&path).unwrap();
    let first_bytes = fs::read(&path).unwrap();

    let (mut second, ..) = build_workspace();
    second.persist(&path).unwrap();
    let second_bytes = fs::read(&path).unwrap();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_persist_carries_manual_layout_forward() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");

    // First run, followed by a manual layout edit.
    let (mut workspace, user, _) = build_workspace();
    workspace.persist(&path).unwrap();

    let mut edited = Workspace::load(&path).unwrap();
    edited
        .set_position("Context", user, Position::new(320, 80))
        .unwrap();
    edited.save(&path).unwrap();

    // Regeneration run: fresh model, positions merged from the file.
    let (mut regenerated, user, shop) = build_workspace();
    regenerated.persist(&path).unwrap();

    let reloaded = Workspace::load(&path).unwrap();
    let context = &reloaded.views().system_context_views()[0];
    let user_entry = context.elements().iter().find(|e| e.id() == user).unwrap();
    assert_eq!(user_entry.position(), Some(Position::new(320, 80)));
    let shop_entry = context.elements().iter().find(|e| e.id() == shop).unwrap();
    assert_eq!(shop_entry.position(), None);
}

#[test]
fn test_persist_over_corrupted_file_starts_fresh() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    fs::write(&path, "{ this is not json").unwrap();

    let (mut workspace, ..) = build_workspace();
    workspace.persist(&path).unwrap();

    let loaded = Workspace::load(&path).unwrap();
    assert_eq!(loaded.name(), "Web shop");
    for view in loaded.views().system_context_views() {
        for element in view.elements() {
            assert_eq!(element.position(), None);
        }
    }
}

#[test]
fn test_persist_over_truncated_valid_json_starts_fresh() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");

    // Valid JSON, but not a workspace document.
    fs::write(&path, "{\"name\": 42}").unwrap();

    let (mut workspace, ..) = build_workspace();
    assert!(workspace.persist(&path).is_ok());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let result = Workspace::load(&path);
    assert!(matches!(result, Err(MaquetteError::Io(_))));
}
