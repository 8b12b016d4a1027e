//! Theme Preference Tests
//!
//! The selected theme is stored under `link-hub-theme` and read back by
//! every later invocation.

use linkhub_testing::TestWorld;
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_default_theme_is_cyan() -> Result<()> {
    let world = TestWorld::new();

    let json = world.run_json(&["theme", "show"])?;

    assert_eq!(json["content"]["theme"], "cyan");
    Ok(())
}

#[test]
fn test_set_theme_persists() -> Result<()> {
    // Given: a fresh data directory
    let world = TestWorld::new();

    // When: selecting rose
    let json = world.run_json(&["theme", "set", "rose"])?;
    assert_eq!(json["content"]["theme"], "rose");
    assert_eq!(json["content"]["previous"], "cyan");

    // Then: the preference file holds it and later commands see it
    let stored = world
        .read_data_file("preferences.toml")
        .expect("preferences written");
    assert!(stored.contains("link-hub-theme"));
    assert!(stored.contains("rose"));

    let json = world.run_json(&["theme", "show"])?;
    assert_eq!(json["content"]["theme"], "rose");

    let json = world.run_json(&["list"])?;
    assert_eq!(json["content"]["theme"], "rose");
    Ok(())
}

#[test]
fn test_theme_list_marks_current() -> Result<()> {
    let world = TestWorld::new();
    world.run_json(&["theme", "set", "emerald"])?;

    let json = world.run_json(&["theme", "list"])?;

    let themes = json["content"]["themes"].as_array().expect("themes array");
    let ids: Vec<&str> = themes.iter().filter_map(|t| t["id"].as_str()).collect();
    assert_eq!(ids, ["cyan", "rose", "emerald", "violet"]);

    let current: Vec<&str> = themes
        .iter()
        .filter(|t| t["current"] == true)
        .filter_map(|t| t["id"].as_str())
        .collect();
    assert_eq!(current, ["emerald"]);
    Ok(())
}

#[test]
fn test_unknown_theme_is_rejected() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["theme", "set", "neon"])?;

    assert!(!result.success());
    assert!(predicate::str::contains("Unknown theme: neon").eval(result.stderr()));
    assert!(world.read_data_file("preferences.toml").is_none());
    Ok(())
}

#[test]
fn test_corrupt_preferences_fall_back_to_default() -> Result<()> {
    let world = TestWorld::new();
    std::fs::write(world.data_dir().join("preferences.toml"), "not = [valid")?;

    let json = world.run_json(&["theme", "show"])?;

    assert_eq!(json["content"]["theme"], "cyan");
    Ok(())
}
