//! Integration tests for `mealprep recipe`
//!
//! - Built-in recipes run the full course through the director
//! - Configured menus are served by name
//! - Unknown names fail with the list of available builders

mod common;

use common::{TestKitchen, SAMPLE_SETTINGS};

#[test]
fn test_vegan_recipe_text_output() {
    let kitchen = TestKitchen::new();
    let output = kitchen.run(&["recipe", "vegan"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("vegan meal constructed (strict)"), "stdout: {stdout}");
    assert!(stdout.contains("Starter: SALAD"));
    assert!(stdout.contains("Main: VEGGIE_STIR_FRY"));
    assert!(stdout.contains("Dessert: VEGAN_PUDDING"));
    assert!(stdout.contains("Drink: VEGAN_SHAKE"));
}

#[test]
fn test_healthy_recipe_json_output() {
    let kitchen = TestKitchen::new();
    let json = kitchen.run_json(&["recipe", "healthy"]);

    assert_eq!(json["builder"], "healthy");
    assert_eq!(json["policy"], "permissive");
    assert_eq!(json["starter"], "SALAD");
    assert_eq!(json["main"], "GRILLED_CHICKEN");
    assert_eq!(json["dessert"], "FRUIT_SALAD");
    assert_eq!(json["drink"], "WATER");
}

#[test]
fn test_recipe_name_is_case_insensitive() {
    let kitchen = TestKitchen::new();
    let json = kitchen.run_json(&["recipe", "VEGAN"]);
    assert_eq!(json["builder"], "vegan");
}

#[test]
fn test_configured_menu_recipe() {
    let kitchen = TestKitchen::new();
    kitchen.write_settings(SAMPLE_SETTINGS);

    let json = kitchen.run_json(&["recipe", "seaside"]);
    assert_eq!(json["builder"], "seaside");
    assert_eq!(json["policy"], "strict");
    assert_eq!(json["starter"], "SOUP");
    assert_eq!(json["main"], "FISH");
    assert_eq!(json["dessert"], "ICE_CREAM");
    assert_eq!(json["drink"], "FRUIT_JUICE");
}

#[test]
fn test_unknown_recipe_fails() {
    let kitchen = TestKitchen::new();
    let output = kitchen.run(&["recipe", "keto"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Builder 'keto' not found"), "stderr: {stderr}");
    assert!(stderr.contains("vegan, healthy"), "stderr: {stderr}");
    assert_eq!(stderr.matches("not found").count(), 1, "stderr: {stderr}");
}

#[test]
fn test_quiet_suppresses_output() {
    let kitchen = TestKitchen::new();
    let output = kitchen.run(&["recipe", "vegan", "--quiet"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
