//! Integration tests for `mealprep catalog` and `mealprep menus`

mod common;

use common::{TestKitchen, SAMPLE_SETTINGS};

#[test]
fn test_catalog_text_lists_every_set() {
    let kitchen = TestKitchen::new();
    let output = kitchen.run(&["catalog"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("starter: SALAD, SOUP, BRUSCHETTA, VEGGIE_STICKS, CHICKEN_WINGS"));
    assert!(stdout.contains("main: GRILLED_CHICKEN, PASTA, VEGGIE_STIR_FRY, FISH, PIZZA"));
    assert!(stdout.contains(
        "dessert: FRUIT_SALAD, ICE_CREAM, CHOCOLATE_CAKE, VEGAN_PUDDING, CHEESECAKE"
    ));
    assert!(stdout.contains("drink: WATER, VEGAN_SHAKE, SODA, FRUIT_JUICE"));
}

#[test]
fn test_catalog_json() {
    let kitchen = TestKitchen::new();
    let json = kitchen.run_json(&["catalog"]);

    assert_eq!(json["starter"].as_array().unwrap().len(), 5);
    assert_eq!(json["main"].as_array().unwrap().len(), 5);
    assert_eq!(json["dessert"].as_array().unwrap().len(), 5);
    assert_eq!(json["drink"].as_array().unwrap().len(), 4);
    assert_eq!(json["drink"][1], "VEGAN_SHAKE");
}

#[test]
fn test_menus_lists_builtins() {
    let kitchen = TestKitchen::new();
    let json = kitchen.run_json(&["menus"]);

    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["vegan", "healthy"]);
    assert_eq!(json[0]["policy"], "strict");
    assert_eq!(json[1]["policy"], "permissive");
}

#[test]
fn test_menus_includes_configured() {
    let kitchen = TestKitchen::new();
    kitchen.write_settings(SAMPLE_SETTINGS);

    let output = kitchen.run(&["menus"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("seaside"));
    assert!(stdout.contains("diner"));
    assert!(stdout.contains("built-in"));
}

#[test]
fn test_no_subcommand_prints_help() {
    let kitchen = TestKitchen::new();
    let output = kitchen.run(&[]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Usage"), "stdout: {stdout}");
}
