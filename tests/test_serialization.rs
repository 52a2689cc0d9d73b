use cooklang_parser::Recipe;
use serde_json::json;

#[test]
fn test_recipe_serializes_to_json() {
    let recipe = Recipe::parse(">> servings: 2\nFry @bacon{4%strips} for ~{5%minutes}").unwrap();

    let value = serde_json::to_value(&recipe).unwrap();

    assert_eq!(value["metadata"][0]["key"], json!("servings"));
    assert_eq!(value["metadata"][0]["value"], json!("2"));
    assert_eq!(value["ingredients"][0]["name"], json!("bacon"));
    assert_eq!(value["ingredients"][0]["amount"], json!("4"));
    assert_eq!(value["ingredients"][0]["unit"], json!("strips"));
    assert_eq!(value["timers"][0]["seconds"], json!(300.0));
}

#[test]
fn test_absent_attributes_serialize_as_null() {
    let recipe = Recipe::parse("Add @salt to taste").unwrap();

    let value = serde_json::to_value(&recipe).unwrap();

    assert_eq!(value["ingredients"][0]["name"], json!("salt"));
    assert!(value["ingredients"][0]["amount"].is_null());
    assert!(value["ingredients"][0]["unit"].is_null());
}

#[test]
fn test_step_items_serialize_with_their_kind() {
    let recipe = Recipe::parse("Fry @bacon in the #pan").unwrap();

    let value = serde_json::to_value(&recipe).unwrap();
    let items = value["steps"][0]["items"].as_array().unwrap();

    assert_eq!(items[0]["Text"], json!("Fry "));
    assert_eq!(items[1]["Ingredient"]["name"], json!("bacon"));
    assert_eq!(items[3]["Cookware"]["name"], json!("pan"));
}
