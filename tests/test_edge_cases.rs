use cooklang_parser::{Item, Recipe};

#[test]
fn test_empty_input_yields_empty_recipe() {
    let recipe = Recipe::parse("").unwrap();
    assert!(recipe.metadata.is_empty());
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.cookware.is_empty());
    assert!(recipe.timers.is_empty());
    assert!(recipe.steps.is_empty());
    assert_eq!(recipe.total_time(), 0.0);
}

#[test]
fn test_comment_only_input_yields_empty_recipe() {
    let recipe = Recipe::parse("-- nothing here\n[- not\neven here -]\n").unwrap();
    assert!(recipe.steps.is_empty());
}

#[test]
fn test_sigils_that_match_no_pattern_stay_plain_text() {
    // a lone tilde is not a timer and a percent sign is not an attribute
    let recipe = Recipe::parse("Tilde ~ alone and 100% effort").unwrap();
    assert_eq!(recipe.timers.len(), 0);
    assert_eq!(
        recipe.steps[0].items,
        vec![Item::Text("Tilde ~ alone and 100% effort".into())]
    );
}

#[test]
fn test_timer_without_unit_separator_is_plain_text() {
    let recipe = Recipe::parse("Wait ~{5} then serve").unwrap();
    assert_eq!(recipe.timers.len(), 0);
    assert_eq!(
        recipe.steps[0].items,
        vec![Item::Text("Wait ~{5} then serve".into())]
    );
}

#[test]
fn test_malformed_timer_amount_normalizes_to_zero_seconds() {
    // zero amounts are kept as timers but contribute no duration
    let recipe = Recipe::parse("Rest ~{0%minutes} if needed").unwrap();
    assert_eq!(recipe.timers.len(), 1);
    assert_eq!(recipe.timers[0].seconds, 0.0);
    assert_eq!(recipe.total_time(), 0.0);
}

#[test]
fn test_metadata_without_colon_is_an_ordinary_line() {
    let recipe = Recipe::parse(">> just a note").unwrap();
    assert!(recipe.metadata.is_empty());
    assert_eq!(recipe.steps.len(), 1);
}

#[test]
fn test_indented_metadata_is_not_metadata() {
    // the metadata form is anchored to the start of the line
    let recipe = Recipe::parse("  >> servings: 4").unwrap();
    assert!(recipe.metadata.is_empty());
    assert_eq!(recipe.steps.len(), 1);
}

#[test]
fn test_adjacent_annotations() {
    let recipe = Recipe::parse("@salt{}@pepper{}").unwrap();
    let names: Vec<&str> = recipe
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.as_str())
        .collect();
    assert_eq!(names, vec!["salt", "pepper"]);
    assert_eq!(recipe.steps[0].items.len(), 2);
}

#[test]
fn test_cookware_with_attribute_content_falls_back() {
    // the dialect only accepts an empty attribute block on cookware
    let recipe = Recipe::parse("Use #pan{2}").unwrap();
    assert_eq!(recipe.cookware.len(), 1);
    assert_eq!(recipe.cookware[0].name, "pan");
    assert_eq!(recipe.cookware[0].raw, "#pan");
}
