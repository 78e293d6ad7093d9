use serde_json::Value;
use site_motion::api::{
    MUTATION_LOG_JSON_SCHEMA_V1, mutations_from_json_compat_str,
    mutations_to_json_contract_v1_pretty,
};
use site_motion::render::DomMutation;
use site_motion::ui::MobileMenu;

fn sample() -> Vec<DomMutation> {
    let mut mutations = MobileMenu::default().toggle().to_vec();
    mutations.push(DomMutation::set_style("bar-fill#0", "width", "80%"));
    mutations.push(DomMutation::ScrollIntoView {
        selector: "#contact".to_owned(),
    });
    mutations
}

#[test]
fn contract_v1_has_schema_version_and_tagged_ops() {
    let json = mutations_to_json_contract_v1_pretty(&sample()).expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["schema_version"], MUTATION_LOG_JSON_SCHEMA_V1);
    let first = &value["mutations"][0];
    assert_eq!(first["op"], "add_class");
    assert_eq!(first["element"], "mobileMenu");
    assert_eq!(first["class"], "open");

    let style = &value["mutations"][4];
    assert_eq!(style["op"], "set_style");
    assert_eq!(style["property"], "width");
    assert_eq!(style["value"], "80%");

    assert_eq!(value["mutations"][5]["op"], "scroll_into_view");
}

#[test]
fn compat_parser_accepts_contract_and_plain_array() {
    let mutations = sample();
    let contract = mutations_to_json_contract_v1_pretty(&mutations).expect("serialize");
    assert_eq!(
        mutations_from_json_compat_str(&contract).expect("contract"),
        mutations
    );

    let plain = serde_json::to_string(&mutations).expect("serialize plain");
    assert_eq!(
        mutations_from_json_compat_str(&plain).expect("plain"),
        mutations
    );
}

#[test]
fn unknown_schema_version_is_rejected() {
    let input = r#"{"schema_version": 2, "mutations": []}"#;
    assert!(mutations_from_json_compat_str(input).is_err());
    assert!(mutations_from_json_compat_str("not json").is_err());
}
