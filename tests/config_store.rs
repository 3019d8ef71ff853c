use std::fs;

use json_modelgen::{store, ConfigRecord, Convention, DeclarationKind, Selection, SelectionState};

#[test]
fn selection_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut selection = Selection::from_record(&store::load(&path).unwrap());
    assert_eq!(
        selection.state(),
        SelectionState::LanguageAndStructSelected(Convention::Swift, DeclarationKind::Struct)
    );
    selection.select_convention(Convention::ObjectMapper);
    selection.select_kind(DeclarationKind::Class);
    store::save(&path, &selection.to_record()).unwrap();

    let restored = Selection::from_record(&store::load(&path).unwrap());
    assert_eq!(restored.convention(), Some(Convention::ObjectMapper));
    assert_eq!(restored.kind(), Some(DeclarationKind::Class));
}

#[test]
fn forced_kind_is_what_gets_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut selection = Selection::default();
    selection.select_convention(Convention::Swift);
    selection.select_kind(DeclarationKind::Struct);
    selection.select_convention(Convention::Dart);
    store::save(&path, &selection.to_record()).unwrap();

    let record = store::load(&path).unwrap();
    assert_eq!(record.output_convention, 5);
    assert_eq!(record.declaration_kind, 1);
}

#[test]
fn record_uses_camel_case_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"outputConvention": 6, "declarationKind": 1, "classPrefix": "AB"}"#).unwrap();

    let record = store::load(&path).unwrap();
    assert_eq!(
        record,
        ConfigRecord { output_convention: 6, declaration_kind: 1, class_prefix: Some("AB".into()) }
    );
    // Codable overrides the stored class kind
    let config = Selection::from_record(&record).to_config();
    assert_eq!(config.convention, Convention::Codable);
    assert_eq!(config.kind, DeclarationKind::Struct);
}

#[test]
fn out_of_range_values_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"outputConvention": 99, "declarationKind": 7}"#).unwrap();

    let config = Selection::from_record(&store::load(&path).unwrap()).to_config();
    assert_eq!(config.convention, Convention::Swift);
    assert_eq!(config.kind, DeclarationKind::Struct);
}

#[test]
fn kind_after_leaving_objc_does_not_depend_on_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut live = Selection::default();
    live.select_convention(Convention::Swift);
    live.select_kind(DeclarationKind::Struct);
    live.select_convention(Convention::ObjC);
    store::save(&path, &live.to_record()).unwrap();

    let mut restored = Selection::from_record(&store::load(&path).unwrap());
    live.select_convention(Convention::Swift);
    restored.select_convention(Convention::Swift);
    assert_eq!(live.kind(), Some(DeclarationKind::Class));
    assert_eq!(restored.kind(), Some(DeclarationKind::Class));
}
