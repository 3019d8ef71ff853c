use json_modelgen::{
    generate, Convention, DeclarationKind, GenerateError, GenerationConfig, NameCollision,
};
use test_case::test_case;

const SAMPLE: &str = r#"{"id":1,"name":"Ann","tags":["x","y"],"address":{"city":"NY"}}"#;

fn config(convention: Convention, kind: DeclarationKind) -> GenerationConfig {
    GenerationConfig::new(convention, kind)
}

#[test]
fn swift_struct_root_then_nested() {
    let out = generate(SAMPLE, "Root", &config(Convention::Swift, DeclarationKind::Struct)).unwrap();
    let root = out.find("struct Root {").unwrap();
    let address = out.find("struct Address {").unwrap();
    assert!(root < address);

    let root_body = &out[root..address];
    for line in ["var id: Int\n", "var name: String\n", "var tags: [String]\n", "var address: Address\n"] {
        assert!(root_body.contains(line), "missing {line:?} in\n{root_body}");
    }
    assert!(out[address..].contains("var city: String\n"));
}

#[test_case(Convention::Swift, "struct Root {", "struct Address {")]
#[test_case(Convention::HandyJson, "struct Root: HandyJSON {", "struct Address: HandyJSON {")]
#[test_case(Convention::SwiftyJson, "struct Root {", "struct Address {")]
#[test_case(Convention::ObjectMapper, "struct Root: Mappable {", "struct Address: Mappable {")]
#[test_case(Convention::ObjC, "@interface Root : NSObject", "@interface Address : NSObject")]
#[test_case(Convention::Dart, "class Root {", "class Address {")]
#[test_case(Convention::Codable, "struct Root: Codable {", "struct Address: Codable {")]
fn every_convention_declares_both_types(convention: Convention, root: &str, nested: &str) {
    let out = generate(SAMPLE, "Root", &config(convention, DeclarationKind::Struct)).unwrap();
    let r = out.find(root).unwrap_or_else(|| panic!("no {root:?} in\n{out}"));
    let n = out.find(nested).unwrap_or_else(|| panic!("no {nested:?} in\n{out}"));
    assert!(r < n);
}

#[test]
fn field_order_follows_the_document() {
    let out = generate(r#"{"b":1,"a":2}"#, "Root", &GenerationConfig::default()).unwrap();
    assert!(out.find("var b: Int").unwrap() < out.find("var a: Int").unwrap());
}

#[test]
fn objc_forces_class_and_prefixes_types() {
    let cfg = config(Convention::ObjC, DeclarationKind::Struct).with_class_prefix("JM");
    assert_eq!(cfg.kind, DeclarationKind::Class);
    let out = generate(SAMPLE, "Root", &cfg).unwrap();
    assert!(out.contains("@interface JMRoot : NSObject"));
    assert!(out.contains("@property (nonatomic, strong) JMAddress *address;"));
    assert!(out.contains("@property (nonatomic, copy) NSArray<NSString *> *tags;"));
}

#[test]
fn codable_forces_struct() {
    let cfg = config(Convention::Codable, DeclarationKind::Class);
    assert_eq!(cfg.kind, DeclarationKind::Struct);
    let out = generate(SAMPLE, "Root", &cfg).unwrap();
    assert!(!out.contains("class "));
}

#[test]
fn contradicting_config_is_rejected() {
    let cfg = GenerationConfig {
        convention: Convention::Dart,
        kind: DeclarationKind::Struct,
        ..GenerationConfig::default()
    };
    assert!(matches!(generate(SAMPLE, "Root", &cfg), Err(GenerateError::Configuration(_))));
}

#[test]
fn codable_maps_renamed_keys_back() {
    let out = generate(
        r#"{"user id":1,"Display-Name":"a","plain":true}"#,
        "Root",
        &config(Convention::Codable, DeclarationKind::Struct),
    )
    .unwrap();
    assert!(out.contains("case userId = \"user id\""));
    assert!(out.contains("case displayName = \"Display-Name\""));
    assert!(out.contains("        case plain\n"));
}

#[test]
fn codable_untyped_elements_use_a_decodable_placeholder() {
    let out = generate(
        r#"{"xs":[null,null],"ys":[1,"a"]}"#,
        "Root",
        &config(Convention::Codable, DeclarationKind::Struct),
    )
    .unwrap();
    assert!(out.contains("    let xs: [JSONValue]\n"), "{out}");
    assert!(out.contains("    let ys: [JSONValue]\n"), "{out}");
    assert!(out.find("struct Root: Codable {").unwrap() < out.find("enum JSONValue: Codable {").unwrap());
}

#[test]
fn objectmapper_maps_renamed_keys_back() {
    let out = generate(
        r#"{"user id":1,"created_at":"t"}"#,
        "Root",
        &config(Convention::ObjectMapper, DeclarationKind::Class),
    )
    .unwrap();
    assert!(out.contains("userId <- map[\"user id\"]"));
    assert!(out.contains("createdAt <- map[\"created_at\"]"));
}

#[test]
fn empty_list_is_untyped() {
    let out = generate(r#"{"list":[]}"#, "Root", &GenerationConfig::default()).unwrap();
    assert!(out.contains("var list: [Any]"));
    let dart = generate(r#"{"list":[]}"#, "Root", &config(Convention::Dart, DeclarationKind::Class)).unwrap();
    assert!(dart.contains("final List<dynamic> list;"));
}

#[test]
fn optional_fields_from_array_samples() {
    let out = generate(
        r#"{"rows":[{"a":1},{"a":1,"b":"x"}]}"#,
        "Root",
        &GenerationConfig::default(),
    )
    .unwrap();
    assert!(out.contains("var a: Int\n"));
    assert!(out.contains("var b: String?\n"));
}

#[test]
fn collision_policy_is_selectable() {
    let src = r#"{"a":{"meta":{"x":1}},"b":{"meta":{"y":2}}}"#;
    let overwrite = generate(src, "Root", &GenerationConfig::default()).unwrap();
    assert_eq!(overwrite.matches("struct Meta {").count(), 1);
    assert!(overwrite.contains("var y: Int"));
    assert!(!overwrite.contains("var x: Int"));

    let cfg = GenerationConfig::default().with_collisions(NameCollision::Suffix);
    let suffixed = generate(src, "Root", &cfg).unwrap();
    assert!(suffixed.contains("struct Meta {"));
    assert!(suffixed.contains("struct Meta2 {"));
    assert!(suffixed.contains("var meta: Meta2"));
}

#[test]
fn scalar_input_has_no_model() {
    assert!(matches!(
        generate("[1, 2, 3]", "Root", &GenerationConfig::default()),
        Err(GenerateError::NoModel)
    ));
}

#[test]
fn invalid_input_produces_no_output() {
    assert!(matches!(
        generate("{\"a\": [1, }", "Root", &GenerationConfig::default()),
        Err(GenerateError::Input(_))
    ));
}
