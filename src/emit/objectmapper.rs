//! ObjectMapper `Mappable` declarations.

use super::swift_types::{declared_type, string_literal, swift_keywords, type_name, zero_value};
use crate::config::DeclarationKind;
use crate::registry::{FieldType, NamedField, NamedType, TypeRegistry};

/// `map` is the parameter of `mapping(map:)`.
pub(crate) const RESERVED: &[&str] = swift_keywords!("map");

pub(super) fn emit(registry: &TypeRegistry, kind: DeclarationKind) -> String {
    super::assemble("import ObjectMapper\n", registry.iter().map(|t| declaration(t, kind)))
}

fn declaration(ty: &NamedType, kind: DeclarationKind) -> String {
    let mut code = String::new();
    code.push_str(&format!("{} {}: Mappable {{\n", kind.keyword(), ty.name));

    for field in &ty.fields {
        code.push_str(&format!("    {}\n", property(field)));
    }
    if !ty.fields.is_empty() {
        code.push('\n');
    }

    match kind {
        DeclarationKind::Struct => {
            code.push_str("    init?(map: Map) {}\n\n");
            code.push_str("    mutating func mapping(map: Map) {\n");
        }
        DeclarationKind::Class => {
            code.push_str("    required init?(map: Map) {}\n\n");
            code.push_str("    func mapping(map: Map) {\n");
        }
    }
    // every field is listed, renamed or not
    for field in &ty.fields {
        code.push_str(&format!(
            "        {} <- map[{}]\n",
            field.identifier,
            string_literal(&field.source_key)
        ));
    }
    code.push_str("    }\n");

    code.push_str("}\n");
    code
}

/// Primitives and arrays start from a zero value; nested models and
/// untyped values stay optional because `Mappable` has no empty initializer.
fn property(field: &NamedField) -> String {
    let ident = &field.identifier;
    match (&field.ty, zero_value(&field.ty)) {
        (_, Some(zero)) if !field.optional => {
            format!("var {ident}: {} = {zero}", type_name(&field.ty, "Any"))
        }
        (FieldType::Reference(name), _) => format!("var {ident}: {name}?"),
        _ => format!("var {ident}: {}", declared_type(field, "Any")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Convention, GenerationConfig};
    use crate::inference::infer;
    use crate::registry::register;
    use crate::value::parse;

    fn emit_str(src: &str, kind: DeclarationKind) -> String {
        let config = GenerationConfig::new(Convention::ObjectMapper, kind);
        let opts = Convention::ObjectMapper.naming_options(&config);
        let (_, reg) = register(&infer(&parse(src).unwrap()), "Root", &opts);
        emit(&reg, kind)
    }

    #[test]
    fn struct_maps_every_field() {
        let out = emit_str(
            r#"{"id":1,"first_name":"a","home-town":{"zip":"1"},"misc":null}"#,
            DeclarationKind::Struct,
        );
        assert!(out.contains("struct Root: Mappable {"));
        assert!(out.contains("    var id: Int = 0\n"));
        assert!(out.contains("    var firstName: String = \"\"\n"));
        assert!(out.contains("    var homeTown: HomeTown?\n"));
        assert!(out.contains("    var misc: Any?\n"));
        assert!(out.contains("    init?(map: Map) {}\n"));
        assert!(out.contains("    mutating func mapping(map: Map) {\n"));
        assert!(out.contains("        id <- map[\"id\"]\n"));
        assert!(out.contains("        firstName <- map[\"first_name\"]\n"));
        assert!(out.contains("        homeTown <- map[\"home-town\"]\n"));
    }

    #[test]
    fn class_uses_required_init() {
        let out = emit_str(r#"{"items":[{"v":1}]}"#, DeclarationKind::Class);
        assert!(out.contains("class Root: Mappable {"));
        assert!(out.contains("    var items: [Items] = []\n"));
        assert!(out.contains("    required init?(map: Map) {}\n"));
        assert!(out.contains("    func mapping(map: Map) {\n"));
        assert!(!out.contains("mutating"));
    }

    #[test]
    fn key_named_map_is_renamed() {
        let out = emit_str(r#"{"map":1}"#, DeclarationKind::Struct);
        assert!(out.contains("        mapValue <- map[\"map\"]\n"));
    }
}
