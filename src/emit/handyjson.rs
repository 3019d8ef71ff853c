//! HandyJSON declarations: default-valued properties, reflection does the rest.

use super::swift_types::{declared_type, string_literal, zero_value};
use crate::config::DeclarationKind;
use crate::registry::{FieldType, NamedField, NamedType, TypeRegistry};

pub(super) fn emit(registry: &TypeRegistry, kind: DeclarationKind) -> String {
    super::assemble("import HandyJSON\n", registry.iter().map(|t| declaration(t, kind)))
}

fn declaration(ty: &NamedType, kind: DeclarationKind) -> String {
    let mut code = String::new();
    code.push_str(&format!("{} {}: HandyJSON {{\n", kind.keyword(), ty.name));

    for field in &ty.fields {
        code.push_str(&format!("    {}\n", property(field)));
    }

    if kind == DeclarationKind::Class {
        code.push('\n');
        code.push_str("    required init() {}\n");
    }

    let mappings: Vec<_> = ty.key_mappings().collect();
    if !mappings.is_empty() {
        let mutating = match kind {
            DeclarationKind::Struct => "mutating ",
            DeclarationKind::Class => "",
        };
        code.push('\n');
        code.push_str(&format!("    {mutating}func mapping(mapper: HelpingMapper) {{\n"));
        for (ident, key) in mappings {
            code.push_str(&format!(
                "        mapper <<< self.{ident} <-- {}\n",
                string_literal(key)
            ));
        }
        code.push_str("    }\n");
    }

    code.push_str("}\n");
    code
}

fn property(field: &NamedField) -> String {
    let ty = declared_type(field, "Any");
    if field.optional || field.ty.is_placeholder() {
        return format!("var {}: {ty}", field.identifier);
    }
    let default = match &field.ty {
        FieldType::Reference(name) => format!("{name}()"),
        other => zero_value(other).unwrap_or("nil").to_string(),
    };
    format!("var {}: {ty} = {default}", field.identifier)
}
