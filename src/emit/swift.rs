//! Plain Swift declarations with a dictionary initializer.

use super::swift_types::{declared_type, string_literal, type_name, zero_value};
use crate::config::DeclarationKind;
use crate::registry::{FieldType, NamedField, NamedType, TypeRegistry};

const PLACEHOLDER: &str = "Any";
const DICT: &str = "[String: Any]";

pub(super) fn emit(registry: &TypeRegistry, kind: DeclarationKind) -> String {
    super::assemble("import Foundation\n", registry.iter().map(|t| declaration(t, kind)))
}

fn declaration(ty: &NamedType, kind: DeclarationKind) -> String {
    let mut code = String::new();
    code.push_str(&format!("{} {} {{\n", kind.keyword(), ty.name));

    for field in &ty.fields {
        code.push_str(&format!(
            "    var {}: {}\n",
            field.identifier,
            declared_type(field, PLACEHOLDER)
        ));
    }
    if !ty.fields.is_empty() {
        code.push('\n');
    }

    code.push_str("    init(_ dict: [String: Any]) {\n");
    for field in &ty.fields {
        code.push_str(&format!("        self.{} = {}\n", field.identifier, read_expr(field)));
    }
    code.push_str("    }\n");
    code.push_str("}\n");
    code
}

fn read_expr(field: &NamedField) -> String {
    let source = format!("dict[{}]", string_literal(&field.source_key));
    if field.ty.is_placeholder() {
        return source;
    }

    let (depth, leaf) = field.ty.peel_arrays();
    match leaf {
        FieldType::Reference(name) if depth == 0 => {
            if field.optional {
                format!("({source} as? {DICT}).map {{ {name}($0) }}")
            } else {
                format!("{name}({source} as? {DICT} ?? [:])")
            }
        }
        FieldType::Reference(name) => {
            let cast = format!("{}{DICT}{}", "[".repeat(depth), "]".repeat(depth));
            let mut body = format!("{name}($0)");
            for _ in 1..depth {
                body = format!("$0.map {{ {body} }}");
            }
            if field.optional {
                format!("({source} as? {cast})?.map {{ {body} }}")
            } else {
                format!("({source} as? {cast} ?? []).map {{ {body} }}")
            }
        }
        _ => {
            let ty = type_name(&field.ty, PLACEHOLDER);
            match zero_value(&field.ty) {
                Some(zero) if !field.optional => format!("{source} as? {ty} ?? {zero}"),
                _ => format!("{source} as? {ty}"),
            }
        }
    }
}
