//! SwiftyJSON wrappers: the model keeps the `JSON` and reads fields on access.

use super::swift_types::{primitive_name, string_literal, swift_keywords, type_name};
use crate::config::DeclarationKind;
use crate::ir::PrimitiveKind;
use crate::registry::{FieldType, NamedField, NamedType, TypeRegistry};

/// `json` is the stored property every wrapper holds.
pub(crate) const RESERVED: &[&str] = swift_keywords!("json");

pub(super) fn emit(registry: &TypeRegistry, kind: DeclarationKind) -> String {
    super::assemble("import SwiftyJSON\n", registry.iter().map(|t| declaration(t, kind)))
}

fn declaration(ty: &NamedType, kind: DeclarationKind) -> String {
    let mut code = String::new();
    code.push_str(&format!("{} {} {{\n", kind.keyword(), ty.name));
    code.push_str("    let json: JSON\n\n");
    code.push_str("    init(_ json: JSON) {\n");
    code.push_str("        self.json = json\n");
    code.push_str("    }\n");

    if !ty.fields.is_empty() {
        code.push('\n');
    }
    for field in &ty.fields {
        code.push_str(&format!(
            "    var {}: {} {{ {} }}\n",
            field.identifier,
            accessor_type(field),
            accessor(field)
        ));
    }

    code.push_str("}\n");
    code
}

fn accessor_type(field: &NamedField) -> String {
    if field.ty.is_placeholder() {
        return "Any".to_string();
    }
    let ty = type_name(&field.ty, "Any");
    if field.optional { format!("{ty}?") } else { ty }
}

fn accessor(field: &NamedField) -> String {
    let subject = format!("json[{}]", string_literal(&field.source_key));
    if field.ty.is_placeholder() {
        return format!("{subject}.object");
    }

    let (depth, leaf) = field.ty.peel_arrays();
    if depth == 0 {
        return match leaf {
            FieldType::Reference(name) if field.optional => {
                format!("{subject}.exists() ? {name}({subject}) : nil")
            }
            FieldType::Reference(name) => format!("{name}({subject})"),
            _ => scalar(&subject, leaf, field.optional),
        };
    }

    let mut body = scalar("$0", leaf, false);
    for _ in 1..depth {
        body = format!("$0.arrayValue.map {{ {body} }}");
    }
    if field.optional {
        format!("{subject}.array?.map {{ {body} }}")
    } else {
        format!("{subject}.arrayValue.map {{ {body} }}")
    }
}

/// Conversion of one non-array value.
fn scalar(subject: &str, ty: &FieldType, optional: bool) -> String {
    match ty {
        FieldType::Primitive(kind @ (PrimitiveKind::Bool
        | PrimitiveKind::Int
        | PrimitiveKind::Float
        | PrimitiveKind::Double
        | PrimitiveKind::String)) => {
            let getter = primitive_name(*kind).to_lowercase();
            if optional {
                format!("{subject}.{getter}")
            } else {
                format!("{subject}.{getter}Value")
            }
        }
        FieldType::Reference(name) => format!("{name}({subject})"),
        FieldType::Primitive(PrimitiveKind::Null) | FieldType::Unknown | FieldType::Array(_) => {
            format!("{subject}.object")
        }
    }
}
