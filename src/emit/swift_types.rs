//! Type table and literal helpers shared by the Swift conventions.

use crate::ir::PrimitiveKind;
use crate::registry::{FieldType, NamedField};

macro_rules! swift_keywords {
    ($($extra:literal),* $(,)?) => {
        &[
            "associatedtype", "class", "deinit", "enum", "extension", "fileprivate",
            "func", "import", "init", "inout", "internal", "let", "open", "operator",
            "private", "precedencegroup", "protocol", "public", "rethrows", "static",
            "struct", "subscript", "typealias", "var", "break", "case", "catch",
            "continue", "default", "defer", "do", "else", "fallthrough", "for",
            "guard", "if", "in", "repeat", "return", "throw", "switch", "where",
            "while", "as", "false", "is", "nil", "self", "super", "throws", "true",
            "try", "async", "await", "any", "some",
            $($extra),*
        ]
    };
}
pub(super) use swift_keywords;

pub(crate) const KEYWORDS: &[&str] = swift_keywords!();

/// Standard-library and framework names a generated type must not shadow.
pub(crate) const TYPE_NAMES: &[&str] = &[
    "Any", "AnyObject", "Array", "Bool", "Character", "Codable", "CodingKey", "CodingKeys",
    "Data", "Date", "Decodable", "Decoder", "Dictionary", "Double", "Encodable", "Encoder",
    "Error", "Float", "HandyJSON", "HelpingMapper", "Int", "JSON", "JSONValue", "Map", "Mappable",
    "Never", "Optional", "Protocol", "Result", "Self", "Set", "String", "Type", "URL",
];

pub(super) fn primitive_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Bool => "Bool",
        PrimitiveKind::Int => "Int",
        PrimitiveKind::Float => "Float",
        PrimitiveKind::Double => "Double",
        PrimitiveKind::String => "String",
        PrimitiveKind::Null => "Any",
    }
}

/// Swift spelling of a field type; `placeholder` names the untyped leaf.
pub(super) fn type_name(ty: &FieldType, placeholder: &str) -> String {
    let (depth, leaf) = ty.peel_arrays();
    let leaf = match leaf {
        FieldType::Primitive(PrimitiveKind::Null) | FieldType::Unknown => placeholder,
        FieldType::Primitive(kind) => primitive_name(*kind),
        FieldType::Reference(name) => name.as_str(),
        FieldType::Array(_) => placeholder,
    };
    format!("{}{}{}", "[".repeat(depth), leaf, "]".repeat(depth))
}

/// Declared property type: optional fields and placeholders get `?`.
pub(super) fn declared_type(field: &NamedField, placeholder: &str) -> String {
    let ty = type_name(&field.ty, placeholder);
    if field.optional || field.ty.is_placeholder() {
        format!("{ty}?")
    } else {
        ty
    }
}

/// Literal a required field starts from, where the type has one.
pub(super) fn zero_value(ty: &FieldType) -> Option<&'static str> {
    match ty {
        FieldType::Primitive(PrimitiveKind::Bool) => Some("false"),
        FieldType::Primitive(PrimitiveKind::Int) => Some("0"),
        FieldType::Primitive(PrimitiveKind::Float | PrimitiveKind::Double) => Some("0.0"),
        FieldType::Primitive(PrimitiveKind::String) => Some("\"\""),
        FieldType::Array(_) => Some("[]"),
        FieldType::Primitive(PrimitiveKind::Null) | FieldType::Reference(_) | FieldType::Unknown => None,
    }
}

/// Double-quoted Swift string literal.
pub(super) fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
