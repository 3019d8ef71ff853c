//! Dart classes with `fromJson` / `toJson`, for Flutter projects.

use crate::ir::PrimitiveKind;
use crate::registry::{FieldType, NamedField, NamedType, TypeRegistry};

pub(crate) const RESERVED: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "base", "break", "case", "catch", "class",
    "const", "continue", "covariant", "default", "deferred", "do", "dynamic", "else", "enum",
    "export", "extends", "extension", "external", "factory", "false", "final", "finally", "for",
    "Function", "get", "hide", "if", "implements", "import", "in", "interface", "is", "late",
    "library", "mixin", "new", "null", "on", "operator", "part", "required", "rethrow",
    "return", "sealed", "set", "show", "static", "super", "switch", "sync", "this", "throw",
    "true", "try", "typedef", "var", "void", "when", "while", "with", "yield",
    // parameter of the generated factory
    "json",
];

pub(crate) const TYPE_NAMES: &[&str] = &[
    "List", "Map", "Set", "String", "Object", "Iterable", "Function", "Type", "Null", "Future",
    "Stream", "DateTime", "Duration", "Uri", "Symbol", "Record", "Enum", "Never",
];

pub(super) fn emit(registry: &TypeRegistry) -> String {
    let mut out = String::new();
    for (i, ty) in registry.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&declaration(ty));
    }
    out
}

fn declaration(ty: &NamedType) -> String {
    let name = &ty.name;
    let mut code = String::new();
    code.push_str(&format!("class {name} {{\n"));

    for field in &ty.fields {
        code.push_str(&format!("  final {} {};\n", declared_type(field), field.identifier));
    }
    if !ty.fields.is_empty() {
        code.push('\n');
    }

    // constructor
    if ty.fields.is_empty() {
        code.push_str(&format!("  {name}();\n"));
    } else {
        code.push_str(&format!("  {name}({{\n"));
        for field in &ty.fields {
            if is_nullable(field) {
                code.push_str(&format!("    this.{},\n", field.identifier));
            } else {
                code.push_str(&format!("    required this.{},\n", field.identifier));
            }
        }
        code.push_str("  });\n");
    }

    // fromJson
    code.push('\n');
    code.push_str(&format!("  factory {name}.fromJson(Map<String, dynamic> json) {{\n"));
    if ty.fields.is_empty() {
        code.push_str(&format!("    return {name}();\n"));
    } else {
        code.push_str(&format!("    return {name}(\n"));
        for field in &ty.fields {
            code.push_str(&format!("      {}: {},\n", field.identifier, from_json(field)));
        }
        code.push_str("    );\n");
    }
    code.push_str("  }\n");

    // toJson
    code.push('\n');
    code.push_str("  Map<String, dynamic> toJson() {\n");
    if ty.fields.is_empty() {
        code.push_str("    return {};\n");
    } else {
        code.push_str("    return {\n");
        for field in &ty.fields {
            code.push_str(&format!(
                "      {}: {},\n",
                string_literal(&field.source_key),
                to_json(field)
            ));
        }
        code.push_str("    };\n");
    }
    code.push_str("  }\n");

    code.push_str("}\n");
    code
}

fn is_nullable(field: &NamedField) -> bool {
    field.optional || field.ty.is_placeholder()
}

fn type_name(ty: &FieldType) -> String {
    let (depth, leaf) = ty.peel_arrays();
    let leaf = match leaf {
        FieldType::Primitive(PrimitiveKind::Bool) => "bool",
        FieldType::Primitive(PrimitiveKind::Int) => "int",
        FieldType::Primitive(PrimitiveKind::Float | PrimitiveKind::Double) => "double",
        FieldType::Primitive(PrimitiveKind::String) => "String",
        FieldType::Reference(name) => name.as_str(),
        FieldType::Primitive(PrimitiveKind::Null) | FieldType::Unknown | FieldType::Array(_) => "dynamic",
    };
    format!("{}{}{}", "List<".repeat(depth), leaf, ">".repeat(depth))
}

fn declared_type(field: &NamedField) -> String {
    let ty = type_name(&field.ty);
    // `dynamic` already admits null
    if field.optional && ty != "dynamic" { format!("{ty}?") } else { ty }
}

/// Conversion of one decoded value to a non-list type.
fn convert_leaf(subject: &str, leaf: &FieldType, nullable: bool) -> String {
    let q = if nullable { "?" } else { "" };
    match leaf {
        FieldType::Primitive(PrimitiveKind::Float | PrimitiveKind::Double) => {
            format!("({subject} as num{q}){q}.toDouble()")
        }
        FieldType::Primitive(kind @ (PrimitiveKind::Bool | PrimitiveKind::Int | PrimitiveKind::String)) => {
            let ty = type_name(&FieldType::Primitive(*kind));
            format!("{subject} as {ty}{q}")
        }
        FieldType::Reference(name) if nullable => {
            format!("{subject} == null ? null : {name}.fromJson({subject} as Map<String, dynamic>)")
        }
        FieldType::Reference(name) => format!("{name}.fromJson({subject} as Map<String, dynamic>)"),
        FieldType::Primitive(PrimitiveKind::Null) | FieldType::Unknown | FieldType::Array(_) => {
            subject.to_string()
        }
    }
}

fn from_json(field: &NamedField) -> String {
    let subject = format!("json[{}]", string_literal(&field.source_key));
    if field.ty.is_placeholder() {
        return subject;
    }
    let (depth, leaf) = field.ty.peel_arrays();
    if depth == 0 {
        return convert_leaf(&subject, leaf, field.optional);
    }

    // innermost level first; `e{n}` names the element at list depth n
    let mut body = convert_leaf(&format!("e{}", depth - 1), leaf, false);
    for level in (0..depth - 1).rev() {
        body = format!(
            "(e{level} as List<dynamic>).map((e{}) => {body}).toList()",
            level + 1
        );
    }
    if field.optional {
        format!("({subject} as List<dynamic>?)?.map((e0) => {body}).toList()")
    } else {
        format!("({subject} as List<dynamic>).map((e0) => {body}).toList()")
    }
}

fn to_json(field: &NamedField) -> String {
    let ident = &field.identifier;
    let (depth, leaf) = field.ty.peel_arrays();
    if !matches!(leaf, FieldType::Reference(_)) {
        return ident.to_string();
    }
    let q = if field.optional { "?" } else { "" };
    if depth == 0 {
        return format!("{ident}{q}.toJson()");
    }

    let mut body = format!("e{}.toJson()", depth - 1);
    for level in (0..depth - 1).rev() {
        body = format!("e{level}.map((e{}) => {body}).toList()", level + 1);
    }
    format!("{ident}{q}.map((e0) => {body}).toList()")
}

/// Single-quoted Dart string literal.
fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
