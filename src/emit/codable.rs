//! Swift `Codable` structs.
//!
//! Codable has no built-in type-erased value, so untyped positions use a small
//! `JSONValue` enum that is appended once per file when some field needs it.

use super::swift_types::{declared_type, string_literal};
use crate::registry::{NamedType, TypeRegistry};

const PLACEHOLDER: &str = "JSONValue";

const JSON_VALUE: &str = "\
enum JSONValue: Codable {
    case null
    case bool(Bool)
    case int(Int)
    case double(Double)
    case string(String)
    case array([JSONValue])
    case object([String: JSONValue])

    init(from decoder: Decoder) throws {
        let container = try decoder.singleValueContainer()
        if container.decodeNil() {
            self = .null
        } else if let value = try? container.decode(Bool.self) {
            self = .bool(value)
        } else if let value = try? container.decode(Int.self) {
            self = .int(value)
        } else if let value = try? container.decode(Double.self) {
            self = .double(value)
        } else if let value = try? container.decode(String.self) {
            self = .string(value)
        } else if let value = try? container.decode([JSONValue].self) {
            self = .array(value)
        } else {
            self = .object(try container.decode([String: JSONValue].self))
        }
    }

    func encode(to encoder: Encoder) throws {
        var container = encoder.singleValueContainer()
        switch self {
        case .null: try container.encodeNil()
        case .bool(let value): try container.encode(value)
        case .int(let value): try container.encode(value)
        case .double(let value): try container.encode(value)
        case .string(let value): try container.encode(value)
        case .array(let value): try container.encode(value)
        case .object(let value): try container.encode(value)
        }
    }
}
";

pub(super) fn emit(registry: &TypeRegistry) -> String {
    let needs_json_value = registry
        .iter()
        .flat_map(|ty| &ty.fields)
        .any(|field| field.ty.peel_arrays().1.is_placeholder());

    let declarations = registry.iter().map(declaration);
    if needs_json_value {
        super::assemble(
            "import Foundation\n",
            declarations.chain(std::iter::once(JSON_VALUE.to_string())),
        )
    } else {
        super::assemble("import Foundation\n", declarations)
    }
}

fn declaration(ty: &NamedType) -> String {
    let mut code = String::new();
    code.push_str(&format!("struct {}: Codable {{\n", ty.name));

    for field in &ty.fields {
        code.push_str(&format!(
            "    let {}: {}\n",
            field.identifier,
            declared_type(field, PLACEHOLDER)
        ));
    }

    if ty.key_mappings().next().is_some() {
        code.push('\n');
        code.push_str("    enum CodingKeys: String, CodingKey {\n");
        for field in &ty.fields {
            if field.needs_key_mapping() {
                code.push_str(&format!(
                    "        case {} = {}\n",
                    field.identifier,
                    string_literal(&field.source_key)
                ));
            } else {
                code.push_str(&format!("        case {}\n", field.identifier));
            }
        }
        code.push_str("    }\n");
    }

    code.push_str("}\n");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Convention, DeclarationKind, GenerationConfig};
    use crate::inference::infer;
    use crate::registry::register;
    use crate::value::parse;

    fn emit_str(src: &str) -> String {
        let config = GenerationConfig::new(Convention::Codable, DeclarationKind::Struct);
        let opts = Convention::Codable.naming_options(&config);
        let (_, reg) = register(&infer(&parse(src).unwrap()), "Root", &opts);
        emit(&reg)
    }

    #[test]
    fn coding_keys_map_back_to_source_keys() {
        let out = emit_str(r#"{"id":1,"first_name":"a","e-mail":"x"}"#);
        let expected = "\
import Foundation

struct Root: Codable {
    let id: Int
    let firstName: String
    let eMail: String

    enum CodingKeys: String, CodingKey {
        case id
        case firstName = \"first_name\"
        case eMail = \"e-mail\"
    }
}
";
        assert_eq!(out, expected);
    }

    #[test]
    fn no_coding_keys_when_identifiers_match() {
        let out = emit_str(r#"{"id":1,"tags":["a"],"owner":{"name":"x"}}"#);
        assert!(!out.contains("CodingKeys"));
        assert!(out.contains("    let tags: [String]\n"));
        assert!(out.contains("    let owner: Owner\n"));
        assert!(out.contains("struct Owner: Codable {"));
    }

    #[test]
    fn untyped_values_use_the_json_value_enum() {
        let out = emit_str(r#"{"gone":null,"list":[]}"#);
        assert!(out.contains("    let gone: JSONValue?\n"));
        assert!(out.contains("    let list: [JSONValue]\n"));
        assert_eq!(out.matches("enum JSONValue: Codable {").count(), 1);
    }

    #[test]
    fn null_and_mixed_array_elements_decode_as_json_values() {
        let out = emit_str(r#"{"xs":[null,null],"ys":[1,"a"],"zs":[[null]]}"#);
        assert!(out.contains("    let xs: [JSONValue]\n"));
        assert!(out.contains("    let ys: [JSONValue]\n"));
        assert!(out.contains("    let zs: [[JSONValue]]\n"));
        assert!(out.contains("        if container.decodeNil() {\n            self = .null\n"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn json_value_is_omitted_when_every_field_is_typed() {
        let out = emit_str(r#"{"id":1,"nested":{"ok":true}}"#);
        assert!(!out.contains("JSONValue"));
    }
}
