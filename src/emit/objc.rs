//! Objective-C header: one `@interface` per type, always a class.

use crate::ir::PrimitiveKind;
use crate::registry::{FieldType, NamedField, NamedType, TypeRegistry};

pub(crate) const RESERVED: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "id", "self", "super", "nil", "Nil", "YES",
    "NO", "BOOL", "SEL", "Class", "IMP", "in", "out", "inout", "bycopy", "byref", "oneway",
    // NSObject members a property would shadow
    "class", "description", "debugDescription", "hash", "superclass", "dealloc", "retain",
    "release", "autorelease", "zone",
];

/// Getter names starting with one of these words (then a non-lowercase
/// character) return owned objects under ARC, which clang rejects for properties.
pub(crate) const METHOD_FAMILIES: &[&str] = &["alloc", "copy", "mutableCopy", "new", "init"];

pub(crate) const TYPE_NAMES: &[&str] = &[
    "NSObject", "NSString", "NSNumber", "NSArray", "NSDictionary", "NSData", "NSDate",
    "NSNull", "NSValue", "NSError", "NSURL", "Protocol",
];

pub(super) fn emit(registry: &TypeRegistry) -> String {
    let mut header = String::from("#import <Foundation/Foundation.h>\n");
    if registry.len() > 1 {
        let names: Vec<&str> = registry.iter().map(|t| t.name.as_str()).collect();
        header.push_str(&format!("\n@class {};\n", names.join(", ")));
    }
    header.push_str("\nNS_ASSUME_NONNULL_BEGIN\n");

    let mut out = super::assemble(&header, registry.iter().map(declaration));
    out.push_str("\nNS_ASSUME_NONNULL_END\n");
    out
}

fn declaration(ty: &NamedType) -> String {
    let mut code = String::new();
    code.push_str(&format!("@interface {} : NSObject\n\n", ty.name));
    for field in &ty.fields {
        code.push_str(&property(field));
    }
    if !ty.fields.is_empty() {
        code.push('\n');
    }
    code.push_str("@end\n");
    code
}

fn property(field: &NamedField) -> String {
    let ident = &field.identifier;
    let nullable = if field.optional || field.ty.is_placeholder() { ", nullable" } else { "" };
    match &field.ty {
        FieldType::Primitive(PrimitiveKind::Null) | FieldType::Unknown => {
            format!("@property (nonatomic, strong, nullable) id {ident};\n")
        }
        // value types cannot be nil; an absent value reads as zero
        FieldType::Primitive(PrimitiveKind::Bool) => format!("@property (nonatomic, assign) BOOL {ident};\n"),
        FieldType::Primitive(PrimitiveKind::Int) => {
            format!("@property (nonatomic, assign) NSInteger {ident};\n")
        }
        FieldType::Primitive(PrimitiveKind::Float) => format!("@property (nonatomic, assign) float {ident};\n"),
        FieldType::Primitive(PrimitiveKind::Double) => {
            format!("@property (nonatomic, assign) double {ident};\n")
        }
        FieldType::Primitive(PrimitiveKind::String) => {
            format!("@property (nonatomic, copy{nullable}) NSString *{ident};\n")
        }
        FieldType::Reference(name) => format!("@property (nonatomic, strong{nullable}) {name} *{ident};\n"),
        FieldType::Array(_) => {
            format!("@property (nonatomic, copy{nullable}) {}{ident};\n", object_type(&field.ty))
        }
    }
}

/// Object type of an array element, with the trailing `*` (or `id ` for untyped).
fn object_type(ty: &FieldType) -> String {
    let (depth, leaf) = ty.peel_arrays();
    let mut out = match leaf {
        FieldType::Primitive(PrimitiveKind::String) => "NSString *".to_string(),
        FieldType::Primitive(
            PrimitiveKind::Bool | PrimitiveKind::Int | PrimitiveKind::Float | PrimitiveKind::Double,
        ) => "NSNumber *".to_string(),
        FieldType::Reference(name) => format!("{name} *"),
        FieldType::Primitive(PrimitiveKind::Null) | FieldType::Unknown | FieldType::Array(_) => {
            "id".to_string()
        }
    };
    for _ in 0..depth {
        out = format!("NSArray<{}> *", out.trim_end());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Convention, DeclarationKind, GenerationConfig};
    use crate::inference::infer;
    use crate::registry::register;
    use crate::value::parse;

    fn emit_str(src: &str, prefix: &str) -> String {
        let config = GenerationConfig::new(Convention::ObjC, DeclarationKind::Class).with_class_prefix(prefix);
        let opts = Convention::ObjC.naming_options(&config);
        let (_, reg) = register(&infer(&parse(src).unwrap()), "Root", &opts);
        emit(&reg)
    }

    #[test]
    fn header_with_prefixed_interfaces() {
        let out = emit_str(r#"{"count":2,"title":"t","owner":{"ok":true}}"#, "AB");
        let expected = "\
#import <Foundation/Foundation.h>

@class ABRoot, ABOwner;

NS_ASSUME_NONNULL_BEGIN

@interface ABRoot : NSObject

@property (nonatomic, assign) NSInteger count;
@property (nonatomic, copy) NSString *title;
@property (nonatomic, strong) ABOwner *owner;

@end

@interface ABOwner : NSObject

@property (nonatomic, assign) BOOL ok;

@end

NS_ASSUME_NONNULL_END
";
        assert_eq!(out, expected);
    }

    #[test]
    fn arrays_use_boxed_generics() {
        let out = emit_str(r#"{"nums":[1.5],"grid":[["a"]],"users":[{"n":1}],"blank":[]}"#, "");
        assert!(out.contains("@property (nonatomic, copy) NSArray<NSNumber *> *nums;\n"));
        assert!(out.contains("@property (nonatomic, copy) NSArray<NSArray<NSString *> *> *grid;\n"));
        assert!(out.contains("@property (nonatomic, copy) NSArray<Users *> *users;\n"));
        assert!(out.contains("@property (nonatomic, copy) NSArray<id> *blank;\n"));
    }

    #[test]
    fn optional_and_untyped_pointers_are_nullable() {
        let out = emit_str(r#"{"xs":[{"s":"a","x":null},{}]}"#, "");
        assert!(out.contains("@property (nonatomic, copy, nullable) NSString *s;\n"));
        assert!(out.contains("@property (nonatomic, strong, nullable) id x;\n"));
    }

    #[test]
    fn reserved_names_are_suffixed() {
        let out = emit_str(r#"{"id":1,"description":"d"}"#, "");
        assert!(out.contains("NSInteger idValue;"));
        assert!(out.contains("NSString *descriptionValue;"));
    }

    #[test]
    fn owned_return_families_are_renamed() {
        let out = emit_str(r#"{"newTitle":"t","init":1,"copy_count":2,"newsFeed":"n"}"#, "");
        assert!(out.contains("@property (nonatomic, copy) NSString *theNewTitle;\n"));
        assert!(out.contains("@property (nonatomic, assign) NSInteger theInit;\n"));
        assert!(out.contains("@property (nonatomic, assign) NSInteger theCopy_count;\n"));
        assert!(out.contains("@property (nonatomic, copy) NSString *newsFeed;\n"));
    }
}
