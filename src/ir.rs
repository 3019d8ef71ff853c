// Structural types inferred from a JSON value tree. No names yet; the registry
// assigns those.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int,
    Float,
    Double,
    String,
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    Primitive(PrimitiveKind),
    Array(Box<TypeNode>),
    Object(Vec<Field>),      // first-seen key order, never re-sorted
    Unknown,                 // empty arrays, all-null and mixed observations
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub source_key: String,
    pub ty: TypeNode,
    pub optional: bool,      // missing from, or typed differently in, some sample
}

impl TypeNode {
    pub fn array_of(item: TypeNode) -> Self {
        TypeNode::Array(Box::new(item))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, TypeNode::Object(_))
    }

    /// Peel every array layer: `(depth, innermost element)`.
    pub fn peel_arrays(&self) -> (usize, &TypeNode) {
        let mut depth = 0;
        let mut cur = self;
        while let TypeNode::Array(item) = cur {
            depth += 1;
            cur = item;
        }
        (depth, cur)
    }

    /// JSON-schema-ish debug view of the structural tree.
    pub fn to_schema(&self) -> serde_json::Value {
        use serde_json::json;
        match self {
            TypeNode::Primitive(kind) => json!({ "type": kind.schema_name() }),
            TypeNode::Array(item) => json!({ "type": "array", "items": item.to_schema() }),
            TypeNode::Object(fields) => {
                let mut props = serde_json::Map::new();
                let mut required = Vec::new();
                for f in fields {
                    props.insert(f.source_key.clone(), f.ty.to_schema());
                    if !f.optional {
                        required.push(serde_json::Value::from(f.source_key.clone()));
                    }
                }
                let mut o = json!({ "type": "object", "properties": props });
                if !required.is_empty() {
                    o["required"] = serde_json::Value::Array(required);
                }
                o
            }
            TypeNode::Unknown => json!({ "type": "any" }),
        }
    }
}

impl PrimitiveKind {
    fn schema_name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "boolean",
            PrimitiveKind::Int => "integer",
            PrimitiveKind::Float | PrimitiveKind::Double => "number",
            PrimitiveKind::String => "string",
            PrimitiveKind::Null => "null",
        }
    }
}
