use crate::ir::{PrimitiveKind, TypeNode};

/// Unify the inferred types of an array's elements into one element type.
///
/// Nulls and `Unknown` carry no evidence and are skipped; nothing left means
/// `Unknown`. Same-kind primitives keep that kind, objects are key-unioned,
/// arrays unify their own elements the same way, and any mix is `Unknown`.
pub(super) fn unify_elements(items: Vec<TypeNode>) -> TypeNode {
    let mut evidence: Vec<TypeNode> = items
        .into_iter()
        .filter(|t| !matches!(t, TypeNode::Unknown | TypeNode::Primitive(PrimitiveKind::Null)))
        .collect();

    if evidence.len() <= 1 {
        return evidence.pop().unwrap_or(TypeNode::Unknown);
    }

    match &evidence[0] {
        TypeNode::Primitive(kind) => {
            let kind = *kind;
            if evidence.iter().all(|t| *t == TypeNode::Primitive(kind)) {
                TypeNode::Primitive(kind)
            } else {
                TypeNode::Unknown
            }
        }
        TypeNode::Object(_) => {
            let mut shapes = Vec::with_capacity(evidence.len());
            for t in evidence {
                match t {
                    TypeNode::Object(fields) => shapes.push(fields),
                    _ => return TypeNode::Unknown,
                }
            }
            TypeNode::Object(super::obj::unify_objects(shapes))
        }
        TypeNode::Array(_) => {
            let mut inner = Vec::with_capacity(evidence.len());
            for t in evidence {
                match t {
                    TypeNode::Array(item) => inner.push(*item),
                    _ => return TypeNode::Unknown,
                }
            }
            TypeNode::array_of(unify_elements(inner))
        }
        TypeNode::Unknown => TypeNode::Unknown,
    }
}
