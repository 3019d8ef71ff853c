//! Structural type inference over a single JSON document.
//!
//! Walk the value tree once, map every value to a [`TypeNode`], and unify the
//! element types of each array (key union for objects, first-seen type on
//! conflict). The walk is driven by an explicit work stack, so nesting depth
//! costs heap, not native stack.
//!
//! Policy summary:
//! - Numbers are classified from their storage hint (see [`num::classify`]).
//! - Object literals yield required fields in document order.
//! - Arrays yield `Array(element)`; with no usable evidence the element is `Unknown`.
pub mod num;
mod arr;
mod obj;

use indexmap::IndexMap;

use crate::ir::{Field, PrimitiveKind, TypeNode};
use crate::value::JsonValue;

enum Task<'a> {
    Visit(&'a JsonValue),
    /// All `len` element types are on the result stack; fold them.
    FinishArray { len: usize },
    FinishObject(&'a IndexMap<String, JsonValue>),
}

/// Infer the structural type of a value. Pure and total.
pub fn infer(value: &JsonValue) -> TypeNode {
    let mut tasks = vec![Task::Visit(value)];
    let mut results: Vec<TypeNode> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(v) => match v {
                JsonValue::Null => results.push(TypeNode::Primitive(PrimitiveKind::Null)),
                JsonValue::Bool(_) => results.push(TypeNode::Primitive(PrimitiveKind::Bool)),
                JsonValue::Number(n) => results.push(TypeNode::Primitive(num::classify(n))),
                JsonValue::String(_) => results.push(TypeNode::Primitive(PrimitiveKind::String)),
                JsonValue::Array(xs) => {
                    tasks.push(Task::FinishArray { len: xs.len() });
                    // reversed so results land in element order
                    tasks.extend(xs.iter().rev().map(Task::Visit));
                }
                JsonValue::Object(m) => {
                    tasks.push(Task::FinishObject(m));
                    tasks.extend(m.values().rev().map(Task::Visit));
                }
            },
            Task::FinishArray { len } => {
                let items = results.split_off(results.len() - len);
                results.push(TypeNode::array_of(arr::unify_elements(items)));
            }
            Task::FinishObject(m) => {
                let tys = results.split_off(results.len() - m.len());
                let fields = m
                    .keys()
                    .zip(tys)
                    .map(|(k, ty)| Field { source_key: k.clone(), ty, optional: false })
                    .collect();
                results.push(TypeNode::Object(fields));
            }
        }
    }

    debug_assert_eq!(results.len(), 1);
    results.pop().unwrap_or(TypeNode::Unknown)
}

// ------------------------------- Tests ------------------------------------ //
