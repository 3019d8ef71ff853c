//! Flatten a structural type tree into named, emittable declarations.
//!
//! Every object position gets its own [`NamedType`]; identical shapes at
//! different positions are deliberately not merged. Registration is depth-first
//! pre-order, so the root comes first and nested types follow in the order they
//! are discovered.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::ir::{Field, PrimitiveKind, TypeNode};
use crate::naming::{self, NameCollision, NamingOptions};

/// A field's type once nested objects have been replaced by name references.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Primitive(PrimitiveKind),
    Array(Box<FieldType>),
    Reference(String),
    Unknown,
}

impl FieldType {
    /// Peel every array layer: `(depth, innermost element)`.
    pub fn peel_arrays(&self) -> (usize, &FieldType) {
        let mut depth = 0;
        let mut cur = self;
        while let FieldType::Array(item) = cur {
            depth += 1;
            cur = item;
        }
        (depth, cur)
    }

    /// Nothing usable was observed: an unknown, or only nulls.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, FieldType::Unknown | FieldType::Primitive(PrimitiveKind::Null))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedField {
    /// Key as written in the JSON document.
    pub source_key: String,
    /// Identifier presented in generated code.
    pub identifier: String,
    pub ty: FieldType,
    pub optional: bool,
}

impl NamedField {
    /// Serialization needs an explicit key mapping for this field.
    pub fn needs_key_mapping(&self) -> bool {
        self.identifier != self.source_key
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    pub name: String,
    pub fields: Vec<NamedField>,
}

impl NamedType {
    /// `(identifier, source_key)` for every field whose identifier differs from its key.
    pub fn key_mappings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter(|f| f.needs_key_mapping())
            .map(|f| (f.identifier.as_str(), f.source_key.as_str()))
    }
}

/// Position of a declaration in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(usize);

/// Named declarations of one generation run, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, NamedType>,
}

impl TypeRegistry {
    pub fn get(&self, id: TypeId) -> Option<&NamedType> {
        self.types.get_index(id.0).map(|(_, t)| t)
    }

    pub fn by_name(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn insert(&mut self, ty: NamedType) -> TypeId {
        // IndexMap keeps the original slot when a key is re-inserted
        let (index, previous) = self.types.insert_full(ty.name.clone(), ty);
        if let Some(previous) = previous {
            tracing::warn!(
                name = %previous.name,
                "type name collision; the later declaration replaces the earlier one"
            );
        }
        TypeId(index)
    }
}

struct Namer<'o> {
    opts: &'o NamingOptions,
    claimed: HashSet<String>,
}

impl Namer<'_> {
    fn claim(&mut self, base: String) -> String {
        if self.opts.collisions == NameCollision::Overwrite || !self.claimed.contains(&base) {
            self.claimed.insert(base.clone());
            return base;
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{base}{n}");
            if !self.claimed.contains(&candidate) {
                self.claimed.insert(candidate.clone());
                return candidate;
            }
            n += 1;
        }
    }
}

/// Register every object in `root`. Returns the root declaration's id, or
/// `None` when the document holds no object at its root position.
pub fn register(
    root: &TypeNode,
    root_name: &str,
    opts: &NamingOptions,
) -> (Option<TypeId>, TypeRegistry) {
    let mut registry = TypeRegistry::default();

    let (_, leaf) = root.peel_arrays();
    let TypeNode::Object(root_fields) = leaf else {
        return (None, registry);
    };

    let mut namer = Namer { opts, claimed: HashSet::new() };
    let root_type_name = namer.claim(naming::type_name(root_name, opts));

    let mut pending: Vec<(String, &[Field])> = vec![(root_type_name, root_fields)];
    let mut root_id = None;

    while let Some((name, fields)) = pending.pop() {
        let mut children = Vec::new();
        let mut idents = HashSet::new();

        let fields = fields
            .iter()
            .map(|f| {
                let base = naming::avoid_leading_words(
                    naming::identifier(&f.source_key, opts.style, opts.reserved_words),
                    opts.reserved_leading_words,
                );
                let identifier = unique_identifier(base, &mut idents);
                let ty = lower_type(&f.ty, &f.source_key, &mut namer, &mut children);
                NamedField {
                    source_key: f.source_key.clone(),
                    identifier,
                    ty,
                    optional: f.optional,
                }
            })
            .collect();

        let id = registry.insert(NamedType { name, fields });
        root_id.get_or_insert(id);

        // reversed so the first child is registered next
        pending.extend(children.into_iter().rev());
    }

    tracing::debug!(types = registry.len(), "registered named types");
    (root_id, registry)
}

fn unique_identifier(base: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(base.clone()) {
        return base;
    }
    let mut n = 2usize;
    loop {
        let candidate = format!("{base}{n}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

fn lower_type<'t>(
    ty: &'t TypeNode,
    key: &str,
    namer: &mut Namer<'_>,
    children: &mut Vec<(String, &'t [Field])>,
) -> FieldType {
    let (depth, leaf) = ty.peel_arrays();
    let mut out = match leaf {
        TypeNode::Primitive(kind) => FieldType::Primitive(*kind),
        TypeNode::Unknown => FieldType::Unknown,
        TypeNode::Object(fields) => {
            let name = namer.claim(naming::type_name(key, namer.opts));
            children.push((name.clone(), fields.as_slice()));
            FieldType::Reference(name)
        }
        TypeNode::Array(_) => FieldType::Unknown, // unreachable after peeling
    };
    for _ in 0..depth {
        out = FieldType::Array(Box::new(out));
    }
    out
}
