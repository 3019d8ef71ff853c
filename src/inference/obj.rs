use indexmap::IndexMap;
use crate::ir::{Field, TypeNode};

#[derive(Debug)]
struct FieldC {
    ty: TypeNode,      // first-seen type; later conflicts are not reconciled
    present_in: usize,
    varies: bool,      // a later sample disagreed with `ty`, or arrived already optional
}

/// Key-union of several object shapes observed at one position.
///
/// Field order is first appearance across the shapes, in the order given. A
/// field is optional when some shape lacks it or when its type differs between
/// shapes; in the second case the first-seen type is kept as-is, even when it is
/// only a null or an empty array.
pub(super) fn unify_objects(shapes: Vec<Vec<Field>>) -> Vec<Field> {
    let seen_objects = shapes.len();
    let mut fields: IndexMap<String, FieldC> = IndexMap::new();

    for shape in shapes {
        for f in shape {
            match fields.get_mut(&f.source_key) {
                None => {
                    fields.insert(f.source_key, FieldC {
                        ty: f.ty,
                        present_in: 1,
                        varies: f.optional,
                    });
                }
                Some(fc) => {
                    fc.present_in += 1;
                    if f.optional || fc.ty != f.ty {
                        fc.varies = true;
                    }
                }
            }
        }
    }

    fields
        .into_iter()
        .map(|(source_key, fc)| Field {
            source_key,
            optional: fc.varies || fc.present_in < seen_objects,
            ty: fc.ty,
        })
        .collect()
}
