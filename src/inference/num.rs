use crate::ir::PrimitiveKind;
use crate::value::{JsonNumber, NumberStorage};

/// Classify a number from its storage hint.
///
/// Single-byte integers holding exactly 0 or 1 are booleans written as ints.
/// Storage kinds with no better mapping fall back to `Int`; that is a
/// best-effort default, not an error, and it can misclassify exotic encodings.
pub fn classify(n: &JsonNumber) -> PrimitiveKind {
    match n.storage {
        NumberStorage::Char => match n.as_i64() {
            Some(0 | 1) => PrimitiveKind::Bool,
            _ => PrimitiveKind::Int,
        },
        NumberStorage::Short | NumberStorage::Int | NumberStorage::Int64 => PrimitiveKind::Int,
        NumberStorage::Float32 => PrimitiveKind::Float,
        NumberStorage::Float64 | NumberStorage::Extended => PrimitiveKind::Double,
        NumberStorage::Other => PrimitiveKind::Int,
    }
}
