//! Exclusive-or of two shapes.

use serde::{Deserialize, Serialize};

/// A value that is exactly one of `T` or `U`, never both.
///
/// Deserialization tries `T` first, then `U`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeXor<T, U> {
    Left(T),
    Right(U),
}

impl<T, U> TypeXor<T, U> {
    pub fn is_left(&self) -> bool {
        matches!(self, TypeXor::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, TypeXor::Right(_))
    }

    pub fn left(self) -> Option<T> {
        match self {
            TypeXor::Left(t) => Some(t),
            TypeXor::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<U> {
        match self {
            TypeXor::Left(_) => None,
            TypeXor::Right(u) => Some(u),
        }
    }

    pub fn as_ref(&self) -> TypeXor<&T, &U> {
        match self {
            TypeXor::Left(t) => TypeXor::Left(t),
            TypeXor::Right(u) => TypeXor::Right(u),
        }
    }

    pub fn flip(self) -> TypeXor<U, T> {
        match self {
            TypeXor::Left(t) => TypeXor::Right(t),
            TypeXor::Right(u) => TypeXor::Left(u),
        }
    }

    pub fn map_left<V, F: FnOnce(T) -> V>(self, f: F) -> TypeXor<V, U> {
        match self {
            TypeXor::Left(t) => TypeXor::Left(f(t)),
            TypeXor::Right(u) => TypeXor::Right(u),
        }
    }

    pub fn map_right<V, F: FnOnce(U) -> V>(self, f: F) -> TypeXor<T, V> {
        match self {
            TypeXor::Left(t) => TypeXor::Left(t),
            TypeXor::Right(u) => TypeXor::Right(f(u)),
        }
    }

    /// Fold both sides into one result.
    pub fn either<R>(self, on_left: impl FnOnce(T) -> R, on_right: impl FnOnce(U) -> R) -> R {
        match self {
            TypeXor::Left(t) => on_left(t),
            TypeXor::Right(u) => on_right(u),
        }
    }
}
