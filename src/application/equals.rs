//! Equality through an explicit capability.
//!
//! Types opt into custom equality by implementing [`Equals`]. [`equals`]
//! short-circuits on identical references before deferring to it.

use crate::domain::{Complex, FalsyOrLiteral, Primitive, TreeItem};

/// Custom equality capability.
pub trait Equals<Rhs: ?Sized = Self> {
    fn equals(&self, other: &Rhs) -> bool;
}

/// True if `a` and `b` are the same reference, otherwise `a.equals(b)`.
pub fn equals<T: Equals + ?Sized>(a: &T, b: &T) -> bool {
    std::ptr::eq(a, b) || a.equals(b)
}

/// Plain value equality, no capability dispatch.
pub fn strict_equals<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

macro_rules! equals_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Equals for $ty {
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

// Float `==` keeps NaN unequal to itself.
equals_by_value!(
    str, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64, Primitive, Complex, FalsyOrLiteral, serde_json::Value,
);

impl<T: Equals> Equals for [T] {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.equals(b))
    }
}

impl<T: Equals> Equals for Vec<T> {
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<T: Equals> Equals for Option<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.equals(b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Trees are equal when payloads are equal and children match pairwise.
impl<T: Equals> Equals for TreeItem<T> {
    fn equals(&self, other: &Self) -> bool {
        self.item.equals(&other.item) && self.children.equals(&other.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nan_when_comparing_by_value_then_not_equal() {
        let nan = Complex::Number(f64::NAN);
        assert!(!nan.equals(&Complex::Number(f64::NAN)));
    }

    #[test]
    fn given_same_reference_when_comparing_then_equal_even_for_nan() {
        let nan = Complex::Number(f64::NAN);
        assert!(equals(&nan, &nan));
    }
}
