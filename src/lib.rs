//! Shape helpers and value utilities.
//!
//! - [`TreeItem`]: a value with ordered children of the same shape
//! - [`Document`], [`Complex`], [`Primitive`]: loosely typed JSON-like records
//! - [`TypeXor`]: exactly one of two shapes
//! - [`Clonable`]: construction from partial field overrides
//! - [`is_falsy_or_spaces`], [`without_props`], [`equals`], [`get_methods`]

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{
    equals, get_methods, is_falsy_or_spaces, strict_equals, without_props, Clonable, Equals,
    Member, MemberKind, Omit, Prototype, Reflect,
};
pub use domain::{
    Complex, Document, DomainError, ExtendedDocument, FalsyOrLiteral, JsonOrString, Primitive,
    TreeDisplay, TreeItem, TypeXor,
};
