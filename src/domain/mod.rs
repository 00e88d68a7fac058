//! Domain layer: value shapes
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod tree;
pub mod value;
pub mod xor;

pub use error::{DomainError, DomainResult};
pub use tree::{TreeDisplay, TreeItem};
pub use value::{
    document_from_value, document_to_value, parse_documents, Complex, Document, ExtendedDocument,
    FalsyOrLiteral, JsonOrString, Primitive,
};
pub use xor::TypeXor;
