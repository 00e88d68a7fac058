//! Application layer: runtime helpers over the domain shapes

pub mod clonable;
pub mod equals;
pub mod error;
pub mod error_ext;
pub mod falsy;
pub mod methods;
pub mod omit;

pub use clonable::Clonable;
pub use equals::{equals, strict_equals, Equals};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use falsy::is_falsy_or_spaces;
pub use methods::{get_methods, Member, MemberKind, Prototype, Reflect};
pub use omit::{without_props, Omit};
