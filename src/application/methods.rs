//! Method enumeration over statically registered prototype chains.
//!
//! A [`Prototype`] lists the members a type declares and links to the
//! prototype it extends. Types expose their prototype through [`Reflect`],
//! usually via the [`prototype!`](crate::prototype) macro.

use itertools::Itertools;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Method,
    Field,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Member {
    pub name: &'static str,
    pub kind: MemberKind,
}

impl Member {
    pub const fn method(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Method,
        }
    }

    pub const fn field(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Field,
        }
    }

    pub fn is_callable(&self) -> bool {
        self.kind == MemberKind::Method
    }
}

/// Static member table with an optional parent.
#[derive(Debug)]
pub struct Prototype {
    pub name: &'static str,
    pub members: &'static [Member],
    pub parent: Option<&'static Prototype>,
}

impl Prototype {
    /// This prototype followed by its ancestors, nearest first.
    pub fn chain(&'static self) -> Chain {
        Chain {
            current: Some(self),
        }
    }

    /// Nearest declaration of `name` along the chain.
    pub fn resolve(&'static self, name: &str) -> Option<&'static Member> {
        self.chain()
            .flat_map(|proto| proto.members.iter())
            .find(|member| member.name == name)
    }

    /// Whether `name` resolves to a field or method anywhere in the chain.
    pub fn has_member(&'static self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

pub struct Chain {
    current: Option<&'static Prototype>,
}

impl Iterator for Chain {
    type Item = &'static Prototype;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.parent;
        Some(current)
    }
}

/// Types that expose a prototype chain for method enumeration.
pub trait Reflect {
    fn prototype(&self) -> &'static Prototype;
}

/// List all methods of an object and its prototypes.
///
/// Every member name along the chain is collected in first-discovery order.
/// A name is kept when its nearest declaration is callable, so a field in a
/// subtype hides a method of the same name further up.
#[instrument(level = "debug", skip(obj))]
pub fn get_methods<T: Reflect + ?Sized>(obj: &T) -> Vec<String> {
    let proto = obj.prototype();
    let methods: Vec<String> = proto
        .chain()
        .flat_map(|p| p.members.iter().map(|m| m.name))
        .unique()
        .filter(|name| proto.resolve(name).is_some_and(Member::is_callable))
        .map(str::to_string)
        .collect();
    debug!(prototype = proto.name, count = methods.len(), "get_methods");
    methods
}

/// Declare a static [`Prototype`], optionally extending another.
///
/// ```
/// use valkit::{get_methods, prototype, Reflect, Prototype};
///
/// prototype!(pub static ANIMAL = "Animal" { name: Field, speak: Method });
/// prototype!(pub static DOG = "Dog" extends ANIMAL { fetch: Method });
///
/// struct Dog;
/// impl Reflect for Dog {
///     fn prototype(&self) -> &'static Prototype {
///         &DOG
///     }
/// }
///
/// assert_eq!(get_methods(&Dog), vec!["fetch", "speak"]);
/// ```
#[macro_export]
macro_rules! prototype {
    (
        $vis:vis static $ident:ident = $name:literal
        { $( $member:ident : $kind:ident ),* $(,)? }
    ) => {
        $vis static $ident: $crate::Prototype = $crate::Prototype {
            name: $name,
            members: &[ $( $crate::Member {
                name: stringify!($member),
                kind: $crate::MemberKind::$kind,
            } ),* ],
            parent: ::core::option::Option::None,
        };
    };
    (
        $vis:vis static $ident:ident = $name:literal extends $parent:path
        { $( $member:ident : $kind:ident ),* $(,)? }
    ) => {
        $vis static $ident: $crate::Prototype = $crate::Prototype {
            name: $name,
            members: &[ $( $crate::Member {
                name: stringify!($member),
                kind: $crate::MemberKind::$kind,
            } ),* ],
            parent: ::core::option::Option::Some(&$parent),
        };
    };
}
