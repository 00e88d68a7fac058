//! Construction from a partial set of field overrides.

/// A type that can be instantiated with a partial object.
///
/// `Partial` mirrors `Self` with every field optional. Fields left unset keep
/// their `Default` value.
pub trait Clonable: Default {
    type Partial;

    /// Copy every provided field onto `self`.
    fn assign(&mut self, partial: Self::Partial);

    fn from_partial(partial: Option<Self::Partial>) -> Self {
        let mut this = Self::default();
        if let Some(partial) = partial {
            this.assign(partial);
        }
        this
    }
}

/// Declare a struct together with its all-optional partial and a
/// [`Clonable`] implementation.
///
/// Attributes before `partial` apply to the generated partial struct.
///
/// ```
/// use valkit::{clonable, Clonable};
///
/// clonable! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct Server {
///         pub host: String,
///         pub port: u16,
///     }
///     #[derive(Debug, Default)]
///     pub partial ServerPartial;
/// }
///
/// let server = Server::from_partial(Some(ServerPartial {
///     port: Some(8080),
///     ..Default::default()
/// }));
/// assert_eq!(server, Server { host: String::new(), port: 8080 });
/// ```
#[macro_export]
macro_rules! clonable {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty ),* $(,)?
        }
        $(#[$pmeta:meta])*
        $pvis:vis partial $partial:ident;
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field : $ty ),*
        }

        $(#[$pmeta])*
        $pvis struct $partial {
            $( $fvis $field : ::core::option::Option<$ty> ),*
        }

        impl $crate::Clonable for $name {
            type Partial = $partial;

            fn assign(&mut self, partial: Self::Partial) {
                $(
                    if let ::core::option::Option::Some(value) = partial.$field {
                        self.$field = value;
                    }
                )*
            }
        }
    };
}
