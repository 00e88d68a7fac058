//! Shallow copies of records with selected keys removed.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::{debug, instrument};

use crate::domain::Document;

/// Records that can be copied without a set of keys.
pub trait Omit: Sized {
    /// Return a shallow copy without `props`; keys not present are ignored.
    fn without_props<K: AsRef<str>>(&self, props: &[K]) -> Self;
}

impl<V: Clone> Omit for BTreeMap<String, V> {
    fn without_props<K: AsRef<str>>(&self, props: &[K]) -> Self {
        let mut rest = self.clone();
        for prop in props {
            rest.remove(prop.as_ref());
        }
        rest
    }
}

impl<V: Clone, S: BuildHasher + Clone> Omit for HashMap<String, V, S> {
    fn without_props<K: AsRef<str>>(&self, props: &[K]) -> Self {
        let mut rest = self.clone();
        for prop in props {
            rest.remove(prop.as_ref());
        }
        rest
    }
}

/// Clone a document, removing a list of properties. The input is left untouched.
///
/// ```
/// use valkit::{without_props, Document};
///
/// let doc: Document = [("a", 1), ("b", 2), ("c", 3)]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.into()))
///     .collect();
/// let rest = without_props(&doc, &["b"]);
/// assert_eq!(rest.keys().collect::<Vec<_>>(), vec!["a", "c"]);
/// assert_eq!(doc.len(), 3);
/// ```
#[instrument(level = "debug", skip(obj, props), fields(keys = obj.len(), props = props.len()))]
pub fn without_props<T: Clone, K: AsRef<str>>(obj: &Document<T>, props: &[K]) -> Document<T> {
    let rest = obj.without_props(props);
    debug!(removed = obj.len() - rest.len(), "without_props");
    rest
}
