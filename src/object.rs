//! Shallow merging of string-keyed mappings.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::collection::each;
use crate::collection::Collection;

/// A collection keyed by name that can be written to.
pub trait Mapping: Collection {
    fn has(&self, key: &str) -> bool;
    fn set(&mut self, key: String, value: Self::Item);
}

impl<T, S: BuildHasher> Mapping for HashMap<String, T, S> {
    fn has(&self, key: &str) -> bool { self.contains_key(key) }

    fn set(&mut self, key: String, value: T) {
        self.insert(key, value);
    }
}

impl<T> Mapping for BTreeMap<String, T> {
    fn has(&self, key: &str) -> bool { self.contains_key(key) }

    fn set(&mut self, key: String, value: T) {
        self.insert(key, value);
    }
}

/// Copy every entry of every source into `target`, later sources winning.
///
/// ```
/// use std::collections::BTreeMap;
/// use underbar::extend;
///
/// let mut settings = BTreeMap::from([("color".to_string(), "red")]);
/// let overrides = BTreeMap::from([("color".to_string(), "blue"), ("size".to_string(), "xl")]);
/// extend(&mut settings, &[&overrides]);
/// assert_eq!(settings["color"], "blue");
/// assert_eq!(settings["size"], "xl");
/// ```
pub fn extend<'t, M, S>(target: &'t mut M, sources: &[&S]) -> &'t mut M
where
    M: Mapping + ?Sized,
    M::Item: Clone,
    S: Mapping<Item = M::Item> + ?Sized,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            target.set(key.to_string(), value.clone());
        });
    });
    return target;
}

/// Copy entries into `target` only for keys it does not have yet.
///
/// The first value seen for a key wins, and the target's own values come
/// first of all.
pub fn defaults<'t, M, S>(target: &'t mut M, sources: &[&S]) -> &'t mut M
where
    M: Mapping + ?Sized,
    M::Item: Clone,
    S: Mapping<Item = M::Item> + ?Sized,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            let name = key.to_string();
            if !target.has(&name) {
                target.set(name, value.clone());
            }
        });
    });
    return target;
}
