//! The iteration core.
//!
//! Every operation in this crate walks its input through [`Collection::each`].
//! A collection is either an ordered sequence, visited by ascending index, or
//! a string-keyed mapping, visited once per key in the order the backing map
//! yields them. The two shapes are distinguished only by the [`Key`] handed to
//! the iterator.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::fmt;
use std::hash::BuildHasher;

/// The position of an element inside a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Index into an ordered sequence.
    Index(usize),
    /// Key into a string-keyed mapping.
    Name(&'a str),
}

impl<'a> Key<'a> {
    pub fn as_index(&self) -> Option<usize> {
        return match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        };
    }

    pub fn as_name(&self) -> Option<&'a str> {
        return match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(*name),
        };
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        };
    }
}

/// A sequence or a string-keyed mapping.
pub trait Collection {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Call `iterator(value, key, collection)` once per element.
    fn each<'c, F>(&'c self, iterator: F)
    where
        F: FnMut(&'c Self::Item, Key<'c>, &'c Self);
}

impl<T> Collection for [T] {
    type Item = T;

    fn len(&self) -> usize { self.len() }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c T, Key<'c>, &'c Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, Key::Index(index), self);
        }
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn len(&self) -> usize { N }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c T, Key<'c>, &'c Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, Key::Index(index), self);
        }
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn len(&self) -> usize { self.len() }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c T, Key<'c>, &'c Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, Key::Index(index), self);
        }
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize { self.len() }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c T, Key<'c>, &'c Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, Key::Index(index), self);
        }
    }
}

impl<T, S> Collection for HashMap<String, T, S> {
    type Item = T;

    fn len(&self) -> usize { self.len() }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c T, Key<'c>, &'c Self),
    {
        for (key, value) in self.iter() {
            iterator(value, Key::Name(key.as_str()), self);
        }
    }
}

impl<T> Collection for BTreeMap<String, T> {
    type Item = T;

    fn len(&self) -> usize { self.len() }

    fn each<'c, F>(&'c self, mut iterator: F)
    where
        F: FnMut(&'c T, Key<'c>, &'c Self),
    {
        for (key, value) in self.iter() {
            iterator(value, Key::Name(key.as_str()), self);
        }
    }
}

/// A value with named fields, such as a map from field name to value.
pub trait Record {
    type Value;

    fn field(&self, name: &str) -> Option<&Self::Value>;
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        return self.get(name);
    }
}

impl<V> Record for BTreeMap<String, V> {
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        return self.get(name);
    }
}

/// Loose truthiness: zero, empty, `None` and `false` are falsy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool { *self }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool { false }
}

macro_rules! truthy_integer {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool { *self != 0 }
        })*
    };
}

truthy_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    // NaN != 0.0 holds, so NaN needs its own check.
    fn is_truthy(&self) -> bool { *self != 0.0 && !self.is_nan() }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool { *self != 0.0 && !self.is_nan() }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool { true }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool { self.is_some() }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool { (**self).is_truthy() }
}

/// Return the argument unchanged. Passed as a predicate it tests truthiness.
pub fn identity<T>(value: T) -> T {
    return value;
}

/// Call `iterator(value, key, collection)` for each element of `collection`.
pub fn each<'c, C, F>(collection: &'c C, iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item, Key<'c>, &'c C),
{
    collection.each(iterator);
}

/// Return the index of the first element equal to `target`.
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut result = None;
    each(sequence, |item, key, _| {
        if result.is_none() && item == target {
            result = key.as_index();
        }
    });
    return result;
}
