//! Collection transforms built on [`each`].
//!
//! All of these work on either collection shape and return fresh values;
//! the input is only ever borrowed. Predicates may return anything
//! [`Truthy`], so `identity` doubles as the default truth test.

use crate::collection::each;
use crate::collection::index_of;
use crate::collection::Collection;
use crate::collection::Record;
use crate::collection::Truthy;

/// Return the elements for which `predicate` is truthy, in traversal order.
pub fn filter<'c, C, F, R>(collection: &'c C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&'c C::Item) -> R,
    R: Truthy,
{
    let mut filtered = Vec::new();
    each(collection, |item, _, _| {
        if predicate(item).is_truthy() {
            filtered.push(item.clone());
        }
    });
    return filtered;
}

/// Return the elements for which `predicate` is falsy, in traversal order.
pub fn reject<'c, C, F, R>(collection: &'c C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&'c C::Item) -> R,
    R: Truthy,
{
    return filter(collection, |item| !predicate(item).is_truthy());
}

/// Return each distinct element once, at the position it first appears.
pub fn uniq<T: PartialEq + Clone>(sequence: &[T]) -> Vec<T> {
    let mut unique = Vec::new();
    each(sequence, |item, key, _| {
        // Only the first occurrence sits at its own index_of.
        if index_of(sequence, item) == key.as_index() {
            unique.push(item.clone());
        }
    });
    return unique;
}

/// Apply `iterator` to every element, in traversal order.
pub fn map<'c, C, F, U>(collection: &'c C, mut iterator: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item) -> U,
{
    let mut mapped = Vec::with_capacity(collection.len());
    each(collection, |item, _, _| {
        mapped.push(iterator(item));
    });
    return mapped;
}

/// Read the field `key` out of every element. Missing fields are `None`.
pub fn pluck<'c, C>(collection: &'c C, key: &str) -> Vec<Option<<C::Item as Record>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Record,
    <C::Item as Record>::Value: Clone,
{
    return map(collection, |item| item.field(key).cloned());
}

/// Thread `initial` through `iterator(accumulator, element)` for every element.
pub fn fold<'c, C, A, F>(collection: &'c C, mut iterator: F, initial: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &'c C::Item) -> A,
{
    let mut items: Vec<&'c C::Item> = Vec::with_capacity(collection.len());
    each(collection, |item, _, _| items.push(item));
    let mut accumulator = initial;
    for item in items {
        accumulator = iterator(accumulator, item);
    }
    return accumulator;
}

/// Reduce a collection to a single value.
///
/// With `initial` set to `Some(value)` the iterator runs once per element,
/// starting from `value`. With `None` the first element seeds the accumulator
/// and the iterator only runs from the second element on; an empty collection
/// then reduces to `None`.
///
/// ```
/// use underbar::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |total, n| total + n, None), Some(6));
/// assert_eq!(reduce(&[1, 2, 3], |total, n| total + n, Some(10)), Some(16));
/// assert_eq!(reduce(&[5], |total, n| total + n * n, None), Some(5));
/// ```
pub fn reduce<'c, C, F>(collection: &'c C, mut iterator: F, initial: Option<C::Item>) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &'c C::Item) -> C::Item,
{
    if let Some(initial) = initial {
        return Some(fold(collection, iterator, initial));
    }

    let mut accumulator: Option<C::Item> = None;
    each(collection, |item, _, _| {
        accumulator = Some(match accumulator.take() {
            None => item.clone(),
            Some(current) => iterator(current, item),
        });
    });
    return accumulator;
}

/// Return true if any element equals `target`.
pub fn contains<'c, C>(collection: &'c C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    return fold(collection, |was_found, item| was_found || item == target, false);
}

/// Return true if `predicate` is truthy for every element. Vacuously true.
///
/// The predicate is not called again once an element has failed.
pub fn every<'c, C, F, R>(collection: &'c C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item) -> R,
    R: Truthy,
{
    return fold(collection, |matches, item| matches && predicate(item).is_truthy(), true);
}

/// Return true if `predicate` is truthy for at least one element.
pub fn some<'c, C, F, R>(collection: &'c C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Item) -> R,
    R: Truthy,
{
    return !every(collection, |item| !predicate(item).is_truthy());
}
