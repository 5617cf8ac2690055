//! Algorithms over ordered sequences.
//!
//! Inputs are borrowed slices; several operations take a list of slices in
//! place of a variadic argument list. Only [`sort_by`] writes to its input.

use std::fmt;

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use crate::collection::each;
use crate::collection::index_of;
use crate::collection::Record;
use crate::error::Error;
use crate::error::Result;
use crate::transform::every;
use crate::transform::filter;
use crate::transform::fold;
use crate::transform::map;
use crate::transform::reject;
use crate::transform::some;

/// Return the first element.
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    return sequence.first();
}

/// Return up to the first `n` elements.
pub fn first_n<T>(sequence: &[T], n: usize) -> &[T] {
    return &sequence[..n.min(sequence.len())];
}

/// Return the last element.
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    return sequence.last();
}

/// Return up to the last `n` elements.
pub fn last_n<T>(sequence: &[T], n: usize) -> &[T] {
    return &sequence[sequence.len().saturating_sub(n)..];
}

/// Return a randomly ordered copy of `sequence`.
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    return shuffle_with(sequence, &mut rand::thread_rng());
}

/// Return a copy of `sequence` shuffled with `rng`, using Fisher-Yates.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(sequence: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = sequence.to_vec();
    for i in (1..shuffled.len()).rev() {
        // The partner range includes i itself, or the shuffle is biased.
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    return shuffled;
}

/// Something [`invoke`] can call on each element.
///
/// Closures of the form `|item: &T, args: &A| ...` are invocable directly;
/// named methods go through a [`MethodTable`].
pub trait Invocable<T, A> {
    type Output;

    /// Find the function to call, before any element is visited.
    fn resolve(&self) -> Result<&dyn Fn(&T, &A) -> Self::Output>;
}

impl<T, A, R, F> Invocable<T, A> for F
where
    F: Fn(&T, &A) -> R,
{
    type Output = R;

    fn resolve(&self) -> Result<&dyn Fn(&T, &A) -> R> {
        return Ok(self);
    }
}

/// Named methods callable on values of type `T` with arguments `A`.
pub struct MethodTable<T, A, R> {
    methods: FxHashMap<String, Box<dyn Fn(&T, &A) -> R>>,
}

impl<T, A, R> Default for MethodTable<T, A, R> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T, A, R> MethodTable<T, A, R> {
    pub fn new() -> MethodTable<T, A, R> {
        return MethodTable {
            methods: FxHashMap::default(),
        };
    }

    /// Register `method` under `name`, replacing any previous entry.
    pub fn register<M>(&mut self, name: impl Into<String>, method: M) -> &mut Self
    where
        M: Fn(&T, &A) -> R + 'static,
    {
        self.methods.insert(name.into(), Box::new(method));
        return self;
    }

    pub fn get(&self, name: &str) -> Option<&dyn Fn(&T, &A) -> R> {
        return self.methods.get(name).map(|method| method.as_ref());
    }

    /// Refer to a method by name, for passing to [`invoke`].
    pub fn method<'a>(&'a self, name: &'a str) -> Method<'a, T, A, R> {
        return Method { table: self, name };
    }

    pub fn len(&self) -> usize {
        return self.methods.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.methods.is_empty();
    }
}

impl<T, A, R> fmt::Debug for MethodTable<T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.methods.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        return f.debug_struct("MethodTable").field("methods", &names).finish();
    }
}

/// A method looked up by name in a [`MethodTable`].
pub struct Method<'a, T, A, R> {
    table: &'a MethodTable<T, A, R>,
    name: &'a str,
}

impl<T, A, R> Invocable<T, A> for Method<'_, T, A, R> {
    type Output = R;

    fn resolve(&self) -> Result<&dyn Fn(&T, &A) -> R> {
        debug!(name = self.name, "resolving method");
        return self.table.get(self.name).ok_or_else(|| Error::UnknownMethod {
            name: self.name.to_string(),
        });
    }
}

/// Call `invocable` on every element with `args`, collecting the results.
///
/// ```
/// use underbar::{invoke, MethodTable};
///
/// let mut methods = MethodTable::new();
/// methods.register("shout", |s: &String, suffix: &&str| s.to_uppercase() + *suffix);
///
/// let words = vec!["hi".to_string(), "yo".to_string()];
/// let shouted = invoke(&words, methods.method("shout"), &"!").unwrap();
/// assert_eq!(shouted, vec!["HI!", "YO!"]);
///
/// assert!(invoke(&words, methods.method("whisper"), &"").is_err());
/// ```
pub fn invoke<T, A, I>(sequence: &[T], invocable: I, args: &A) -> Result<Vec<I::Output>>
where
    I: Invocable<T, A>,
{
    let method = invocable.resolve()?;
    return Ok(map(sequence, |item| method(item, args)));
}

/// A value that can be compared numerically.
///
/// Strings score as the number they parse to. Anything that does not
/// describe a number scores NaN.
pub trait Score {
    fn score(&self) -> f64;
}

macro_rules! score_number {
    ($($t:ty),*) => {
        $(impl Score for $t {
            fn score(&self) -> f64 { *self as f64 }
        })*
    };
}

score_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Score for bool {
    fn score(&self) -> f64 { if *self { 1.0 } else { 0.0 } }
}

impl Score for str {
    fn score(&self) -> f64 { self.trim().parse().unwrap_or(f64::NAN) }
}

impl Score for String {
    fn score(&self) -> f64 { self.as_str().score() }
}

impl<T: Score> Score for Option<T> {
    fn score(&self) -> f64 { self.as_ref().map_or(f64::NAN, Score::score) }
}

impl<T: Score + ?Sized> Score for &T {
    fn score(&self) -> f64 { (**self).score() }
}

/// The sort key used by [`sort_by`].
pub trait Criterion<T> {
    fn measure(&self, item: &T) -> f64;
}

impl<T, K, F> Criterion<T> for F
where
    F: Fn(&T) -> K,
    K: Score,
{
    fn measure(&self, item: &T) -> f64 {
        return self(item).score();
    }
}

/// Sort by the named field of each element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a>(pub &'a str);

impl<T> Criterion<T> for Field<'_>
where
    T: Record,
    T::Value: Score,
{
    fn measure(&self, item: &T) -> f64 {
        return item.field(self.0).map_or(f64::NAN, Score::score);
    }
}

/// Sort `sequence` in place by ascending `criterion` and return it.
///
/// The sort is stable. Elements scoring NaN go last.
///
/// ```
/// use underbar::sort_by;
///
/// let mut words = vec!["ccc", "a", "bb"];
/// sort_by(&mut words, |w: &&str| w.len());
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_by<'s, T, C>(sequence: &'s mut [T], criterion: C) -> &'s mut [T]
where
    C: Criterion<T>,
{
    sequence.sort_by(|a, b| criterion.measure(a).total_cmp(&criterion.measure(b)));
    return sequence;
}

/// Zip sequences together by index, up to the longest one.
///
/// Row `i` holds the `i`th element of every input in argument order, with
/// `None` where an input has run out.
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = fold(sequences, |longest, sequence| longest.max(sequence.len()), 0usize);
    let mut output = Vec::with_capacity(longest);
    for index in 0..longest {
        output.push(map(sequences, |sequence| sequence.get(index).cloned()));
    }
    return output;
}

/// Zip two sequences of different element types.
pub fn zip2<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let longest = left.len().max(right.len());
    return (0..longest)
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect();
}

/// An arbitrarily nested sequence.
///
/// Deserializes from plain nested arrays, e.g. the JSON `[1, [2, [3]]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    List(Vec<Nested<T>>),
    Leaf(T),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Nested<T> {
        return Nested::Leaf(value);
    }

    pub fn list(items: Vec<Nested<T>>) -> Nested<T> {
        return Nested::List(items);
    }
}

/// Return every leaf, depth first and left to right.
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    flatten_into(nested, &mut result);
    return result;
}

fn flatten_into<T: Clone>(nested: &[Nested<T>], result: &mut Vec<T>) {
    each(nested, |item, _, _| match item {
        Nested::Leaf(value) => result.push(value.clone()),
        Nested::List(items) => flatten_into(items, result),
    });
}

/// Index of the longest sequence, the earliest one on ties.
fn longest_index<T>(sequences: &[&[T]]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    each(sequences, |sequence, key, _| {
        let longer = match best {
            None => true,
            Some((_, len)) => sequence.len() > len,
        };
        if longer {
            best = key.as_index().map(|index| (index, sequence.len()));
        }
    });
    return best.map(|(index, _)| index);
}

/// Return the elements shared by every sequence.
///
/// Walks the longest sequence (the earliest of equally long ones) and keeps
/// each element found in all the others, duplicates included.
pub fn intersection<T: PartialEq + Clone>(sequences: &[&[T]]) -> Vec<T> {
    let Some(longest) = longest_index(sequences) else {
        return Vec::new();
    };
    let others: SmallVec<[&[T]; 4]> = sequences
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != longest)
        .map(|(_, sequence)| *sequence)
        .collect();
    return filter(sequences[longest], |item| {
        every(&others[..], |other| index_of(*other, item).is_some())
    });
}

/// Return the elements of `first` that appear in none of `rest`.
pub fn difference<T: PartialEq + Clone>(first: &[T], rest: &[&[T]]) -> Vec<T> {
    return reject(first, |item| some(rest, |other| index_of(*other, item).is_some()));
}
