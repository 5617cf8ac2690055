//! Underbar - functional helpers for sequences, maps and functions.
//!
//! Every operation is a free function re-exported at the crate root. The
//! collection operations accept either an ordered sequence (slices, arrays,
//! `Vec`, `VecDeque`) or a string-keyed map (`HashMap`, `FxHashMap`,
//! `BTreeMap`) and walk it through a single primitive, [`each`].
//!
//! # Quick Start
//!
//! ```
//! use underbar::{filter, map, reduce, uniq};
//!
//! let numbers = vec![1, 2, 2, 3, 4, 4];
//! let distinct = uniq(&numbers);
//! assert_eq!(distinct, vec![1, 2, 3, 4]);
//!
//! let evens = filter(&distinct, |n| n % 2 == 0);
//! let squares = map(&evens, |n| n * n);
//! assert_eq!(squares, vec![4, 16]);
//!
//! assert_eq!(reduce(&squares, |total, n| total + n, None), Some(20));
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `collection` | `each`, `index_of` and the `Collection` shapes |
//! | `transform` | `map`, `filter`, `reduce` and friends |
//! | `object` | `extend`, `defaults` |
//! | `function` | `once`, `memoize`, `delay`, `throttle` |
//! | `array` | `shuffle`, `invoke`, `sort_by`, `zip`, `flatten`, set operations |

pub mod array;
pub mod collection;
pub mod error;
pub mod function;
pub mod object;
pub mod transform;

pub use array::difference;
pub use array::first;
pub use array::first_n;
pub use array::flatten;
pub use array::intersection;
pub use array::invoke;
pub use array::last;
pub use array::last_n;
pub use array::shuffle;
pub use array::shuffle_with;
pub use array::sort_by;
pub use array::zip;
pub use array::zip2;
pub use array::Criterion;
pub use array::Field;
pub use array::Invocable;
pub use array::Method;
pub use array::MethodTable;
pub use array::Nested;
pub use array::Score;
pub use collection::each;
pub use collection::identity;
pub use collection::index_of;
pub use collection::Collection;
pub use collection::Key;
pub use collection::Record;
pub use collection::Truthy;
pub use error::Error;
pub use error::Result;
pub use function::delay;
pub use function::memoize;
pub use function::once;
pub use function::throttle;
pub use function::throttle_with_clock;
pub use function::Clock;
pub use function::Delayed;
pub use function::ManualClock;
pub use function::SystemClock;
pub use object::defaults;
pub use object::extend;
pub use object::Mapping;
pub use transform::contains;
pub use transform::every;
pub use transform::filter;
pub use transform::fold;
pub use transform::map;
pub use transform::pluck;
pub use transform::reduce;
pub use transform::reject;
pub use transform::some;
pub use transform::uniq;
