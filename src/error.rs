//! Error type shared by the fallible operations.
//!
//! Most of the crate cannot fail: lookups that miss return `None`. The
//! exceptions are invoking a method name nobody registered and scheduling a
//! delayed callback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown method: {name}")]
    UnknownMethod { name: String },

    #[error("Failed to spawn delay thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Delayed callback panicked")]
    Callback,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_method_names_the_method() {
        let error = Error::UnknownMethod { name: "toUpperCase".to_string() };
        assert_eq!(error.to_string(), "Unknown method: toUpperCase");
    }

    #[test]
    fn io_errors_convert_to_spawn() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "no threads left");
        let error: Error = io.into();
        assert!(matches!(error, Error::Spawn(_)));
        assert!(error.to_string().contains("no threads left"));
    }
}
