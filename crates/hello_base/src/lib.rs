/* 📖 # Why have hello_base as a separate crate?
hello_base owns the error type and tracing setup. The greeter crate depends on it,
so error handling stays identical wherever a `HelloResult` is returned.
*/

pub mod error;
pub mod tracing;

pub use error::{ErrorKind, HelloError, HelloResult, ResultExt};
