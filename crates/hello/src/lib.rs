/* 📖 # What does the greeter do?
`hello()` is the whole public surface: call it and it reports success.
It prints nothing and returns no text; the only output is a debug-level
tracing event, visible when a subscriber is installed with a permissive filter.
*/

use hello_base::HelloResult;
use hello_base::tracing::{debug, instrument};

/// Greets the world. Always succeeds.
#[instrument]
pub fn hello() -> HelloResult<()> {
    debug!("Hello, World!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        if hello().is_err() {
            panic!("Hello, World?");
        }
    }

    #[test]
    fn test_hello_is_repeatable() {
        for _ in 0..3 {
            assert!(hello().is_ok(), "Hello, World?");
        }
    }
}
