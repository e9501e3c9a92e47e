//! Fuzz test for HTML character reference decoding.
//!
//! This fuzzer verifies that:
//! 1. Decoding never panics
//! 2. Text without `&` is returned unchanged
//! 3. Decoding never adds characters

use dialect_registry::Registry;
use honggfuzz::fuzz;

fn main() {
    let registry = Registry::builtin().expect("built-in tables are consistent");
    loop {
        fuzz!(|data: String| {
            let decoded = registry.entities().decode(&data);

            if !data.contains('&') {
                assert_eq!(decoded, data, "text without references must be unchanged");
            }

            assert!(
                decoded.chars().count() <= data.chars().count(),
                "decoding must not add characters"
            );
        });
    }
}
