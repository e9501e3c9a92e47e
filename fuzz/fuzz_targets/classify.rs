//! Fuzz test for statement classification.
//!
//! This fuzzer verifies that:
//! 1. Classification never panics
//! 2. ASCII case does not change the result
//! 3. Prefixing a SELECT keyword always yields the SELECT category

use dialect_registry::{Registry, StatementCategory};
use honggfuzz::fuzz;

fn main() {
    let registry = Registry::builtin().expect("built-in tables are consistent");
    loop {
        fuzz!(|data: String| {
            let category = registry.classify(&data);

            if data.is_ascii() {
                assert_eq!(
                    registry.classify(&data.to_ascii_uppercase()),
                    category,
                    "ASCII case changed the category"
                );
            }

            assert_eq!(
                registry.classify(&format!("SELECT {data}")),
                Some(StatementCategory::Select),
                "SELECT prefix must win"
            );
        });
    }
}
