//! Fuzz test for loading registry tables from JSON.
//!
//! Arbitrary JSON must never panic the loader: it is either rejected as
//! invalid configuration, rejected by validation, or yields a registry whose
//! lookups work.

use dialect_registry::{Registry, RegistryData};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: String| {
            let Ok(tables) = RegistryData::from_json(&data) else {
                return;
            };
            let Ok(registry) = Registry::from_data(tables) else {
                return;
            };
            let _ = registry.classify(&data);
            let _ = registry.entities().decode(&data);
            let _ = registry.resolve(&data);
        });
    }
}
