//! Fuzz test for dialect resolution.
//!
//! This fuzzer generates free text plus an optional known alias with a random
//! case pattern and padding, and verifies that:
//! 1. Resolution never panics
//! 2. `FromStr` agrees with the registry
//! 3. Known aliases resolve regardless of ASCII case and padding

use arbitrary::Arbitrary;
use dialect_registry::{Dialect, Registry, RegistryData};
use honggfuzz::fuzz;

#[derive(Debug, Arbitrary)]
struct Input {
    free_text: String,
    alias_index: Option<u16>,
    case_mask: u64,
    padding: u8,
}

fn main() {
    let registry = Registry::builtin().expect("built-in tables are consistent");
    let aliases: Vec<(Dialect, String)> = RegistryData::builtin()
        .aliases
        .into_iter()
        .flat_map(|entry| {
            let dialect = entry.dialect;
            entry.aliases.into_iter().map(move |alias| (dialect, alias))
        })
        .collect();

    loop {
        fuzz!(|input: Input| {
            let resolved = registry.resolve(&input.free_text);
            assert_eq!(input.free_text.parse::<Dialect>().ok(), resolved);

            let Some(index) = input.alias_index else {
                return;
            };
            let (dialect, alias) = &aliases[usize::from(index) % aliases.len()];
            let cased: String = alias
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if (input.case_mask >> (i % 64)) & 1 == 1 {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect();
            let pad = " ".repeat(usize::from(input.padding % 4));
            let padded = format!("{pad}{cased}{pad}");
            assert_eq!(registry.resolve(&padded), Some(*dialect), "{padded:?}");
        });
    }
}
