//! HTML character reference decoding.
//!
//! Three reference forms are recognized, each terminated by `;`:
//! named (`&amp;`), decimal (`&#65;`) and hexadecimal (`&#x41;` / `&#X41;`).
//! Anything else, including references to unknown names, is copied through
//! untouched. Decoding is a single pass: `&amp;lt;` becomes `&lt;`.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::config::EntityEntry;
use crate::errors::Error;

/// Longest named reference, between `&` and `;`, that is looked at.
/// Numeric references are bounded by their digits instead.
const MAX_REFERENCE_LEN: usize = 32;

/// Decodes HTML character references.
#[derive(Debug, Clone, Default)]
pub struct EntityDecoder {
    entities: HashMap<String, char>,
}

impl EntityDecoder {
    /// Build a decoder from named entities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEntity`], [`Error::InvalidEntityName`] or
    /// [`Error::InvalidCodePoint`].
    pub fn new(entries: Vec<EntityEntry>) -> Result<Self, Error> {
        let mut entities = HashMap::with_capacity(entries.len());
        for EntityEntry { name, code_point } in entries {
            if name.is_empty()
                || name.len() > MAX_REFERENCE_LEN
                || !name.bytes().all(|b| b.is_ascii_alphanumeric())
            {
                return Err(Error::InvalidEntityName(name));
            }
            let Some(c) = char::from_u32(code_point) else {
                return Err(Error::InvalidCodePoint { name, code_point });
            };
            if entities.contains_key(&name) {
                return Err(Error::DuplicateEntity(name));
            }
            entities.insert(name, c);
        }
        Ok(Self { entities })
    }

    /// The character a named entity stands for. Names are case-sensitive.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<char> {
        self.entities.get(name).copied()
    }

    /// Number of named entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether no named entities are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Replace every recognized reference in `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use dialect_registry::Registry;
    ///
    /// let registry = Registry::builtin().unwrap();
    /// let entities = registry.entities();
    /// assert_eq!(entities.decode("a &amp; b &unknownxyz; c"), "a & b &unknownxyz; c");
    /// assert_eq!(entities.decode("&#65;&#x42;"), "AB");
    /// ```
    #[must_use]
    pub fn decode(&self, text: &str) -> String {
        let mut decoded = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(amp) = rest.find('&') {
            decoded.push_str(&rest[..amp]);
            let after = &rest[amp + 1..];
            if let Some((c, consumed)) = self.reference(after) {
                decoded.push(c);
                rest = &after[consumed..];
            } else {
                decoded.push('&');
                rest = after;
            }
        }
        decoded.push_str(rest);
        decoded
    }

    /// Decode the reference at the start of `after`, the text following a
    /// `&`. Returns the character and the number of bytes consumed,
    /// terminator included.
    fn reference(&self, after: &str) -> Option<(char, usize)> {
        let end = match after.strip_prefix('#') {
            Some(number) => 1 + number.bytes().position(|b| !b.is_ascii_alphanumeric())?,
            None => after
                .bytes()
                .take(MAX_REFERENCE_LEN + 1)
                .position(|b| b == b';')?,
        };
        if after.as_bytes().get(end) != Some(&b';') {
            return None;
        }
        let body = &after[..end];
        let c = match body.strip_prefix('#') {
            Some(number) => numeric_reference(number)?,
            None => self.lookup(body)?,
        };
        Some((c, end + 1))
    }
}

fn numeric_reference(number: &str) -> Option<char> {
    let (digits, radix) = match number.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (number, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    char::from_u32(u32::from_str_radix(digits, radix).ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn decoder() -> EntityDecoder {
        EntityDecoder::new(vec![
            EntityEntry {
                name: "amp".to_string(),
                code_point: 38,
            },
            EntityEntry {
                name: "lt".to_string(),
                code_point: 60,
            },
            EntityEntry {
                name: "Alpha".to_string(),
                code_point: 913,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_numeric_reference() {
        assert_eq!(numeric_reference("65"), Some('A'));
        assert_eq!(numeric_reference("x42"), Some('B'));
        assert_eq!(numeric_reference("X3b1"), Some('α'));
        assert_eq!(numeric_reference("x"), None);
        assert_eq!(numeric_reference(""), None);
        assert_eq!(numeric_reference("+65"), None);
        assert_eq!(numeric_reference("xD800"), None);
        assert_eq!(numeric_reference("1114112"), None);
        assert_eq!(numeric_reference("99999999999"), None);
    }

    #[test]
    fn test_decode_is_single_pass() {
        assert_eq!(decoder().decode("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let decoder = decoder();
        assert_eq!(decoder.decode("&Alpha;&alpha;&AMP;"), "Α&alpha;&AMP;");
    }

    #[test]
    fn test_malformed_references_are_kept() {
        let decoder = decoder();
        for text in ["&", "&;", "&amp", "a & b", "&#;", "&#x;", "&# 65;", "&&amp;"] {
            let expected = text.replacen("&amp;", "&", 1);
            assert_eq!(decoder.decode(text), expected, "input {text:?}");
        }
    }

    #[test]
    fn test_long_reference_is_not_scanned() {
        let decoder = decoder();
        let text = alloc::format!("&{};", "a".repeat(MAX_REFERENCE_LEN + 1));
        assert_eq!(decoder.decode(&text), text);
    }

    #[test]
    fn test_zero_padded_numeric_reference_is_decoded() {
        let decoder = decoder();
        let padding = "0".repeat(MAX_REFERENCE_LEN + 1);
        assert_eq!(decoder.decode(&alloc::format!("&#{padding}65;")), "A");
        assert_eq!(decoder.decode(&alloc::format!("&#x{padding}42;")), "B");
        let unterminated = alloc::format!("&#{padding}65");
        assert_eq!(decoder.decode(&unterminated), unterminated);
    }

    #[test]
    fn test_multibyte_text_around_references() {
        assert_eq!(decoder().decode("żółw &lt; ĝ&#x1F600;"), "żółw < ĝ😀");
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let bad_name = EntityDecoder::new(vec![EntityEntry {
            name: "a b".to_string(),
            code_point: 32,
        }]);
        assert_eq!(
            bad_name.unwrap_err(),
            Error::InvalidEntityName("a b".to_string())
        );

        let surrogate = EntityDecoder::new(vec![EntityEntry {
            name: "half".to_string(),
            code_point: 0xD800,
        }]);
        assert!(matches!(
            surrogate,
            Err(Error::InvalidCodePoint {
                code_point: 0xD800,
                ..
            })
        ));

        let duplicate = EntityDecoder::new(vec![
            EntityEntry {
                name: "amp".to_string(),
                code_point: 38,
            },
            EntityEntry {
                name: "amp".to_string(),
                code_point: 38,
            },
        ]);
        assert_eq!(
            duplicate.unwrap_err(),
            Error::DuplicateEntity("amp".to_string())
        );
    }
}
