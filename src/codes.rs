//! Vendor type and privilege codes.
//!
//! Codes are scoped to one dialect: type code `7` is `SMALLINT` in a Firebird
//! catalog and `int` in a Sybase one. Some vendors use integers, others single
//! characters, and [`Code`] keeps the two apart.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::{HashMap, HashSet};
use indexmap::IndexMap as IndexMapRaw;

use crate::config::CodeTableEntry;
use crate::dialect::Dialect;
use crate::errors::{Error, TableKind};

/// `IndexMap` alias using hashbrown's default hasher for `no_std` compatibility.
type IndexMap<K, V> = IndexMapRaw<K, V, hashbrown::DefaultHashBuilder>;

/// A vendor-specific type or privilege code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Code {
    /// A numeric code, e.g. a Firebird `RDB$FIELD_TYPE`.
    Int(i64),
    /// A single-character code, e.g. a Firebird `RDB$PRIVILEGE`.
    Char(char),
}

impl Code {
    /// Interpret a raw catalog value as a code.
    ///
    /// Surrounding whitespace is ignored. Integers become [`Code::Int`], a
    /// single remaining character becomes [`Code::Char`], anything else is
    /// `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use dialect_registry::Code;
    ///
    /// assert_eq!(Code::from_raw(" 26 "), Some(Code::Int(26)));
    /// assert_eq!(Code::from_raw("S"), Some(Code::Char('S')));
    /// assert_eq!(Code::from_raw("SU"), None);
    /// ```
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Code> {
        let raw = raw.trim();
        if let Ok(value) = raw.parse::<i64>() {
            return Some(Code::Int(value));
        }
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Code::Char(c)),
            _ => None,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Int(value) => write!(f, "{value}"),
            Code::Char(c) => write!(f, "{c}"),
        }
    }
}

impl From<i64> for Code {
    fn from(value: i64) -> Self {
        Code::Int(value)
    }
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        Code::Int(i64::from(value))
    }
}

impl From<u32> for Code {
    fn from(value: u32) -> Self {
        Code::Int(i64::from(value))
    }
}

impl From<char> for Code {
    fn from(value: char) -> Self {
        Code::Char(value)
    }
}

/// The result of decoding a code, with the raw code kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<'a> {
    /// The code is declared in the dialect's table.
    Known(&'a str),
    /// The code is not declared; rendered as the raw value.
    Unknown(Code),
}

impl<'a> Decoded<'a> {
    /// The canonical name, if the code was known.
    #[must_use]
    pub fn name(self) -> Option<&'a str> {
        match self {
            Decoded::Known(name) => Some(name),
            Decoded::Unknown(_) => None,
        }
    }

    /// Whether the code was found.
    #[must_use]
    pub fn is_known(self) -> bool {
        matches!(self, Decoded::Known(_))
    }
}

impl fmt::Display for Decoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoded::Known(name) => f.write_str(name),
            Decoded::Unknown(code) => write!(f, "{code}"),
        }
    }
}

/// One dialect's code table, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    entries: IndexMap<Code, String>,
}

impl CodeTable {
    fn try_from_entry(table: TableKind, entry: CodeTableEntry) -> Result<Self, Error> {
        let dialect = entry.dialect;
        let mut entries = IndexMap::default();
        for code_entry in entry.codes {
            let code = code_entry.code;
            if code_entry.name.trim().is_empty() {
                return Err(Error::EmptyCodeName {
                    table,
                    dialect,
                    code,
                });
            }
            if entries.insert(code, code_entry.name).is_some() {
                return Err(Error::DuplicateCode {
                    table,
                    dialect,
                    code,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Name declared for `code`.
    #[must_use]
    pub fn get(&self, code: Code) -> Option<&str> {
        self.entries.get(&code).map(String::as_str)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Code, &str)> {
        self.entries.iter().map(|(code, name)| (*code, name.as_str()))
    }

    /// Number of declared codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table declares no codes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn load_tables(
    table: TableKind,
    entries: Vec<CodeTableEntry>,
) -> Result<HashMap<Dialect, CodeTable>, Error> {
    let mut tables = HashMap::with_capacity(entries.len());
    for entry in entries {
        let dialect = entry.dialect;
        if tables.contains_key(&dialect) {
            return Err(Error::DuplicateDialectEntry { table, dialect });
        }
        tables.insert(dialect, CodeTable::try_from_entry(table, entry)?);
    }
    Ok(tables)
}

/// Translates per-dialect type and privilege codes into canonical names.
#[derive(Debug, Clone, Default)]
pub struct CodeDecoder {
    types: HashMap<Dialect, CodeTable>,
    privileges: HashMap<Dialect, CodeTable>,
}

impl CodeDecoder {
    /// Build a decoder, rejecting duplicate codes within a dialect's table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateDialectEntry`], [`Error::DuplicateCode`] or
    /// [`Error::EmptyCodeName`] on inconsistent tables.
    pub fn new(types: Vec<CodeTableEntry>, privileges: Vec<CodeTableEntry>) -> Result<Self, Error> {
        Ok(Self {
            types: load_tables(TableKind::Types, types)?,
            privileges: load_tables(TableKind::Privileges, privileges)?,
        })
    }

    /// The type table of `dialect`, if it has one.
    #[must_use]
    pub fn type_table(&self, dialect: Dialect) -> Option<&CodeTable> {
        self.types.get(&dialect)
    }

    /// The privilege table of `dialect`, if it has one.
    #[must_use]
    pub fn privilege_table(&self, dialect: Dialect) -> Option<&CodeTable> {
        self.privileges.get(&dialect)
    }

    /// Canonical column type name for `code` in `dialect`.
    #[must_use]
    pub fn decode_type(&self, dialect: Dialect, code: impl Into<Code>) -> Option<&str> {
        self.type_table(dialect)?.get(code.into())
    }

    /// Canonical privilege name for `code` in `dialect`.
    #[must_use]
    pub fn decode_privilege(&self, dialect: Dialect, code: impl Into<Code>) -> Option<&str> {
        self.privilege_table(dialect)?.get(code.into())
    }

    /// Like [`decode_type`](Self::decode_type), falling back to the raw code.
    #[must_use]
    pub fn type_or_raw(&self, dialect: Dialect, code: impl Into<Code>) -> Decoded<'_> {
        let code = code.into();
        self.decode_type(dialect, code)
            .map_or(Decoded::Unknown(code), Decoded::Known)
    }

    /// Like [`decode_privilege`](Self::decode_privilege), falling back to the
    /// raw code.
    #[must_use]
    pub fn privilege_or_raw(&self, dialect: Dialect, code: impl Into<Code>) -> Decoded<'_> {
        let code = code.into();
        self.decode_privilege(dialect, code)
            .map_or(Decoded::Unknown(code), Decoded::Known)
    }

    /// Decode a set of privilege codes.
    ///
    /// Names come back in the order the privilege table declares them, not
    /// in input order. Unknown codes are skipped and repeated codes are
    /// reported once.
    ///
    /// # Example
    ///
    /// ```
    /// use dialect_registry::{Dialect, Registry};
    ///
    /// let registry = Registry::builtin().unwrap();
    /// assert_eq!(
    ///     registry.codes().decode_privileges(Dialect::MySql, [26, 1, 5, 999]),
    ///     ["select_priv", "create_priv", "create_user_priv"]
    /// );
    /// ```
    #[must_use]
    pub fn decode_privileges<I>(&self, dialect: Dialect, codes: I) -> Vec<&str>
    where
        I: IntoIterator,
        I::Item: Into<Code>,
    {
        let Some(table) = self.privilege_table(dialect) else {
            return Vec::new();
        };
        let wanted: HashSet<Code> = codes.into_iter().map(Into::into).collect();
        table
            .entries()
            .filter(|(code, _)| wanted.contains(code))
            .map(|(_, name)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodeEntry;
    use alloc::string::ToString;
    use alloc::vec;

    fn entry(dialect: Dialect, codes: &[(Code, &str)]) -> CodeTableEntry {
        CodeTableEntry {
            dialect,
            codes: codes
                .iter()
                .map(|(code, name)| CodeEntry {
                    code: *code,
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(Code::from_raw("-100"), Some(Code::Int(-100)));
        assert_eq!(Code::from_raw(" D"), Some(Code::Char('D')));
        assert_eq!(Code::from_raw(""), None);
        assert_eq!(Code::from_raw("   "), None);
    }

    #[test]
    fn test_int_and_char_codes_are_distinct() {
        assert_ne!(Code::Int(1), Code::Char('1'));
        assert_eq!(Code::Int(1).to_string(), Code::Char('1').to_string());
    }

    #[test]
    fn test_duplicate_code_is_rejected() {
        let types = vec![entry(
            Dialect::Sybase,
            &[(Code::Int(7), "int"), (Code::Int(7), "integer")],
        )];
        assert_eq!(
            CodeDecoder::new(types, Vec::new()).unwrap_err(),
            Error::DuplicateCode {
                table: TableKind::Types,
                dialect: Dialect::Sybase,
                code: Code::Int(7),
            }
        );
    }

    #[test]
    fn test_duplicate_dialect_is_rejected() {
        let privileges = vec![
            entry(Dialect::Db2, &[(Code::Int(1), "CONTROLAUTH")]),
            entry(Dialect::Db2, &[(Code::Int(2), "ALTERAUTH")]),
        ];
        assert_eq!(
            CodeDecoder::new(Vec::new(), privileges).unwrap_err(),
            Error::DuplicateDialectEntry {
                table: TableKind::Privileges,
                dialect: Dialect::Db2,
            }
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let types = vec![entry(Dialect::Firebird, &[(Code::Int(7), " ")])];
        assert!(matches!(
            CodeDecoder::new(types, Vec::new()),
            Err(Error::EmptyCodeName { .. })
        ));
    }

    #[test]
    fn test_same_code_in_two_dialects_is_fine() {
        let types = vec![
            entry(Dialect::Firebird, &[(Code::Int(7), "SMALLINT")]),
            entry(Dialect::Sybase, &[(Code::Int(7), "int")]),
        ];
        let decoder = CodeDecoder::new(types, Vec::new()).unwrap();
        assert_eq!(decoder.decode_type(Dialect::Firebird, 7), Some("SMALLINT"));
        assert_eq!(decoder.decode_type(Dialect::Sybase, 7), Some("int"));
        assert_eq!(decoder.decode_type(Dialect::Informix, 7), None);
    }

    #[test]
    fn test_decoded_display_falls_back_to_raw_code() {
        let privileges = vec![entry(Dialect::Firebird, &[(Code::Char('S'), "SELECT")])];
        let decoder = CodeDecoder::new(Vec::new(), privileges).unwrap();
        assert_eq!(
            decoder.privilege_or_raw(Dialect::Firebird, 'S').to_string(),
            "SELECT"
        );
        let unknown = decoder.privilege_or_raw(Dialect::Firebird, 'Q');
        assert!(!unknown.is_known());
        assert_eq!(unknown.name(), None);
        assert_eq!(unknown.to_string(), "Q");
    }

    #[test]
    fn test_decode_privileges_without_table_is_empty() {
        let decoder = CodeDecoder::default();
        assert!(decoder.decode_privileges(Dialect::Oracle, [1, 2]).is_empty());
    }
}
