//! Integration tests for type and privilege code decoding.

use dialect_registry::{Code, Decoded, Dialect, Registry, RegistryData};

fn registry() -> Registry {
    Registry::builtin().expect("built-in tables are consistent")
}

// =============================================================================
// Type codes
// =============================================================================

#[test]
fn test_every_declared_type_decodes() {
    let registry = registry();
    for table in RegistryData::builtin().types {
        for entry in &table.codes {
            assert_eq!(
                registry.codes().decode_type(table.dialect, entry.code),
                Some(entry.name.as_str()),
                "{} code {}",
                table.dialect,
                entry.code
            );
        }
    }
}

#[test]
fn test_type_codes_do_not_leak_across_dialects() {
    let codes = registry();
    let codes = codes.codes();
    assert_eq!(codes.decode_type(Dialect::Firebird, 7), Some("SMALLINT"));
    assert!(
        codes
            .decode_type(Dialect::Sybase, 7)
            .is_some_and(|name| name.eq_ignore_ascii_case("INT"))
    );
    assert_eq!(codes.decode_type(Dialect::Informix, 7), Some("DATE"));
    assert_eq!(codes.decode_type(Dialect::Altibase, 7), Some("REAL"));

    // 261 is only declared for Firebird.
    assert_eq!(codes.decode_type(Dialect::Firebird, 261), Some("BLOB"));
    assert_eq!(codes.decode_type(Dialect::Sybase, 261), None);
    assert_eq!(codes.decode_type(Dialect::MySql, 261), None);
}

#[test]
fn test_negative_type_codes() {
    let registry = registry();
    assert_eq!(registry.codes().decode_type(Dialect::Altibase, -100), Some("VARBIT"));
    assert_eq!(registry.codes().decode_type(Dialect::Altibase, -5), Some("BIGINT"));
}

#[test]
fn test_unknown_type_renders_raw_code() {
    let registry = registry();
    let decoded = registry.codes().type_or_raw(Dialect::Informix, 4119);
    assert_eq!(decoded, Decoded::Unknown(Code::Int(4119)));
    assert_eq!(decoded.to_string(), "4119");
    assert_eq!(
        registry.codes().type_or_raw(Dialect::Informix, 4118).to_string(),
        "ROW (named)"
    );
}

// =============================================================================
// Privilege codes
// =============================================================================

#[test]
fn test_mysql_privileges_follow_table_order() {
    let registry = registry();
    let expected = ["select_priv", "create_priv", "create_user_priv"];
    for input in [
        [1, 5, 26],
        [26, 1, 5],
        [5, 26, 1],
        [26, 5, 1],
        [1, 26, 5],
        [5, 1, 26],
    ] {
        assert_eq!(
            registry.codes().decode_privileges(Dialect::MySql, input),
            expected,
            "input {input:?}"
        );
    }
}

#[test]
fn test_privilege_sets_skip_unknown_and_repeated_codes() {
    let registry = registry();
    assert_eq!(
        registry
            .codes()
            .decode_privileges(Dialect::MySql, [0, 2, 2, 27, 2, -1]),
        ["insert_priv"]
    );
    assert!(
        registry
            .codes()
            .decode_privileges(Dialect::MySql, Vec::<i64>::new())
            .is_empty()
    );
}

#[test]
fn test_character_privileges() {
    let registry = registry();
    let codes = registry.codes();
    assert_eq!(codes.decode_privilege(Dialect::Firebird, 'S'), Some("SELECT"));
    assert_eq!(
        codes.decode_privilege(Dialect::Informix, 'D'),
        Some("DBA (all privileges)")
    );
    // Character codes are case-sensitive and never match integers.
    assert_eq!(codes.decode_privilege(Dialect::Firebird, 's'), None);
    assert_eq!(codes.decode_privilege(Dialect::Firebird, 83), None);
    assert_eq!(
        codes.decode_privileges(Dialect::Firebird, ['U', 'S', 'A']),
        ["SELECT", "UPDATE", "ALL"]
    );
}

#[test]
fn test_privileges_from_raw_catalog_values() {
    let registry = registry();
    let raw = ["8", " 1", "7", "bogus"];
    let codes: Vec<Code> = raw.iter().filter_map(|value| Code::from_raw(value)).collect();
    assert_eq!(
        registry.codes().decode_privileges(Dialect::Db2, codes),
        ["CONTROLAUTH", "SELECTAUTH", "UPDATEAUTH"]
    );
}

#[test]
fn test_privilege_codes_do_not_leak_across_dialects() {
    let registry = registry();
    let codes = registry.codes();
    assert_eq!(codes.decode_privilege(Dialect::PostgreSql, 1), Some("createdb"));
    assert_eq!(codes.decode_privilege(Dialect::Db2, 1), Some("CONTROLAUTH"));
    assert_eq!(codes.decode_privilege(Dialect::PostgreSql, 4), None);
    assert_eq!(codes.decode_privilege(Dialect::Oracle, 1), None);
    assert!(codes.decode_privileges(Dialect::Oracle, [1, 2, 3]).is_empty());
    assert_eq!(
        codes.privilege_or_raw(Dialect::Informix, 'Z').to_string(),
        "Z"
    );
}
