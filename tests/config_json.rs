//! Integration tests for loading registry tables from JSON.

#![cfg(feature = "serde")]

use dialect_registry::{
    Code, Dialect, Error, Registry, RegistryData, StatementCategory, TableKind,
};

#[test]
fn test_builtin_roundtrips_through_json() {
    let data = RegistryData::builtin();
    let json = data.to_json().expect("serializable");
    let reparsed = RegistryData::from_json(&json).expect("parsable");
    assert_eq!(reparsed, data);
    Registry::from_data(reparsed).expect("still valid");
}

#[test]
fn test_json_representation() {
    let json = RegistryData::builtin().to_json().unwrap();
    assert!(json.contains(r#""dialect": "Microsoft SQL Server""#));
    assert!(json.contains(r#""category": "SQL SELECT statement""#));
    assert!(json.contains(r#""code": "S""#));
    assert!(json.contains(r#""code": -100"#));
}

#[test]
fn test_minimal_json_config() {
    let mut data = RegistryData::from_json(
        r#"{
            "aliases": [{"dialect": "MySQL", "aliases": ["mysql", "my"]}],
            "privileges": [{"dialect": "Firebird", "codes": [
                {"code": "S", "name": "SELECT"},
                {"code": "I", "name": "INSERT"}
            ]}],
            "probes": [{"dialect": "Oracle", "dummy_from": " FROM DUAL"}],
            "connectors": [{"dialect": "H2"}]
        }"#,
    )
    .unwrap();
    data.statements = RegistryData::builtin().statements;
    let registry = Registry::from_data(data).unwrap();

    assert_eq!(registry.resolve("MY"), Some(Dialect::MySql));
    assert_eq!(registry.resolve("postgres"), None);
    assert_eq!(
        registry.codes().decode_privilege(Dialect::Firebird, Code::Char('I')),
        Some("INSERT")
    );
    assert_eq!(registry.probes().null_probe(Dialect::Oracle), None);
    assert_eq!(registry.probes().dummy_from(Dialect::Oracle), Some(" FROM DUAL"));
    assert_eq!(registry.connector(Dialect::H2).unwrap().library, None);
    assert_eq!(
        registry.classify("commit work"),
        Some(StatementCategory::Transaction)
    );
}

#[test]
fn test_unknown_dialect_name_is_invalid_config() {
    let result = RegistryData::from_json(r#"{"aliases": [{"dialect": "dBase", "aliases": ["dbase"]}]}"#);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_multi_character_code_is_invalid_config() {
    let result = RegistryData::from_json(
        r#"{"types": [{"dialect": "Sybase", "codes": [{"code": "SU", "name": "x"}]}]}"#,
    );
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_overlapping_aliases_fail_at_load() {
    let mut data = RegistryData::builtin();
    data.aliases
        .iter_mut()
        .find(|entry| entry.dialect == Dialect::CrateDb)
        .unwrap()
        .aliases
        .push("Postgres".to_string());
    assert_eq!(
        Registry::from_data(data).unwrap_err(),
        Error::OverlappingAlias {
            alias: "postgres".to_string(),
            first: Dialect::PostgreSql,
            second: Dialect::CrateDb,
        }
    );
}

#[test]
fn test_duplicate_type_code_fails_at_load() {
    let mut data = RegistryData::from_json(
        r#"{"types": [{"dialect": "Firebird", "codes": [
            {"code": 7, "name": "SMALLINT"},
            {"code": 7, "name": "SHORT"}
        ]}]}"#,
    )
    .unwrap();
    data.statements = RegistryData::builtin().statements;
    assert_eq!(
        Registry::from_data(data).unwrap_err(),
        Error::DuplicateCode {
            table: TableKind::Types,
            dialect: Dialect::Firebird,
            code: Code::Int(7),
        }
    );
}
