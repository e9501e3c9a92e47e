//! NULL-evaluating expressions and one-row dummy tables used by the heuristic
//! dialect check.

use crate::dialect::Dialect;

/// `(dialect, NULL-evaluating expression, dummy FROM clause)`.
pub(crate) const PROBES: &[(Dialect, Option<&str>, Option<&str>)] = &[
    (Dialect::MsSql, Some("DIFFERENCE(NULL,NULL)"), None),
    (Dialect::MySql, Some("QUARTER(NULL XOR NULL)"), None),
    (Dialect::PostgreSql, Some("QUOTE_IDENT(NULL)"), None),
    (Dialect::Oracle, Some("INSTR2(NULL,NULL)"), Some(" FROM DUAL")),
    (Dialect::Sqlite, Some("UNLIKELY(NULL)"), None),
    (
        Dialect::Access,
        Some("CVAR(NULL)"),
        Some(" FROM MSysAccessObjects"),
    ),
    (Dialect::Firebird, None, Some(" FROM RDB$DATABASE")),
    (Dialect::MaxDb, Some("ALPHA(NULL)"), Some(" FROM VERSIONS")),
    (Dialect::Sybase, None, None),
    (Dialect::Db2, None, Some(" FROM SYSIBM.SYSDUMMY1")),
    (
        Dialect::HsqlDb,
        None,
        Some(" FROM INFORMATION_SCHEMA.SYSTEM_USERS"),
    ),
    (Dialect::H2, Some("STRINGTOUTF8(NULL)"), None),
    (Dialect::Informix, None, Some(" FROM SYSMASTER:SYSDUAL")),
    (Dialect::MonetDb, Some("CODE(NULL)"), None),
    (
        Dialect::Derby,
        Some("NULLIF(USER,SESSION_USER)"),
        Some(" FROM SYSIBM.SYSDUMMY1"),
    ),
    (Dialect::Vertica, Some("BITSTRING_TO_BINARY(NULL)"), None),
    (Dialect::Mckoi, Some("TONUMBER(NULL)"), None),
    (Dialect::Presto, Some("FROM_HEX(NULL)"), None),
    (Dialect::Altibase, Some("TDESENCRYPT(NULL,NULL)"), None),
    (
        Dialect::MimerSql,
        Some("ASCII_CHAR(256)"),
        Some(" FROM SYSTEM.ONEROW"),
    ),
    (Dialect::ClickHouse, Some("halfMD5(NULL) IS NULL"), None),
    // NULL~NULL is also accepted by H2 and Ignite.
    (Dialect::CrateDb, Some("MD5(NULL~NULL)"), None),
    (Dialect::Cubrid, Some("(NULL SETEQ NULL)"), None),
    (Dialect::Cache, Some("%SQLUPPER NULL"), None),
    (Dialect::ExtremeDb, Some("NULLIFZERO(hashcode(NULL))"), None),
    (
        Dialect::FrontBase,
        None,
        Some(" FROM INFORMATION_SCHEMA.IO_STATISTICS"),
    ),
    (
        Dialect::Raima,
        Some("IF(ROWNUMBER()>0,CONVERT(NULL,TINYINT),NULL))"),
        None,
    ),
    (Dialect::Virtuoso, Some("__MAX_NOTNULL(NULL)"), None),
];
