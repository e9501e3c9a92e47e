//! Case-folded alias sets, one per dialect.

use crate::dialect::Dialect;

pub(crate) const ALIASES: &[(Dialect, &[&str])] = &[
    (
        Dialect::MsSql,
        &["microsoft sql server", "mssqlserver", "mssql", "ms"],
    ),
    (
        Dialect::MySql,
        &[
            "mysql",
            "my",
            "mariadb",
            "maria",
            "memsql",
            "tidb",
            "percona",
            "drizzle",
            "doris",
            "starrocks",
        ],
    ),
    (
        Dialect::PostgreSql,
        &[
            "postgresql",
            "postgres",
            "pgsql",
            "psql",
            "pg",
            "cockroach",
            "cockroachdb",
            "amazon redshift",
            "redshift",
            "greenplum",
            "yellowbrick",
            "enterprisedb",
            "yugabyte",
            "yugabytedb",
            "opengauss",
        ],
    ),
    (Dialect::Oracle, &["oracle", "orcl", "ora", "or"]),
    (Dialect::Sqlite, &["sqlite", "sqlite3"]),
    (
        Dialect::Access,
        &["microsoft access", "msaccess", "access", "jet"],
    ),
    (
        Dialect::Firebird,
        &["firebird", "mozilla firebird", "interbase", "ibase", "fb"],
    ),
    (Dialect::MaxDb, &["max", "maxdb", "sap maxdb", "sap db"]),
    (Dialect::Sybase, &["sybase", "sybase sql server"]),
    (Dialect::Db2, &["db2", "ibm db2", "ibmdb2"]),
    (Dialect::HsqlDb, &["hsql", "hsqldb", "hs", "hypersql"]),
    (Dialect::H2, &["h2", "ignite", "apache ignite"]),
    (
        Dialect::Informix,
        &["informix", "ibm informix", "ibminformix"],
    ),
    (Dialect::MonetDb, &["monet", "monetdb"]),
    (Dialect::Derby, &["derby", "apache derby"]),
    (Dialect::Vertica, &["vertica"]),
    (Dialect::Mckoi, &["mckoi"]),
    (Dialect::Presto, &["presto"]),
    (Dialect::Altibase, &["altibase"]),
    (Dialect::MimerSql, &["mimersql", "mimer"]),
    (Dialect::ClickHouse, &["clickhouse"]),
    (Dialect::CrateDb, &["cratedb", "crate"]),
    (Dialect::Cubrid, &["cubrid"]),
    (
        Dialect::Cache,
        &["intersystems cache", "cachedb", "cache", "iris"],
    ),
    (Dialect::ExtremeDb, &["extremedb", "extreme"]),
    (Dialect::FrontBase, &["frontbase"]),
    (
        Dialect::Raima,
        &[
            "raima database manager",
            "raima",
            "raimadb",
            "raimadm",
            "rdm",
            "rds",
            "velocis",
        ],
    ),
    (Dialect::Virtuoso, &["virtuoso", "openlink virtuoso"]),
];
