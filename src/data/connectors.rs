//! Client libraries able to talk to each dialect directly.

use crate::dialect::Dialect;

const PYMSSQL: (&str, &str) = ("python-pymssql", "https://github.com/pymssql/pymssql");
const PSYCOPG2: (&str, &str) = ("python-psycopg2", "https://github.com/psycopg/psycopg2");
const IBM_DB: (&str, &str) = ("python ibm-db", "https://github.com/ibmdb/python-ibmdb");
const JAYDEBEAPI: (&str, &str) = (
    "python jaydebeapi & python-jpype",
    "https://pypi.python.org/pypi/JayDeBeApi/ & https://github.com/jpype-project/jpype",
);

/// `(dialect, (library, project url), SQLAlchemy dialect)`.
pub(crate) const CONNECTORS: &[(Dialect, Option<(&str, &str)>, Option<&str>)] = &[
    (Dialect::MsSql, Some(PYMSSQL), Some("mssql+pymssql")),
    (
        Dialect::MySql,
        Some(("python-pymysql", "https://github.com/PyMySQL/PyMySQL")),
        Some("mysql"),
    ),
    (Dialect::PostgreSql, Some(PSYCOPG2), Some("postgresql")),
    (
        Dialect::Oracle,
        Some((
            "python cx_Oracle",
            "https://oracle.github.io/python-cx_Oracle/",
        )),
        Some("oracle"),
    ),
    (
        Dialect::Sqlite,
        Some((
            "python-sqlite",
            "https://docs.python.org/3/library/sqlite3.html",
        )),
        Some("sqlite"),
    ),
    (
        Dialect::Access,
        Some(("python-pyodbc", "https://github.com/mkleehammer/pyodbc")),
        Some("access"),
    ),
    (
        Dialect::Firebird,
        Some(("python-kinterbasdb", "http://kinterbasdb.sourceforge.net/")),
        Some("firebird"),
    ),
    (Dialect::MaxDb, None, Some("maxdb")),
    (Dialect::Sybase, Some(PYMSSQL), Some("sybase")),
    (Dialect::Db2, Some(IBM_DB), Some("ibm_db_sa")),
    (Dialect::HsqlDb, Some(JAYDEBEAPI), None),
    (Dialect::H2, None, None),
    (Dialect::Informix, Some(IBM_DB), Some("ibm_db_sa")),
    (
        Dialect::MonetDb,
        Some(("pymonetdb", "https://github.com/gijzelaerr/pymonetdb")),
        Some("monetdb"),
    ),
    (
        Dialect::Derby,
        Some(("pydrda", "https://github.com/nakagami/pydrda/")),
        None,
    ),
    (
        Dialect::Vertica,
        Some((
            "vertica-python",
            "https://github.com/vertica/vertica-python",
        )),
        Some("vertica+vertica_python"),
    ),
    (Dialect::Mckoi, None, None),
    (
        Dialect::Presto,
        Some((
            "presto-python-client",
            "https://github.com/prestodb/presto-python-client",
        )),
        None,
    ),
    (Dialect::Altibase, None, None),
    (
        Dialect::MimerSql,
        Some(("mimerpy", "https://github.com/mimersql/MimerPy")),
        None,
    ),
    (
        Dialect::ClickHouse,
        Some((
            "clickhouse_connect",
            "https://github.com/ClickHouse/clickhouse-connect",
        )),
        None,
    ),
    (Dialect::CrateDb, Some(PSYCOPG2), Some("postgresql")),
    (
        Dialect::Cubrid,
        Some(("CUBRID-Python", "https://github.com/CUBRID/cubrid-python")),
        None,
    ),
    (Dialect::Cache, Some(JAYDEBEAPI), None),
    (Dialect::ExtremeDb, None, None),
    (Dialect::FrontBase, None, None),
    (Dialect::Raima, None, None),
    (Dialect::Virtuoso, None, None),
];
