//! Column type codes as reported by each vendor's system catalog.

use crate::dialect::Dialect;

const FIREBIRD: &[(i64, &str)] = &[
    (261, "BLOB"),
    (14, "CHAR"),
    (40, "CSTRING"),
    (11, "D_FLOAT"),
    (27, "DOUBLE"),
    (10, "FLOAT"),
    (16, "INT64"),
    (8, "INTEGER"),
    (9, "QUAD"),
    (7, "SMALLINT"),
    (12, "DATE"),
    (13, "TIME"),
    (35, "TIMESTAMP"),
    (37, "VARCHAR"),
];

const INFORMIX: &[(i64, &str)] = &[
    (0, "CHAR"),
    (1, "SMALLINT"),
    (2, "INTEGER"),
    (3, "FLOAT"),
    (4, "SMALLFLOAT"),
    (5, "DECIMAL"),
    (6, "SERIAL"),
    (7, "DATE"),
    (8, "MONEY"),
    (9, "NULL"),
    (10, "DATETIME"),
    (11, "BYTE"),
    (12, "TEXT"),
    (13, "VARCHAR"),
    (14, "INTERVAL"),
    (15, "NCHAR"),
    (16, "NVARCHAR"),
    (17, "INT8"),
    (18, "SERIAL8"),
    (19, "SET"),
    (20, "MULTISET"),
    (21, "LIST"),
    (22, "ROW (unnamed)"),
    (23, "COLLECTION"),
    (40, "Variable-length opaque type"),
    (41, "Fixed-length opaque type"),
    (43, "LVARCHAR"),
    (45, "BOOLEAN"),
    (52, "BIGINT"),
    (53, "BIGSERIAL"),
    (2061, "IDSSECURITYLABEL"),
    (4118, "ROW (named)"),
];

const SYBASE: &[(i64, &str)] = &[
    (14, "floatn"),
    (8, "float"),
    (15, "datetimn"),
    (12, "datetime"),
    (23, "real"),
    (28, "numericn"),
    (10, "numeric"),
    (27, "decimaln"),
    (26, "decimal"),
    (17, "moneyn"),
    (11, "money"),
    (21, "smallmoney"),
    (22, "smalldatetime"),
    (13, "intn"),
    (7, "int"),
    (6, "smallint"),
    (5, "tinyint"),
    (16, "bit"),
    (2, "varchar"),
    (18, "sysname"),
    (25, "nvarchar"),
    (1, "char"),
    (24, "nchar"),
    (4, "varbinary"),
    (80, "timestamp"),
    (3, "binary"),
    (19, "text"),
    (20, "image"),
];

const ALTIBASE: &[(i64, &str)] = &[
    (1, "CHAR"),
    (12, "VARCHAR"),
    (-8, "NCHAR"),
    (-9, "NVARCHAR"),
    (2, "NUMERIC"),
    (6, "FLOAT"),
    (8, "DOUBLE"),
    (7, "REAL"),
    (-5, "BIGINT"),
    (4, "INTEGER"),
    (5, "SMALLINT"),
    (9, "DATE"),
    (30, "BLOB"),
    (40, "CLOB"),
    (20001, "BYTE"),
    (20002, "NIBBLE"),
    (-7, "BIT"),
    (-100, "VARBIT"),
    (10003, "GEOMETRY"),
];

pub(crate) const TYPES: &[(Dialect, &[(i64, &str)])] = &[
    (Dialect::Firebird, FIREBIRD),
    (Dialect::Informix, INFORMIX),
    (Dialect::Sybase, SYBASE),
    (Dialect::Altibase, ALTIBASE),
];
