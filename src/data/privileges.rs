//! Privilege codes. Declaration order is the order in which decoded privilege
//! sets are reported.

use crate::codes::Code;
use crate::dialect::Dialect;

const MYSQL: &[(Code, &str)] = &[
    (Code::Int(1), "select_priv"),
    (Code::Int(2), "insert_priv"),
    (Code::Int(3), "update_priv"),
    (Code::Int(4), "delete_priv"),
    (Code::Int(5), "create_priv"),
    (Code::Int(6), "drop_priv"),
    (Code::Int(7), "reload_priv"),
    (Code::Int(8), "shutdown_priv"),
    (Code::Int(9), "process_priv"),
    (Code::Int(10), "file_priv"),
    (Code::Int(11), "grant_priv"),
    (Code::Int(12), "references_priv"),
    (Code::Int(13), "index_priv"),
    (Code::Int(14), "alter_priv"),
    (Code::Int(15), "show_db_priv"),
    (Code::Int(16), "super_priv"),
    (Code::Int(17), "create_tmp_table_priv"),
    (Code::Int(18), "lock_tables_priv"),
    (Code::Int(19), "execute_priv"),
    (Code::Int(20), "repl_slave_priv"),
    (Code::Int(21), "repl_client_priv"),
    (Code::Int(22), "create_view_priv"),
    (Code::Int(23), "show_view_priv"),
    (Code::Int(24), "create_routine_priv"),
    (Code::Int(25), "alter_routine_priv"),
    (Code::Int(26), "create_user_priv"),
];

const PGSQL: &[(Code, &str)] = &[
    (Code::Int(1), "createdb"),
    (Code::Int(2), "super"),
    (Code::Int(3), "catupd"),
];

// RDB$USER_PRIVILEGES.RDB$PRIVILEGE
const FIREBIRD: &[(Code, &str)] = &[
    (Code::Char('S'), "SELECT"),
    (Code::Char('I'), "INSERT"),
    (Code::Char('U'), "UPDATE"),
    (Code::Char('D'), "DELETE"),
    (Code::Char('R'), "REFERENCE"),
    (Code::Char('X'), "EXECUTE"),
    (Code::Char('A'), "ALL"),
    (Code::Char('M'), "MEMBER"),
    (Code::Char('T'), "DECRYPT"),
    (Code::Char('E'), "ENCRYPT"),
    (Code::Char('B'), "SUBSCRIBE"),
];

// sysusers.usertype
const INFORMIX: &[(Code, &str)] = &[
    (Code::Char('D'), "DBA (all privileges)"),
    (
        Code::Char('R'),
        "RESOURCE (create UDRs, UDTs, permanent tables and indexes)",
    ),
    (Code::Char('C'), "CONNECT (work with existing tables)"),
    (Code::Char('G'), "ROLE"),
    (Code::Char('U'), "DEFAULT (implicit connection)"),
];

const DB2: &[(Code, &str)] = &[
    (Code::Int(1), "CONTROLAUTH"),
    (Code::Int(2), "ALTERAUTH"),
    (Code::Int(3), "DELETEAUTH"),
    (Code::Int(4), "INDEXAUTH"),
    (Code::Int(5), "INSERTAUTH"),
    (Code::Int(6), "REFAUTH"),
    (Code::Int(7), "SELECTAUTH"),
    (Code::Int(8), "UPDATEAUTH"),
];

pub(crate) const PRIVILEGES: &[(Dialect, &[(Code, &str)])] = &[
    (Dialect::MySql, MYSQL),
    (Dialect::PostgreSql, PGSQL),
    (Dialect::Firebird, FIREBIRD),
    (Dialect::Informix, INFORMIX),
    (Dialect::Db2, DB2),
];
