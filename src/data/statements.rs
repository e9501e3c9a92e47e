//! Statement markers. Category order is precedence order.

use crate::classifier::StatementCategory;

pub(crate) const STATEMENTS: &[(StatementCategory, &[&str])] = &[
    (
        StatementCategory::Select,
        &[
            "select ",
            "show ",
            " top ",
            " distinct ",
            " from ",
            " from dual",
            " where ",
            " group by ",
            " order by ",
            " having ",
            " limit ",
            " offset ",
            " union all ",
            " rownum as ",
            "(case ",
        ],
    ),
    (
        StatementCategory::Definition,
        &["create ", "declare ", "drop ", "truncate ", "alter "],
    ),
    (
        StatementCategory::Manipulation,
        &["bulk ", "insert ", "update ", "delete ", "merge ", "load "],
    ),
    (StatementCategory::Control, &["grant ", "revoke "]),
    (
        StatementCategory::Execution,
        &["exec ", "execute ", "values ", "call "],
    ),
    (
        StatementCategory::Transaction,
        &[
            "start transaction ",
            "begin work ",
            "begin transaction ",
            "commit ",
            "rollback ",
        ],
    ),
    (StatementCategory::Administration, &["set "]),
];
