use sqlcraft::{
    BinaryExpr, Case, CustomNode, EmitError, Emitter, EmitterConfig, Expr, Field, Function,
    Keyword, Literal, Quotes, SqlOps, Statement, ToSql, UnaryExpr,
};
use rust_decimal::Decimal;

fn emit(expr: impl Into<Expr>) -> String {
    expr.into().to_sql().unwrap()
}

fn emit_with(expr: impl Into<Expr>, config: &EmitterConfig) -> String {
    expr.into().to_sql_with(config).unwrap()
}

fn upper() -> EmitterConfig {
    EmitterConfig::default().with_case(Case::Upper)
}

fn lower() -> EmitterConfig {
    EmitterConfig::default().with_case(Case::Lower)
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_null_follows_case() {
    assert_eq!(emit(Expr::null()), "NULL");
    assert_eq!(emit_with(Expr::null(), &lower()), "null");
}

#[test]
fn test_booleans_are_tautology_and_contradiction() {
    assert_eq!(emit(true), "1=1");
    assert_eq!(emit(false), "1=0");
    // Not affected by case or space
    let config = upper().with_space("/**/");
    assert_eq!(emit_with(true, &config), "1=1");
}

#[test]
fn test_numbers() {
    assert_eq!(emit(42), "42");
    assert_eq!(emit(-7i64), "-7");
    assert_eq!(emit(1.5), "1.5");
    assert_eq!(emit(1.0), "1.0");
    assert_eq!(emit(Decimal::new(10, 1)), "1.0");
    assert_eq!(emit(Decimal::new(31415, 4)), "3.1415");
}

#[test]
fn test_string_quote_styles() {
    assert_eq!(emit("abc"), "'abc'");
    assert_eq!(
        emit_with("abc", &EmitterConfig::default().with_quotes(Quotes::Double)),
        "\"abc\""
    );
    assert_eq!(
        emit_with("abc", &EmitterConfig::default().with_quotes(Quotes::Tick)),
        "`abc`"
    );
}

#[test]
fn test_string_embedded_quotes_are_doubled() {
    assert_eq!(emit("O'Reilly"), "'O''Reilly'");
    // Only the active quote character is doubled
    assert_eq!(emit("say \"hi\""), "'say \"hi\"'");
    assert_eq!(
        emit_with("a\\'b", &EmitterConfig::default()),
        "'a\\''b'"
    );
}

// ============================================================================
// Keywords and fields
// ============================================================================

#[test]
fn test_keyword_case_modes() {
    let kw = Keyword::from("Select");
    assert_eq!(emit(kw.clone()), "Select");
    assert_eq!(emit_with(kw.clone(), &upper()), "SELECT");
    assert_eq!(emit_with(kw, &lower()), "select");
}

#[test]
fn test_compound_keyword_uses_space_token() {
    let config = EmitterConfig::default().with_space("/**/");
    assert_eq!(emit_with(Keyword::from("ORDER BY"), &config), "ORDER/**/BY");
}

#[test]
fn test_random_case_preserves_letters() {
    let config = EmitterConfig::default()
        .with_case(Case::Random)
        .with_seed(42);
    let out = emit_with(Keyword::from("information_schema"), &config);
    assert_eq!(out.to_lowercase(), "information_schema");
    assert_eq!(out, emit_with(Keyword::from("information_schema"), &config));
}

#[test]
fn test_field_chain_parent_first() {
    assert_eq!(emit(Field::new("id")), "id");
    assert_eq!(emit(Field::parse("users.id")), "users.id");
    assert_eq!(emit(Field::parse("db.users.id")), "db.users.id");
    assert_eq!(emit_with(Field::parse("db.users.id"), &upper()), "DB.USERS.ID");
}

// ============================================================================
// Lists and maps
// ============================================================================

#[test]
fn test_list_has_no_parentheses() {
    assert_eq!(emit(Expr::list([1, 2, 3])), "1,2,3");
    assert_eq!(emit(Expr::group(Expr::list([1, 2, 3]))), "(1,2,3)");
}

#[test]
fn test_map_emits_assignments_in_order() {
    let map = Expr::Map(vec![
        (Field::new("b").into(), Expr::from(2)),
        (Field::new("a").into(), Expr::from("x")),
    ]);
    assert_eq!(emit(map), "b=2,a='x'");
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_symbolic_operator_has_no_space() {
    assert_eq!(emit(BinaryExpr::new(Field::new("id"), "=", 1)), "id=1");
    assert_eq!(emit(BinaryExpr::new(Field::new("id"), "<>", 1)), "id<>1");
    assert_eq!(emit(Field::new("a") + 1), "a+1");
    assert_eq!(emit(Field::new("a") % 2), "a%2");
}

#[test]
fn test_keyword_operator_is_spaced() {
    let expr = BinaryExpr::new(Field::new("id"), "IS", 1);
    assert_eq!(emit_with(expr, &upper()), "ID IS 1");

    let expr = Field::new("name").is_not(Expr::null());
    assert_eq!(emit(expr), "name IS NOT NULL");

    let config = EmitterConfig::default().with_space("/**/");
    let expr = Field::new("a").or(Field::new("b"));
    assert_eq!(emit_with(expr, &config), "a/**/OR/**/b");
}

#[test]
fn test_unary_operators() {
    assert_eq!(emit(-Field::new("x")), "-x");
    assert_eq!(emit(Field::new("x").bit_not()), "~x");
    assert_eq!(emit(Field::new("x").negate()), "!x");
    assert_eq!(emit(Field::new("x").pos()), "+x");
    assert_eq!(emit(Field::new("x").not()), "NOT x");
    assert_eq!(emit_with(UnaryExpr::new("not", Field::new("x")), &upper()), "NOT X");
}

#[test]
fn test_in_list_and_alias() {
    assert_eq!(emit(Field::new("id").in_list([1, 2, 3])), "id IN (1,2,3)");
    assert_eq!(emit(Function::new("COUNT", [Expr::keyword("*")]).as_("n")), "COUNT(*) AS n");
}

#[test]
fn test_left_nested_boolean_expressions() {
    let expr = Expr::from(1).or(2).or(3);
    assert_eq!(emit(expr), "1 OR 2 OR 3");
}

// ============================================================================
// Functions and sub-queries
// ============================================================================

#[test]
fn test_function_arguments() {
    assert_eq!(emit(Function::new("MAX", [1, 2])), "MAX(1,2)");
    assert_eq!(emit(Function::nullary("VERSION")), "VERSION()");
    assert_eq!(
        emit_with(Function::new("concat", ["a", "b"]), &upper()),
        "CONCAT('a','b')"
    );
}

#[test]
fn test_statement_operands_are_parenthesized() {
    let sub = Statement::select(1);

    assert_eq!(emit(Field::new("id").eq(sub.clone())), "id=(SELECT 1)");
    assert_eq!(emit(Field::new("id").in_(sub.clone())), "id IN (SELECT 1)");
    assert_eq!(emit(UnaryExpr::new("EXISTS", sub.clone())), "EXISTS (SELECT 1)");
    assert_eq!(emit(Function::new("ASCII", [sub])), "ASCII((SELECT 1))");
}

// ============================================================================
// Custom nodes
// ============================================================================

#[derive(Debug)]
struct Opaque;

impl CustomNode for Opaque {
    fn node_name(&self) -> &str {
        "Opaque"
    }
}

#[derive(Debug)]
struct Raw(&'static str);

impl CustomNode for Raw {
    fn node_name(&self) -> &str {
        "Raw"
    }

    fn render(&self, _emitter: &mut Emitter) -> Option<Result<String, EmitError>> {
        Some(Ok(self.0.to_string()))
    }
}

#[test]
fn test_custom_node_without_render_fails() {
    let err = Field::new("id").eq(Expr::custom(Opaque)).to_sql().unwrap_err();
    assert_eq!(
        err,
        EmitError::UnsupportedNode {
            node: "Opaque".to_string()
        }
    );
    assert!(err.to_string().contains("Opaque"));
}

#[test]
fn test_custom_node_renders_itself() {
    let expr = Field::new("id").eq(Expr::custom(Raw("0x41")));
    assert_eq!(emit(expr), "id=0x41");
}

#[test]
fn test_literal_to_sql_directly() {
    assert_eq!(Literal::from("x").to_sql().unwrap(), "'x'");
}
