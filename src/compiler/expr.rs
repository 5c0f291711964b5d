use crate::{
    ast::types::Type,
    type_checker::typed_ast::{TypedExpr, TypedExprKind},
};

/// Renders an expression as C.
///
/// Unary and binary operations are always parenthesized, so the C output
/// never depends on C's own precedence rules.
pub fn gen_expression(expression: &TypedExpr) -> String {
    match &expression.kind {
        TypedExprKind::Number(value) => value.to_string(),
        TypedExprKind::String(value) => format!("\"{}\"", escape_string(value)),
        TypedExprKind::Bool(value) => String::from(if *value { "1" } else { "0" }),
        TypedExprKind::Symbol(name) => name.clone(),
        TypedExprKind::Prefix { operator, operand } => {
            format!("({}{})", operator.symbol(), gen_expression(operand))
        }
        TypedExprKind::Binary {
            left,
            operator,
            right,
        } => format!(
            "({} {} {})",
            gen_expression(left),
            operator.symbol(),
            gen_expression(right)
        ),
        TypedExprKind::Call { callee, arguments } => format!(
            "{}({})",
            callee,
            arguments
                .iter()
                .map(gen_expression)
                .collect::<Vec<String>>()
                .join(", ")
        ),
    }
}

/// The `printf` conversion used to print a value of the given type.
pub fn format_specifier(ty: Type) -> &'static str {
    match ty {
        Type::String => "%s",
        Type::Float => "%f",
        Type::Bool | Type::Int => "%d",
        Type::Void => "%d",
    }
}

/// Builds the single `printf` call for a print statement: one specifier per
/// value with no separator, then a newline.
pub fn gen_print(values: &[TypedExpr]) -> String {
    let format: String = values.iter().map(|value| format_specifier(value.ty)).collect();
    let arguments = values
        .iter()
        .map(gen_expression)
        .collect::<Vec<String>>()
        .join(", ");

    format!("printf(\"{}\\n\", {});", format, arguments)
}

/// Escapes a byte string for use inside a C string literal.
///
/// Bytes outside printable ASCII become three-digit octal escapes, so the
/// literal holds exactly the same bytes whatever the encoding of the C file.
pub fn escape_string(value: &[u8]) -> String {
    let mut escaped = String::with_capacity(value.len());

    for &byte in value {
        match byte {
            b'\\' => escaped.push_str("\\\\"),
            b'"' => escaped.push_str("\\\""),
            b'\n' => escaped.push_str("\\n"),
            b'\t' => escaped.push_str("\\t"),
            b'\r' => escaped.push_str("\\r"),
            b' '..=b'~' => escaped.push(byte as char),
            _ => escaped.push_str(&format!("\\{:03o}", byte)),
        }
    }

    escaped
}
