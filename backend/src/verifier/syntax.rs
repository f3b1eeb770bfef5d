// src/verifier/syntax.rs

//! Line-oriented checks for common beginner Java mistakes.
//! This is a lint, not a parser; braces inside strings and comments count.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::verification::SyntaxReport;

/// `if` at the start of a line, optionally as `} else if`.
static IF_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\}\s*)?(else\s+)?if\b").expect("valid if-line pattern"));

/// A single `=` that is not part of `==`, `!=`, `<=` or `>=`.
static LONE_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^=!<>])=($|[^=])").expect("valid assignment pattern")
});

/// Line prefixes that never need a trailing semicolon.
const BLOCK_PREFIXES: [&str; 9] = [
    "//",
    "/*",
    "*",
    "@",
    "import",
    "package",
    "public class",
    "for",
    "while",
];

pub fn check_syntax(code: &str) -> SyntaxReport {
    let mut errors = Vec::new();
    let lines: Vec<&str> = code.lines().map(str::trim).collect();

    check_braces(code, &mut errors);

    for (index, line) in lines.iter().enumerate() {
        if needs_semicolon(line) && !line.ends_with(';') {
            errors.push(format!(
                "Posible error en línea {}: Falta punto y coma ';' al final de la instrucción",
                index + 1
            ));
        }
    }

    for (index, line) in lines.iter().enumerate() {
        if !IF_LINE.is_match(line) {
            continue;
        }
        if LONE_ASSIGNMENT.is_match(line) {
            errors.push(format!(
                "Posible error en línea {}: Usando asignación '=' en lugar de comparación '==' en una condición if",
                index + 1
            ));
        }
        if !line.contains('(') || !line.contains(')') {
            errors.push(format!(
                "Error en línea {}: Faltan paréntesis en la condición if",
                index + 1
            ));
        }
    }

    SyntaxReport {
        valid: errors.is_empty(),
        errors,
    }
}

fn check_braces(code: &str, errors: &mut Vec<String>) {
    let mut depth: i64 = 0;
    for c in code.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    errors.push(
                        "Error de sintaxis: Hay una llave de cierre '}' sin su correspondiente llave de apertura '{'"
                            .to_string(),
                    );
                    return;
                }
            }
            _ => {}
        }
    }
    if depth > 0 {
        errors.push(format!(
            "Error de sintaxis: Faltan {} llaves de cierre '}}'",
            depth
        ));
    }
}

fn needs_semicolon(line: &str) -> bool {
    if line.is_empty()
        || line.ends_with('{')
        || line.ends_with('}')
        || line.ends_with(':')
        || line.ends_with("*/")
        || line.starts_with("else")
        || IF_LINE.is_match(line)
    {
        return false;
    }
    !BLOCK_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}
