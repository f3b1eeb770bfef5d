// src/verifier/pattern.rs

//! Required-pattern derivation and matching.
//!
//! A reference line is "structural" when it mentions a conditional, an
//! alternate branch, or console output. Containment is a plain substring
//! test, so `calificacion` counts as mentioning `if`. Matching is likewise
//! unanchored: a pattern may be found inside an unrelated token, and
//! reordered but equivalent code is rejected.

/// Substrings that make a reference line part of the required set.
pub const STRUCTURAL_MARKERS: [&str; 3] = ["if", "else", "System.out.println"];

/// Removes every whitespace character, including inside string literals.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn is_structural(line: &str) -> bool {
    STRUCTURAL_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Whitespace-free form of a reference line without trailing `;`.
pub fn normalize_reference_line(line: &str) -> String {
    strip_whitespace(line).trim_end_matches(';').to_string()
}

/// Normalized structural lines of a reference solution, in source order.
pub fn required_patterns(solution: &str) -> Vec<String> {
    solution
        .lines()
        .map(str::trim)
        .filter(|line| is_structural(line))
        .map(normalize_reference_line)
        .filter(|pattern| !pattern.is_empty())
        .collect()
}

/// Patterns that do not occur in the whitespace-stripped candidate code.
pub fn missing_patterns<'a>(patterns: &'a [String], code: &str) -> Vec<&'a str> {
    let candidate = strip_whitespace(code);
    patterns
        .iter()
        .filter(|pattern| !candidate.contains(pattern.as_str()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_structural_lines() {
        let solution = "int edad = 20;\n  if (edad < 18) {\n    System.out.println(\"Menor\");\n  } else {\n    return;\n  }";
        assert_eq!(
            required_patterns(solution),
            vec!["if(edad<18){", "System.out.println(\"Menor\")", "}else{"]
        );
    }

    #[test]
    fn marker_inside_identifier_counts() {
        let patterns = required_patterns("int calificacion = scanner.nextInt();");
        assert_eq!(patterns, vec!["intcalificacion=scanner.nextInt()"]);
    }

    #[test]
    fn strips_only_trailing_terminators() {
        assert_eq!(normalize_reference_line("a; b ;;"), "a;b");
        assert_eq!(
            normalize_reference_line("if (x) { System.out.println(1); }"),
            "if(x){System.out.println(1);}"
        );
    }

    #[test]
    fn handles_crlf_line_endings() {
        let patterns = required_patterns("if (a) {\r\n} else {\r\n}");
        assert_eq!(patterns, vec!["if(a){", "}else{"]);
    }

    #[test]
    fn matching_ignores_layout_but_not_content() {
        let patterns = vec!["if(a>1){".to_string(), "}else{".to_string()];
        assert!(missing_patterns(&patterns, "if (a > 1)\n{\n}\nelse\n{\n}").is_empty());
        assert_eq!(missing_patterns(&patterns, "if (a > 1) { }"), vec!["}else{"]);
    }

    #[test]
    fn unanchored_match_is_accepted() {
        let patterns = vec!["if(x){".to_string()];
        assert!(missing_patterns(&patterns, "String s = \"if(x){\";").is_empty());
    }
}
