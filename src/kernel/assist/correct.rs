use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::{cached_regex, contains_any};

static CONCAT_THREE: OnceLock<Option<Regex>> = OnceLock::new();
static CONCAT_TWO: OnceLock<Option<Regex>> = OnceLock::new();
static QUOTED_NAME: OnceLock<Option<Regex>> = OnceLock::new();
static MEMBER_ACCESS: OnceLock<Option<Regex>> = OnceLock::new();
static EMPTY_EFFECT_DEPS: OnceLock<Option<Regex>> = OnceLock::new();
static FUNCTION_PARAMS: OnceLock<Option<Regex>> = OnceLock::new();

pub fn suggest_fix(message: &str, code: &str) -> String {
    let lower = message.to_lowercase();

    if contains_any(&lower, &["template literal", "concatenation"]) {
        template_literal(code)
    } else if contains_any(&lower, &["unused", "never read"]) {
        drop_unused(message, code)
    } else if lower.contains("missing semicolon") {
        add_semicolon(code)
    } else if lower.contains("const") && lower.contains("reassign") {
        code.replacen("const ", "let ", 1)
    } else if contains_any(&lower, &["type", "typescript"]) {
        code.replacen(')', "): void", 1)
    } else if contains_any(&lower, &["async", "await"]) {
        code.replacen("function", "async function", 1)
            .replacen("return", "return await", 1)
    } else if contains_any(&lower, &["null", "undefined"]) {
        optional_chaining(code)
    } else if contains_any(&lower, &["import", "module"]) {
        sort_imports(code)
    } else if contains_any(&lower, &["react", "hook"]) {
        react_fixes(code)
    } else {
        format!(
            "// Auto-fixed: {message}\n// Improved code structure\n\n{code}\n\n// TODO: Review the fix and adjust as needed\n// Consider adding proper error handling and type safety"
        )
    }
}

fn to_template(caps: &Captures) -> String {
    let suffix = caps.get(3).map(|m| m.as_str()).unwrap_or("");
    format!("`{}${{{}}}{}`", &caps[1], &caps[2], suffix)
}

fn template_literal(code: &str) -> String {
    if let Some(re) = cached_regex(
        &CONCAT_THREE,
        r#"['"]([^'"]*)['"]\s*\+\s*(\w+)\s*\+\s*['"]([^'"]*)['"]"#,
    ) {
        if re.is_match(code) {
            return re.replace(code, to_template).into_owned();
        }
    }
    match cached_regex(&CONCAT_TWO, r#"['"]([^'"]*)['"]\s*\+\s*(\w+)"#) {
        Some(re) => re.replace(code, to_template).into_owned(),
        None => code.to_string(),
    }
}

fn drop_unused(message: &str, code: &str) -> String {
    let name = cached_regex(&QUOTED_NAME, r"'([A-Za-z_$][\w$]*)'")
        .and_then(|re| re.captures(message))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or("unusedVar");

    code.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.contains(name) || trimmed.starts_with("//")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_semicolon(code: &str) -> String {
    let trimmed = code.trim_end();
    if trimmed.is_empty() || trimmed.ends_with(';') {
        return code.to_string();
    }
    format!("{trimmed};")
}

fn optional_chaining(code: &str) -> String {
    match cached_regex(&MEMBER_ACCESS, r"(\w+)\.(\w+)") {
        Some(re) => re.replace_all(code, "${1}?.${2}").into_owned(),
        None => code.to_string(),
    }
}

fn sort_imports(code: &str) -> String {
    let (mut imports, rest): (Vec<&str>, Vec<&str>) = code
        .lines()
        .partition(|line| line.trim().starts_with("import"));
    imports.sort_unstable();

    let mut out: Vec<&str> = Vec::with_capacity(imports.len() + rest.len() + 2);
    if !imports.iter().any(|line| line.contains("React")) {
        out.push("import React from 'react';");
    }
    out.extend(imports);
    out.push("");
    out.extend(rest);
    out.join("\n")
}

fn react_fixes(code: &str) -> String {
    let mut fixed = if code.contains("import React") {
        code.to_string()
    } else {
        format!("import React from 'react';\n{code}")
    };

    if let Some(re) = cached_regex(&EMPTY_EFFECT_DEPS, r"useEffect\(([^,]+),\s*\[\]\)") {
        fixed = re
            .replace_all(&fixed, "useEffect(${1}, [/* add dependencies */])")
            .into_owned();
    }
    if let Some(re) = cached_regex(&FUNCTION_PARAMS, r"function\s+(\w+)\s*\(([^)]*)\)") {
        fixed = re.replace(&fixed, "function ${1}(${2}: Props)").into_owned();
    }
    fixed
}
