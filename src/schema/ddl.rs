//! DDL harvesting for schema extraction.
//!
//! The parser is deliberately tolerant: it splits a DDL document on
//! statement terminators and harvests only the `CREATE TABLE` forms it
//! recognizes. Statements and column fragments it does not understand are
//! silently skipped, never errors.

use super::Field;
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex to extract the table name from a CREATE TABLE statement.
/// Accepts the plain form and the columnar `CREATE COLUMN TABLE` variant,
/// with optional double-quoting of the identifier.
static CREATE_TABLE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)CREATE\s+(?:COLUMN\s+)?TABLE\s+"?([A-Za-z_]\w*)"?"#).unwrap()
});

/// Regex for a column definition fragment: a lower-case identifier
/// (underscores allowed) followed by a type token. Table-level constraint
/// fragments do not match and are skipped.
static COLUMN_DEF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([a-z]+(?:_[a-z]+)*)\s+\w+").unwrap());

/// Split a DDL document into per-table statements, keyed by the table name
/// as declared.
///
/// Newlines are stripped first, then the document is split on `;`. Each
/// resulting statement is matched against the CREATE TABLE pattern and
/// returned as a `(table_name, statement_text)` pair, in document order.
/// Duplicate table names keep document order here, so a map built from
/// the result holds the last statement (documented behavior, not
/// corrected).
pub fn harvest_statements(ddl: &str) -> Vec<(String, String)> {
    let flattened = ddl.replace(['\r', '\n'], " ");
    flattened
        .split(';')
        .filter_map(|stmt| {
            let name = extract_table_name(stmt)?;
            Some((name, stmt.trim().to_string()))
        })
        .collect()
}

/// Extract the table name from a CREATE TABLE statement, if it is one.
pub fn extract_table_name(stmt: &str) -> Option<String> {
    CREATE_TABLE_NAME_RE
        .captures(stmt)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract the ordered column fields from one table's DDL text.
///
/// Locates the parenthesized column-definition list, splits it on
/// top-level commas, and matches each fragment for a leading identifier.
/// Field names are normalized to upper case; duplicates are dropped so the
/// resulting list has no repeated names.
pub fn extract_fields(stmt: &str) -> Vec<Field> {
    let Some(body) = extract_table_body(stmt) else {
        return Vec::new();
    };

    let mut fields: Vec<Field> = Vec::new();
    for fragment in split_table_body(&body) {
        if let Some(caps) = COLUMN_DEF_RE.captures(&fragment) {
            let name = caps[1].to_uppercase();
            if !fields.iter().any(|f| f.name == name) {
                fields.push(Field::new(name));
            }
        }
    }
    fields
}

/// Extract the body of a CREATE TABLE statement (between the first `(` and
/// its matching `)`), skipping over single-quoted string literals.
fn extract_table_body(stmt: &str) -> Option<String> {
    let bytes = stmt.as_bytes();
    let mut depth = 0;
    let mut start = None;
    let mut in_string = false;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\'' {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }

        if b == b'(' {
            if depth == 0 {
                start = Some(i + 1);
            }
            depth += 1;
        } else if b == b')' {
            depth -= 1;
            if depth == 0 {
                if let Some(s) = start {
                    return Some(stmt[s..i].to_string());
                }
            }
        }
    }

    None
}

/// Split a table body on commas, respecting nested parentheses and
/// single-quoted literals (so `DECIMAL(10,2)` stays one fragment).
fn split_table_body(body: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0;
    let mut in_string = false;

    for ch in body.chars() {
        if ch == '\'' {
            in_string = !in_string;
            current.push(ch);
            continue;
        }
        if in_string {
            current.push(ch);
            continue;
        }

        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    if !current.trim().is_empty() {
        parts.push(current.trim().to_string());
    }

    parts
}
