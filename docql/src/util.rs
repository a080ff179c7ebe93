/// Combines a parent property path with a child segment into the
/// canonical dotted/bracketed form. A leading `$` on the child (with an
/// optional following `.`) refers to the document root and is stripped.
pub(crate) fn append_paths(parent: &str, child: &str) -> String {
    let child = match child.strip_prefix('$') {
        Some(rest) => rest.strip_prefix('.').unwrap_or(rest),
        None => child,
    };
    if parent.is_empty() {
        child.to_string()
    } else if child.starts_with('[') {
        format!("{}{}", parent, child)
    } else {
        format!("{}.{}", parent, child)
    }
}

/// Quotes a string as a SQL literal: wrapped in apostrophes, embedded
/// apostrophes doubled. The common no-apostrophe case copies the string
/// through unscanned.
pub(crate) fn sql_string(s: &str) -> String {
    if s.contains('\'') {
        format!("'{}'", s.replace('\'', "''"))
    } else {
        format!("'{}'", s)
    }
}

/// Quotes a string as a SQL identifier: wrapped in double quotes,
/// embedded double quotes doubled. Used for property-path arguments and
/// full-text table names.
pub(crate) fn sql_identifier(s: &str) -> String {
    if s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        format!("\"{}\"", s)
    }
}
