pub mod result;
mod translator;
mod util;
pub mod value;


pub use result::{Error, Result};
pub use translator::{QueryTranslator, DEFAULT_BODY_COLUMN};

/// The SQL fragments assembled from one document query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Boolean expression for the WHERE clause. Empty when the query had
    /// no predicate.
    pub where_clause: String,
    /// Source list for the FROM clause: the document table plus one
    /// implicit join per full-text table the predicate referenced.
    pub from_clause: String,
    /// Ordering terms for the ORDER BY clause.
    pub order_by: String,
    /// Quoted names of the full-text virtual tables the query uses, in
    /// first-reference order.
    pub fts_table_names: Vec<String>,
}

/// Translates a JSON predicate/sort pair against `table_name` in one
/// call, returning the assembled clauses.
pub fn translate_json(
    table_name: &str,
    body_column: &str,
    where_json: Option<&[u8]>,
    sort_json: Option<&[u8]>,
) -> Result<Translation> {
    let mut translator = QueryTranslator::with_body_column(table_name, body_column);
    translator.parse_json(where_json, sort_json)?;
    Ok(Translation {
        where_clause: translator.where_clause().to_string(),
        from_clause: translator.from_clause(),
        order_by: translator.order_by().to_string(),
        fts_table_names: translator.fts_table_names(),
    })
}
