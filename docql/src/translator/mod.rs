//! The query translator: a single-pass recursive emitter turning a
//! predicate/sort AST into SQL `WHERE`, `FROM`, and `ORDER BY`
//! fragments. Document bodies are opaque to the translator; it reads
//! into them only through the `fl_*` SQL functions named in the output.

mod elem_match;
mod fts;
mod operators;
mod predicate;
mod sort;
mod term;


use crate::{
    result::{Error, Result},
    util,
    value::Value,
};

/// Default name of the column holding serialized document bodies.
pub const DEFAULT_BODY_COLUMN: &str = "body";

/// Compiles one document query at a time into SQL clause fragments.
/// State lives for the duration of one [`parse`](QueryTranslator::parse)
/// call; a new parse discards it. Instances are not shareable across
/// threads mid-parse, but distinct instances are independent.
#[derive(Debug)]
pub struct QueryTranslator {
    table_name: String,
    body_column: String,
    /// Dotted path prefix for the current lexical scope. Extended on
    /// descent into a nested property predicate and restored on ascent.
    property_path: String,
    where_sql: String,
    sort_sql: String,
    /// Property paths with a full-text table referenced by the query,
    /// in first-appearance order. The 1-based position of a path is its
    /// FTS table number for the rest of the parse.
    fts_properties: Vec<String>,
}

impl QueryTranslator {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self::with_body_column(table_name, DEFAULT_BODY_COLUMN)
    }

    pub fn with_body_column(table_name: impl Into<String>, body_column: impl Into<String>) -> Self {
        QueryTranslator {
            table_name: table_name.into(),
            body_column: body_column.into(),
            property_path: String::new(),
            where_sql: String::new(),
            sort_sql: String::new(),
            fts_properties: Vec::new(),
        }
    }

    /// Runs the translator over a predicate and a sort spec. Any state
    /// from a previous parse is discarded first. On failure the clause
    /// accessors must not be trusted.
    pub fn parse(&mut self, where_expr: Option<&Value>, sort_expr: Option<&Value>) -> Result<()> {
        self.property_path.clear();
        self.where_sql.clear();
        self.sort_sql.clear();
        self.fts_properties.clear();

        if let Some(predicate) = where_expr {
            self.where_sql = self.parse_predicate(predicate)?;
        }
        self.sort_sql = self.parse_sort(sort_expr)?;
        Ok(())
    }

    /// Parses raw JSON and delegates to [`parse`](QueryTranslator::parse).
    /// JSON syntax errors surface as the same [`Error::InvalidQuery`].
    pub fn parse_json(
        &mut self,
        where_json: Option<&[u8]>,
        sort_json: Option<&[u8]>,
    ) -> Result<()> {
        let where_value = where_json.map(decode_json).transpose()?;
        let sort_value = sort_json.map(decode_json).transpose()?;
        self.parse(where_value.as_ref(), sort_value.as_ref())
    }

    /// The assembled WHERE clause. Empty when the query had no predicate.
    pub fn where_clause(&self) -> &str {
        &self.where_sql
    }

    /// The assembled ORDER BY clause.
    pub fn order_by(&self) -> &str {
        &self.sort_sql
    }

    /// The FROM sources: the document table followed by one implicit
    /// join per full-text table discovered during the parse, aliased
    /// `FTS1`, `FTS2`, … in first-reference order.
    pub fn from_clause(&self) -> String {
        let mut from = self.table_name.clone();
        for (i, path) in self.fts_properties.iter().enumerate() {
            from.push_str(", ");
            from.push_str(&util::sql_identifier(&self.fts_table_name(path)));
            from.push_str(" AS FTS");
            from.push_str(&(i + 1).to_string());
        }
        from
    }

    /// Quoted names of the full-text virtual tables the query
    /// references, in registration order.
    pub fn fts_table_names(&self) -> Vec<String> {
        self.fts_properties
            .iter()
            .map(|path| util::sql_identifier(&self.fts_table_name(path)))
            .collect()
    }

    fn fts_table_name(&self, property_path: &str) -> String {
        format!("{}::{}", self.table_name, property_path)
    }
}

fn decode_json(json: &[u8]) -> Result<Value> {
    let parsed: serde_json::Value =
        serde_json::from_slice(json).map_err(|_| Error::InvalidQuery)?;
    Ok(Value::from(parsed))
}

pub(crate) fn must_be_object(value: &Value) -> Result<&crate::value::Document> {
    value.as_object().ok_or(Error::InvalidQuery)
}

pub(crate) fn must_be_array(value: &Value) -> Result<&[Value]> {
    value.as_array().ok_or(Error::InvalidQuery)
}
