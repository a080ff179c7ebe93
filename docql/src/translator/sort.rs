use crate::{
    result::{Error, Result},
    util,
    value::Value,
};

use super::QueryTranslator;

impl QueryTranslator {
    /// Translates the sort spec into the ORDER BY fragment: a single
    /// ordering term, an array of them, or the primary key when the
    /// spec is absent.
    pub(crate) fn parse_sort(&self, expr: Option<&Value>) -> Result<String> {
        let expr = match expr {
            None => return Ok("key".to_string()),
            Some(expr) => expr,
        };
        match expr {
            Value::String(_) => self.write_order_by(expr),
            Value::Array(terms) => {
                let parts = terms
                    .iter()
                    .map(|term| self.write_order_by(term))
                    .collect::<Result<Vec<_>>>()?;
                Ok(parts.join(", "))
            }
            _ => Err(Error::InvalidQuery),
        }
    }

    /// One ordering term: an optionally signed (`+`/`-`) property name,
    /// `_id`, `_sequence`, or a property the predicate matched with
    /// `$match`, which orders by full-text relevance rank instead.
    fn write_order_by(&self, term: &Value) -> Result<String> {
        let term = term.as_str().ok_or(Error::InvalidQuery)?;

        let (ascending, name) = if let Some(rest) = term.strip_prefix('-') {
            (false, rest)
        } else if let Some(rest) = term.strip_prefix('+') {
            (true, rest)
        } else {
            (true, term)
        };
        if name.is_empty() {
            return Err(Error::InvalidQuery);
        }

        if self.fts_property_index(name) > 0 {
            return Ok(format!(
                "rank(matchinfo({})) DESC",
                util::sql_identifier(&self.fts_table_name(name))
            ));
        }

        let mut sql = match name {
            "_id" => "key".to_string(),
            "_sequence" => "sequence".to_string(),
            _ => self.property_getter("fl_value", name)?,
        };
        if !ascending {
            sql.push_str(" DESC");
        }
        Ok(sql)
    }
}
