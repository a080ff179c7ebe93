use crate::{
    result::{Error, Result},
    value::{Document, Value},
};

use super::{must_be_array, must_be_object, QueryTranslator};

impl QueryTranslator {
    /// Translates a boolean-valued predicate, usually the top level of a
    /// query. The input must be an object. An object with no
    /// `$`-prefixed key is an implicit conjunction of per-property
    /// terms; otherwise the first `$`-key by iteration order governs the
    /// whole object.
    pub(crate) fn parse_predicate(&mut self, expr: &Value) -> Result<String> {
        let query = must_be_object(expr)?;
        match special_key(query) {
            None => {
                let terms = query
                    .iter()
                    .map(|(key, value)| self.parse_term(key, value))
                    .collect::<Result<Vec<_>>>()?;
                Ok(terms.join(" AND "))
            }
            Some(("$and", terms)) => self.write_boolean_expr(terms, " AND "),
            Some(("$or", terms)) => self.write_boolean_expr(terms, " OR "),
            Some(("$nor", terms)) => {
                Ok(format!("NOT ({})", self.write_boolean_expr(terms, " OR ")?))
            }
            Some(("$not", term)) => {
                let terms = must_be_array(term)?;
                let [term] = terms else {
                    return Err(Error::InvalidQuery);
                };
                Ok(format!("NOT ({})", self.parse_predicate(term)?))
            }
            // Any other `$`-operator is meaningless at predicate level.
            Some(_) => Err(Error::InvalidQuery),
        }
    }

    /// Joins the sub-predicates of a `$and`/`$or`/`$nor` array with the
    /// given SQL connective.
    fn write_boolean_expr(&mut self, terms: &Value, connective: &str) -> Result<String> {
        let parts = must_be_array(terms)?
            .iter()
            .map(|term| self.parse_predicate(term))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(connective))
    }
}

/// The first `$`-prefixed key of the object, with its value.
pub(crate) fn special_key(object: &Document) -> Option<(&str, &Value)> {
    object
        .iter()
        .find(|(key, _)| key.starts_with('$'))
        .map(|(key, value)| (key.as_str(), value))
}
