use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    result::{Error, Result},
    util,
    value::{Number, Value},
};

use super::{
    must_be_array,
    operators::{relational, type_code, RelationKind, RelationalEntry},
    predicate::special_key,
    QueryTranslator,
};

lazy_static! {
    /// Placeholder names must look like SQL identifiers; anything else
    /// could smuggle SQL text into the emitted clause.
    static ref PLACEHOLDER_NAME: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// How a term's value drives emission: an explicit or implicit
/// relational operator with its argument, or a nested sub-predicate.
pub(crate) enum Relation<'a> {
    Operator(&'static RelationalEntry, &'a Value),
    SubPredicate(&'a Value),
}

/// Decides which relation a term value denotes. An object whose first
/// `$`-key names an operator is that operator applied to the key's
/// value; any other object is a nested sub-predicate; everything else
/// is an implicit `$eq` against the value itself.
pub(crate) fn find_relation(value: &Value) -> Result<Relation<'_>> {
    let (op, arg) = match value {
        Value::Object(object) => match special_key(object) {
            Some((op, arg)) => (op, arg),
            None => return Ok(Relation::SubPredicate(value)),
        },
        _ => ("$eq", value),
    };
    let entry = relational(op).ok_or(Error::InvalidQuery)?;
    Ok(Relation::Operator(entry, arg))
}

/// Meta-properties that live in their own table columns rather than in
/// the document body.
pub(crate) fn meta_column(property: &str) -> Option<&'static str> {
    match property {
        "_id" => Some("key"),
        "_sequence" => Some("sequence"),
        _ => None,
    }
}

impl QueryTranslator {
    /// Translates one `property: value` pair, like `"x": {"$gt": 5}`.
    pub(crate) fn parse_term(&mut self, key: &str, value: &Value) -> Result<String> {
        let (entry, arg) = match find_relation(value)? {
            Relation::SubPredicate(predicate) => {
                return self.parse_sub_property_term(key, predicate)
            }
            Relation::Operator(entry, arg) => (entry, arg),
        };

        use RelationKind::*;
        match entry.kind {
            Comparison => {
                let getter = match meta_column(key) {
                    Some(column) => column.to_string(),
                    None => self.property_getter("fl_value", key)?,
                };
                Ok(format!("{}{}{}", getter, entry.sql_op, write_literal(arg)?))
            }
            Type => Ok(format!(
                "{}={}",
                self.property_getter("fl_type", key)?,
                type_code_for(arg)?
            )),
            Exists => {
                let getter = self.property_getter("fl_exists", key)?;
                match arg {
                    Value::Boolean(true) => Ok(getter),
                    Value::Boolean(false) => Ok(format!("NOT {}", getter)),
                    _ => Err(Error::InvalidQuery),
                }
            }
            InList => Ok(format!(
                "{}{}({})",
                self.property_getter("fl_value", key)?,
                entry.sql_op,
                write_literal_list(arg)?
            )),
            Size => Ok(format!(
                "{}={}",
                self.property_getter("fl_count", key)?,
                write_literal(arg)?
            )),
            All | Any => {
                let items = must_be_array(arg)?;
                let mut sql = self.property_getter_left_open("fl_contains", key)?;
                sql.push_str(if entry.kind == All { ", 1" } else { ", 0" });
                for item in items {
                    sql.push_str(", ");
                    sql.push_str(&write_literal(item)?);
                }
                sql.push(')');
                Ok(sql)
            }
            ElemMatch => self.parse_elem_match(key, arg),
            Match => self.parse_fts_match(key, arg),
        }
    }

    /// Parses a nested predicate under a property, extending the
    /// property path for the duration of the descent. The previous path
    /// is restored on every exit, including failure.
    fn parse_sub_property_term(&mut self, property: &str, value: &Value) -> Result<String> {
        let extended = util::append_paths(&self.property_path, property);
        let saved = std::mem::replace(&mut self.property_path, extended);
        let inner = self.parse_predicate(value);
        self.property_path = saved;
        Ok(format!("({})", inner?))
    }

    /// Writes a call to a document-reading SQL function, closed.
    pub(crate) fn property_getter(&self, fn_name: &str, property: &str) -> Result<String> {
        Ok(format!(
            "{})",
            self.property_getter_left_open(fn_name, property)?
        ))
    }

    /// Writes a call to a document-reading SQL function without the
    /// closing parenthesis, so the caller can append more arguments.
    /// Meta-properties have no body representation and are rejected.
    pub(crate) fn property_getter_left_open(
        &self,
        fn_name: &str,
        property: &str,
    ) -> Result<String> {
        if meta_column(property).is_some() {
            return Err(Error::InvalidQuery);
        }
        let path = util::append_paths(&self.property_path, property);
        Ok(format!(
            "{}({}, {}",
            fn_name,
            self.body_column,
            util::sql_identifier(&path)
        ))
    }
}

/// Writes a leaf value as a SQL literal. A single-element array is a
/// placeholder binding (`[3]` → `:_3`, `["limit"]` → `:_limit`), not a
/// literal list.
pub(crate) fn write_literal(literal: &Value) -> Result<String> {
    match literal {
        Value::Number(n) => Ok(n.to_string()),
        Value::Boolean(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        Value::String(s) => Ok(util::sql_string(s)),
        Value::Array(items) => {
            let [ident] = items.as_slice() else {
                return Err(Error::InvalidQuery);
            };
            match ident {
                Value::Number(Number::Integer(i)) => Ok(format!(":_{}", i)),
                Value::String(name) if PLACEHOLDER_NAME.is_match(name) => {
                    Ok(format!(":_{}", name))
                }
                _ => Err(Error::InvalidQuery),
            }
        }
        _ => Err(Error::InvalidQuery),
    }
}

/// Writes the elements of an array argument as a comma-separated SQL
/// literal list.
pub(crate) fn write_literal_list(value: &Value) -> Result<String> {
    let literals = must_be_array(value)?
        .iter()
        .map(write_literal)
        .collect::<Result<Vec<_>>>()?;
    Ok(literals.join(", "))
}

/// Resolves a `$type` argument to its stored type code.
pub(crate) fn type_code_for(value: &Value) -> Result<usize> {
    let name = value.as_str().ok_or(Error::InvalidQuery)?;
    type_code(name).ok_or(Error::InvalidQuery)
}
