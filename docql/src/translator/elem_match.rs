use crate::{
    result::{Error, Result},
    value::Value,
};

use super::{
    operators::RelationKind,
    term::{find_relation, type_code_for, write_literal, write_literal_list, Relation},
    QueryTranslator,
};

impl QueryTranslator {
    /// Translates `$elemMatch` on a property into a correlated EXISTS
    /// over the array elements produced by `fl_each`.
    pub(crate) fn parse_elem_match(&self, property: &str, matcher: &Value) -> Result<String> {
        Ok(format!(
            "EXISTS (SELECT 1 FROM {} WHERE {})",
            self.property_getter("fl_each", property)?,
            self.write_elem_match_term("fl_each", matcher)?
        ))
    }

    /// Translates the inner condition of an `$elemMatch`. The iterated
    /// element is addressed through the pseudo-table columns
    /// `<table>.value` and `<table>.type` instead of the `fl_*` getters.
    fn write_elem_match_term(&self, table: &str, value: &Value) -> Result<String> {
        let (entry, arg) = match find_relation(value)? {
            // Object-valued sub-property terms have no per-element form.
            Relation::SubPredicate(_) => return Err(Error::InvalidQuery),
            Relation::Operator(entry, arg) => (entry, arg),
        };

        use RelationKind::*;
        match entry.kind {
            Comparison => Ok(format!(
                "{}.value{}{}",
                table,
                entry.sql_op,
                write_literal(arg)?
            )),
            Type => Ok(format!("{}.type={}", table, type_code_for(arg)?)),
            Exists => match arg {
                Value::Boolean(true) => Ok(format!("({}.type >= 0)", table)),
                Value::Boolean(false) => Ok(format!("NOT ({}.type >= 0)", table)),
                _ => Err(Error::InvalidQuery),
            },
            InList => Ok(format!(
                "{}.value{}({})",
                table,
                entry.sql_op,
                write_literal_list(arg)?
            )),
            Size => Ok(format!("count({}.*)={}", table, write_literal(arg)?)),
            // Containment, nested element matches, and full-text search
            // have no per-element form.
            All | Any | ElemMatch | Match => Err(Error::InvalidQuery),
        }
    }
}
