use crate::{
    result::{Error, Result},
    util,
    value::Value,
};

use super::{
    term::{meta_column, write_literal},
    QueryTranslator,
};

impl QueryTranslator {
    /// Translates `$match` on a property into a MATCH against that
    /// property's full-text virtual table, joined implicitly on the
    /// document sequence. The table is registered so `from_clause` can
    /// emit the join source.
    pub(crate) fn parse_fts_match(&mut self, property: &str, matcher: &Value) -> Result<String> {
        if meta_column(property).is_some() {
            return Err(Error::InvalidQuery);
        }
        let path = util::append_paths(&self.property_path, property);
        let table_no = self.register_fts_property(path);
        Ok(format!(
            "(FTS{}.text MATCH {} AND FTS{}.rowid = {}.sequence)",
            table_no,
            write_literal(matcher)?,
            table_no,
            self.table_name
        ))
    }

    /// 1-based index of the property's FTS table, or 0 when the property
    /// has not been referenced yet. Indices are stable for the rest of
    /// the parse because the registry is append-only.
    pub(crate) fn fts_property_index(&self, property_path: &str) -> usize {
        self.fts_properties
            .iter()
            .position(|registered| registered == property_path)
            .map_or(0, |i| i + 1)
    }

    fn register_fts_property(&mut self, path: String) -> usize {
        match self.fts_property_index(&path) {
            0 => {
                self.fts_properties.push(path);
                self.fts_properties.len()
            }
            existing => existing,
        }
    }
}
