//! Operator tags recognized inside predicate objects, e.g. `{"$eq": 42}`.
//! Boolean combiners (`$and`, `$or`, `$nor`, `$not`) are handled by the
//! predicate emitter, not this table.

/// How a relational entry is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RelationKind {
    /// Infix comparison against a literal: `$eq`, `$lt`, `$like`, …
    Comparison,
    /// `$type`: compare the stored type code.
    Type,
    /// `$exists`: presence test, negated for a false argument.
    Exists,
    /// `$in` / `$nin`: membership in a literal list.
    InList,
    /// `$size`: array element count.
    Size,
    /// `$all`: containment of every listed value.
    All,
    /// `$any`: containment of at least one listed value.
    Any,
    /// `$elemMatch`: correlated subquery over array elements.
    ElemMatch,
    /// `$match`: full-text search against the property's FTS table.
    Match,
}

pub(crate) struct RelationalEntry {
    pub(crate) op: &'static str,
    /// Infix SQL for `Comparison` and `InList` kinds; empty otherwise.
    pub(crate) sql_op: &'static str,
    pub(crate) kind: RelationKind,
}

const fn rel(op: &'static str, sql_op: &'static str, kind: RelationKind) -> RelationalEntry {
    RelationalEntry { op, sql_op, kind }
}

// Small enough that a linear scan beats any map.
pub(crate) static RELATIONALS: &[RelationalEntry] = &[
    rel("$eq", " = ", RelationKind::Comparison),
    rel("$ne", " <> ", RelationKind::Comparison),
    rel("$lt", " < ", RelationKind::Comparison),
    rel("$lte", " <= ", RelationKind::Comparison),
    rel("$le", " <= ", RelationKind::Comparison),
    rel("$gt", " > ", RelationKind::Comparison),
    rel("$gte", " >= ", RelationKind::Comparison),
    rel("$ge", " >= ", RelationKind::Comparison),
    rel("$like", " LIKE ", RelationKind::Comparison),
    rel("$type", "", RelationKind::Type),
    rel("$exists", "", RelationKind::Exists),
    rel("$in", " IN ", RelationKind::InList),
    rel("$nin", " NOT IN ", RelationKind::InList),
    rel("$size", "", RelationKind::Size),
    rel("$all", "", RelationKind::All),
    rel("$any", "", RelationKind::Any),
    rel("$elemMatch", "", RelationKind::ElemMatch),
    rel("$match", "", RelationKind::Match),
];

pub(crate) fn relational(op: &str) -> Option<&'static RelationalEntry> {
    RELATIONALS.iter().find(|entry| entry.op == op)
}

/// Type names accepted by `$type`, indexed by stored type code.
pub(crate) static TYPE_NAMES: &[&str] = &[
    "null", "boolean", "number", "string", "blob", "array", "object",
];

pub(crate) fn type_code(name: &str) -> Option<usize> {
    TYPE_NAMES.iter().position(|candidate| *candidate == name)
}
