// Partial-Update SET Clause Builder

use crate::error::{AppError, Result};
use crate::port::SqlValue;

/// Field name -> column name overrides, a static table per entity
pub type ColumnOverrides = &'static [(&'static str, &'static str)];

/// Parameterized SET fragment and the values for `$1..$n`
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    pub clause: String,
    pub values: Vec<SqlValue>,
}

/// Turn an ordered list of `(field, value)` pairs into `"col"=$1, "col2"=$2`
///
/// Columns come from `overrides` when listed there, otherwise the field name
/// is used verbatim. `values[i]` is bound to `$i+1`.
///
/// # Errors
///
/// `AppError::BadRequest` when `fields` is empty.
///
/// # Example
///
/// ```
/// use jobboard_core::sql::build_set_clause;
/// use jobboard_core::port::SqlValue;
///
/// let set = build_set_clause(
///     &[("firstName", SqlValue::from("Aliya")), ("age", SqlValue::from(32))],
///     &[("firstName", "first_name")],
/// )
/// .unwrap();
/// assert_eq!(set.clause, r#""first_name"=$1, "age"=$2"#);
/// ```
pub fn build_set_clause(fields: &[(&str, SqlValue)], overrides: ColumnOverrides) -> Result<SetClause> {
    if fields.is_empty() {
        return Err(AppError::BadRequest("No data".to_string()));
    }

    let clause = fields
        .iter()
        .enumerate()
        .map(|(idx, (field, _))| format!("\"{}\"=${}", column_for(field, overrides), idx + 1))
        .collect::<Vec<_>>()
        .join(", ");

    let values = fields.iter().map(|(_, value)| value.clone()).collect();

    Ok(SetClause { clause, values })
}

fn column_for<'a>(field: &'a str, overrides: ColumnOverrides) -> &'a str {
    overrides
        .iter()
        .find(|(name, _)| *name == field)
        .map_or(field, |(_, column)| *column)
}
