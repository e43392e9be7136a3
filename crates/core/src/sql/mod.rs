// SQL Builders - dynamic clause construction with positional parameters
//
// Values are always bound through `$n` placeholders; only column names from
// static tables and fixed fragments ever reach the statement text.

pub mod set_clause;
pub mod where_clause;

pub use set_clause::{build_set_clause, ColumnOverrides, SetClause};
pub use where_clause::WhereClause;
