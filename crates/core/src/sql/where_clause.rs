// Dynamic WHERE Clause Builder
//
// Owns the positional parameter list for a statement. Predicates are written
// with `?` as a local placeholder and rewritten to the next `$n` as they are
// added, so a predicate that binds nothing can never shift later indices.

use crate::error::{AppError, Result};
use crate::port::SqlValue;

#[derive(Debug, Clone)]
pub struct WhereClause {
    predicates: Vec<String>,
    params: Vec<SqlValue>,
    /// Ordinal of the first parameter this builder assigns
    first_index: usize,
}

impl Default for WhereClause {
    fn default() -> Self {
        Self::new()
    }
}

impl WhereClause {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Continue numbering after parameters already bound elsewhere in the
    /// statement (e.g. a SET clause using `$1..$n` passes `n + 1`)
    pub fn starting_at(first_index: usize) -> Self {
        Self {
            predicates: Vec::new(),
            params: Vec::new(),
            first_index: first_index.max(1),
        }
    }

    /// Add a predicate, returning it with `?` rewritten to `$n`
    ///
    /// # Errors
    ///
    /// `AppError::Internal` if the number of `?` in `fragment` differs from
    /// the number of params. Nothing is added in that case.
    pub fn add_predicate<I>(&mut self, fragment: &str, params: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<SqlValue>,
    {
        let params: Vec<SqlValue> = params.into_iter().map(Into::into).collect();
        let placeholders = fragment.matches('?').count();
        if placeholders != params.len() {
            return Err(AppError::Internal(format!(
                "Predicate `{}` has {} placeholder(s) but {} param(s)",
                fragment,
                placeholders,
                params.len()
            )));
        }

        let mut next = self.next_index();
        let mut rendered = String::with_capacity(fragment.len() + placeholders * 2);
        for ch in fragment.chars() {
            if ch == '?' {
                rendered.push('$');
                rendered.push_str(&next.to_string());
                next += 1;
            } else {
                rendered.push(ch);
            }
        }

        self.params.extend(params);
        self.predicates.push(rendered.clone());
        Ok(rendered)
    }

    /// Ordinal the next bound parameter will receive
    pub fn next_index(&self) -> usize {
        self.first_index + self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// `""` with no predicates, otherwise `" WHERE a AND b"`
    pub fn render(&self) -> String {
        if self.predicates.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.predicates.join(" AND "))
        }
    }

    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        let sql = self.render();
        (sql, self.params)
    }
}
