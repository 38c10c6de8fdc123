// SPDX-License-Identifier: Apache-2.0

//! SQL injection lesson: parameterized queries over string building.
//!
//! The vulnerable variant splices user input straight into SQL text:
//!
//! ```text
//! // NEVER DO THIS - attacker-controlled values become SQL syntax.
//! let query = format!(
//!     "SELECT * FROM users WHERE username = '{username}' AND password = '{password}'"
//! );
//! // username = "' OR '1'='1" turns the WHERE clause into a tautology and
//! // logs the attacker in as the first user in the table.
//! ```
//!
//! The safe variant below keeps the statement template and the values in
//! separate channels; a database driver binds the values, so input can only
//! ever be data, never syntax. No database is involved here - the lesson is
//! about the shape of the query, not about executing it.

use serde::Serialize;

use crate::Result;
use crate::error::PitfallError;

/// A SQL statement template paired with its ordered parameter values.
///
/// The template uses `?` placeholders. Parameter values travel separately
/// and are never substituted into the template by this type - that binding
/// is the database driver's job, and keeping it there is the whole point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterizedQuery {
    template: String,
    params: Vec<String>,
}

impl ParameterizedQuery {
    /// Creates a query from a template and its parameter values.
    ///
    /// # Errors
    ///
    /// Returns [`PitfallError::InvalidInput`] when the number of `?`
    /// placeholders in the template does not match the number of parameters.
    pub fn new(template: impl Into<String>, params: Vec<String>) -> Result<Self> {
        let template = template.into();
        let placeholders = template.matches('?').count();
        if placeholders != params.len() {
            return Err(PitfallError::invalid_input(format!(
                "template has {placeholders} placeholder(s) but {} parameter(s) were supplied",
                params.len()
            )));
        }
        Ok(Self { template, params })
    }

    /// The statement template, placeholders intact.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The parameter values, in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Renders the template-plus-parameters view the lesson prints.
    ///
    /// Parameters are listed next to the template, never spliced into it -
    /// the preview of a query built from `' OR '1'='1` still shows a `?`
    /// where the username goes.
    #[must_use]
    pub fn preview(&self) -> String {
        let quoted: Vec<String> = self.params.iter().map(|p| format!("{p:?}")).collect();
        format!("{} with params ({})", self.template, quoted.join(", "))
    }
}

/// Builds the login lookup query used by the demonstration driver.
#[must_use]
pub fn login_query(username: &str, password: &str) -> ParameterizedQuery {
    ParameterizedQuery {
        template: "SELECT * FROM users WHERE username = ? AND password = ?".to_string(),
        params: vec![username.to_string(), password.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_rejected() {
        let err = ParameterizedQuery::new(
            "SELECT * FROM users WHERE id = ?",
            vec!["1".to_string(), "2".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err, PitfallError::InvalidInput { .. }));

        let err = ParameterizedQuery::new("SELECT 1", vec!["stray".to_string()]).unwrap_err();
        assert!(matches!(err, PitfallError::InvalidInput { .. }));
    }

    #[test]
    fn test_matching_arity_accepted() {
        let query = ParameterizedQuery::new(
            "DELETE FROM sessions WHERE user_id = ? AND token = ?",
            vec!["42".to_string(), "abc".to_string()],
        )
        .unwrap();
        assert_eq!(query.params().len(), 2);
    }

    #[test]
    fn test_malicious_input_never_reaches_template() {
        let query = login_query("' OR '1'='1", "password");
        // The template is a fixed string; hostile input stays in the
        // parameter list.
        assert_eq!(
            query.template(),
            "SELECT * FROM users WHERE username = ? AND password = ?"
        );
        assert!(!query.template().contains("OR"));
        assert_eq!(query.params()[0], "' OR '1'='1");
    }

    #[test]
    fn test_preview_keeps_placeholders() {
        let query = login_query("admin", "password123");
        let preview = query.preview();
        assert!(preview.contains("username = ?"));
        assert!(preview.contains("\"admin\""));
        assert!(preview.contains("\"password123\""));
    }
}
