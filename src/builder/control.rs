use crate::error::Result;
use crate::notation::to_prefix;

/// Scheme `if` around two groups of statements; `condition` is infix.
pub fn render_if_clause(condition: &str, statements_true: &str, statements_false: Option<&str>) -> Result<String> {
    let mut statements = format!(
        "(if ({}) \n (begin \n {} \n ) \n",
        to_prefix(condition)?,
        statements_true
    );
    if let Some(statements_false) = statements_false {
        statements.push_str(&format!(" (begin \n {} \n ) \n", statements_false));
    }
    statements.push_str(") \n");
    Ok(statements)
}
