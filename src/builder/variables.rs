use serde::{Deserialize, Serialize};

use crate::utils::{format_sci, workbench_placeholder};

/// A variable defined directly in the script with a literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptVariable {
    pub name: String,
    pub value: f64,
}

impl ScriptVariable {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Binds each name to the workbench parameter of the same name.
pub fn render_workbench_variables<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            format!("(define {} {}) \n", name, workbench_placeholder(name))
        })
        .collect()
}

pub fn render_script_variables(variables: &[ScriptVariable]) -> String {
    variables
        .iter()
        .map(|var| format!("(define {} {}) \n", var.name, format_sci(var.value, 5)))
        .collect()
}
