use serde_json::Value;

use super::app_record::value_text;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Blank,
}

impl FieldValue {
    pub fn from_raw(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => FieldValue::Blank,
            Some(value) => FieldValue::Text(value_text(value)),
        }
    }
}

/// Labelled values shown by `apps:info`, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayModel {
    entries: Vec<(&'static str, FieldValue)>,
}

impl DisplayModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &'static str, value: FieldValue) {
        self.entries.push((label, value));
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, value)| value)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(label, _)| *label).collect()
    }

    /// Two-column `Label: value` layout.
    ///
    /// Labels are padded to the widest label in the model. Blank values and
    /// empty lists are skipped; list items after the first go on indented
    /// continuation lines, and multi-item lists are followed by an empty line.
    pub fn render_lines(&self) -> Vec<String> {
        let width = self
            .entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0)
            + 2;

        let mut lines = Vec::new();
        for (label, value) in &self.entries {
            let key = format!("{label}: ");
            match value {
                FieldValue::Blank => continue,
                FieldValue::Text(text) => lines.push(format!("{key:<width$}{text}")),
                FieldValue::List(items) => {
                    let Some((first, rest)) = items.split_first() else {
                        continue;
                    };
                    lines.push(format!("{key:<width$}{first}"));
                    for item in rest {
                        lines.push(format!("{:width$}{item}", ""));
                    }
                    if !rest.is_empty() {
                        lines.push(String::new());
                    }
                }
            }
        }
        lines
    }
}

#[cfg(test)]
#[path = "../../../tests/models/heroku/display_model.rs"]
mod tests;
