use serde::{Deserialize, Serialize};

/// Severity of a snackbar notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Leading glyph shown in the snackbar
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Error => "✖",
        }
    }
}

/// Visual variant of a snackbar notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Filled,
    Outlined,
    Standard,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Input,         // Typing into the new-todo field
    OptionPanel,   // Drawer for the selected todo is open
    EditModal,     // Editing the content of the drawer's todo
    ConfirmDelete, // Waiting for y/n before removing the drawer's todo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::Success.name(), "success");
        assert_eq!(Severity::Error.name(), "error");
        let parsed: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, Severity::Warning);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Severity::default(), Severity::Success);
        assert_eq!(Variant::default(), Variant::Filled);
    }
}
