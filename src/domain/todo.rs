use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the repository counter. Never reused.
pub type TodoId = u64;

/// Format used for `regDate` (local wall-clock time)
pub const REG_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single todo record.
///
/// Field names on the wire follow the stored layout (`regDate`,
/// `isCompleted`) so existing stores keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub content: String,
    /// Creation time, formatted once and never touched again
    #[serde(rename = "regDate")]
    pub registered_at: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Todo {
    /// Create a new, not yet completed todo stamped with the current local time.
    /// Callers are expected to pass already-validated content.
    pub fn new(id: TodoId, content: String) -> Self {
        Self::new_at(id, content, Local::now())
    }

    pub fn new_at(id: TodoId, content: String, at: DateTime<Local>) -> Self {
        Self {
            id,
            content,
            registered_at: at.format(REG_DATE_FORMAT).to_string(),
            is_completed: false,
        }
    }

    /// Status glyph used by list views
    pub fn check_mark(&self) -> &'static str {
        if self.is_completed {
            "✔"
        } else {
            "·"
        }
    }
}

/// Trim user input and reject it when nothing is left.
pub fn normalize_content(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_todo_defaults() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let todo = Todo::new_at(7, "buy milk".to_string(), at);

        assert_eq!(todo.id, 7);
        assert_eq!(todo.content, "buy milk");
        assert_eq!(todo.registered_at, "2024-03-09 14:05:07");
        assert!(!todo.is_completed);
    }

    #[test]
    fn test_wire_field_names() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let todo = Todo::new_at(1, "call mom".to_string(), at);
        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "content": "call mom",
                "regDate": "2024-03-09 14:05:07",
                "isCompleted": false,
            })
        );
    }

    #[test]
    fn test_missing_completion_flag_defaults_to_false() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":3,"content":"x","regDate":"yesterday"}"#).unwrap();
        assert!(!todo.is_completed);
    }

    #[test]
    fn test_normalize_content() {
        assert_eq!(normalize_content("  hello "), Some("hello".to_string()));
        assert_eq!(normalize_content(""), None);
        assert_eq!(normalize_content("   \n\t"), None);
    }
}
