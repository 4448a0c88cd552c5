//! Builds the memory summary block from a user's career file and saved memories.
//!
//! The assembler treats the result as opaque text under its own header.

use serde::{Deserialize, Serialize};

/// Profile fields the user maintains about themselves. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerFile {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, alias = "user_current_role")]
    pub current_role: Option<String>,
    #[serde(default)]
    pub target_role: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
}

/// One saved key/value memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryItem {
    pub key: String,
    pub value: String,
}

/// `None` when neither the career file nor the memories have anything to say.
pub fn build_memory_summary(career_file: Option<&CareerFile>, items: &[MemoryItem]) -> Option<String> {
    let mut blocks = Vec::new();

    if let Some(file) = career_file {
        let fields = [
            ("Name", &file.display_name),
            ("Current Role", &file.current_role),
            ("Target Role", &file.target_role),
            ("Goals", &file.goals),
        ];
        let lines: Vec<String> = fields
            .iter()
            .filter_map(|(label, value)| {
                let value = value.as_deref()?.trim();
                (!value.is_empty()).then(|| format!("- {label}: {value}"))
            })
            .collect();
        if !lines.is_empty() {
            blocks.push(format!("CAREER FILE:\n{}", lines.join("\n")));
        }
    }

    let memories: Vec<String> = items
        .iter()
        .filter(|item| !item.key.trim().is_empty() && !item.value.trim().is_empty())
        .map(|item| format!("- {}: {}", item.key.trim(), item.value.trim()))
        .collect();
    if !memories.is_empty() {
        blocks.push(format!("MEMORY:\n{}", memories.join("\n")));
    }

    (!blocks.is_empty()).then(|| blocks.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str, value: &str) -> MemoryItem {
        MemoryItem {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_nothing_to_say_is_none() {
        assert_eq!(build_memory_summary(None, &[]), None);
        let blank = CareerFile {
            display_name: Some("  ".to_string()),
            ..CareerFile::default()
        };
        assert_eq!(build_memory_summary(Some(&blank), &[item("k", " ")]), None);
    }

    #[test]
    fn test_career_file_only_lists_filled_fields() {
        let file = CareerFile {
            display_name: Some("Sam".to_string()),
            target_role: Some(" Staff engineer ".to_string()),
            ..CareerFile::default()
        };
        assert_eq!(
            build_memory_summary(Some(&file), &[]).unwrap(),
            "CAREER FILE:\n- Name: Sam\n- Target Role: Staff engineer"
        );
    }

    #[test]
    fn test_career_file_and_memories_combined() {
        let file = CareerFile {
            current_role: Some("Analyst".to_string()),
            ..CareerFile::default()
        };
        let summary = build_memory_summary(
            Some(&file),
            &[item("work_preference", "remote-first"), item("industry", "fintech")],
        )
        .unwrap();
        assert_eq!(
            summary,
            "CAREER FILE:\n- Current Role: Analyst\n\nMEMORY:\n- work_preference: remote-first\n- industry: fintech"
        );
    }

    #[test]
    fn test_career_file_accepts_legacy_field_name() {
        let file: CareerFile = serde_json::from_str(r#"{"user_current_role":"PM"}"#).unwrap();
        assert_eq!(file.current_role.as_deref(), Some("PM"));
    }
}
