/// Human-readable status labels for tool invocations.
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

pub const FILE_EDIT_TOOL: &str = "str_replace_editor";
pub const FILE_MANAGER_TOOL: &str = "file_manager";

const EDITING_FILE: &str = "Editing file...";
const MANAGING_FILES: &str = "Managing files...";

// ── Edit commands ─────────────────────────────────────────────────────────────

/// `command` argument of the file-edit tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Create,
    StrReplace,
    Insert,
    View,
    UndoEdit,
    Other,
}

impl EditCommand {
    pub fn parse(command: &str) -> Self {
        match command {
            "create" => Self::Create,
            "str_replace" => Self::StrReplace,
            "insert" => Self::Insert,
            "view" => Self::View,
            "undo_edit" => Self::UndoEdit,
            _ => Self::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Creating file...",
            Self::StrReplace => "Updating code...",
            Self::Insert => "Adding content...",
            Self::View => "Reading file...",
            Self::UndoEdit => "Reverting changes...",
            Self::Other => EDITING_FILE,
        }
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Status label for a tool call. Unknown tools echo their identifier.
pub fn tool_label<'a>(tool_name: &'a str, args: Option<&Value>) -> Cow<'a, str> {
    Cow::Borrowed(builtin_label(tool_name, args).unwrap_or(tool_name))
}

fn builtin_label(tool_name: &str, args: Option<&Value>) -> Option<&'static str> {
    match tool_name {
        FILE_EDIT_TOOL => Some(
            args.and_then(|a| a.get("command"))
                .and_then(Value::as_str)
                .map_or(EDITING_FILE, |c| EditCommand::parse(c).label()),
        ),
        FILE_MANAGER_TOOL => Some(MANAGING_FILES),
        _ => None,
    }
}

/// Label resolver with extra labels for tools outside the built-in set.
#[derive(Debug, Clone, Default)]
pub struct Labeler {
    overrides: HashMap<String, String>,
}

impl Labeler {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Built-in tools always keep their own labels; overrides only replace
    /// the identity fallback.
    pub fn label<'a>(&'a self, tool_name: &'a str, args: Option<&Value>) -> Cow<'a, str> {
        if let Some(label) = builtin_label(tool_name, args) {
            return Cow::Borrowed(label);
        }
        match self.overrides.get(tool_name) {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Borrowed(tool_name),
        }
    }
}

// ── Invocation records ────────────────────────────────────────────────────────

/// One tool call as recorded by the agent runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolInvocation {
    #[serde(alias = "tool_name", alias = "toolName")]
    pub name: String,
    #[serde(default, alias = "arguments", alias = "input")]
    pub args: Option<Value>,
}

impl ToolInvocation {
    pub fn label(&self) -> Cow<'_, str> {
        tool_label(&self.name, self.args.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_edit_commands() {
        let cases = [
            ("create", "Creating file..."),
            ("str_replace", "Updating code..."),
            ("insert", "Adding content..."),
            ("view", "Reading file..."),
            ("undo_edit", "Reverting changes..."),
            ("bogus", "Editing file..."),
        ];
        for (command, expected) in cases {
            let args = json!({ "command": command });
            assert_eq!(tool_label(FILE_EDIT_TOOL, Some(&args)), expected, "{command}");
        }
    }

    #[test]
    fn test_edit_without_command() {
        assert_eq!(tool_label("str_replace_editor", None), "Editing file...");
        assert_eq!(tool_label("str_replace_editor", Some(&json!({}))), "Editing file...");
        assert_eq!(tool_label("str_replace_editor", Some(&json!({"command": ""}))), "Editing file...");
        assert_eq!(tool_label("str_replace_editor", Some(&json!({"command": 3}))), "Editing file...");
        assert_eq!(tool_label("str_replace_editor", Some(&json!(null))), "Editing file...");
    }

    #[test]
    fn test_file_manager() {
        assert_eq!(tool_label("file_manager", Some(&json!({}))), "Managing files...");
        assert_eq!(tool_label("file_manager", Some(&json!({"command": "create"}))), "Managing files...");
        assert_eq!(tool_label("file_manager", None), "Managing files...");
    }

    #[test]
    fn test_unknown_tool_echoes_name() {
        let label = tool_label("unknown_tool_xyz", Some(&json!({"anything": 1})));
        assert_eq!(label, "unknown_tool_xyz");
        assert!(matches!(label, Cow::Borrowed(_)));
        assert_eq!(tool_label("", None), "");
    }

    #[test]
    fn test_labeler_overrides_only_fallback() {
        let labeler = Labeler::new(HashMap::from([
            ("bash".to_string(), "Running command...".to_string()),
            ("file_manager".to_string(), "Shuffling files...".to_string()),
        ]));
        assert_eq!(labeler.label("bash", None), "Running command...");
        assert_eq!(labeler.label("file_manager", None), "Managing files...");
        assert_eq!(labeler.label("search", None), "search");
    }

    #[test]
    fn test_invocation_records() {
        let inv: ToolInvocation =
            serde_json::from_str(r#"{"name":"str_replace_editor","args":{"command":"view"}}"#).unwrap();
        assert_eq!(inv.label(), "Reading file...");

        let inv: ToolInvocation =
            serde_json::from_str(r#"{"toolName":"str_replace_editor","arguments":{"command":"insert"}}"#)
                .unwrap();
        assert_eq!(inv.label(), "Adding content...");

        let inv: ToolInvocation = serde_json::from_str(r#"{"name":"web_search"}"#).unwrap();
        assert!(inv.args.is_none());
        assert_eq!(inv.label(), "web_search");
    }
}
