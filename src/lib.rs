//! uicue: presentational helpers for agent front-ends.
//!
//! - [`class_names`] / [`cn!`]: compose conditional class lists and resolve
//!   conflicting Tailwind utilities so the last one wins.
//! - [`tool_label`]: short status text for a tool invocation.
//!
//! ```
//! use uicue::{cn, tool_label};
//!
//! let selected = true;
//! assert_eq!(cn!("px-2 py-1", ("bg-blue-500", selected), "p-4"), "bg-blue-500 p-4");
//!
//! let args = serde_json::json!({ "command": "create" });
//! assert_eq!(tool_label("str_replace_editor", Some(&args)), "Creating file...");
//! ```

pub mod class_value;
pub mod config;
pub mod error;
pub mod labels;
pub mod merge;
pub mod ui;

pub use class_value::{ClassValue, join_classes};
pub use error::ConfigError;
pub use labels::{EditCommand, Labeler, ToolInvocation, tool_label};
pub use merge::{Merger, merge_classes};

/// Flatten `inputs` and resolve Tailwind conflicts with the default merger.
pub fn class_names(inputs: &[ClassValue]) -> String {
    merge::default_merger().merge(&join_classes(inputs))
}

/// `cn!(a, b, ...)`: [`class_names`] over any values convertible into
/// [`ClassValue`].
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::class_names(&[$($crate::ClassValue::from($value)),+])
    };
}
