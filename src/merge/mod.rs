/// Tailwind conflict resolution.
///
/// Classes are scanned from last to first. Each class claims its
/// `modifiers + group` slot plus the slots of every group it overrides; an
/// earlier class whose slot is already claimed is dropped. Unknown classes
/// are kept untouched; a repeated unknown class keeps its first position.
pub mod groups;
pub mod parse;
pub mod validators;

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::config::{CustomGroup, ResolvedConfig};
use crate::error::ConfigError;
use groups::ClassTable;
use parse::{ParsedClass, modifier_key, parse_class};
use validators::arbitrary_inner;

pub const DEFAULT_SEPARATOR: &str = ":";

static DEFAULT_MERGER: LazyLock<Merger> = LazyLock::new(Merger::default);

/// Resolve conflicts in `classes` with the built-in Tailwind table.
pub fn merge_classes(classes: &str) -> String {
    DEFAULT_MERGER.merge(classes)
}

/// Shared default merger (no prefix, `:` separator, no custom groups).
pub fn default_merger() -> &'static Merger {
    &DEFAULT_MERGER
}

#[derive(Debug, Clone)]
pub struct Merger {
    table: ClassTable,
    /// Tailwind `prefix` option, e.g. `tw-`. Empty means none.
    prefix: String,
    separator: String,
}

impl Default for Merger {
    fn default() -> Self {
        Self {
            table: ClassTable::default(),
            prefix: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Merger {
    pub fn with_options(
        prefix: &str,
        separator: &str,
        groups: &[CustomGroup],
    ) -> Result<Self, ConfigError> {
        if separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        let table = if groups.is_empty() {
            ClassTable::default()
        } else {
            ClassTable::with_custom(groups)?
        };
        debug!(prefix, separator, custom_groups = groups.len(), "class merger ready");
        Ok(Self {
            table,
            prefix: prefix.to_string(),
            separator: separator.to_string(),
        })
    }

    pub fn from_config(config: &ResolvedConfig) -> Result<Self, ConfigError> {
        Self::with_options(&config.prefix, &config.separator, &config.groups)
    }

    /// Merge a whitespace-separated class list; later classes win.
    pub fn merge(&self, classes: &str) -> String {
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        let mut claimed: HashSet<String> = HashSet::with_capacity(tokens.len() * 2);
        // (token, known utility)
        let mut kept: Vec<(&str, bool)> = Vec::with_capacity(tokens.len());

        for &token in tokens.iter().rev() {
            let parsed = parse_class(token, &self.separator);
            let Some((group, with_postfix)) = self.classify(&parsed) else {
                kept.push((token, false));
                continue;
            };

            let mut modifiers = modifier_key(&parsed.modifiers, &self.separator);
            if parsed.important {
                modifiers.push('!');
            }
            if !claimed.insert(slot(&modifiers, &group)) {
                trace!(class = token, group = %group, "dropped overridden class");
                continue;
            }
            for overridden in self.table.conflicts_of(&group, with_postfix) {
                claimed.insert(slot(&modifiers, overridden));
            }
            kept.push((token, true));
        }

        kept.reverse();
        let mut seen_unknown: HashSet<&str> = HashSet::new();
        let mut out: Vec<&str> = Vec::with_capacity(kept.len());
        for (token, known) in kept {
            if known || seen_unknown.insert(token) {
                out.push(token);
            } else {
                trace!(class = token, "dropped duplicate class");
            }
        }
        out.join(" ")
    }

    /// Group id for a parsed class and whether it was found via a postfix
    /// modifier (`text-lg/7`).
    fn classify(&self, parsed: &ParsedClass<'_>) -> Option<(Cow<'_, str>, bool)> {
        if parsed.postfix_at.is_some() {
            if let Some(group) = self.lookup(parsed.base_without_postfix()) {
                return Some((group, true));
            }
        }
        self.lookup(parsed.base).map(|group| (group, false))
    }

    fn lookup(&self, base: &str) -> Option<Cow<'_, str>> {
        let base = match base.strip_prefix('-') {
            Some(rest) if !rest.is_empty() => rest,
            _ => base,
        };
        let base = match base.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest,
            // `[prop:value]` carries no utility name to prefix
            None if arbitrary_inner(base).is_some() => base,
            None => return None,
        };
        self.table.group_of(base)
    }
}

fn slot(modifiers: &str, group: &str) -> String {
    format!("{modifiers}|{group}")
}
