/// Splitting a utility class into modifiers, importance, base and postfix.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// Variant prefixes in source order (`hover`, `md`, `[&>*]`).
    pub modifiers: Vec<&'a str>,
    /// `!p-2` or `p-2!`.
    pub important: bool,
    /// Utility without modifiers or the important marker.
    pub base: &'a str,
    /// Byte offset of a top-level `/` inside `base` (`bg-red-500/50`).
    pub postfix_at: Option<usize>,
}

impl<'a> ParsedClass<'a> {
    /// Base with any postfix modifier removed.
    pub fn base_without_postfix(&self) -> &'a str {
        match self.postfix_at {
            Some(at) => &self.base[..at],
            None => self.base,
        }
    }
}

/// Parse `class` using `separator` between variants. Separators and slashes
/// inside `[...]` or `(...)` are part of the value, not structure.
pub fn parse_class<'a>(class: &'a str, separator: &str) -> ParsedClass<'a> {
    let mut modifiers = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    let mut slash = None;

    for (i, ch) in class.char_indices() {
        if i < start {
            continue;
        }
        if depth == 0 {
            if !separator.is_empty() && class[i..].starts_with(separator) {
                modifiers.push(&class[start..i]);
                start = i + separator.len();
                continue;
            }
            if ch == '/' {
                slash = Some(i);
                continue;
            }
        }
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            _ => {}
        }
    }

    let rest = &class[start..];
    let (important, base_start, base) = if let Some(b) = rest.strip_prefix('!') {
        (true, start + 1, b)
    } else if let Some(b) = rest.strip_suffix('!') {
        (true, start, b)
    } else {
        (false, start, rest)
    };

    let postfix_at = slash
        .filter(|&at| at > base_start && at < base_start + base.len())
        .map(|at| at - base_start);

    ParsedClass {
        modifiers,
        important,
        base,
        postfix_at,
    }
}

/// Canonical key for a modifier list. Ordinary variants commute, so runs of
/// them are sorted; arbitrary variants (`[&>*]`) keep their position.
pub fn modifier_key(modifiers: &[&str], separator: &str) -> String {
    let mut sorted: Vec<&str> = Vec::with_capacity(modifiers.len());
    let mut run: Vec<&str> = Vec::new();
    for &m in modifiers {
        if m.starts_with('[') {
            run.sort_unstable();
            sorted.append(&mut run);
            sorted.push(m);
        } else {
            run.push(m);
        }
    }
    run.sort_unstable();
    sorted.append(&mut run);
    sorted.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_class() {
        let p = parse_class("p-4", ":");
        assert!(p.modifiers.is_empty());
        assert!(!p.important);
        assert_eq!(p.base, "p-4");
        assert_eq!(p.postfix_at, None);
    }

    #[test]
    fn test_modifiers_and_important() {
        let p = parse_class("md:hover:!bg-red-500", ":");
        assert_eq!(p.modifiers, vec!["md", "hover"]);
        assert!(p.important);
        assert_eq!(p.base, "bg-red-500");

        let p = parse_class("hover:p-2!", ":");
        assert!(p.important);
        assert_eq!(p.base, "p-2");
    }

    #[test]
    fn test_brackets_hide_separators() {
        let p = parse_class("[&:nth-child(3)]:py-0", ":");
        assert_eq!(p.modifiers, vec!["[&:nth-child(3)]"]);
        assert_eq!(p.base, "py-0");

        let p = parse_class("[mask-type:luminance]", ":");
        assert!(p.modifiers.is_empty());
        assert_eq!(p.base, "[mask-type:luminance]");
    }

    #[test]
    fn test_postfix_modifier() {
        let p = parse_class("hover:bg-red-500/50", ":");
        assert_eq!(p.base, "bg-red-500/50");
        assert_eq!(p.base_without_postfix(), "bg-red-500");

        let p = parse_class("!text-lg/7", ":");
        assert_eq!(p.base_without_postfix(), "text-lg");

        // Slash inside an arbitrary value is not a postfix.
        let p = parse_class("bg-[url(/a/b.png)]", ":");
        assert_eq!(p.postfix_at, None);
    }

    #[test]
    fn test_custom_separator() {
        let p = parse_class("hover__focus__p-2", "__");
        assert_eq!(p.modifiers, vec!["hover", "focus"]);
        assert_eq!(p.base, "p-2");
    }

    #[test]
    fn test_modifier_key_sorting() {
        assert_eq!(modifier_key(&["hover", "focus"], ":"), "focus:hover");
        assert_eq!(
            modifier_key(&["hover", "[&>*]", "md", "focus"], ":"),
            "hover:[&>*]:focus:md"
        );
        assert_eq!(modifier_key(&[], ":"), "");
    }
}
