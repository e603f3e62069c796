/// Value validators used by the class-group table.
///
/// Each validator receives the part of a utility after its prefix, e.g. `"2"`
/// for `p-2` or `"[12px]"` for `text-[12px]`.

// ── Plain values ──────────────────────────────────────────────────────────────

pub fn is_any(_value: &str) -> bool {
    true
}

pub fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite)
}

pub fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.parse::<i64>().is_ok()
}

/// `1/2`, `2/3` style fractions.
pub fn is_fraction(value: &str) -> bool {
    match value.split_once('/') {
        Some((num, den)) => is_number(num) && is_number(den),
        None => false,
    }
}

pub fn is_percent(value: &str) -> bool {
    value.strip_suffix('%').is_some_and(is_number)
}

/// `xs`, `sm`, `md`, `lg`, `xl`, optionally led by a number: `2xl`, `3.5xl`.
pub fn is_tshirt_size(value: &str) -> bool {
    const SIZES: &[&str] = &["xs", "sm", "md", "lg", "xl"];
    SIZES.iter().any(|size| {
        value
            .strip_suffix(size)
            .is_some_and(|lead| lead.is_empty() || is_number(lead))
    })
}

// ── Arbitrary values ──────────────────────────────────────────────────────────

/// Contents of `[...]`, or None when the value is not bracketed.
pub fn arbitrary_inner(value: &str) -> Option<&str> {
    value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .filter(|inner| !inner.is_empty())
}

/// Explicit type hint inside an arbitrary value: `[length:var(--x)]` → `length`.
fn arbitrary_label(inner: &str) -> Option<&str> {
    let (label, _) = inner.split_once(':')?;
    (!label.is_empty() && label.chars().all(|c| c.is_ascii_lowercase() || c == '-'))
        .then_some(label)
}

fn arbitrary_matches(value: &str, labels: &[&str], test: fn(&str) -> bool) -> bool {
    let Some(inner) = arbitrary_inner(value) else {
        return false;
    };
    match arbitrary_label(inner) {
        Some(label) => labels.contains(&label),
        None => test(inner),
    }
}

pub fn is_arbitrary_value(value: &str) -> bool {
    arbitrary_inner(value).is_some()
}

pub fn is_arbitrary_length(value: &str) -> bool {
    arbitrary_matches(value, &["length"], is_length_only)
}

pub fn is_arbitrary_number(value: &str) -> bool {
    arbitrary_matches(value, &["number"], is_number)
}

pub fn is_arbitrary_size(value: &str) -> bool {
    arbitrary_matches(value, &["length", "size", "percentage"], |_| false)
}

pub fn is_arbitrary_position(value: &str) -> bool {
    arbitrary_matches(value, &["position", "percentage"], |_| false)
}

pub fn is_arbitrary_image(value: &str) -> bool {
    arbitrary_matches(value, &["image", "url"], is_image)
}

pub fn is_arbitrary_shadow(value: &str) -> bool {
    arbitrary_matches(value, &["shadow"], is_shadow)
}

// ── CSS value sniffing ────────────────────────────────────────────────────────

const LENGTH_UNITS: &[&str] = &[
    "cqmin", "cqmax", "vmin", "vmax", "rem", "rlh", "dvh", "dvw", "svh", "svw", "lvh", "lvw",
    "cap", "cqw", "cqh", "cqi", "cqb", "px", "em", "vh", "vw", "vi", "vb", "pt", "pc", "in",
    "cm", "mm", "ch", "ex", "lh", "%",
];

const COLOR_FUNCTIONS: &[&str] = &[
    "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(",
];

const IMAGE_FUNCTIONS: &[&str] = &[
    "url(",
    "image(",
    "image-set(",
    "cross-fade(",
    "element(",
    "linear-gradient(",
    "radial-gradient(",
    "conic-gradient(",
    "repeating-linear-gradient(",
    "repeating-radial-gradient(",
    "repeating-conic-gradient(",
];

fn is_length_only(value: &str) -> bool {
    if COLOR_FUNCTIONS.iter().any(|f| value.starts_with(f)) {
        return false;
    }
    value == "0"
        || ["calc(", "min(", "max(", "clamp("]
            .iter()
            .any(|f| value.contains(f))
        || has_unit_after_digit(value)
}

/// True when some run of digits is directly followed by a CSS length unit.
fn has_unit_after_digit(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.iter().enumerate().any(|(i, b)| {
        b.is_ascii_digit() && {
            let rest = &value[i + 1..];
            LENGTH_UNITS.iter().any(|unit| rest.starts_with(unit))
        }
    })
}

fn is_image(value: &str) -> bool {
    IMAGE_FUNCTIONS.iter().any(|f| value.starts_with(f))
}

/// `0_35px_60px_-15px_rgba(0,0,0,0.3)` or `inset_0_1px_0_0`.
fn is_shadow(value: &str) -> bool {
    let value = value.strip_prefix("inset_").unwrap_or(value);
    let mut parts = value.split('_');
    let is_offset = |p: Option<&str>| {
        p.is_some_and(|p| {
            let p = p.strip_prefix('-').unwrap_or(p);
            p == "0" || has_unit_after_digit(p)
        })
    };
    is_offset(parts.next()) && is_offset(parts.next())
}
