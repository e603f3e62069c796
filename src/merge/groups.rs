/// Class-group table: which utilities set the same CSS property, and which
/// groups override others (`p-4` overrides an earlier `px-2`).
use std::borrow::Cow;
use std::collections::HashMap;

use super::validators::*;
use crate::config::CustomGroup;
use crate::error::ConfigError;

// ── Rules ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
pub enum Matcher {
    /// The class is exactly the prefix (`border`, `shadow`).
    Exact,
    /// The value after `prefix-` is one of these words.
    Words(&'static [&'static str]),
    /// The value after `prefix-` passes a validator.
    Check(fn(&str) -> bool),
}

impl Matcher {
    fn accepts(&self, value: &str) -> bool {
        match self {
            Matcher::Exact => value.is_empty(),
            Matcher::Words(words) => words.contains(&value),
            Matcher::Check(f) => !value.is_empty() && f(value),
        }
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matcher::Exact => f.write_str("Exact"),
            Matcher::Words(w) => f.debug_tuple("Words").field(w).finish(),
            Matcher::Check(_) => f.write_str("Check(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub group: Cow<'static, str>,
    /// Empty prefix means the whole class is the value (`block`, `italic`).
    pub prefix: Cow<'static, str>,
    pub matcher: Matcher,
}

impl Rule {
    fn value_of<'c>(&self, class: &'c str) -> Option<&'c str> {
        if self.prefix.is_empty() {
            return Some(class);
        }
        if class == self.prefix {
            return Some("");
        }
        class.strip_prefix(&*self.prefix)?.strip_prefix('-')
    }

    fn matches(&self, class: &str) -> bool {
        self.value_of(class).is_some_and(|v| self.matcher.accepts(v))
    }
}

fn exact(group: &'static str) -> Rule {
    Rule { group: Cow::Borrowed(group), prefix: Cow::Borrowed(group), matcher: Matcher::Exact }
}

fn exact_as(group: &'static str, class: &'static str) -> Rule {
    Rule { group: Cow::Borrowed(group), prefix: Cow::Borrowed(class), matcher: Matcher::Exact }
}

fn words(group: &'static str, prefix: &'static str, list: &'static [&'static str]) -> Rule {
    Rule { group: Cow::Borrowed(group), prefix: Cow::Borrowed(prefix), matcher: Matcher::Words(list) }
}

fn check(group: &'static str, prefix: &'static str, f: fn(&str) -> bool) -> Rule {
    Rule { group: Cow::Borrowed(group), prefix: Cow::Borrowed(prefix), matcher: Matcher::Check(f) }
}

/// Groups whose id doubles as their prefix and share one validator.
fn family(rules: &mut Vec<Rule>, groups: &[&'static str], f: fn(&str) -> bool) {
    rules.extend(groups.iter().map(|&g| check(g, g, f)));
}

// ── Composite validators ──────────────────────────────────────────────────────

fn is_number_value(v: &str) -> bool {
    is_number(v) || is_arbitrary_value(v)
}

fn is_integer_value(v: &str) -> bool {
    is_integer(v) || is_arbitrary_value(v)
}

fn is_spacing(v: &str) -> bool {
    v == "px" || is_number_value(v)
}

fn is_spacing_auto(v: &str) -> bool {
    v == "auto" || is_spacing(v)
}

fn is_inset(v: &str) -> bool {
    matches!(v, "auto" | "full") || is_spacing(v) || is_fraction(v)
}

fn is_translate(v: &str) -> bool {
    v == "full" || is_spacing(v) || is_fraction(v)
}

fn is_size(v: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "auto", "px", "full", "screen", "min", "max", "fit", "none", "prose", "svw", "lvw", "dvw",
        "svh", "lvh", "dvh",
    ];
    KEYWORDS.contains(&v)
        || v.strip_prefix("screen-").is_some_and(is_tshirt_size)
        || is_tshirt_size(v)
        || is_fraction(v)
        || is_number_value(v)
}

fn is_order(v: &str) -> bool {
    matches!(v, "first" | "last" | "none") || is_integer_value(v)
}

fn is_z_index(v: &str) -> bool {
    v == "auto" || is_integer_value(v)
}

fn is_grid_template(v: &str) -> bool {
    matches!(v, "none" | "subgrid") || is_integer_value(v)
}

fn is_grid_line(v: &str) -> bool {
    v == "auto" || is_integer_value(v)
}

fn is_grid_span(v: &str) -> bool {
    v == "full" || is_integer_value(v)
}

fn is_grid_auto(v: &str) -> bool {
    matches!(v, "auto" | "min" | "max" | "fr") || is_arbitrary_value(v)
}

fn is_blur(v: &str) -> bool {
    v == "none" || is_tshirt_size(v) || is_arbitrary_value(v)
}

fn is_font_size(v: &str) -> bool {
    v == "base" || is_tshirt_size(v) || is_arbitrary_length(v)
}

fn is_font_weight(v: &str) -> bool {
    const WEIGHTS: &[&str] = &[
        "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
    ];
    WEIGHTS.contains(&v) || is_number(v) || is_arbitrary_number(v)
}

fn is_leading(v: &str) -> bool {
    matches!(v, "none" | "tight" | "snug" | "normal" | "relaxed" | "loose") || is_number_value(v)
}

fn is_tracking(v: &str) -> bool {
    matches!(v, "tighter" | "tight" | "normal" | "wide" | "wider" | "widest") || is_arbitrary_value(v)
}

fn is_vertical_align(v: &str) -> bool {
    const ALIGN: &[&str] = &[
        "baseline", "top", "middle", "bottom", "text-top", "text-bottom", "sub", "super",
    ];
    ALIGN.contains(&v) || is_arbitrary_value(v)
}

fn is_line_width(v: &str) -> bool {
    is_number(v) || is_arbitrary_length(v)
}

fn is_radius(v: &str) -> bool {
    v == "none" || v == "full" || is_tshirt_size(v) || is_arbitrary_value(v)
}

fn is_shadow_size(v: &str) -> bool {
    v == "inner" || v == "none" || is_tshirt_size(v) || is_arbitrary_shadow(v)
}

fn is_flex(v: &str) -> bool {
    matches!(v, "auto" | "initial" | "none") || is_number(v) || is_fraction(v) || is_arbitrary_value(v)
}

fn is_bg_position(v: &str) -> bool {
    const POSITIONS: &[&str] = &[
        "bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top",
        "top",
    ];
    POSITIONS.contains(&v) || is_arbitrary_position(v)
}

fn is_bg_size(v: &str) -> bool {
    matches!(v, "auto" | "cover" | "contain") || is_arbitrary_size(v)
}

fn is_bg_image(v: &str) -> bool {
    v == "none"
        || v.starts_with("gradient-to-")
        || v.starts_with("linear-")
        || v.starts_with("radial")
        || v.starts_with("conic")
        || is_arbitrary_image(v)
}

fn is_decoration_thickness(v: &str) -> bool {
    v == "auto" || v == "from-font" || is_number(v) || is_arbitrary_length(v)
}

fn is_gradient_position(v: &str) -> bool {
    is_percent(v) || is_arbitrary_length(v)
}

fn is_stroke_width(v: &str) -> bool {
    is_number(v) || is_arbitrary_length(v) || is_arbitrary_number(v)
}

fn is_content(v: &str) -> bool {
    v == "none" || is_arbitrary_value(v)
}

fn is_list_style_type(v: &str) -> bool {
    matches!(v, "none" | "disc" | "decimal") || is_arbitrary_value(v)
}

fn is_blend_mode(v: &str) -> bool {
    BLEND_MODES.contains(&v)
}

fn is_cursor(v: &str) -> bool {
    CURSORS.contains(&v) || is_arbitrary_value(v)
}

fn is_transform_origin(v: &str) -> bool {
    const ORIGINS: &[&str] = &[
        "center", "top", "top-right", "right", "bottom-right", "bottom", "bottom-left", "left",
        "top-left",
    ];
    ORIGINS.contains(&v) || is_arbitrary_value(v)
}

// ── Default table ─────────────────────────────────────────────────────────────

const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "table", "inline-table",
    "table-caption", "table-cell", "table-column", "table-column-group", "table-footer-group",
    "table-header-group", "table-row-group", "table-row", "flow-root", "grid", "inline-grid",
    "contents", "list-item", "hidden",
];

const BREAKS: &[&str] = &["auto", "avoid", "all", "avoid-page", "page", "left", "right", "column"];

const BLEND_MODES: &[&str] = &[
    "normal", "multiply", "screen", "overlay", "darken", "lighten", "color-dodge", "color-burn",
    "hard-light", "soft-light", "difference", "exclusion", "hue", "saturation", "color",
    "luminosity", "plus-lighter",
];

const CURSORS: &[&str] = &[
    "auto", "default", "pointer", "wait", "text", "move", "help", "not-allowed", "none",
    "context-menu", "progress", "cell", "crosshair", "vertical-text", "alias", "copy", "no-drop",
    "grab", "grabbing", "all-scroll", "col-resize", "row-resize", "n-resize", "e-resize",
    "s-resize", "w-resize", "ne-resize", "nw-resize", "se-resize", "sw-resize", "ew-resize",
    "ns-resize", "nesw-resize", "nwse-resize", "zoom-in", "zoom-out",
];

/// (position group, color group, class prefix) per gradient stop.
const GRADIENT_STOPS: [(&str, &str, &str); 3] = [
    ("gradient-from-pos", "gradient-from", "from"),
    ("gradient-via-pos", "gradient-via", "via"),
    ("gradient-to-pos", "gradient-to", "to"),
];

/// (width group, color group, class prefix) per border side.
const BORDER_SIDES: [(&str, &str, &str); 8] = [
    ("border-w-x", "border-color-x", "border-x"),
    ("border-w-y", "border-color-y", "border-y"),
    ("border-w-s", "border-color-s", "border-s"),
    ("border-w-e", "border-color-e", "border-e"),
    ("border-w-t", "border-color-t", "border-t"),
    ("border-w-r", "border-color-r", "border-r"),
    ("border-w-b", "border-color-b", "border-b"),
    ("border-w-l", "border-color-l", "border-l"),
];

fn default_rules() -> Vec<Rule> {
    let mut r = Vec::with_capacity(320);

    // Layout
    r.push(words("display", "", DISPLAY));
    r.push(words("position", "", &["static", "fixed", "absolute", "relative", "sticky"]));
    r.push(words("visibility", "", &["visible", "invisible", "collapse"]));
    r.push(words("isolation", "", &["isolate", "isolation-auto"]));
    r.push(exact("container"));
    r.push(words("box", "box", &["border", "content"]));
    r.push(words("box-decoration", "box-decoration", &["slice", "clone"]));
    r.push(words("object-fit", "object", &["contain", "cover", "fill", "none", "scale-down"]));
    r.push(check("object-position", "object", is_bg_position));
    r.push(check("aspect", "aspect", |v| {
        matches!(v, "auto" | "square" | "video") || is_arbitrary_value(v)
    }));
    r.push(check("columns", "columns", |v| {
        v == "auto" || is_tshirt_size(v) || is_number_value(v)
    }));
    r.push(words("float", "float", &["right", "left", "start", "end", "none"]));
    r.push(words("clear", "clear", &["left", "right", "both", "none", "start", "end"]));
    for group in ["overflow", "overflow-x", "overflow-y"] {
        r.push(words(group, group, &["auto", "hidden", "clip", "visible", "scroll"]));
    }
    for group in ["overscroll", "overscroll-x", "overscroll-y"] {
        r.push(words(group, group, &["auto", "contain", "none"]));
    }
    family(&mut r, &[
        "inset", "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left",
    ], is_inset);
    r.push(check("z", "z", is_z_index));
    r.push(words("break-after", "break-after", BREAKS));
    r.push(words("break-before", "break-before", BREAKS));
    r.push(words("break-inside", "break-inside", &["auto", "avoid", "avoid-page", "avoid-column"]));

    // Flexbox & grid
    r.push(words("flex-direction", "flex", &["row", "row-reverse", "col", "col-reverse"]));
    r.push(words("flex-wrap", "flex", &["wrap", "wrap-reverse", "nowrap"]));
    r.push(check("flex", "flex", is_flex));
    r.push(exact("grow"));
    r.push(exact("shrink"));
    family(&mut r, &["grow", "shrink"], is_number_value);
    r.push(check("basis", "basis", is_size));
    r.push(check("order", "order", is_order));
    family(&mut r, &["grid-cols", "grid-rows"], is_grid_template);
    r.push(words("grid-flow", "grid-flow", &["row", "col", "dense", "row-dense", "col-dense"]));
    family(&mut r, &["auto-cols", "auto-rows"], is_grid_auto);
    family(&mut r, &["col-start", "col-end", "row-start", "row-end"], is_grid_line);
    family(&mut r, &["gap", "gap-x", "gap-y"], is_spacing);
    r.push(words("items", "items", &["start", "end", "center", "baseline", "stretch"]));
    r.push(words("self", "self", &["auto", "start", "end", "center", "stretch", "baseline"]));
    r.push(words(
        "place-content",
        "place-content",
        &["center", "start", "end", "between", "around", "evenly", "baseline", "stretch"],
    ));
    r.push(words("place-items", "place-items", &["start", "end", "center", "baseline", "stretch"]));
    r.push(words("place-self", "place-self", &["auto", "start", "end", "center", "stretch"]));
    r.push(words("col-start-end", "col", &["auto"]));
    r.push(check("col-start-end", "col-span", is_grid_span));
    r.push(words("row-start-end", "row", &["auto"]));
    r.push(check("row-start-end", "row-span", is_grid_span));
    r.push(words(
        "justify-content",
        "justify",
        &["normal", "start", "end", "center", "between", "around", "evenly", "stretch"],
    ));
    r.push(words("justify-items", "justify-items", &["start", "end", "center", "stretch", "normal"]));
    r.push(words("justify-self", "justify-self", &["auto", "start", "end", "center", "stretch"]));
    r.push(words(
        "align-content",
        "content",
        &["normal", "center", "start", "end", "between", "around", "evenly", "baseline", "stretch"],
    ));

    // Spacing & sizing
    family(&mut r, &["p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl"], is_spacing);
    family(&mut r, &["m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml"], is_spacing_auto);
    family(&mut r, &["w", "min-w", "max-w", "h", "min-h", "max-h", "size"], is_size);
    r.push(words("space-x-reverse", "space-x", &["reverse"]));
    r.push(check("space-x", "space-x", is_spacing));
    r.push(words("space-y-reverse", "space-y", &["reverse"]));
    r.push(check("space-y", "space-y", is_spacing));

    // Typography
    r.push(check("font-size", "text", is_font_size));
    r.push(words("text-alignment", "text", &["left", "center", "right", "justify", "start", "end"]));
    r.push(words("text-overflow", "text", &["ellipsis", "clip"]));
    r.push(words("text-overflow", "", &["truncate"]));
    r.push(words("text-wrap", "text", &["wrap", "nowrap", "balance", "pretty"]));
    r.push(check("text-opacity", "text-opacity", is_number_value));
    r.push(check("text-color", "text", is_any));
    r.push(check("font-weight", "font", is_font_weight));
    r.push(check("font-family", "font", is_any));
    r.push(words("font-style", "", &["italic", "not-italic"]));
    r.push(words("font-smoothing", "", &["antialiased", "subpixel-antialiased"]));
    r.push(words("text-decoration", "", &["underline", "overline", "line-through", "no-underline"]));
    r.push(words("text-transform", "", &["uppercase", "lowercase", "capitalize", "normal-case"]));
    r.push(words("decoration-style", "decoration", &["solid", "double", "dotted", "dashed", "wavy"]));
    r.push(check("decoration-thickness", "decoration", is_decoration_thickness));
    r.push(check("decoration-color", "decoration", is_any));
    r.push(words("list-style-position", "list", &["inside", "outside"]));
    r.push(check("list-style-type", "list", is_list_style_type));
    r.push(words("break", "break", &["normal", "words", "all", "keep"]));
    r.push(check("content", "content", is_content));
    r.push(check("leading", "leading", is_leading));
    r.push(check("tracking", "tracking", is_tracking));
    r.push(check("indent", "indent", is_spacing));
    r.push(check("align", "align", is_vertical_align));
    r.push(words(
        "whitespace",
        "whitespace",
        &["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"],
    ));
    r.push(words("hyphens", "hyphens", &["none", "manual", "auto"]));
    r.push(check("underline-offset", "underline-offset", |v| v == "auto" || is_number_value(v)));
    r.push(check("line-clamp", "line-clamp", |v| v == "none" || is_number_value(v)));
    r.push(check("list-image", "list-image", is_content));

    // Backgrounds & gradients
    r.push(words("bg-attachment", "bg", &["fixed", "local", "scroll"]));
    r.push(check("bg-position", "bg", is_bg_position));
    r.push(words(
        "bg-repeat",
        "bg",
        &["repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"],
    ));
    r.push(check("bg-size", "bg", is_bg_size));
    r.push(check("bg-image", "bg", is_bg_image));
    r.push(check("bg-color", "bg", is_any));
    r.push(words("bg-clip", "bg-clip", &["border", "padding", "content", "text"]));
    r.push(words("bg-origin", "bg-origin", &["border", "padding", "content"]));
    r.push(check("bg-opacity", "bg-opacity", is_number_value));
    r.push(check("bg-blend", "bg-blend", is_blend_mode));
    for (pos, color, prefix) in GRADIENT_STOPS {
        r.push(check(pos, prefix, is_gradient_position));
        r.push(check(color, prefix, is_any));
    }

    // Borders
    r.push(exact_as("rounded", "rounded"));
    r.push(check("rounded", "rounded", is_radius));
    for &corner in ROUNDED_CORNERS {
        r.push(exact(corner));
        r.push(check(corner, corner, is_radius));
    }
    r.push(exact_as("border-w", "border"));
    r.push(check("border-w", "border", is_line_width));
    r.push(words("border-style", "border", &["solid", "dashed", "dotted", "double", "hidden", "none"]));
    r.push(words("border-collapse", "border", &["collapse", "separate"]));
    r.push(check("border-color", "border", is_any));
    for (width, color, prefix) in BORDER_SIDES {
        r.push(exact_as(width, prefix));
        r.push(check(width, prefix, is_line_width));
        r.push(check(color, prefix, is_any));
    }
    r.push(check("border-opacity", "border-opacity", is_number_value));
    family(&mut r, &["border-spacing", "border-spacing-x", "border-spacing-y"], is_spacing);
    r.push(exact("divide-x"));
    r.push(words("divide-x-reverse", "divide-x", &["reverse"]));
    r.push(check("divide-x", "divide-x", is_line_width));
    r.push(exact("divide-y"));
    r.push(words("divide-y-reverse", "divide-y", &["reverse"]));
    r.push(check("divide-y", "divide-y", is_line_width));
    r.push(words("divide-style", "divide", &["solid", "dashed", "dotted", "double", "none"]));
    r.push(check("divide-color", "divide", is_any));
    r.push(exact_as("outline-style", "outline"));
    r.push(words("outline-style", "outline", &["none", "dashed", "dotted", "double"]));
    r.push(check("outline-w", "outline", is_line_width));
    r.push(check("outline-color", "outline", is_any));
    r.push(check("outline-offset", "outline-offset", is_line_width));
    r.push(exact_as("ring-w", "ring"));
    r.push(words("ring-w-inset", "ring", &["inset"]));
    r.push(check("ring-w", "ring", is_line_width));
    r.push(check("ring-color", "ring", is_any));
    r.push(check("ring-offset-w", "ring-offset", is_line_width));
    r.push(check("ring-offset-color", "ring-offset", is_any));
    r.push(check("ring-opacity", "ring-opacity", is_number_value));

    // Effects & filters
    r.push(exact_as("shadow", "shadow"));
    r.push(check("shadow", "shadow", is_shadow_size));
    r.push(check("shadow-color", "shadow", is_any));
    r.push(check("opacity", "opacity", is_number_value));
    r.push(check("mix-blend", "mix-blend", is_blend_mode));
    for filter in ["blur", "grayscale", "invert", "sepia", "drop-shadow", "backdrop-blur",
        "backdrop-grayscale", "backdrop-invert", "backdrop-sepia"]
    {
        r.push(exact(filter));
    }
    family(&mut r, &["blur", "drop-shadow", "backdrop-blur"], is_blur);
    family(&mut r, &[
        "brightness", "contrast", "grayscale", "hue-rotate", "invert", "saturate", "sepia",
        "backdrop-brightness", "backdrop-contrast", "backdrop-grayscale", "backdrop-hue-rotate",
        "backdrop-invert", "backdrop-opacity", "backdrop-saturate", "backdrop-sepia",
    ], is_number_value);

    // Tables
    r.push(words("table-layout", "table", &["auto", "fixed"]));
    r.push(words("caption", "caption", &["top", "bottom"]));

    // Transitions, animation & transforms
    r.push(exact("transition"));
    r.push(check("transition", "transition", |v| {
        matches!(v, "none" | "all" | "colors" | "opacity" | "shadow" | "transform")
            || is_arbitrary_value(v)
    }));
    r.push(exact("transform"));
    r.push(words("transform", "transform", &["gpu", "cpu", "none"]));
    family(&mut r, &["duration", "delay"], is_number_value);
    r.push(check("ease", "ease", |v| {
        matches!(v, "linear" | "in" | "out" | "in-out") || is_arbitrary_value(v)
    }));
    r.push(check("animate", "animate", |v| {
        matches!(v, "none" | "spin" | "ping" | "pulse" | "bounce") || is_arbitrary_value(v)
    }));
    family(&mut r, &["scale", "scale-x", "scale-y", "rotate", "skew-x", "skew-y"], is_number_value);
    family(&mut r, &["translate-x", "translate-y"], is_translate);
    r.push(check("origin", "origin", is_transform_origin));

    // Interactivity & SVG
    r.push(check("cursor", "cursor", is_cursor));
    r.push(words("select", "select", &["none", "text", "all", "auto"]));
    r.push(exact("resize"));
    r.push(words("resize", "resize", &["none", "x", "y"]));
    r.push(words("pointer-events", "pointer-events", &["none", "auto"]));
    r.push(words("appearance", "appearance", &["none", "auto"]));
    r.push(words("scroll-behavior", "scroll", &["auto", "smooth"]));
    r.push(words("touch", "touch", &["auto", "none", "manipulation"]));
    r.push(words("touch-x", "touch", &["pan-x", "pan-left", "pan-right"]));
    r.push(words("touch-y", "touch", &["pan-y", "pan-up", "pan-down"]));
    r.push(words("touch-pz", "touch", &["pinch-zoom"]));
    r.push(check("will-change", "will-change", |v| {
        matches!(v, "auto" | "scroll" | "contents" | "transform") || is_arbitrary_value(v)
    }));
    family(&mut r, &["accent", "caret", "fill"], is_any);
    r.push(check("stroke-w", "stroke", is_stroke_width));
    r.push(check("stroke", "stroke", is_any));

    // Accessibility
    r.push(words("sr", "", &["sr-only", "not-sr-only"]));

    r
}

const ROUNDED_CORNERS: &[&str] = &[
    "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-ss",
    "rounded-se", "rounded-ee", "rounded-es", "rounded-tl", "rounded-tr", "rounded-br",
    "rounded-bl",
];

const CONFLICTS: &[(&str, &[&str])] = &[
    ("overflow", &["overflow-x", "overflow-y"]),
    ("overscroll", &["overscroll-x", "overscroll-y"]),
    ("inset", &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"]),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("flex", &["basis", "grow", "shrink"]),
    ("gap", &["gap-x", "gap-y"]),
    ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    ("line-clamp", &["display", "overflow"]),
    ("rounded", ROUNDED_CORNERS),
    ("rounded-s", &["rounded-ss", "rounded-es"]),
    ("rounded-e", &["rounded-se", "rounded-ee"]),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    ("border-spacing", &["border-spacing-x", "border-spacing-y"]),
    ("border-w", &[
        "border-w-x", "border-w-y", "border-w-s", "border-w-e", "border-w-t", "border-w-r",
        "border-w-b", "border-w-l",
    ]),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    ("border-color", &[
        "border-color-x", "border-color-y", "border-color-s", "border-color-e",
        "border-color-t", "border-color-r", "border-color-b", "border-color-l",
    ]),
    ("border-color-x", &["border-color-r", "border-color-l"]),
    ("border-color-y", &["border-color-t", "border-color-b"]),
    ("scale", &["scale-x", "scale-y"]),
    ("touch", &["touch-x", "touch-y", "touch-pz"]),
    ("touch-x", &["touch"]),
    ("touch-y", &["touch"]),
    ("touch-pz", &["touch"]),
];

// ── Table ─────────────────────────────────────────────────────────────────────

type GroupId = Cow<'static, str>;

#[derive(Debug, Clone)]
pub struct ClassTable {
    /// Longest prefix first; declaration order among equal lengths.
    rules: Vec<Rule>,
    conflicts: HashMap<GroupId, Vec<GroupId>>,
    postfix_conflicts: HashMap<GroupId, Vec<GroupId>>,
}

impl Default for ClassTable {
    fn default() -> Self {
        Self::build(Vec::new())
    }
}

impl ClassTable {
    /// Default table extended with config-defined groups. Custom rules win
    /// over built-in rules with an equally long prefix.
    pub fn with_custom(groups: &[CustomGroup]) -> Result<Self, ConfigError> {
        let mut rules = Vec::new();
        let mut conflicts = Vec::new();
        for group in groups {
            let id = group.id.trim();
            if id.is_empty() {
                return Err(ConfigError::EmptyGroupId);
            }
            if group.classes.is_empty() && group.prefixes.is_empty() {
                return Err(ConfigError::EmptyGroup(id.to_string()));
            }
            let gid: GroupId = Cow::Owned(id.to_string());
            for class in &group.classes {
                rules.push(Rule {
                    group: gid.clone(),
                    prefix: Cow::Owned(class.clone()),
                    matcher: Matcher::Exact,
                });
            }
            for prefix in &group.prefixes {
                for matcher in [Matcher::Exact, Matcher::Check(is_any)] {
                    rules.push(Rule {
                        group: gid.clone(),
                        prefix: Cow::Owned(prefix.clone()),
                        matcher,
                    });
                }
            }
            if !group.conflicts.is_empty() {
                conflicts.push((gid, group.conflicts.clone()));
            }
        }

        let mut table = Self::build(rules);
        for (gid, targets) in conflicts {
            if let Some(target) = targets.iter().find(|t| !table.knows_group(t)) {
                return Err(ConfigError::UnknownConflict {
                    group: gid.into_owned(),
                    target: target.clone(),
                });
            }
            table
                .conflicts
                .entry(gid)
                .or_default()
                .extend(targets.into_iter().map(Cow::Owned));
        }
        Ok(table)
    }

    fn build(custom: Vec<Rule>) -> Self {
        let mut rules = custom;
        rules.extend(default_rules());
        rules.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));

        let mut conflicts: HashMap<GroupId, Vec<GroupId>> = HashMap::new();
        for &(group, targets) in CONFLICTS {
            conflicts
                .entry(Cow::Borrowed(group))
                .or_default()
                .extend(targets.iter().map(|t| Cow::Borrowed(*t)));
        }

        let mut postfix_conflicts = HashMap::new();
        postfix_conflicts.insert(Cow::Borrowed("font-size"), vec![Cow::Borrowed("leading")]);

        Self { rules, conflicts, postfix_conflicts }
    }

    fn knows_group(&self, id: &str) -> bool {
        self.rules.iter().any(|r| r.group == id)
    }

    /// Group id for a base class (modifiers, `!`, negative sign and prefix
    /// already removed), or None when the class is not a known utility.
    pub fn group_of<'t>(&'t self, class: &str) -> Option<Cow<'t, str>> {
        if let Some(inner) = arbitrary_inner(class) {
            let property = inner.split_once(':').map(|(p, _)| p).unwrap_or("");
            return (!property.is_empty()).then(|| Cow::Owned(format!("arbitrary..{property}")));
        }
        self.rules
            .iter()
            .find(|rule| rule.matches(class))
            .map(|rule| Cow::Borrowed(&*rule.group))
    }

    /// Groups overridden by `group`; a postfix modifier adds its own set.
    pub fn conflicts_of(&self, group: &str, with_postfix: bool) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .conflicts
            .get(group)
            .map(|v| v.iter().map(|g| &**g).collect())
            .unwrap_or_default();
        if with_postfix {
            if let Some(extra) = self.postfix_conflicts.get(group) {
                out.extend(extra.iter().map(|g| &**g));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(class: &str) -> Option<String> {
        ClassTable::default().group_of(class).map(|g| g.into_owned())
    }

    #[test]
    fn test_shared_prefixes_resolve_by_value() {
        assert_eq!(group("text-lg").as_deref(), Some("font-size"));
        assert_eq!(group("text-[12px]").as_deref(), Some("font-size"));
        assert_eq!(group("text-center").as_deref(), Some("text-alignment"));
        assert_eq!(group("text-red-500").as_deref(), Some("text-color"));
        assert_eq!(group("text-[#fff]").as_deref(), Some("text-color"));
        assert_eq!(group("font-bold").as_deref(), Some("font-weight"));
        assert_eq!(group("font-mono").as_deref(), Some("font-family"));
    }

    #[test]
    fn test_borders_and_rounded() {
        assert_eq!(group("border").as_deref(), Some("border-w"));
        assert_eq!(group("border-2").as_deref(), Some("border-w"));
        assert_eq!(group("border-dashed").as_deref(), Some("border-style"));
        assert_eq!(group("border-red-500").as_deref(), Some("border-color"));
        assert_eq!(group("border-t-2").as_deref(), Some("border-w-t"));
        assert_eq!(group("border-t").as_deref(), Some("border-w-t"));
        assert_eq!(group("border-t-red-500").as_deref(), Some("border-color-t"));
        assert_eq!(group("border-transparent").as_deref(), Some("border-color"));
        assert_eq!(group("border-spacing-2").as_deref(), Some("border-spacing"));
        assert_eq!(group("rounded").as_deref(), Some("rounded"));
        assert_eq!(group("rounded-lg").as_deref(), Some("rounded"));
        assert_eq!(group("rounded-tl-lg").as_deref(), Some("rounded-tl"));
        assert_eq!(group("rounded-t").as_deref(), Some("rounded-t"));
    }

    #[test]
    fn test_keyword_utilities() {
        assert_eq!(group("flex").as_deref(), Some("display"));
        assert_eq!(group("flex-1").as_deref(), Some("flex"));
        assert_eq!(group("flex-col").as_deref(), Some("flex-direction"));
        assert_eq!(group("hidden").as_deref(), Some("display"));
        assert_eq!(group("table").as_deref(), Some("display"));
        assert_eq!(group("table-fixed").as_deref(), Some("table-layout"));
        assert_eq!(group("truncate").as_deref(), Some("text-overflow"));
        assert_eq!(group("text-ellipsis").as_deref(), Some("text-overflow"));
        assert_eq!(group("absolute").as_deref(), Some("position"));
        assert_eq!(group("content-center").as_deref(), Some("align-content"));
        assert_eq!(group("contents").as_deref(), Some("display"));
    }

    #[test]
    fn test_backgrounds() {
        assert_eq!(group("bg-red-500").as_deref(), Some("bg-color"));
        assert_eq!(group("bg-[#B91C1C]").as_deref(), Some("bg-color"));
        assert_eq!(group("bg-cover").as_deref(), Some("bg-size"));
        assert_eq!(group("bg-center").as_deref(), Some("bg-position"));
        assert_eq!(group("bg-gradient-to-r").as_deref(), Some("bg-image"));
        assert_eq!(group("bg-[url(/a.png)]").as_deref(), Some("bg-image"));
        assert_eq!(group("bg-clip-text").as_deref(), Some("bg-clip"));
        assert_eq!(group("from-10%").as_deref(), Some("gradient-from-pos"));
        assert_eq!(group("from-red-500").as_deref(), Some("gradient-from"));
    }

    #[test]
    fn test_spacing_prefixes_do_not_bleed() {
        assert_eq!(group("p-2").as_deref(), Some("p"));
        assert_eq!(group("px-2").as_deref(), Some("px"));
        assert_eq!(group("min-w-0").as_deref(), Some("min-w"));
        assert_eq!(group("inset-x-0").as_deref(), Some("inset-x"));
        assert_eq!(group("space-x-reverse").as_deref(), Some("space-x-reverse"));
        assert_eq!(group("space-x-4").as_deref(), Some("space-x"));
    }

    #[test]
    fn test_arbitrary_properties_and_unknowns() {
        assert_eq!(group("[mask-type:luminance]").as_deref(), Some("arbitrary..mask-type"));
        assert_eq!(group("[whatever]"), None);
        assert_eq!(group("btn-primary"), None);
        assert_eq!(group("foo"), None);
    }

    #[test]
    fn test_lookalikes_stay_unknown() {
        for class in [
            "top-nav", "left-rail", "inset-card", "order-summary", "select-wrapper", "z-stack",
            "cursor-tooltip", "resize-handle", "touch-target", "grow-box", "p-card", "m-tile",
            "w-sidebar", "h-header", "gap-row", "origin-badge", "animate-me", "align-icons",
            "scale-x-wide", "caption-text", "opacity-fade",
        ] {
            assert_eq!(group(class), None, "{class}");
        }
    }

    #[test]
    fn test_validated_values() {
        assert_eq!(group("top-0").as_deref(), Some("top"));
        assert_eq!(group("top-1/2").as_deref(), Some("top"));
        assert_eq!(group("top-[3px]").as_deref(), Some("top"));
        assert_eq!(group("order-first").as_deref(), Some("order"));
        assert_eq!(group("order-12").as_deref(), Some("order"));
        assert_eq!(group("order-1.5"), None);
        assert_eq!(group("z-auto").as_deref(), Some("z"));
        assert_eq!(group("mx-auto").as_deref(), Some("mx"));
        assert_eq!(group("px-auto"), None);
        assert_eq!(group("max-w-screen-lg").as_deref(), Some("max-w"));
        assert_eq!(group("w-fit").as_deref(), Some("w"));
        assert_eq!(group("select-none").as_deref(), Some("select"));
        assert_eq!(group("cursor-not-allowed").as_deref(), Some("cursor"));
        assert_eq!(group("leading-tight").as_deref(), Some("leading"));
        assert_eq!(group("scale-x-75").as_deref(), Some("scale-x"));
        assert_eq!(group("touch-pan-x").as_deref(), Some("touch-x"));
        assert_eq!(group("touch-pan-up").as_deref(), Some("touch-y"));
        assert_eq!(group("touch-pinch-zoom").as_deref(), Some("touch-pz"));
        assert_eq!(group("touch-none").as_deref(), Some("touch"));
        assert_eq!(group("grid-cols-[1fr_2fr]").as_deref(), Some("grid-cols"));
    }

    #[test]
    fn test_conflicts() {
        let table = ClassTable::default();
        assert!(table.conflicts_of("p", false).contains(&"px"));
        assert!(table.conflicts_of("rounded", false).contains(&"rounded-tl"));
        assert!(!table.conflicts_of("font-size", false).contains(&"leading"));
        assert!(table.conflicts_of("font-size", true).contains(&"leading"));
        assert!(table.conflicts_of("text-color", false).is_empty());
        assert!(table.conflicts_of("scale", false).contains(&"scale-y"));
        assert!(table.conflicts_of("touch", false).contains(&"touch-pz"));
        assert!(table.conflicts_of("touch-x", false).contains(&"touch"));
    }

    #[test]
    fn test_custom_groups() {
        let groups = vec![CustomGroup {
            id: "btn-size".into(),
            classes: vec!["btn-sm".into(), "btn-lg".into()],
            prefixes: vec!["btn-w".into()],
            conflicts: vec!["w".into()],
        }];
        let table = ClassTable::with_custom(&groups).unwrap();
        assert_eq!(table.group_of("btn-sm").as_deref(), Some("btn-size"));
        assert_eq!(table.group_of("btn-w-10").as_deref(), Some("btn-size"));
        assert_eq!(table.group_of("btn-xl"), None);
        assert!(table.conflicts_of("btn-size", false).contains(&"w"));
    }

    #[test]
    fn test_custom_group_errors() {
        let unknown = vec![CustomGroup {
            id: "card".into(),
            classes: vec!["card".into()],
            prefixes: vec![],
            conflicts: vec!["no-such-group".into()],
        }];
        assert!(matches!(
            ClassTable::with_custom(&unknown),
            Err(ConfigError::UnknownConflict { .. })
        ));

        let empty = vec![CustomGroup { id: "  ".into(), ..Default::default() }];
        assert!(matches!(ClassTable::with_custom(&empty), Err(ConfigError::EmptyGroupId)));

        let hollow = vec![CustomGroup { id: "x".into(), ..Default::default() }];
        assert!(matches!(ClassTable::with_custom(&hollow), Err(ConfigError::EmptyGroup(_))));
    }
}
