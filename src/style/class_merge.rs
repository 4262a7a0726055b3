// SPDX-License-Identifier: MPL-2.0
//! Utility class merging.
//!
//! [`cn`] joins class lists and drops classes that a later class overrides.
//! Two classes conflict when they share a conflict group (`p-2` vs `p-4`,
//! `text-sm` vs `text-lg`) under the same variant modifiers. A group may also
//! override narrower groups: `p-4` wins over an earlier `px-2`, but an earlier
//! `p-4` survives a later `px-2`.

use std::collections::HashSet;

/// Merges class lists, keeping the last class of each conflict group.
///
/// Surviving classes keep their original relative order; exact duplicates
/// collapse onto their last occurrence. Classes the merger does not know
/// never conflict.
///
/// # Example
///
/// ```
/// use toastkit::style::cn;
///
/// assert_eq!(cn(["px-2 py-1 bg-red-500", "p-3 bg-blue-500"]), "p-3 bg-blue-500");
/// assert_eq!(cn(["text-sm text-white", "hover:text-black text-lg"]), "text-white hover:text-black text-lg");
/// ```
pub fn cn<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let inputs: Vec<S> = classes.into_iter().collect();
    let tokens: Vec<&str> = inputs
        .iter()
        .flat_map(|s| s.as_ref().split_whitespace())
        .collect();
    merge(&tokens)
}

fn merge(tokens: &[&str]) -> String {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut claimed: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for &token in tokens.iter().rev() {
        if !seen.insert(token) {
            continue;
        }
        let class = ParsedClass::parse(token);
        let Some(group) = group_of(class.base) else {
            kept.push(token);
            continue;
        };
        let scope = class.scope();
        if claimed.contains(&format!("{scope}{group}")) {
            continue;
        }
        claimed.insert(format!("{scope}{group}"));
        for narrower in overrides(group) {
            claimed.insert(format!("{scope}{narrower}"));
        }
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// A class split into variant modifiers, importance and base utility.
#[derive(Debug, PartialEq, Eq)]
struct ParsedClass<'a> {
    modifiers: Vec<&'a str>,
    important: bool,
    base: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;
        for (i, ch) in token.char_indices() {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&token[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        modifiers.sort_unstable();

        let mut base = &token[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }
        let base = base.strip_prefix('-').unwrap_or(base);

        Self {
            modifiers,
            important,
            base,
        }
    }

    /// Key prefix shared by classes that can conflict with each other.
    fn scope(&self) -> String {
        let mut scope = self.modifiers.join(":");
        scope.push(':');
        if self.important {
            scope.push('!');
        }
        scope
    }
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const FLEX_DIRECTION: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const RADII: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

const BORDER_SIDES: &[&str] = &["x", "y", "t", "r", "b", "l"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

const SHADOWS: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

/// Prefix-keyed groups, narrower prefixes before the ones they extend.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("px", "px"),
    ("py", "py"),
    ("pt", "pt"),
    ("pr", "pr"),
    ("pb", "pb"),
    ("pl", "pl"),
    ("p", "p"),
    ("mx", "mx"),
    ("my", "my"),
    ("mt", "mt"),
    ("mr", "mr"),
    ("mb", "mb"),
    ("ml", "ml"),
    ("m", "m"),
    ("min-w", "min-w"),
    ("max-w", "max-w"),
    ("min-h", "min-h"),
    ("max-h", "max-h"),
    ("size", "size"),
    ("w", "w"),
    ("h", "h"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("gap", "gap"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("inset", "inset"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("z", "z"),
    ("opacity", "opacity"),
    ("leading", "leading"),
    ("tracking", "tracking"),
    ("items", "items"),
    ("justify", "justify"),
    ("self", "self"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("overflow", "overflow"),
];

/// Returns the conflict group of a base utility, if it has one.
fn group_of(base: &str) -> Option<&'static str> {
    if DISPLAY.contains(&base) {
        return Some("display");
    }
    if POSITION.contains(&base) {
        return Some("position");
    }
    if FLEX_DIRECTION.contains(&base) {
        return Some("flex-direction");
    }
    if let Some(value) = base.strip_prefix("text-") {
        return Some(text_group(value));
    }
    if let Some(value) = base.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if base.starts_with("bg-") {
        return Some("bg-color");
    }
    if base == "border" || base.starts_with("border-") {
        return Some(border_group(base));
    }
    if base == "rounded" || base.starts_with("rounded-") {
        return Some(rounded_group(base));
    }
    if base == "shadow" {
        return Some("shadow");
    }
    if let Some(value) = base.strip_prefix("shadow-") {
        return Some(if SHADOWS.contains(&value) {
            "shadow"
        } else {
            "shadow-color"
        });
    }

    PREFIX_GROUPS.iter().find_map(|(prefix, group)| {
        base.strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .filter(|value| !value.is_empty())
            .map(|_| *group)
    })
}

fn text_group(value: &str) -> &'static str {
    if FONT_SIZES.contains(&value) || is_arbitrary_length(value) {
        "font-size"
    } else if TEXT_ALIGN.contains(&value) {
        "text-align"
    } else if value == "ellipsis" || value == "clip" {
        "text-overflow"
    } else {
        "text-color"
    }
}

fn border_group(base: &str) -> &'static str {
    let Some(value) = base.strip_prefix("border-") else {
        return "border-w";
    };
    if is_width(value) {
        return "border-w";
    }
    if BORDER_STYLES.contains(&value) {
        return "border-style";
    }
    let (side, rest) = value.split_once('-').unwrap_or((value, ""));
    if BORDER_SIDES.contains(&side) {
        if rest.is_empty() || is_width(rest) {
            return match side {
                "x" => "border-w-x",
                "y" => "border-w-y",
                "t" => "border-w-t",
                "r" => "border-w-r",
                "b" => "border-w-b",
                _ => "border-w-l",
            };
        }
        return "border-color-side";
    }
    "border-color"
}

fn rounded_group(base: &str) -> &'static str {
    let Some(value) = base.strip_prefix("rounded-") else {
        return "rounded";
    };
    if RADII.contains(&value) || value.starts_with('[') {
        return "rounded";
    }
    let corner = value.split_once('-').map_or(value, |(corner, _)| corner);
    match corner {
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => "rounded",
    }
}

/// Narrower groups that a class in `group` also overrides.
fn overrides(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "gap" => &["gap-x", "gap-y"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        _ => &[],
    }
}

fn is_width(value: &str) -> bool {
    (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())) || is_arbitrary_length(value)
}

fn is_arbitrary_length(value: &str) -> bool {
    value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .is_some_and(|inner| {
            ["px", "rem", "em", "%", "vh", "vw"]
                .iter()
                .any(|unit| inner.ends_with(unit))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_class_wins_within_group() {
        assert_eq!(cn(["p-2 p-4"]), "p-4");
        assert_eq!(cn(["bg-red-500", "bg-blue-500"]), "bg-blue-500");
    }

    #[test]
    fn unrelated_classes_survive_in_order() {
        assert_eq!(cn(["flex items-center", "gap-2 p-3"]), "flex items-center gap-2 p-3");
    }

    #[test]
    fn broad_padding_overrides_earlier_axis() {
        assert_eq!(cn(["px-2 py-1", "p-3"]), "p-3");
    }

    #[test]
    fn axis_padding_refines_earlier_broad() {
        assert_eq!(cn(["p-3", "px-2"]), "p-3 px-2");
        assert_eq!(cn(["pl-1 pr-1", "px-4"]), "px-4");
    }

    #[test]
    fn text_size_and_color_do_not_conflict() {
        assert_eq!(cn(["text-sm text-white", "text-lg"]), "text-white text-lg");
        assert_eq!(cn(["text-white text-center", "text-black"]), "text-center text-black");
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(cn(["hover:bg-red-500 bg-white", "hover:bg-blue-500"]), "bg-white hover:bg-blue-500");
        assert_eq!(cn(["md:hover:p-2", "hover:md:p-4"]), "hover:md:p-4");
    }

    #[test]
    fn important_marker_is_separate_scope() {
        assert_eq!(cn(["!p-2 p-4"]), "!p-2 p-4");
        assert_eq!(cn(["!p-2 !p-4"]), "!p-4");
    }

    #[test]
    fn negative_values_share_group() {
        assert_eq!(cn(["-mt-2 mt-4"]), "mt-4");
    }

    #[test]
    fn font_weight_and_family_are_distinct() {
        assert_eq!(cn(["font-bold font-sans", "font-medium"]), "font-sans font-medium");
    }

    #[test]
    fn border_width_color_and_style() {
        assert_eq!(
            cn(["border border-red-500 border-dashed", "border-2 border-blue-500"]),
            "border-dashed border-2 border-blue-500"
        );
        assert_eq!(cn(["border-t-2", "border-4"]), "border-4");
        assert_eq!(cn(["border-4", "border-t-2"]), "border-4 border-t-2");
    }

    #[test]
    fn rounded_corners() {
        assert_eq!(cn(["rounded-tl-md rounded-t-lg", "rounded-xl"]), "rounded-xl");
        assert_eq!(cn(["rounded", "rounded-lg"]), "rounded-lg");
    }

    #[test]
    fn display_and_position_groups() {
        assert_eq!(cn(["flex hidden"]), "hidden");
        assert_eq!(cn(["absolute relative"]), "relative");
    }

    #[test]
    fn arbitrary_values() {
        assert_eq!(cn(["w-[10px] w-full"]), "w-full");
        assert_eq!(cn(["text-[14px] text-lg text-[#333]"]), "text-lg text-[#333]");
        assert_eq!(cn(["bg-[url(a:b)] bg-black"]), "bg-black");
    }

    #[test]
    fn duplicates_collapse_to_last_position() {
        assert_eq!(cn(["shadow flex", "shadow"]), "flex shadow");
    }

    #[test]
    fn unknown_classes_are_kept() {
        assert_eq!(cn(["toast-enter", "toast-enter-active"]), "toast-enter toast-enter-active");
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert_eq!(cn(Vec::<String>::new()), "");
        assert_eq!(cn(["   ", "\tp-1\n"]), "p-1");
    }

    #[test]
    fn parse_splits_modifiers_outside_brackets() {
        let class = ParsedClass::parse("md:hover:bg-[url(x:y)]");
        assert_eq!(class.modifiers, vec!["hover", "md"]);
        assert_eq!(class.base, "bg-[url(x:y)]");
        assert!(!class.important);
    }
}
