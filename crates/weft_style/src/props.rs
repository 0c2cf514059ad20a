//! Property transform table
//!
//! A static registry mapping style property names to the token table they
//! resolve against, plus canonical renames for the two-letter spacing
//! shorthands (`mt` -> `marginTop`). Built once per process.
//!
//! Properties absent from the transform table are copied through
//! unchanged; the table is a whitelist of token-aware keys, not a schema
//! of everything a renderer may accept.

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::tokens::{StyleValue, ThemeTokens};

const SPACING_PROPERTIES: [&str; 14] = [
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "marginHorizontal",
    "marginVertical",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "paddingHorizontal",
    "paddingVertical",
];

const SPACING_SHORTHANDS: [(&str, &str); 14] = [
    ("m", "margin"),
    ("mt", "marginTop"),
    ("mr", "marginRight"),
    ("mb", "marginBottom"),
    ("ml", "marginLeft"),
    ("mh", "marginHorizontal"),
    ("mv", "marginVertical"),
    ("p", "padding"),
    ("pt", "paddingTop"),
    ("pr", "paddingRight"),
    ("pb", "paddingBottom"),
    ("pl", "paddingLeft"),
    ("ph", "paddingHorizontal"),
    ("pv", "paddingVertical"),
];

const TYPOGRAPHY_PROPERTIES: [&str; 10] = [
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontWeight",
    "letterSpacing",
    "lineHeight",
    "textAlign",
    "textDecorationLine",
    "textDecorationStyle",
    "textTransform",
];

const LAYOUT_PROPERTIES: [&str; 18] = [
    "width",
    "height",
    "minWidth",
    "maxWidth",
    "minHeight",
    "maxHeight",
    "overflow",
    "aspectRatio",
    "alignContent",
    "alignItems",
    "alignSelf",
    "justifyContent",
    "flex",
    "flexBasis",
    "flexDirection",
    "flexGrow",
    "flexShrink",
    "flexWrap",
];

const POSITION_PROPERTIES: [&str; 6] = ["position", "top", "right", "bottom", "left", "zIndex"];

const BORDER_PROPERTIES: [&str; 6] = [
    "borderBottomWidth",
    "borderLeftWidth",
    "borderRightWidth",
    "borderStyle",
    "borderTopWidth",
    "borderWidth",
];

const BORDER_RADIUS_PROPERTIES: [&str; 5] = [
    "borderRadius",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
];

const BORDER_COLOR_PROPERTIES: [&str; 5] = [
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderLeftColor",
    "borderBottomColor",
];

/// Which token table a transformable property resolves against.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PropertyKind {
    /// Resolves through the color table.
    Color,
    /// Resolves through the spacing scale.
    Spacing,
    /// Resolves through the border-radius scale.
    Radius,
}

/// Transform-table entry: the canonical property name the value is stored
/// under, and the token table it resolves against.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PropertyEntry {
    pub canonical: &'static str,
    pub kind: PropertyKind,
}

static TRANSFORMS: OnceLock<FxHashMap<&'static str, PropertyEntry>> = OnceLock::new();

fn transforms() -> &'static FxHashMap<&'static str, PropertyEntry> {
    TRANSFORMS.get_or_init(|| {
        let mut table = FxHashMap::default();
        let mut insert = |name: &'static str, canonical: &'static str, kind: PropertyKind| {
            table.insert(name, PropertyEntry { canonical, kind });
        };

        insert("color", "color", PropertyKind::Color);
        insert("backgroundColor", "backgroundColor", PropertyKind::Color);
        for name in BORDER_COLOR_PROPERTIES {
            insert(name, name, PropertyKind::Color);
        }
        for name in BORDER_RADIUS_PROPERTIES {
            insert(name, name, PropertyKind::Radius);
        }
        for name in SPACING_PROPERTIES {
            insert(name, name, PropertyKind::Spacing);
        }
        for (shorthand, canonical) in SPACING_SHORTHANDS {
            insert(shorthand, canonical, PropertyKind::Spacing);
        }
        table
    })
}

/// Transform-table lookup for one property name.
pub(crate) fn transform_entry(property: &str) -> Option<PropertyEntry> {
    transforms().get(property).copied()
}

/// Resolve a raw declared value through the token table for `kind`.
///
/// Only string values are candidates for token lookup; numbers, bools,
/// and strings that match no token pass through unchanged.
pub(crate) fn resolve_token(tokens: &ThemeTokens, kind: PropertyKind, raw: &StyleValue) -> StyleValue {
    let Some(name) = raw.as_str() else {
        return raw.clone();
    };
    let resolved = match kind {
        PropertyKind::Color => tokens.color(name).map(|c| StyleValue::Str(c.to_owned())),
        PropertyKind::Spacing => tokens.spacing(name).cloned(),
        PropertyKind::Radius => tokens.radius(name).map(StyleValue::Number),
    };
    resolved.unwrap_or_else(|| raw.clone())
}

static ALL_PROPERTIES: OnceLock<FxHashSet<&'static str>> = OnceLock::new();

/// Every style property name the system recognizes, shorthands included.
///
/// Published for the prop-extraction collaborator: keys in this set are
/// style props and get split out of a generic props bag; anything else is
/// left for the component itself.
pub fn all_style_properties() -> &'static FxHashSet<&'static str> {
    ALL_PROPERTIES.get_or_init(|| {
        let mut set = FxHashSet::default();
        set.extend(SPACING_PROPERTIES);
        set.extend(SPACING_SHORTHANDS.iter().map(|(shorthand, _)| *shorthand));
        set.extend(TYPOGRAPHY_PROPERTIES);
        set.extend(LAYOUT_PROPERTIES);
        set.extend(POSITION_PROPERTIES);
        set.extend(BORDER_PROPERTIES);
        set.extend(BORDER_RADIUS_PROPERTIES);
        set.extend(BORDER_COLOR_PROPERTIES);
        set.extend(["color", "backgroundColor", "opacity"]);
        set
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn tokens() -> ThemeTokens {
        ThemeTokens {
            colors: IndexMap::from([("accent".to_string(), "#7287fd".to_string())]),
            spacing: IndexMap::from([
                ("small".to_string(), StyleValue::Number(4.0)),
                ("half".to_string(), StyleValue::Str("50%".into())),
            ]),
            border_radii: IndexMap::from([("round".to_string(), 8.0)]),
        }
    }

    #[test]
    fn shorthands_remap_to_canonical_names() {
        let entry = transform_entry("mt").unwrap();
        assert_eq!(entry.canonical, "marginTop");
        assert_eq!(entry.kind, PropertyKind::Spacing);

        let entry = transform_entry("padding").unwrap();
        assert_eq!(entry.canonical, "padding");
    }

    #[test]
    fn token_lookup_falls_back_to_literal() {
        let tokens = tokens();
        assert_eq!(
            resolve_token(&tokens, PropertyKind::Color, &StyleValue::Str("accent".into())),
            StyleValue::Str("#7287fd".into())
        );
        // Raw color strings are not tokens and pass through.
        assert_eq!(
            resolve_token(&tokens, PropertyKind::Color, &StyleValue::Str("#ffffff".into())),
            StyleValue::Str("#ffffff".into())
        );
        // Numbers never hit the token tables.
        assert_eq!(
            resolve_token(&tokens, PropertyKind::Spacing, &StyleValue::Number(12.0)),
            StyleValue::Number(12.0)
        );
    }

    #[test]
    fn spacing_tokens_may_resolve_to_strings() {
        let tokens = tokens();
        assert_eq!(
            resolve_token(&tokens, PropertyKind::Spacing, &StyleValue::Str("half".into())),
            StyleValue::Str("50%".into())
        );
        assert_eq!(
            resolve_token(&tokens, PropertyKind::Radius, &StyleValue::Str("round".into())),
            StyleValue::Number(8.0)
        );
    }

    #[test]
    fn published_property_set_covers_every_family() {
        let all = all_style_properties();
        for name in ["mt", "marginTop", "fontSize", "flexGrow", "zIndex", "borderStyle", "borderRadius", "borderColor", "backgroundColor", "color", "opacity"] {
            assert!(all.contains(name), "missing {name}");
        }
        assert!(!all.contains("onPress"));
    }
}
