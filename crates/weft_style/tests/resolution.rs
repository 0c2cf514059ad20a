use std::sync::Arc;

use indexmap::IndexMap;
use weft_style::{
    class_props, extract_style_refs, ClassRef, DefaultClasses, ResolutionContext, StylePiece,
    StyleSchema, StyleStructure, StyleValue, ThemeTokens,
};

fn tokens() -> ThemeTokens {
    ThemeTokens {
        colors: IndexMap::from([
            ("ink".to_string(), "#1a1a2e".to_string()),
            ("paper".to_string(), "#fafafa".to_string()),
        ]),
        spacing: IndexMap::from([
            ("small".to_string(), StyleValue::Number(4.0)),
            ("large".to_string(), StyleValue::Number(16.0)),
        ]),
        border_radii: IndexMap::from([("round".to_string(), 8.0)]),
    }
}

fn schema_with_defaults(defaults: Option<Vec<String>>) -> Arc<StyleSchema> {
    Arc::new(
        StyleSchema::builder(tokens())
            .base_classes(IndexMap::from([
                (
                    "reset".to_string(),
                    class_props([("margin", 0), ("padding", 0)]),
                ),
                (
                    "boxA".to_string(),
                    class_props([("color", "ink"), ("padding", "small"), ("mt", "large")]),
                ),
            ]))
            .defaults(DefaultClasses { view: defaults })
            .views(IndexMap::from([
                (
                    "card".to_string(),
                    StyleStructure::Pieces(vec![
                        StylePiece::Class("boxA".into()),
                        StylePiece::Props(class_props([
                            ("backgroundColor", "paper"),
                            ("borderRadius", "round"),
                        ])),
                    ]),
                ),
                (
                    "custom".to_string(),
                    StyleStructure::Props(class_props([("color", "paper")])),
                ),
            ])),
    )
}

fn context() -> Arc<ResolutionContext> {
    Arc::new(ResolutionContext::new(schema_with_defaults(None)))
}

#[test]
fn identical_reference_lists_share_one_cached_object() {
    let ctx = context();
    let first = ctx.resolve(&[ClassRef::name("card"), ClassRef::inline("opacity", 0.5)]);
    let second = ctx.resolve(&[ClassRef::name("card"), ClassRef::inline("opacity", 0.5)]);
    assert!(Arc::ptr_eq(&first, &second));

    // A differently-ordered list is a different cache entry.
    let swapped = ctx.resolve(&[ClassRef::inline("opacity", 0.5), ClassRef::name("card")]);
    assert!(!Arc::ptr_eq(&first, &swapped));
}

#[test]
fn later_inline_overrides_win_on_collision() {
    let ctx = context();
    let style = ctx.resolve(&[
        ClassRef::name("boxA"),
        ClassRef::inline("color", "red"),
        ClassRef::inline("color", "blue"),
    ]);
    assert_eq!(style["color"], StyleValue::Str("blue".into()));
}

#[test]
fn override_after_class_keeps_other_class_properties() {
    let ctx = context();
    let style = ctx.resolve(&[ClassRef::name("boxA"), ClassRef::inline("padding", "large")]);
    assert_eq!(style["padding"], StyleValue::Number(16.0));
    // Untouched base-class properties survive.
    assert_eq!(style["color"], StyleValue::Str("#1a1a2e".into()));
    assert_eq!(style["marginTop"], StyleValue::Number(16.0));
}

#[test]
fn default_classes_apply_first() {
    let with_defaults = ResolutionContext::new(schema_with_defaults(Some(vec!["reset".into()])));
    let without = ResolutionContext::new(schema_with_defaults(None));

    let defaulted = with_defaults.resolve(&[ClassRef::name("custom")]);
    let explicit = without.resolve(&[ClassRef::name("reset"), ClassRef::name("custom")]);
    assert_eq!(*defaulted, *explicit);

    // Caller references override defaults.
    let style = with_defaults.resolve(&[ClassRef::name("boxA")]);
    assert_eq!(style["padding"], StyleValue::Number(4.0));
    assert_eq!(style["margin"], StyleValue::Number(0.0));
}

#[test]
fn unknown_class_is_skipped_without_panicking() {
    let ctx = context();
    let style = ctx.resolve(&[ClassRef::name("doesNotExist")]);
    assert!(style.is_empty());

    // Surrounding references still apply.
    let style = ctx.resolve(&[ClassRef::name("doesNotExist"), ClassRef::name("boxA")]);
    assert_eq!(style["color"], StyleValue::Str("#1a1a2e".into()));
}

#[test]
fn shorthand_spacing_expands_to_canonical_property() {
    let ctx = context();
    let style = ctx.resolve(&[ClassRef::name("boxA")]);
    assert_eq!(style["marginTop"], StyleValue::Number(16.0));
    assert!(!style.contains_key("mt"));
}

#[test]
fn schema_swap_invalidates_cached_content() {
    let ctx = context();
    let before = ctx.resolve(&[ClassRef::name("boxA")]);
    assert_eq!(before["color"], StyleValue::Str("#1a1a2e".into()));

    // Same declarations, changed token value.
    let mut changed = tokens();
    changed.colors.insert("ink".to_string(), "#000000".to_string());
    let schema = Arc::new(
        StyleSchema::builder(changed)
            .base_classes(IndexMap::from([(
                "boxA".to_string(),
                class_props([("color", "ink"), ("padding", "small"), ("mt", "large")]),
            )]))
            .defaults(DefaultClasses::default())
            .views(IndexMap::new()),
    );
    ctx.set_schema(schema);

    let after = ctx.resolve(&[ClassRef::name("boxA")]);
    assert_eq!(after["color"], StyleValue::Str("#000000".into()));
    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn literal_only_view_round_trips_unchanged() {
    let schema = Arc::new(
        StyleSchema::builder(ThemeTokens::default())
            .base_classes(IndexMap::new())
            .defaults(DefaultClasses::default())
            .views(IndexMap::from([(
                "plain".to_string(),
                StyleStructure::Props(class_props([
                    ("fontSize", StyleValue::Number(14.0)),
                    ("overflow", StyleValue::Str("hidden".into())),
                    ("opacity", StyleValue::Number(0.5)),
                ])),
            )])),
    );
    let ctx = ResolutionContext::new(schema);
    let style = ctx.resolve(&[ClassRef::name("plain")]);
    assert_eq!(style.len(), 3);
    assert_eq!(style["fontSize"], StyleValue::Number(14.0));
    assert_eq!(style["overflow"], StyleValue::Str("hidden".into()));
    assert_eq!(style["opacity"], StyleValue::Number(0.5));
}

#[test]
fn accessor_exposes_view_color_and_spacing() {
    let ctx = context();
    let accessor = ctx.accessor();

    let style = accessor.view(&[ClassRef::name("card")]);
    assert_eq!(style["backgroundColor"], StyleValue::Str("#fafafa".into()));
    assert_eq!(style["borderRadius"], StyleValue::Number(8.0));

    assert_eq!(accessor.color("ink").as_deref(), Some("#1a1a2e"));
    assert_eq!(accessor.color("missing"), None);
    assert_eq!(accessor.spacing("small"), Some(StyleValue::Number(4.0)));

    // Accessors are bound to the same context and share its cache.
    let again = ctx.accessor().view(&[ClassRef::name("card")]);
    assert!(Arc::ptr_eq(&style, &again));
}

#[test]
fn extracted_refs_feed_straight_into_view() {
    let schema = schema_with_defaults(None);
    let ctx = Arc::new(ResolutionContext::new(Arc::clone(&schema)));

    let props: IndexMap<String, StyleValue> = IndexMap::from([
        ("card".to_string(), StyleValue::Bool(true)),
        ("pt".to_string(), StyleValue::Str("large".into())),
        ("label".to_string(), StyleValue::Str("hi".into())),
    ]);
    let extracted = extract_style_refs(&schema, &props, None);
    assert_eq!(extracted.rest.len(), 1);

    let style = ctx.accessor().view(&extracted.refs);
    assert_eq!(style["paddingTop"], StyleValue::Number(16.0));
    assert_eq!(style["backgroundColor"], StyleValue::Str("#fafafa".into()));
}
