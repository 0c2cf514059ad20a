//! Theme schema and staged declaration builder
//!
//! Declarations happen in a fixed order enforced by the builder's types:
//! tokens, then base classes, then default classes, then views. Views can
//! therefore only reference base classes that already exist, and defaults
//! only name declared base classes. No semantic validation happens here;
//! an unknown reference surfaces at compile or resolution time.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::tokens::{StyleValue, ThemeTokens};

/// Flat map of style property -> declared value, in declaration order.
pub type ClassProps = IndexMap<String, StyleValue>;

/// One piece of a view's style structure: a base-class reference or a
/// literal property map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StylePiece {
    /// Reference to a declared base class by name.
    Class(String),
    /// Literal properties applied in place.
    Props(ClassProps),
}

/// A view declaration: either a single flat property map, or an ordered
/// list of pieces. Later pieces override earlier ones on key collision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleStructure {
    Props(ClassProps),
    Pieces(Vec<StylePiece>),
}

impl From<ClassProps> for StyleStructure {
    fn from(props: ClassProps) -> Self {
        Self::Props(props)
    }
}

impl From<Vec<StylePiece>> for StyleStructure {
    fn from(pieces: Vec<StylePiece>) -> Self {
        Self::Pieces(pieces)
    }
}

/// Base-class names implicitly prepended to resolution calls.
///
/// Only the `view` channel exists today; the struct leaves room for more
/// channels (text, image) without breaking the builder staging.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultClasses {
    /// Prepended, in order, to every `view()` reference list.
    pub view: Option<Vec<String>>,
}

/// Convenience constructor for a [`ClassProps`] map.
///
/// ```
/// use weft_style::class_props;
///
/// let card = class_props([("padding", "large"), ("backgroundColor", "surface")]);
/// assert_eq!(card.len(), 2);
/// ```
pub fn class_props<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> ClassProps
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Builder stage 1: tokens are set, base classes come next.
#[derive(Debug)]
pub struct ThemeBuilder {
    tokens: ThemeTokens,
}

/// Builder stage 2: base classes are set, defaults come next.
#[derive(Debug)]
pub struct ThemeBuilderWithBases {
    tokens: ThemeTokens,
    base_classes: IndexMap<String, ClassProps>,
}

/// Builder stage 3: defaults are set, views complete the schema.
#[derive(Debug)]
pub struct ThemeBuilderWithDefaults {
    tokens: ThemeTokens,
    base_classes: IndexMap<String, ClassProps>,
    defaults: DefaultClasses,
}

impl ThemeBuilder {
    /// Declare the reusable base classes.
    pub fn base_classes(self, base_classes: IndexMap<String, ClassProps>) -> ThemeBuilderWithBases {
        ThemeBuilderWithBases {
            tokens: self.tokens,
            base_classes,
        }
    }
}

impl ThemeBuilderWithBases {
    /// Declare the default class lists.
    pub fn defaults(self, defaults: DefaultClasses) -> ThemeBuilderWithDefaults {
        ThemeBuilderWithDefaults {
            tokens: self.tokens,
            base_classes: self.base_classes,
            defaults,
        }
    }
}

impl ThemeBuilderWithDefaults {
    /// Declare the composed views and produce the immutable schema.
    pub fn views(self, views: IndexMap<String, StyleStructure>) -> StyleSchema {
        let base_names: FxHashSet<String> = self.base_classes.keys().cloned().collect();
        let view_names: FxHashSet<String> = views.keys().cloned().collect();
        let class_names = base_names.union(&view_names).cloned().collect();
        StyleSchema {
            tokens: self.tokens,
            base_classes: self.base_classes,
            defaults: self.defaults,
            views,
            base_names,
            view_names,
            class_names,
        }
    }
}

/// Immutable bundle of tokens and raw class declarations for one theme.
///
/// Built once via [`StyleSchema::builder`], then shared (by `Arc`) with
/// the resolution context and any extraction call sites.
#[derive(Clone, Debug)]
pub struct StyleSchema {
    tokens: ThemeTokens,
    base_classes: IndexMap<String, ClassProps>,
    defaults: DefaultClasses,
    views: IndexMap<String, StyleStructure>,
    base_names: FxHashSet<String>,
    view_names: FxHashSet<String>,
    class_names: FxHashSet<String>,
}

impl StyleSchema {
    /// Start declaring a theme from its design tokens.
    pub fn builder(tokens: ThemeTokens) -> ThemeBuilder {
        ThemeBuilder { tokens }
    }

    /// The theme's design tokens.
    pub fn tokens(&self) -> &ThemeTokens {
        &self.tokens
    }

    /// Raw base-class declarations, in declaration order.
    pub fn base_classes(&self) -> &IndexMap<String, ClassProps> {
        &self.base_classes
    }

    /// Raw view declarations, in declaration order.
    pub fn views(&self) -> &IndexMap<String, StyleStructure> {
        &self.views
    }

    /// Default class lists prepended at resolution time.
    pub fn defaults(&self) -> &DefaultClasses {
        &self.defaults
    }

    /// Names of all declared base classes.
    pub fn base_names(&self) -> &FxHashSet<String> {
        &self.base_names
    }

    /// Names of all declared views.
    pub fn view_names(&self) -> &FxHashSet<String> {
        &self.view_names
    }

    /// Union of base-class and view names.
    pub fn class_names(&self) -> &FxHashSet<String> {
        &self.class_names
    }
}
