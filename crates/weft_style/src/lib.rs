//! Weft Style System
//!
//! Composable style classes for declarative UI: a design vocabulary of
//! tokens (colors, spacing, border radii) plus named visual classes that
//! resolve at render time into a single flat style map, the way a cascade
//! of CSS classes resolves into one computed style.
//!
//! # Overview
//!
//! The crate provides:
//! - **Design tokens**: named colors, a spacing scale, border radii
//! - **Base classes**: reusable flat property maps
//! - **Views**: classes composed from base-class references and literals
//! - **Resolution caching**: memoized per ordered reference list, with
//!   explicit invalidation when the active theme changes
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use indexmap::IndexMap;
//! use weft_style::{
//!     class_props, ClassRef, DefaultClasses, ResolutionContext, StyleSchema,
//!     StyleStructure, StylePiece, StyleValue, ThemeTokens,
//! };
//!
//! let tokens = ThemeTokens {
//!     colors: IndexMap::from([("ink".to_string(), "#1a1a2e".to_string())]),
//!     spacing: IndexMap::from([("small".to_string(), StyleValue::Number(4.0))]),
//!     border_radii: IndexMap::default(),
//! };
//!
//! let schema = Arc::new(
//!     StyleSchema::builder(tokens)
//!         .base_classes(IndexMap::from([(
//!             "panel".to_string(),
//!             class_props([("padding", "small"), ("color", "ink")]),
//!         )]))
//!         .defaults(DefaultClasses::default())
//!         .views(IndexMap::from([(
//!             "card".to_string(),
//!             StyleStructure::Pieces(vec![
//!                 StylePiece::Class("panel".into()),
//!                 StylePiece::Props(class_props([("borderRadius", 8)])),
//!             ]),
//!         )])),
//! );
//!
//! let context = Arc::new(ResolutionContext::new(schema));
//! let style = context.accessor().view(&[ClassRef::name("card")]);
//! assert_eq!(style["padding"], StyleValue::Number(4.0));
//! ```
//!
//! # Architecture
//!
//! Class declarations compile once per cache generation into flattened
//! lookup tables; each `view()` call merges compiled entries strictly
//! left to right (later references win) and memoizes the result by the
//! exact ordered reference list. Swapping themes goes through
//! [`ResolutionContext::set_schema`], which invalidates both the style
//! cache and the compiled tables.
//!
//! Resolution never fails a render: unknown class names are logged and
//! skipped, and unrecognized properties pass through untouched.

pub mod accessor;
pub mod compile;
pub mod config;
pub mod extract;
pub mod props;
pub mod resolve;
pub mod schema;
pub mod tokens;

// Re-export commonly used types
pub use accessor::StyleAccessor;
pub use compile::CompileError;
pub use config::{schema_from_toml, ConfigError};
pub use extract::{extract_style_refs, ExtractedProps};
pub use props::{all_style_properties, PropertyKind};
pub use resolve::{ClassRef, ResolutionContext, ResolvedStyle};
pub use schema::{
    class_props, ClassProps, DefaultClasses, StylePiece, StyleSchema, StyleStructure,
    ThemeBuilder, ThemeBuilderWithBases, ThemeBuilderWithDefaults,
};
pub use tokens::{StyleValue, ThemeTokens};
