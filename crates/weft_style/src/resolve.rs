//! Resolution context and style cache
//!
//! [`ResolutionContext`] owns the compiled class tables and the per-call
//! style cache for one theme schema. Compilation is lazy: the tables are
//! built on the first resolution after construction or invalidation.
//!
//! Resolution applies references strictly left to right; the last
//! reference to touch a canonical property wins. Identical ordered
//! reference lists return the same cached `Arc`.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::compile::{apply_props, CompiledTables};
use crate::schema::{ClassProps, StyleSchema};
use crate::tokens::StyleValue;

/// One entry in a resolution call's reference list.
#[derive(Clone, Debug, PartialEq)]
pub enum ClassRef {
    /// A declared base-class or view name.
    Name(String),
    /// A one-off property override applied in place.
    Inline { property: String, value: StyleValue },
}

impl ClassRef {
    /// Reference a declared class by name.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// A one-off `property: value` override.
    pub fn inline(property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        Self::Inline {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Identity string used in cache keys.
    pub(crate) fn cache_key(&self) -> Cow<'_, str> {
        match self {
            Self::Name(name) => Cow::Borrowed(name.as_str()),
            Self::Inline { property, value } => Cow::Owned(format!("{property}={value}")),
        }
    }
}

impl From<&str> for ClassRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for ClassRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Final flattened style map for one resolution call.
pub type ResolvedStyle = IndexMap<String, StyleValue>;

/// Compiled-table lifecycle. `Uninitialized` and `Stale` both force a
/// rebuild on the next resolution; they are kept distinct so the state
/// transitions stay observable in logs.
#[derive(Debug)]
enum Compilation {
    Uninitialized,
    Ready(CompiledTables),
    Stale,
}

impl Compilation {
    fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

#[derive(Debug)]
struct ContextInner {
    compilation: Compilation,
    styles: FxHashMap<String, Arc<ResolvedStyle>>,
}

/// Owns the compiled class tables and style cache for one theme.
///
/// The context replaces process-global compiled state: construct one per
/// active theme, share it via `Arc`, and hand out accessors from it.
/// Interior locking makes it safe to read from the render path while the
/// host swaps themes, though the contract only requires cooperative
/// single-threaded use.
pub struct ResolutionContext {
    schema: RwLock<Arc<StyleSchema>>,
    inner: Mutex<ContextInner>,
}

impl fmt::Debug for ResolutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionContext").finish_non_exhaustive()
    }
}

impl ResolutionContext {
    /// Create an uncompiled context for `schema`.
    pub fn new(schema: Arc<StyleSchema>) -> Self {
        Self {
            schema: RwLock::new(schema),
            inner: Mutex::new(ContextInner {
                compilation: Compilation::Uninitialized,
                styles: FxHashMap::default(),
            }),
        }
    }

    /// The schema this context currently resolves against.
    pub fn schema(&self) -> Arc<StyleSchema> {
        Arc::clone(&self.schema.read().unwrap())
    }

    /// Lifecycle hook: the active theme changed.
    ///
    /// Swaps the schema and invalidates, so the next resolution compiles
    /// against the new declarations. Must run before any facade call is
    /// expected to observe the new theme's data.
    pub fn set_schema(&self, schema: Arc<StyleSchema>) {
        *self.schema.write().unwrap() = schema;
        self.invalidate();
        tracing::debug!("active style schema replaced");
    }

    /// Discard the style cache and mark compiled tables stale.
    ///
    /// Idempotent, and safe to call before anything was compiled.
    pub fn invalidate(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.styles.clear();
        if inner.compilation.is_ready() {
            inner.compilation = Compilation::Stale;
        }
    }

    /// Whether compiled tables are currently built.
    pub fn is_compiled(&self) -> bool {
        self.inner.lock().unwrap().compilation.is_ready()
    }

    /// Resolve an ordered reference list into one flattened style map.
    ///
    /// The schema's default view classes are prepended first. Unknown
    /// names are logged and skipped; inline overrides resolve through the
    /// transform table exactly like compiled declarations.
    pub fn resolve(&self, refs: &[ClassRef]) -> Arc<ResolvedStyle> {
        let schema = self.schema();
        let mut guard = self.inner.lock().unwrap();
        let inner = &mut *guard;

        if !inner.compilation.is_ready() {
            tracing::debug!("compiling style classes");
            inner.compilation = Compilation::Ready(CompiledTables::build(&schema));
        }

        let defaults: &[String] = schema
            .defaults()
            .view
            .as_deref()
            .unwrap_or(&[]);

        let mut key = String::new();
        for name in defaults {
            if !key.is_empty() {
                key.push(',');
            }
            key.push_str(name);
        }
        for class_ref in refs {
            if !key.is_empty() {
                key.push(',');
            }
            key.push_str(&class_ref.cache_key());
        }

        if let Some(style) = inner.styles.get(&key) {
            return Arc::clone(style);
        }

        let Compilation::Ready(tables) = &inner.compilation else {
            // Set to Ready above and never changed while the lock is held.
            unreachable!("compiled tables missing during resolution");
        };

        let mut style = ResolvedStyle::new();
        for name in defaults {
            merge_named(tables, name, &mut style);
        }
        for class_ref in refs {
            match class_ref {
                ClassRef::Name(name) => merge_named(tables, name, &mut style),
                ClassRef::Inline { property, value } => {
                    merge_inline(&schema, property, value, &mut style);
                }
            }
        }

        let style = Arc::new(style);
        inner.styles.insert(key, Arc::clone(&style));
        style
    }
}

/// Copy a named class's compiled entries into `out`, base classes taking
/// precedence over views on a name collision. Unknown names contribute
/// nothing.
fn merge_named(tables: &CompiledTables, name: &str, out: &mut ResolvedStyle) {
    if let Some(class) = tables.base.get(name) {
        for (key, value) in class {
            out.insert(key.clone(), value.clone());
        }
    } else if let Some(class) = tables.views.get(name) {
        for (key, value) in class {
            out.insert(key.clone(), value.clone());
        }
    } else {
        tracing::warn!(class = name, "style class not found");
    }
}

fn merge_inline(schema: &StyleSchema, property: &str, value: &StyleValue, out: &mut ResolvedStyle) {
    let mut single = ClassProps::new();
    single.insert(property.to_owned(), value.clone());
    apply_props(schema.tokens(), &single, out);
}
