//! Runtime style accessor
//!
//! The per-render facade consumed by view code. An accessor is a cheap
//! cloneable handle bound to one [`ResolutionContext`]; constructing one
//! never compiles anything, the first `view()` call does.

use std::sync::Arc;

use crate::resolve::{ClassRef, ResolutionContext, ResolvedStyle};
use crate::tokens::StyleValue;

/// Facade over one resolution context: `view`, `color`, `spacing`.
#[derive(Clone, Debug)]
pub struct StyleAccessor {
    context: Arc<ResolutionContext>,
}

impl ResolutionContext {
    /// Accessor bound to this context.
    pub fn accessor(self: &Arc<Self>) -> StyleAccessor {
        StyleAccessor {
            context: Arc::clone(self),
        }
    }
}

impl StyleAccessor {
    /// Resolve an ordered class list into a flattened style map.
    ///
    /// The schema's default view classes apply first; the caller's
    /// references override them left to right.
    pub fn view(&self, classes: &[ClassRef]) -> Arc<ResolvedStyle> {
        self.context.resolve(classes)
    }

    /// Like [`view`](Self::view), but also dumps the resolved map at
    /// debug level for style troubleshooting.
    pub fn view_debug(&self, classes: &[ClassRef]) -> Arc<ResolvedStyle> {
        let style = self.context.resolve(classes);
        tracing::debug!(?classes, ?style, "resolved view style");
        style
    }

    /// Direct color token lookup. No transform, no caching.
    pub fn color(&self, name: &str) -> Option<String> {
        self.context
            .schema()
            .tokens()
            .color(name)
            .map(str::to_owned)
    }

    /// Direct spacing token lookup. No transform, no caching.
    pub fn spacing(&self, name: &str) -> Option<StyleValue> {
        self.context.schema().tokens().spacing(name).cloned()
    }

    /// The context this accessor resolves against.
    pub fn context(&self) -> &Arc<ResolutionContext> {
        &self.context
    }
}
