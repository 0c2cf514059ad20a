//! Class compiler
//!
//! Flattens raw declarations into two lookup tables: compiled base
//! classes and compiled views (with base-class references inlined and
//! every token reference resolved). Runs once per cache generation.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::props;
use crate::schema::{ClassProps, StylePiece, StyleSchema, StyleStructure};
use crate::tokens::{StyleValue, ThemeTokens};

/// Fully flattened, token-resolved property map for one class.
pub(crate) type CompiledClass = IndexMap<String, StyleValue>;

/// Error raised while flattening declarations.
///
/// Never propagated to resolution callers: the compiler boundary logs it
/// and leaves the tables partially built (see [`CompiledTables::build`]).
#[derive(Debug, Error)]
pub enum CompileError {
    /// A view piece names a base class that was never declared.
    #[error("view `{view}` references undeclared base class `{base}`")]
    UnknownBaseClass { view: String, base: String },
}

/// Compiled lookup tables for one cache generation.
#[derive(Debug, Default)]
pub(crate) struct CompiledTables {
    pub base: FxHashMap<String, CompiledClass>,
    pub views: FxHashMap<String, CompiledClass>,
}

impl CompiledTables {
    /// Compile every declaration in the schema.
    ///
    /// A compile error is absorbed here: it is logged and the tables stay
    /// in whatever partial state they reached, so a bad declaration
    /// degrades to "some classes unresolved" instead of failing renders.
    pub fn build(schema: &StyleSchema) -> Self {
        let mut tables = Self::default();
        if let Err(err) = tables.populate(schema) {
            tracing::error!(error = %err, "style class compilation failed, tables left partially built");
        }
        tables
    }

    fn populate(&mut self, schema: &StyleSchema) -> Result<(), CompileError> {
        for (name, declared) in schema.base_classes() {
            self.base
                .insert(name.clone(), compile_props(schema.tokens(), declared));
        }
        for (name, structure) in schema.views() {
            let compiled = self.compile_view(schema, name, structure)?;
            self.views.insert(name.clone(), compiled);
        }
        Ok(())
    }

    fn compile_view(
        &self,
        schema: &StyleSchema,
        view: &str,
        structure: &StyleStructure,
    ) -> Result<CompiledClass, CompileError> {
        let mut out = CompiledClass::new();
        match structure {
            StyleStructure::Props(declared) => {
                apply_props(schema.tokens(), declared, &mut out);
            }
            StyleStructure::Pieces(pieces) => {
                for piece in pieces {
                    match piece {
                        StylePiece::Class(base) => {
                            let compiled = self.base.get(base).ok_or_else(|| {
                                CompileError::UnknownBaseClass {
                                    view: view.to_owned(),
                                    base: base.clone(),
                                }
                            })?;
                            for (key, value) in compiled {
                                out.insert(key.clone(), value.clone());
                            }
                        }
                        StylePiece::Props(declared) => {
                            apply_props(schema.tokens(), declared, &mut out);
                        }
                    }
                }
            }
        }
        Ok(out)
    }
}

fn compile_props(tokens: &ThemeTokens, declared: &ClassProps) -> CompiledClass {
    let mut out = CompiledClass::new();
    apply_props(tokens, declared, &mut out);
    out
}

/// Transform-or-copy one declaration map into `out`, last write winning.
///
/// Shared with the resolution path so inline overrides resolve exactly
/// like compiled declarations.
pub(crate) fn apply_props(tokens: &ThemeTokens, declared: &ClassProps, out: &mut CompiledClass) {
    for (property, raw) in declared {
        match props::transform_entry(property) {
            Some(entry) => {
                out.insert(
                    entry.canonical.to_owned(),
                    props::resolve_token(tokens, entry.kind, raw),
                );
            }
            None => {
                out.insert(property.clone(), raw.clone());
            }
        }
    }
}
