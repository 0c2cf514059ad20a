//! Style-prop extraction
//!
//! Splits a generic props bag into style references (class-name flags and
//! inline property overrides) plus the residual non-style props, for the
//! caller to forward into `view()`.

use indexmap::IndexMap;

use crate::props::all_style_properties;
use crate::resolve::ClassRef;
use crate::schema::StyleSchema;
use crate::tokens::StyleValue;

/// Result of partitioning a props bag.
#[derive(Clone, Debug, Default)]
pub struct ExtractedProps {
    /// Class-name references (in original key order) followed by inline
    /// overrides (in original key order).
    pub refs: Vec<ClassRef>,
    /// Props that matched neither a class name nor a style property.
    pub rest: IndexMap<String, StyleValue>,
}

/// Partition `props` against this schema's class names and the published
/// style-property set.
///
/// - A key naming a declared class with value `true` becomes a name
///   reference. Any other value still consumes the key but contributes
///   nothing.
/// - A key naming a recognized style property becomes an inline override.
/// - A key that is both a class name and a style property is treated as a
///   class flag; the class interpretation wins deterministically.
///
/// With a prefix, only prefixed keys are examined; the prefix is stripped
/// before matching, and accepted keys leave the residual map under their
/// original prefixed name.
pub fn extract_style_refs(
    schema: &StyleSchema,
    props: &IndexMap<String, StyleValue>,
    prefix: Option<&str>,
) -> ExtractedProps {
    let mut rest = props.clone();
    let mut names = Vec::new();
    let mut overrides = Vec::new();

    for (key, value) in props {
        let bare = match prefix {
            Some(prefix) => match key.strip_prefix(prefix) {
                Some(bare) => bare,
                None => continue,
            },
            None => key.as_str(),
        };

        if schema.class_names().contains(bare) {
            rest.shift_remove(key);
            if *value == StyleValue::Bool(true) {
                names.push(ClassRef::name(bare));
            }
        } else if all_style_properties().contains(bare) {
            rest.shift_remove(key);
            overrides.push(ClassRef::inline(bare, value.clone()));
        }
    }

    let mut refs = names;
    refs.append(&mut overrides);
    ExtractedProps { refs, rest }
}
