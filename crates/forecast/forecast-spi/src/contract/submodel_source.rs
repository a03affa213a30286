//! Trait for anything that holds fitted submodels per objective field

use crate::model::FittedSubmodel;

/// Lookup of fitted submodels by objective field id
pub trait SubmodelSource: Send + Sync {
    /// Submodels fitted for `field_id`, in their stored order
    fn submodels(&self, field_id: &str) -> Option<&[FittedSubmodel]>;

    /// Resolve a field id or field name to a field id
    fn resolve_field(&self, field: &str) -> Option<String>;
}
