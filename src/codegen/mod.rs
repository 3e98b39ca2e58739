//! Service layer method assembly
//!
//! This module walks the method catalog for one entity and assembles a
//! [`MethodDeclaration`] for every method that has a configured name. The
//! declarations are handed to the external emitter; nothing here writes
//! source files.

pub mod declaration;

pub use declaration::MethodDeclaration;

use crate::method::ServiceLayerMethod;
use crate::options::MethodNames;
use crate::types::TypeRef;
use std::collections::HashMap;
use tracing::debug;

/// Source of the lower (persistence) layer methods a service method can
/// delegate to
pub trait LowerLayer {
    /// The call expression of the lower layer method equivalent to `method`
    /// for `entity`, e.g. `Person.findAllPeople()`
    ///
    /// Returns `None` when the lower layer has no such method.
    fn method_signature(&self, method: ServiceLayerMethod, entity: &TypeRef) -> Option<String>;
}

/// No lower layer: every generated body throws
impl LowerLayer for () {
    fn method_signature(&self, _method: ServiceLayerMethod, _entity: &TypeRef) -> Option<String> {
        None
    }
}

impl LowerLayer for HashMap<ServiceLayerMethod, String> {
    fn method_signature(&self, method: ServiceLayerMethod, _entity: &TypeRef) -> Option<String> {
        self.get(&method).cloned()
    }
}

/// Assemble the declarations of every configured service layer method
///
/// Methods are returned in catalog order; suppressed methods are skipped.
pub fn generate_methods<N, L>(
    entity: &TypeRef,
    plural: &str,
    names: &N,
    lower_layer: &L,
) -> Vec<MethodDeclaration>
where
    N: MethodNames + ?Sized,
    L: LowerLayer + ?Sized,
{
    let declarations: Vec<MethodDeclaration> = ServiceLayerMethod::values()
        .iter()
        .filter_map(|method| {
            let signature = lower_layer.method_signature(*method, entity);
            MethodDeclaration::build(*method, names, entity, plural, signature.as_deref())
        })
        .collect();

    debug!(
        entity = %entity,
        count = declarations.len(),
        "assembled service layer methods"
    );

    declarations
}
