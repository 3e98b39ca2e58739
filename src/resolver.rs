//! Name, body and reverse resolution of service layer methods
//!
//! Suppression and "no match" are ordinary outcomes here and come back as
//! `None`; nothing in this module fails.

use crate::method::ServiceLayerMethod;
use crate::options::MethodNames;
use crate::types::{SymbolName, TypeRef};
use tracing::{debug, trace};

/// Body of a generated method that has no lower layer method to call
pub const UNIMPLEMENTED_BODY: &str = "throw new UnsupportedOperationException(\"Implement me!\");";

/// The generated name of `method` for `entity`
///
/// Returns `None` when the configured prefix is absent or blank, in which
/// case the method must not be generated.
pub fn resolve_name<N>(
    method: ServiceLayerMethod,
    names: &N,
    entity: &TypeRef,
    plural: &str,
) -> Option<String>
where
    N: MethodNames + ?Sized,
{
    let prefix = match names.method_name(method) {
        Some(prefix) if !prefix.trim().is_empty() => prefix,
        _ => {
            debug!(
                method = method.key(),
                entity = %entity,
                "no method name configured, skipping"
            );
            return None;
        }
    };

    Some(method.name_template().apply(prefix, entity, plural))
}

/// The generated name of `method` for `entity`, as an identifier
pub fn resolve_symbol<N>(
    method: ServiceLayerMethod,
    names: &N,
    entity: &TypeRef,
    plural: &str,
) -> Option<SymbolName>
where
    N: MethodNames + ?Sized,
{
    resolve_name(method, names, entity, plural).map(SymbolName::new)
}

/// The body of a generated `method`
///
/// With a lower layer method signature such as `foo()`, the body calls it
/// (`foo();` or `return foo();`). Without one, the body throws.
pub fn resolve_body(method: ServiceLayerMethod, lower_layer_signature: Option<&str>) -> String {
    match lower_layer_signature {
        Some(signature) if method.is_void() => format!("{};", signature),
        Some(signature) => format!("return {};", signature),
        None => {
            debug!(method = method.key(), "no lower layer method, body throws");
            UNIMPLEMENTED_BODY.to_string()
        }
    }
}

/// Find the method with key `key` whose parameter types for `entity` are
/// exactly `parameter_types`
pub fn resolve_operation(
    key: &str,
    parameter_types: &[TypeRef],
    entity: &TypeRef,
) -> Option<ServiceLayerMethod> {
    let found = ServiceLayerMethod::values()
        .iter()
        .copied()
        .find(|method| method.key() == key && method.parameter_types(entity) == parameter_types);

    if found.is_none() {
        trace!(key, entity = %entity, "no service layer method matches");
    }
    found
}
