//! A fully resolved service layer method

use crate::method::{Parameters, ServiceLayerMethod};
use crate::options::MethodNames;
use crate::resolver;
use crate::types::{SymbolName, TypeRef};

/// Everything the emitter needs to write one service layer method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    /// The catalog entry this declaration was built from
    pub method: ServiceLayerMethod,
    /// The generated method name
    pub name: SymbolName,
    /// The declared return type
    pub return_type: TypeRef,
    /// The declared parameters, in order
    pub parameters: Parameters,
    /// The single-statement method body
    pub body: String,
}

impl MethodDeclaration {
    /// Resolve the declaration of `method` for `entity`
    ///
    /// Returns `None` when the method's name is suppressed.
    pub fn build<N>(
        method: ServiceLayerMethod,
        names: &N,
        entity: &TypeRef,
        plural: &str,
        lower_layer_signature: Option<&str>,
    ) -> Option<Self>
    where
        N: MethodNames + ?Sized,
    {
        let name = resolver::resolve_symbol(method, names, entity, plural)?;

        Some(MethodDeclaration {
            method,
            name,
            return_type: method.return_type(entity),
            parameters: method.parameters(entity),
            body: resolver::resolve_body(method, lower_layer_signature),
        })
    }

    /// Whether the body delegates to the lower layer
    pub fn is_delegating(&self) -> bool {
        self.body != resolver::UNIMPLEMENTED_BODY
    }
}
