//! layer-method-catalog library
//!
//! This crate describes the service layer methods a code generator can
//! synthesize for an entity: their signatures, their generated names and
//! their bodies, which either delegate to a lower (persistence) layer or
//! throw an "unimplemented" failure.

#![deny(warnings)]
#![deny(missing_docs)]

pub mod codegen;
pub mod method;
pub mod options;
pub mod resolver;
pub mod types;

pub use codegen::{LowerLayer, MethodDeclaration};
pub use method::{Parameters, ServiceLayerMethod};
pub use options::{MethodNameOptions, MethodNames};
pub use types::{SymbolName, TypeRef};

use thiserror::Error;

/// Errors raised by the checked constructors of this crate
///
/// Catalog lookups and name resolution never fail; suppression and
/// "no match" are reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Failed to parse method name options
    #[error("Failed to parse options: {0}")]
    OptionsParseError(String),

    /// A type name is not a well-formed qualified name
    #[error("Invalid type name: {0}")]
    InvalidTypeName(String),
}

/// Assemble the service layer method declarations for an entity
///
/// This is the main entry point for the code generator. Operations whose
/// name is suppressed by `names` are left out.
pub fn generate<N, L>(
    entity: &TypeRef,
    plural: &str,
    names: &N,
    lower_layer: &L,
) -> Vec<MethodDeclaration>
where
    N: MethodNames + ?Sized,
    L: LowerLayer + ?Sized,
{
    codegen::generate_methods(entity, plural, names, lower_layer)
}
