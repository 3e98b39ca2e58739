//! The service layer method catalog
//!
//! Each [`ServiceLayerMethod`] variant is one kind of facade method the
//! generator knows how to synthesize. The signature pieces are pure
//! functions of the target entity type.

use crate::resolver;
use crate::types::{SymbolName, TypeRef};

/// Name of the first parameter of the paged finder
const FIRST_RESULT: &str = "firstResult";

/// Name of the second parameter of the paged finder
const MAX_RESULTS: &str = "maxResults";

/// Suffix appended to the entity name by the paged finder
const ENTRIES_SUFFIX: &str = "Entries";

/// A service layer method the generator can synthesize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceLayerMethod {
    /// Count all instances of the entity
    CountAll,
    /// Remove one instance of the entity
    Delete,
    /// Find all instances of the entity
    FindAll,
    /// Find a page of instances of the entity
    FindEntries,
    /// Persist a new instance of the entity
    Save,
    /// Merge changes to an instance of the entity
    Update,
}

/// How a generated method name is built from the configured prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTemplate {
    /// Prefix followed by the entity's plural, e.g. `getAllPeople`
    Plural,
    /// Prefix followed by the entity's simple name, e.g. `storePerson`
    SimpleName,
    /// Prefix, the entity's simple name, then a fixed suffix,
    /// e.g. `getPersonEntries`
    SimpleNameWithSuffix(&'static str),
}

impl NameTemplate {
    /// Build a method name by plain concatenation; no casing is changed
    pub fn apply(&self, prefix: &str, entity: &TypeRef, plural: &str) -> String {
        match self {
            NameTemplate::Plural => format!("{}{}", prefix, plural),
            NameTemplate::SimpleName => format!("{}{}", prefix, entity.simple_name()),
            NameTemplate::SimpleNameWithSuffix(suffix) => {
                format!("{}{}{}", prefix, entity.simple_name(), suffix)
            }
        }
    }
}

impl ServiceLayerMethod {
    /// Every method in the catalog, in generation order
    pub const ALL: [ServiceLayerMethod; 6] = [
        ServiceLayerMethod::CountAll,
        ServiceLayerMethod::Delete,
        ServiceLayerMethod::FindAll,
        ServiceLayerMethod::FindEntries,
        ServiceLayerMethod::Save,
        ServiceLayerMethod::Update,
    ];

    /// Every method in the catalog
    pub fn values() -> &'static [ServiceLayerMethod] {
        &Self::ALL
    }

    /// The stable key identifying this method across entities
    pub fn key(&self) -> &'static str {
        match self {
            ServiceLayerMethod::CountAll => "countAll",
            ServiceLayerMethod::Delete => "remove",
            ServiceLayerMethod::FindAll => "findAll",
            ServiceLayerMethod::FindEntries => "findEntries",
            ServiceLayerMethod::Save => "persist",
            ServiceLayerMethod::Update => "merge",
        }
    }

    /// Look up a method by key alone
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.key() == key)
    }

    /// Find the method with the given key whose parameter types for
    /// `entity` are exactly `parameter_types`
    pub fn value_of(key: &str, parameter_types: &[TypeRef], entity: &TypeRef) -> Option<Self> {
        resolver::resolve_operation(key, parameter_types, entity)
    }

    /// Parameter types of this method for the given entity
    pub fn parameter_types(&self, entity: &TypeRef) -> Vec<TypeRef> {
        match self {
            ServiceLayerMethod::CountAll | ServiceLayerMethod::FindAll => Vec::new(),
            ServiceLayerMethod::FindEntries => vec![TypeRef::Int, TypeRef::Int],
            ServiceLayerMethod::Delete | ServiceLayerMethod::Save | ServiceLayerMethod::Update => {
                vec![entity.clone()]
            }
        }
    }

    /// Parameter names of this method for the given entity
    ///
    /// Position `i` names the parameter typed by `parameter_types(entity)[i]`.
    pub fn parameter_names(&self, entity: &TypeRef) -> Vec<SymbolName> {
        match self {
            ServiceLayerMethod::CountAll | ServiceLayerMethod::FindAll => Vec::new(),
            ServiceLayerMethod::FindEntries => {
                vec![SymbolName::new(FIRST_RESULT), SymbolName::new(MAX_RESULTS)]
            }
            ServiceLayerMethod::Delete | ServiceLayerMethod::Save | ServiceLayerMethod::Update => {
                vec![SymbolName::reserved_word_safe(entity)]
            }
        }
    }

    /// Parameter types paired with their names
    pub fn parameters(&self, entity: &TypeRef) -> Parameters {
        Parameters(
            self.parameter_types(entity)
                .into_iter()
                .zip(self.parameter_names(entity))
                .collect(),
        )
    }

    /// Return type of this method for the given entity
    pub fn return_type(&self, entity: &TypeRef) -> TypeRef {
        match self {
            ServiceLayerMethod::CountAll => TypeRef::Long,
            ServiceLayerMethod::Delete | ServiceLayerMethod::Save => TypeRef::Void,
            ServiceLayerMethod::FindAll | ServiceLayerMethod::FindEntries => {
                TypeRef::list_of(entity)
            }
            ServiceLayerMethod::Update => entity.clone(),
        }
    }

    /// Whether this method returns no value
    pub fn is_void(&self) -> bool {
        matches!(self, ServiceLayerMethod::Delete | ServiceLayerMethod::Save)
    }

    /// How this method's generated name is built
    pub fn name_template(&self) -> NameTemplate {
        match self {
            ServiceLayerMethod::CountAll | ServiceLayerMethod::FindAll => NameTemplate::Plural,
            ServiceLayerMethod::FindEntries => NameTemplate::SimpleNameWithSuffix(ENTRIES_SUFFIX),
            ServiceLayerMethod::Delete | ServiceLayerMethod::Save | ServiceLayerMethod::Update => {
                NameTemplate::SimpleName
            }
        }
    }
}

/// Ordered `(type, name)` pairs of a method's parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(Vec<(TypeRef, SymbolName)>);

impl Parameters {
    /// The parameter types, in order
    pub fn types(&self) -> Vec<TypeRef> {
        self.0.iter().map(|(ty, _)| ty.clone()).collect()
    }

    /// The parameter names, in order
    pub fn names(&self) -> Vec<SymbolName> {
        self.0.iter().map(|(_, name)| name.clone()).collect()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the method takes no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the `(type, name)` pairs
    pub fn iter(&self) -> impl Iterator<Item = &(TypeRef, SymbolName)> {
        self.0.iter()
    }
}
