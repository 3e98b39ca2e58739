//! Type and identifier model for generated service layer members
//!
//! Generated facades target a JVM-style language, so types are spelled the
//! way that language spells them (`void`, `int`, `java.util.List<...>`).

use crate::GeneratorError;
use heck::ToLowerCamelCase;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt;

/// Fully-qualified name of the list type returned by collection finders
pub const LIST: &str = "java.util.List";

/// Words that can't be used as parameter names in the generated source
static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
        "final", "finally", "float", "for", "goto", "if", "implements", "import",
        "instanceof", "int", "interface", "long", "native", "new", "null", "package",
        "private", "protected", "public", "return", "short", "static", "strictfp", "super",
        "switch", "synchronized", "this", "throw", "throws", "transient", "true", "try",
        "void", "volatile", "while",
    ]
    .into_iter()
    .collect()
});

/// The type of a parameter or return value of a generated method
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// The "no value" return type
    Void,
    /// Primitive 32-bit integer
    Int,
    /// Primitive 64-bit integer
    Long,
    /// A class or interface, possibly parameterized
    Class {
        /// Fully-qualified name, e.g. `com.example.Person`
        name: String,
        /// Type arguments, in declaration order
        params: Vec<TypeRef>,
    },
}

impl TypeRef {
    /// A non-generic class type with the given fully-qualified name
    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Class {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// `java.util.List<element>`
    pub fn list_of(element: &TypeRef) -> Self {
        TypeRef::Class {
            name: LIST.to_string(),
            params: vec![element.clone()],
        }
    }

    /// Parse a fully-qualified type name such as `com.example.Person`
    ///
    /// The primitive names `void`, `int` and `long` map to their variants.
    /// Type arguments are not accepted here.
    pub fn parse(name: &str) -> Result<Self, GeneratorError> {
        let name = name.trim();
        match name {
            "void" => return Ok(TypeRef::Void),
            "int" => return Ok(TypeRef::Int),
            "long" => return Ok(TypeRef::Long),
            _ => {}
        }

        if name.is_empty() {
            return Err(GeneratorError::InvalidTypeName(
                "type name is empty".to_string(),
            ));
        }

        for segment in name.split('.') {
            if !is_identifier(segment) {
                return Err(GeneratorError::InvalidTypeName(format!(
                    "'{}' has an invalid segment '{}'",
                    name, segment
                )));
            }
        }

        Ok(TypeRef::class(name))
    }

    /// The unqualified name, e.g. `Person` for `com.example.Person`
    pub fn simple_name(&self) -> &str {
        match self {
            TypeRef::Void => "void",
            TypeRef::Int => "int",
            TypeRef::Long => "long",
            TypeRef::Class { name, .. } => name.rsplit('.').next().unwrap_or(name),
        }
    }

    /// Whether this is the "no value" type
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => f.write_str("void"),
            TypeRef::Int => f.write_str("int"),
            TypeRef::Long => f.write_str("long"),
            TypeRef::Class { name, params } => {
                f.write_str(name)?;
                if !params.is_empty() {
                    f.write_str("<")?;
                    for (i, param) in params.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", param)?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}

/// An identifier in the generated source (method or parameter name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolName(String);

impl SymbolName {
    /// Wrap an identifier
    pub fn new(name: impl Into<String>) -> Self {
        SymbolName(name.into())
    }

    /// The identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A parameter name for a value of the given type
    ///
    /// Uses the lower camel case simple name, prefixed with `_` when that
    /// would be a reserved word (`Class` becomes `_class`).
    pub fn reserved_word_safe(type_ref: &TypeRef) -> Self {
        let name = type_ref.simple_name().to_lower_camel_case();
        if is_reserved_word(&name) {
            SymbolName(format!("_{}", name))
        } else {
            SymbolName(name)
        }
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SymbolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check whether a word is reserved in the generated source
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
