//! Method name options for the service layer
//!
//! Each service layer method is enabled by a name prefix. A blank prefix
//! means the method is not generated; no default names are ever filled in.
//!
//! Options can be built directly or parsed from the aggregate text form
//! used by annotation sources:
//!
//! ```text
//! find_all_method: "getAll", save_method: "store"
//! ```

use crate::method::ServiceLayerMethod;
use crate::GeneratorError;
use std::collections::HashMap;

/// Source of the configured name prefix for each service layer method
pub trait MethodNames {
    /// The prefix configured for `method`, if any
    ///
    /// Callers treat a blank prefix the same as `None`.
    fn method_name(&self, method: ServiceLayerMethod) -> Option<&str>;
}

/// Name prefixes for each service layer method
///
/// An empty field suppresses the corresponding method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodNameOptions {
    /// Prefix of the count-all method
    pub count_all_method: String,
    /// Prefix of the delete method
    pub delete_method: String,
    /// Prefix of the find-all method
    pub find_all_method: String,
    /// Prefix of the paged finder
    pub find_entries_method: String,
    /// Prefix of the save method
    pub save_method: String,
    /// Prefix of the update method
    pub update_method: String,
}

impl MethodNameOptions {
    /// Parse options from their aggregate text form
    ///
    /// Aggregate values look like: `find_all_method: "getAll", save_method: "store"`
    pub fn from_aggregate(aggregate: &str) -> Result<Self, GeneratorError> {
        let mut result = MethodNameOptions::default();

        for part in split_aggregate_parts(aggregate) {
            if part.trim().is_empty() {
                continue;
            }
            let (key, value) = match part.split_once(':') {
                Some((k, v)) => (k.trim(), v.trim()),
                None => {
                    return Err(GeneratorError::OptionsParseError(format!(
                        "expected 'key: value', found '{}'",
                        part.trim()
                    )))
                }
            };

            let value = parse_quoted_string(value);
            match key {
                "count_all_method" => result.count_all_method = value,
                "delete_method" => result.delete_method = value,
                "find_all_method" => result.find_all_method = value,
                "find_entries_method" => result.find_entries_method = value,
                "save_method" => result.save_method = value,
                "update_method" => result.update_method = value,
                other => {
                    return Err(GeneratorError::OptionsParseError(format!(
                        "unknown option '{}'",
                        other
                    )))
                }
            }
        }

        Ok(result)
    }

    /// Set the prefix for one method
    pub fn set(&mut self, method: ServiceLayerMethod, prefix: impl Into<String>) {
        let prefix = prefix.into();
        match method {
            ServiceLayerMethod::CountAll => self.count_all_method = prefix,
            ServiceLayerMethod::Delete => self.delete_method = prefix,
            ServiceLayerMethod::FindAll => self.find_all_method = prefix,
            ServiceLayerMethod::FindEntries => self.find_entries_method = prefix,
            ServiceLayerMethod::Save => self.save_method = prefix,
            ServiceLayerMethod::Update => self.update_method = prefix,
        }
    }
}

impl MethodNames for MethodNameOptions {
    fn method_name(&self, method: ServiceLayerMethod) -> Option<&str> {
        let name = match method {
            ServiceLayerMethod::CountAll => &self.count_all_method,
            ServiceLayerMethod::Delete => &self.delete_method,
            ServiceLayerMethod::FindAll => &self.find_all_method,
            ServiceLayerMethod::FindEntries => &self.find_entries_method,
            ServiceLayerMethod::Save => &self.save_method,
            ServiceLayerMethod::Update => &self.update_method,
        };
        if name.is_empty() {
            None
        } else {
            Some(name.as_str())
        }
    }
}

impl MethodNames for HashMap<ServiceLayerMethod, String> {
    fn method_name(&self, method: ServiceLayerMethod) -> Option<&str> {
        self.get(&method).map(String::as_str)
    }
}

/// Split aggregate value on commas that are not inside a quoted string
fn split_aggregate_parts(aggregate: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;

    for (i, c) in aggregate.char_indices() {
        match c {
            '"' | '\'' if quote == Some(c) => quote = None,
            '"' | '\'' if quote.is_none() => quote = Some(c),
            ',' if quote.is_none() => {
                parts.push(&aggregate[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < aggregate.len() {
        parts.push(&aggregate[start..]);
    }

    parts
}

/// Parse a quoted string value, removing quotes
fn parse_quoted_string(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}
