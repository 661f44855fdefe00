use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for typed record identifiers
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id to its string form
    fn as_string(&self) -> String;

    /// Parse an id from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}
