//! The transformation catalog.
//!
//! Provides the fixed set of named case transformations that the
//! [`Dispatcher`](crate::Dispatcher) routes to. Each one is a pure function of
//! `(text, encoding)` plus, for titleize, an ignore list.
//!
//! # Sub-modules
//!
//! - `case`: the transformation algorithms
//! - `patterns`: per-encoding compiled regexes

mod case;
mod patterns;

#[cfg(test)]
mod tests;

use crate::encoding::Encoding;
use crate::error::DispatchError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// Re-export the public API
pub use case::{
    camelize, dasherize, lower_case_first, swap_case, titleize, underscored, upper_camelize,
    upper_case_first,
};

/// Available case transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    UpperCaseFirst,
    LowerCaseFirst,
    Camelize,
    UpperCamelize,
    Dasherize,
    Underscored,
    SwapCase,
    Titleize,
}

impl Transform {
    /// Method name the dispatcher looks the transformation up by.
    pub fn name(self) -> &'static str {
        match self {
            Self::UpperCaseFirst => "upperCaseFirst",
            Self::LowerCaseFirst => "lowerCaseFirst",
            Self::Camelize => "camelize",
            Self::UpperCamelize => "upperCamelize",
            Self::Dasherize => "dasherize",
            Self::Underscored => "underscored",
            Self::SwapCase => "swapCase",
            Self::Titleize => "titleize",
        }
    }

    /// All available transformations in catalog order.
    pub fn all() -> &'static [Transform] {
        &[
            Self::UpperCaseFirst,
            Self::LowerCaseFirst,
            Self::Camelize,
            Self::UpperCamelize,
            Self::Dasherize,
            Self::Underscored,
            Self::SwapCase,
            Self::Titleize,
        ]
    }

    /// Whether the transformation reads an ignore list.
    pub fn takes_ignore_list(self) -> bool {
        matches!(self, Self::Titleize)
    }

    /// Run the transformation.
    ///
    /// `ignore` is only read by [`Transform::Titleize`].
    pub fn apply<S: AsRef<str>>(self, input: &str, encoding: Encoding, ignore: &[S]) -> String {
        match self {
            Self::UpperCaseFirst => upper_case_first(input, encoding),
            Self::LowerCaseFirst => lower_case_first(input, encoding),
            Self::Camelize => camelize(input, encoding),
            Self::UpperCamelize => upper_camelize(input, encoding),
            Self::Dasherize => dasherize(input, encoding),
            Self::Underscored => underscored(input, encoding),
            Self::SwapCase => swap_case(input, encoding),
            Self::Titleize => titleize(input, encoding, ignore),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Transform {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|transform| transform.name() == s)
            .ok_or_else(|| DispatchError::UnknownMethod(s.to_string()))
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Transform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
