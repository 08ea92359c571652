use std::fmt;

use serde::{Deserialize, Serialize};

/// The package whose classes are visible in every compilation unit without an import.
pub const JAVA_LANG: &str = "java.lang";

/// A Java package, identified by its dotted name.
///
/// The empty name denotes the default (unnamed) package. Serialized as the dotted string;
/// deserialization normalizes it like [`Package::from_dots`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Package(String);

impl Package {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self(full_name.into())
    }

    /// Parse a dotted package name such as `java.util`.
    ///
    /// Surrounding whitespace and empty segments (`a..b`, trailing dots) are dropped.
    pub fn from_dots(dotted: &str) -> Self {
        let segments: Vec<&str> = dotted
            .trim()
            .split('.')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();
        Self(segments.join("."))
    }

    pub fn full_name(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|segment| !segment.is_empty())
    }

    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_java_lang(&self) -> bool {
        self.0 == JAVA_LANG
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Package {
    fn from(value: &str) -> Self {
        Package::from_dots(value)
    }
}

impl From<String> for Package {
    fn from(value: String) -> Self {
        Package::from_dots(&value)
    }
}

impl From<Package> for String {
    fn from(value: Package) -> Self {
        value.0
    }
}
