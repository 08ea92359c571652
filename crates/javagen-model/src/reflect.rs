//! Bridge from external type descriptions to model shells.
//!
//! There is no runtime introspection to lean on, so an external class is described by data
//! (package and simple name), typically deserialized from a schema file.

use serde::{Deserialize, Serialize};

use crate::class::JavaClass;
use crate::package::Package;
use crate::types::{ClassKind, ClassRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Dotted package name. `None` (or empty) for classes in the default package.
    #[serde(default)]
    pub package: Option<String>,
    /// Simple name.
    pub name: String,
    #[serde(default)]
    pub interface: bool,
}

impl TypeDescriptor {
    pub fn new(package: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            package: package.map(str::to_string),
            name: name.into(),
            interface: false,
        }
    }

    /// Split a qualified (binary) name such as `java.util.Map$Entry`.
    ///
    /// The package is everything before the last `.`; the simple name is the part after the last
    /// `$`, if any.
    pub fn from_qualified_name(qualified: &str) -> Self {
        let qualified = qualified.trim();
        let (package, binary_name) = match qualified.rsplit_once('.') {
            Some((package, name)) => (Some(package), name),
            None => (None, qualified),
        };
        let simple = binary_name.rsplit('$').next().unwrap_or(binary_name);
        Self::new(package, simple)
    }

    #[must_use]
    pub fn with_interface(mut self, interface: bool) -> Self {
        self.interface = interface;
        self
    }

    fn kind(&self) -> ClassKind {
        if self.interface {
            ClassKind::Interface
        } else {
            ClassKind::Class
        }
    }
}

impl ClassRef {
    pub fn from_descriptor(descriptor: &TypeDescriptor) -> Self {
        let package = descriptor
            .package
            .as_deref()
            .map(Package::from_dots)
            .unwrap_or_else(|| Package::new(""));
        ClassRef::new(package, descriptor.name.clone()).with_kind(descriptor.kind())
    }
}

impl JavaClass {
    /// A member-less declaration shell for the described class.
    pub fn from_descriptor(descriptor: &TypeDescriptor) -> Self {
        JavaClass::from_ref(&ClassRef::from_descriptor(descriptor))
    }
}
