use serde::{Deserialize, Serialize};

use crate::types::ClassRef;

/// A use of an annotation type, with an optional single (`value`) element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    class: ClassRef,
    #[serde(default)]
    value: Option<String>,
}

impl Annotation {
    pub fn new(class: ClassRef) -> Self {
        Self { class, value: None }
    }

    pub fn with_value(class: ClassRef, value: impl Into<String>) -> Self {
        Self {
            class,
            value: Some(value.into()),
        }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
