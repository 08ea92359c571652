use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;
use crate::types::ClassRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessModifier {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl AccessModifier {
    /// Source keyword; empty for package-private access.
    pub fn keyword(self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Protected => "protected",
            AccessModifier::PackagePrivate => "",
            AccessModifier::Private => "private",
        }
    }
}

/// Anything that carries an access modifier.
pub trait AccessModifiable {
    fn access_modifier(&self) -> AccessModifier;

    fn set_access_modifier(&mut self, access: AccessModifier);
}

/// Anything that carries an ordered, append-only list of annotations.
pub trait Annotated {
    fn annotations(&self) -> &[Annotation];

    fn add_annotation(&mut self, annotation: Annotation);

    fn annotate(&mut self, class: ClassRef) {
        self.add_annotation(Annotation::new(class));
    }

    fn annotate_with(&mut self, class: ClassRef, value: impl Into<String>)
    where
        Self: Sized,
    {
        self.add_annotation(Annotation::with_value(class, value));
    }
}
