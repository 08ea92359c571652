//! Import resolution.
//!
//! Resolution is split in two steps:
//!
//! - [`resolve_references`] walks a structural piece (a type, a member, a type variable, ...) and
//!   lists every class it mentions, depth-first and in first-seen order. It is pure.
//! - [`ImportList::merge`] decides which of those classes a compilation unit actually has to
//!   import and appends them.
//!
//! A class reached during the walk is a leaf: its own members are never visited. Only direct
//! structural containment is traversed (bounds, type arguments, array elements), so the walk
//! always terminates.

use crate::access::Annotated;
use crate::annotation::Annotation;
use crate::member::{Constructor, Field, Member, Method, Parameter};
use crate::package::Package;
use crate::types::{ClassRef, ParameterizedType, Type, TypeVariable, WildcardType};

const TARGET: &str = "javagen.imports";

/// Structural pieces that can mention classes.
pub trait TypeReferences {
    /// Push every class mentioned by `self` onto `out`, depth-first.
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>);
}

/// Every class mentioned by `piece`, in first-seen order. Duplicates are kept.
pub fn resolve_references<T: TypeReferences + ?Sized>(piece: &T) -> Vec<&ClassRef> {
    let mut out = Vec::new();
    piece.collect_references(&mut out);
    out
}

impl TypeReferences for Type {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        match self {
            Type::Class(class) => out.push(class),
            Type::Primitive { .. } | Type::VariableRef { .. } => {}
            Type::Array { element } => element.collect_references(out),
            Type::Variable(var) => var.collect_references(out),
            Type::Wildcard(wildcard) => wildcard.collect_references(out),
            Type::Parameterized(parameterized) => parameterized.collect_references(out),
        }
    }
}

impl TypeReferences for TypeVariable {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        for bound in self.bounds() {
            bound.collect_references(out);
        }
    }
}

impl TypeReferences for WildcardType {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        for bound in self.lower_bounds().into_iter().flatten() {
            bound.collect_references(out);
        }
        for bound in self.upper_bounds().into_iter().flatten() {
            bound.collect_references(out);
        }
    }
}

impl TypeReferences for ParameterizedType {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        out.push(self.base());
        for argument in self.arguments() {
            argument.collect_references(out);
        }
    }
}

impl TypeReferences for Annotation {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        out.push(self.class());
    }
}

impl TypeReferences for Parameter {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        self.ty.collect_references(out);
    }
}

impl<T: TypeReferences> TypeReferences for [T] {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        for item in self {
            item.collect_references(out);
        }
    }
}

// Member scan order: type-parameter bounds, annotations, then the type-bearing parts.

impl TypeReferences for Field {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        self.annotations().collect_references(out);
        self.ty().collect_references(out);
    }
}

impl TypeReferences for Method {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        self.type_parameters().collect_references(out);
        self.annotations().collect_references(out);
        self.return_type().collect_references(out);
        self.parameters().collect_references(out);
    }
}

impl TypeReferences for Constructor {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        self.type_parameters().collect_references(out);
        self.annotations().collect_references(out);
        self.parameters().collect_references(out);
    }
}

impl TypeReferences for Member {
    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ClassRef>) {
        match self {
            Member::Field(field) => field.collect_references(out),
            Member::Method(method) => method.collect_references(out),
            Member::Constructor(constructor) => constructor.collect_references(out),
        }
    }
}

/// Why a candidate was not added by [`ImportList::offer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The class has no package and is assumed to be in scope.
    NoPackage,
    /// The class lives in the importing class's package.
    SamePackage,
    /// This exact class is already imported.
    AlreadyImported,
    /// A different class with the same simple name is already imported.
    NameTaken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportDecision {
    Added,
    Skipped(SkipReason),
}

/// A class that could not be imported because another class with the same simple name was
/// imported first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConflict {
    /// The class that holds the simple name in the import list.
    pub imported: ClassRef,
    /// The class that was left out.
    pub shadowed: ClassRef,
}

/// The ordered import list of one compilation unit.
///
/// The list only grows. Deduplication is by simple name and the first class to claim a name
/// keeps it; every later class with that name is recorded in [`ImportList::conflicts`] so that
/// emitters can refer to it by its qualified name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportList {
    classes: Vec<ClassRef>,
    conflicts: Vec<ImportConflict>,
}

impl ImportList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[ClassRef] {
        &self.classes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassRef> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, class: &ClassRef) -> bool {
        self.classes.contains(class)
    }

    pub fn by_simple_name(&self, name: &str) -> Option<&ClassRef> {
        self.classes.iter().find(|class| class.name() == name)
    }

    pub fn conflicts(&self) -> &[ImportConflict] {
        &self.conflicts
    }

    pub fn is_shadowed(&self, class: &ClassRef) -> bool {
        self.conflicts.iter().any(|conflict| &conflict.shadowed == class)
    }

    /// Decide whether `class` must be imported by a compilation unit in `owner_package`, and
    /// append it if so.
    pub fn offer(&mut self, owner_package: Option<&Package>, class: &ClassRef) -> ImportDecision {
        let Some(package) = class.package() else {
            tracing::trace!(target: TARGET, class = class.name(), "skipping class without package");
            return ImportDecision::Skipped(SkipReason::NoPackage);
        };

        let owner_package = owner_package.map(Package::full_name).unwrap_or_default();
        if package.full_name() == owner_package {
            tracing::trace!(target: TARGET, class = %class, "skipping same-package class");
            return ImportDecision::Skipped(SkipReason::SamePackage);
        }

        if let Some(existing) = self.by_simple_name(class.name()) {
            if existing == class {
                return ImportDecision::Skipped(SkipReason::AlreadyImported);
            }

            let existing = existing.clone();
            if !self.is_shadowed(class) {
                tracing::warn!(
                    target: TARGET,
                    imported = %existing,
                    shadowed = %class,
                    "simple name already imported; keeping the first class"
                );
                self.conflicts.push(ImportConflict {
                    imported: existing,
                    shadowed: class.clone(),
                });
            }
            return ImportDecision::Skipped(SkipReason::NameTaken);
        }

        tracing::debug!(target: TARGET, class = %class, "adding import");
        self.classes.push(class.clone());
        ImportDecision::Added
    }

    /// Offer every candidate in order. Returns how many were appended.
    pub fn merge<'a, I>(&mut self, owner_package: Option<&Package>, candidates: I) -> usize
    where
        I: IntoIterator<Item = &'a ClassRef>,
    {
        let mut added = 0;
        for class in candidates {
            if self.offer(owner_package, class) == ImportDecision::Added {
                added += 1;
            }
        }
        added
    }
}

impl<'a> IntoIterator for &'a ImportList {
    type Item = &'a ClassRef;
    type IntoIter = std::slice::Iter<'a, ClassRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
