use crate::access::{AccessModifiable, AccessModifier, Annotated};
use crate::annotation::Annotation;
use crate::error::{ModelError, Result};
use crate::imports::{
    resolve_references, ImportConflict, ImportDecision, ImportList, TypeReferences,
};
use crate::member::{Constructor, Field, Member, Method};
use crate::package::Package;
use crate::types::{ClassKind, ClassRef, Type, TypeVariable};

/// A class or interface declaration: the root of a compilation unit.
///
/// Every mutator that attaches structure (members, type parameters, parent, interfaces,
/// annotations) also folds the classes that structure mentions into [`JavaClass::imports`], so
/// the import list is complete as soon as construction is.
///
/// Equality is structural: two declarations are equal iff simple name and package match.
#[derive(Debug, Clone)]
pub struct JavaClass {
    package: Package,
    name: String,
    kind: ClassKind,
    access: AccessModifier,
    is_array: bool,
    annotations: Vec<Annotation>,
    type_parameters: Vec<TypeVariable>,
    parent: Option<Type>,
    interfaces: Vec<Type>,
    members: Vec<Member>,
    imports: ImportList,
}

impl JavaClass {
    pub fn new(package: impl Into<Package>, name: impl Into<String>) -> Self {
        Self::with_kind(package.into(), name.into(), ClassKind::Class)
    }

    pub fn interface(package: impl Into<Package>, name: impl Into<String>) -> Self {
        Self::with_kind(package.into(), name.into(), ClassKind::Interface)
    }

    /// A bare declaration shell for an existing class (package, name and kind only).
    pub fn from_ref(class: &ClassRef) -> Self {
        let package = class.package().cloned().unwrap_or_else(|| Package::new(""));
        let mut shell = Self::with_kind(package, class.name().to_string(), class.kind());
        shell.is_array = class.is_array();
        shell
    }

    fn with_kind(package: Package, name: String, kind: ClassKind) -> Self {
        Self {
            package,
            name,
            kind,
            access: AccessModifier::Public,
            is_array: false,
            annotations: Vec::new(),
            type_parameters: Vec::new(),
            parent: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            imports: ImportList::new(),
        }
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    pub fn full_name(&self) -> String {
        self.to_ref().full_name()
    }

    /// A reference to this declaration, for use in types and as a member owner.
    pub fn to_ref(&self) -> ClassRef {
        ClassRef::new(self.package.clone(), self.name.clone())
            .with_kind(self.kind)
            .with_array(self.is_array)
    }

    pub fn as_type(&self) -> Type {
        Type::Class(self.to_ref())
    }

    /// `true` for classes in the implicitly imported `java.lang` package.
    ///
    /// The resolver does not filter these out; emitters use this flag to leave out explicit
    /// import lines.
    pub fn is_system_type(&self) -> bool {
        self.package.is_java_lang()
    }

    pub fn is_array(&self) -> bool {
        self.is_array
    }

    pub fn set_array(&mut self, is_array: bool) {
        self.is_array = is_array;
    }

    pub fn imports(&self) -> &[ClassRef] {
        self.imports.as_slice()
    }

    pub fn import_list(&self) -> &ImportList {
        &self.imports
    }

    /// Classes left out of the import list because their simple name was already taken.
    pub fn import_conflicts(&self) -> &[ImportConflict] {
        self.imports.conflicts()
    }

    /// Explicitly import `class`, subject to the same rules as derived imports.
    ///
    /// Returns `true` if the class was appended.
    pub fn add_import(&mut self, class: &ClassRef) -> bool {
        self.imports.offer(Some(&self.package), class) == ImportDecision::Added
    }

    pub fn type_parameters(&self) -> &[TypeVariable] {
        &self.type_parameters
    }

    pub fn add_type_parameter(&mut self, var: TypeVariable) -> Result<()> {
        var.validate()?;
        self.import_from(&var);
        self.type_parameters.push(var);
        Ok(())
    }

    pub fn parent(&self) -> Option<&Type> {
        self.parent.as_ref()
    }

    /// Set the superclass: a class, or a parameterized type over a class.
    ///
    /// Interfaces never declare a superclass; calling this on one always fails with
    /// [`ModelError::UnsupportedOperation`].
    pub fn set_parent(&mut self, parent: impl Into<Type>) -> Result<()> {
        if self.is_interface() {
            return Err(ModelError::unsupported(format!(
                "interface `{}` cannot declare a superclass",
                self.name
            )));
        }

        let parent = parent.into();
        Self::expect_head_kind(&parent, ClassKind::Class, "superclass")?;
        Self::reject_declared_variable(&parent, "superclass")?;
        self.import_from(&parent);
        self.parent = Some(parent);
        Ok(())
    }

    pub fn interfaces(&self) -> &[Type] {
        &self.interfaces
    }

    /// Add an implemented (or, for interfaces, extended) interface: an interface, or a
    /// parameterized type over an interface.
    pub fn add_interface(&mut self, interface: impl Into<Type>) -> Result<()> {
        let interface = interface.into();
        Self::expect_head_kind(&interface, ClassKind::Interface, "interface")?;
        Self::reject_declared_variable(&interface, "interface")?;
        self.import_from(&interface);
        self.interfaces.push(interface);
        Ok(())
    }

    fn expect_head_kind(ty: &Type, expected: ClassKind, role: &str) -> Result<()> {
        let Some(head) = ty.head_class() else {
            return Err(ModelError::invalid_argument(format!(
                "{role} must be a class type or a parameterized class type, got `{ty}`"
            )));
        };
        if head.kind() != expected {
            return Err(ModelError::invalid_argument(format!(
                "{role} `{}` must be {} {}",
                head.full_name(),
                if expected == ClassKind::Interface { "an" } else { "a" },
                expected.keyword()
            )));
        }
        Ok(())
    }

    /// Type parameter declarations are only valid in type parameter lists.
    fn reject_declared_variable(ty: &Type, role: &str) -> Result<()> {
        match ty.declared_variable() {
            Some(var) => Err(ModelError::invalid_argument(format!(
                "{role} declares type variable `{}` at a use site; use a variable reference",
                var.name()
            ))),
            None => Ok(()),
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.members.iter().filter_map(Member::as_field)
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.members.iter().filter_map(Member::as_method)
    }

    pub fn constructors(&self) -> impl Iterator<Item = &Constructor> {
        self.members.iter().filter_map(Member::as_constructor)
    }

    pub fn add_field(&mut self, field: Field) -> Result<()> {
        self.attach(Member::Field(field))
    }

    /// Attach a method. Methods added to an interface are always abstract.
    pub fn add_method(&mut self, mut method: Method) -> Result<()> {
        if self.is_interface() {
            method.set_abstract(true);
        }
        self.attach(Member::Method(method))
    }

    pub fn add_constructor(&mut self, constructor: Constructor) -> Result<()> {
        self.attach(Member::Constructor(constructor))
    }

    /// Attach any member kind, dispatching to the matching `add_*` operation.
    pub fn add_member(&mut self, member: impl Into<Member>) -> Result<()> {
        let member: Member = member.into();
        match member {
            Member::Field(field) => self.add_field(field),
            Member::Method(method) => self.add_method(method),
            Member::Constructor(constructor) => self.add_constructor(constructor),
        }
    }

    fn attach(&mut self, mut member: Member) -> Result<()> {
        member.header().ensure_unowned(&member.describe())?;
        for var in member.type_parameters() {
            var.validate()?;
        }
        let role = member.describe();
        for ty in member.use_sites() {
            Self::reject_declared_variable(ty, &role)?;
        }

        self.import_from(&member);
        member.header_mut().set_owner(self.to_ref());
        self.members.push(member);
        Ok(())
    }

    fn import_from<T: TypeReferences + ?Sized>(&mut self, piece: &T) {
        self.imports.merge(Some(&self.package), resolve_references(piece));
    }
}

impl AccessModifiable for JavaClass {
    fn access_modifier(&self) -> AccessModifier {
        self.access
    }

    fn set_access_modifier(&mut self, access: AccessModifier) {
        self.access = access;
    }
}

impl Annotated for JavaClass {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn add_annotation(&mut self, annotation: Annotation) {
        self.import_from(&annotation);
        self.annotations.push(annotation);
    }
}

impl PartialEq for JavaClass {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.package == other.package
    }
}

impl Eq for JavaClass {}
