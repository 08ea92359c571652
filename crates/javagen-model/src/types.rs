//! The closed type taxonomy.
//!
//! Every place that needs to reason about "which classes does this type mention" matches
//! exhaustively over [`Type`], so adding a variant is a compile-time change at each traversal site.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::package::Package;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
}

impl ClassKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
        }
    }
}

/// A reference to a named class or interface.
///
/// Two references are equal iff their simple names and package names match; the kind and array
/// flag do not take part in identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRef {
    package: Option<Package>,
    name: String,
    #[serde(default = "default_kind")]
    kind: ClassKind,
    #[serde(default)]
    array: bool,
}

fn default_kind() -> ClassKind {
    ClassKind::Class
}

impl ClassRef {
    pub fn new(package: impl Into<Package>, name: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            name: name.into(),
            kind: ClassKind::Class,
            array: false,
        }
    }

    pub fn interface(package: impl Into<Package>, name: impl Into<String>) -> Self {
        Self::new(package, name).with_kind(ClassKind::Interface)
    }

    /// A class without a package. Such classes are assumed to be in scope already and are never
    /// imported.
    pub fn unpackaged(name: impl Into<String>) -> Self {
        Self {
            package: None,
            name: name.into(),
            kind: ClassKind::Class,
            array: false,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_array(mut self, array: bool) -> Self {
        self.array = array;
        self
    }

    pub fn package(&self) -> Option<&Package> {
        self.package.as_ref()
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package.as_ref().map(Package::full_name)
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

    pub fn is_array(&self) -> bool {
        self.array
    }

    /// `package.Name`, or just `Name` for classes without a (or in the default) package.
    pub fn full_name(&self) -> String {
        match self.package_name() {
            Some(pkg) if !pkg.is_empty() => format!("{pkg}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    pub fn is_system(&self) -> bool {
        self.package.as_ref().is_some_and(Package::is_java_lang)
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.package_name() == other.package_name()
    }
}

impl Eq for ClassRef {}

impl Hash for ClassRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.package_name().hash(state);
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "boolean" => PrimitiveType::Boolean,
            "byte" => PrimitiveType::Byte,
            "char" => PrimitiveType::Char,
            "short" => PrimitiveType::Short,
            "int" => PrimitiveType::Int,
            "long" => PrimitiveType::Long,
            "float" => PrimitiveType::Float,
            "double" => PrimitiveType::Double,
            "void" => PrimitiveType::Void,
            _ => return None,
        })
    }
}

/// A declared generic parameter, e.g. the `T extends Number & Comparable<T>` in `class Box<...>`.
///
/// When declared on a class, method or constructor a variable must carry at least one bound;
/// [`TypeVariable::validate`] checks this and every attachment point calls it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeVariable {
    name: String,
    #[serde(default)]
    bound: Option<Box<Type>>,
    #[serde(default)]
    additional_bounds: Vec<Type>,
}

impl TypeVariable {
    /// Start building a variable. It has no bound yet; add one before attaching it.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: None,
            additional_bounds: Vec::new(),
        }
    }

    /// Build a variable with an explicit bound configuration, failing when there is none.
    pub fn try_new(
        name: impl Into<String>,
        bound: Option<Type>,
        additional_bounds: Vec<Type>,
    ) -> Result<Self> {
        let var = Self {
            name: name.into(),
            bound: bound.map(Box::new),
            additional_bounds,
        };
        var.validate()?;
        Ok(var)
    }

    pub fn bounded(name: impl Into<String>, bound: Type) -> Self {
        Self::new(name).with_bound(bound)
    }

    #[must_use]
    pub fn with_bound(mut self, bound: Type) -> Self {
        self.bound = Some(Box::new(bound));
        self
    }

    #[must_use]
    pub fn with_additional_bound(mut self, bound: Type) -> Self {
        self.additional_bounds.push(bound);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bound(&self) -> Option<&Type> {
        self.bound.as_deref()
    }

    pub fn additional_bounds(&self) -> &[Type] {
        &self.additional_bounds
    }

    /// Primary bound first, then the additional bounds in declaration order.
    pub fn bounds(&self) -> impl Iterator<Item = &Type> {
        self.bound().into_iter().chain(self.additional_bounds.iter())
    }

    pub fn validate(&self) -> Result<()> {
        if self.bound.is_none() && self.additional_bounds.is_empty() {
            return Err(ModelError::invalid_argument(format!(
                "type variable `{}` declares no bound",
                self.name
            )));
        }
        Ok(())
    }

    /// A use-site reference to this variable.
    pub fn reference(&self) -> Type {
        Type::var_ref(self.name.clone())
    }
}

/// `?`, `? extends A & B`, `? super C`. Absent bound lists are not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WildcardType {
    #[serde(default)]
    upper_bounds: Option<Vec<Type>>,
    #[serde(default)]
    lower_bounds: Option<Vec<Type>>,
}

impl WildcardType {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn extends(bounds: Vec<Type>) -> Self {
        Self {
            upper_bounds: Some(bounds),
            lower_bounds: None,
        }
    }

    pub fn super_of(bounds: Vec<Type>) -> Self {
        Self {
            upper_bounds: None,
            lower_bounds: Some(bounds),
        }
    }

    pub fn new(upper_bounds: Option<Vec<Type>>, lower_bounds: Option<Vec<Type>>) -> Self {
        Self {
            upper_bounds,
            lower_bounds,
        }
    }

    pub fn upper_bounds(&self) -> Option<&[Type]> {
        self.upper_bounds.as_deref()
    }

    pub fn lower_bounds(&self) -> Option<&[Type]> {
        self.lower_bounds.as_deref()
    }
}

/// A generic class instantiated with type arguments, e.g. `Map<String, List<T>>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterizedType {
    base: ClassRef,
    arguments: Vec<Type>,
}

impl ParameterizedType {
    pub fn new(base: ClassRef, arguments: Vec<Type>) -> Self {
        Self { base, arguments }
    }

    pub fn base(&self) -> &ClassRef {
        &self.base
    }

    pub fn arguments(&self) -> &[Type] {
        &self.arguments
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Type {
    Primitive { primitive: PrimitiveType },
    Class(ClassRef),
    Array { element: Box<Type> },
    Variable(TypeVariable),
    VariableRef { name: String },
    Wildcard(WildcardType),
    Parameterized(ParameterizedType),
}

impl Type {
    pub fn primitive(primitive: PrimitiveType) -> Self {
        Type::Primitive { primitive }
    }

    pub fn void() -> Self {
        Type::primitive(PrimitiveType::Void)
    }

    pub fn int() -> Self {
        Type::primitive(PrimitiveType::Int)
    }

    pub fn boolean() -> Self {
        Type::primitive(PrimitiveType::Boolean)
    }

    pub fn long() -> Self {
        Type::primitive(PrimitiveType::Long)
    }

    pub fn class(class: ClassRef) -> Self {
        Type::Class(class)
    }

    pub fn array(element: Type) -> Self {
        Type::Array {
            element: Box::new(element),
        }
    }

    pub fn var_ref(name: impl Into<String>) -> Self {
        Type::VariableRef { name: name.into() }
    }

    pub fn wildcard(wildcard: WildcardType) -> Self {
        Type::Wildcard(wildcard)
    }

    pub fn parameterized(base: ClassRef, arguments: Vec<Type>) -> Self {
        Type::Parameterized(ParameterizedType::new(base, arguments))
    }

    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            Type::Class(class) => Some(class),
            _ => None,
        }
    }

    /// The class at the head of a class or parameterized type.
    pub fn head_class(&self) -> Option<&ClassRef> {
        match self {
            Type::Class(class) => Some(class),
            Type::Parameterized(parameterized) => Some(parameterized.base()),
            _ => None,
        }
    }

    /// The first type parameter *declaration* nested in this type, if any.
    ///
    /// Declarations belong in type parameter lists only; at a use site a type variable is
    /// written as [`Type::VariableRef`].
    pub fn declared_variable(&self) -> Option<&TypeVariable> {
        match self {
            Type::Variable(var) => Some(var),
            Type::Primitive { .. } | Type::Class(_) | Type::VariableRef { .. } => None,
            Type::Array { element } => element.declared_variable(),
            Type::Wildcard(wildcard) => wildcard
                .lower_bounds()
                .into_iter()
                .flatten()
                .chain(wildcard.upper_bounds().into_iter().flatten())
                .find_map(Type::declared_variable),
            Type::Parameterized(parameterized) => parameterized
                .arguments()
                .iter()
                .find_map(Type::declared_variable),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(
            self,
            Type::Primitive {
                primitive: PrimitiveType::Void
            }
        )
    }
}

impl From<ClassRef> for Type {
    fn from(value: ClassRef) -> Self {
        Type::Class(value)
    }
}

impl From<PrimitiveType> for Type {
    fn from(value: PrimitiveType) -> Self {
        Type::primitive(value)
    }
}

impl From<ParameterizedType> for Type {
    fn from(value: ParameterizedType) -> Self {
        Type::Parameterized(value)
    }
}

impl From<WildcardType> for Type {
    fn from(value: WildcardType) -> Self {
        Type::Wildcard(value)
    }
}

/// Java-like rendering using simple class names, for diagnostics and logs.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive { primitive } => f.write_str(primitive.keyword()),
            Type::Class(class) => {
                f.write_str(class.name())?;
                if class.is_array() {
                    f.write_str("[]")?;
                }
                Ok(())
            }
            Type::Array { element } => write!(f, "{element}[]"),
            Type::Variable(var) => {
                f.write_str(var.name())?;
                let mut bounds = var.bounds();
                if let Some(first) = bounds.next() {
                    write!(f, " extends {first}")?;
                    for bound in bounds {
                        write!(f, " & {bound}")?;
                    }
                }
                Ok(())
            }
            Type::VariableRef { name } => f.write_str(name),
            Type::Wildcard(wildcard) => {
                f.write_str("?")?;
                if let Some(upper) = wildcard.upper_bounds().filter(|b| !b.is_empty()) {
                    f.write_str(" extends ")?;
                    write_joined(f, upper, " & ")?;
                }
                if let Some(lower) = wildcard.lower_bounds().filter(|b| !b.is_empty()) {
                    f.write_str(" super ")?;
                    write_joined(f, lower, " & ")?;
                }
                Ok(())
            }
            Type::Parameterized(parameterized) => {
                write!(f, "{}<", parameterized.base().name())?;
                write_joined(f, parameterized.arguments(), ", ")?;
                f.write_str(">")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, types: &[Type], sep: &str) -> fmt::Result {
    for (idx, ty) in types.iter().enumerate() {
        if idx > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}
