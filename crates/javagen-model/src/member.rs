//! Fields, methods and constructors.
//!
//! Members are built by the caller and then moved into their owning [`crate::JavaClass`]. The
//! owner is recorded once on attachment; attaching a member that already has an owner (for
//! example a clone taken from another class) is rejected.

use crate::access::{AccessModifiable, AccessModifier, Annotated};
use crate::annotation::Annotation;
use crate::error::{ModelError, Result};
use crate::types::{ClassRef, Type, TypeVariable};

/// State shared by every member kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberHeader {
    owner: Option<ClassRef>,
    access: AccessModifier,
    annotations: Vec<Annotation>,
}

impl Default for MemberHeader {
    fn default() -> Self {
        Self {
            owner: None,
            access: AccessModifier::Private,
            annotations: Vec::new(),
        }
    }
}

impl MemberHeader {
    pub fn owner(&self) -> Option<&ClassRef> {
        self.owner.as_ref()
    }

    pub(crate) fn ensure_unowned(&self, member: &str) -> Result<()> {
        match &self.owner {
            Some(owner) => Err(ModelError::invalid_state(format!(
                "{member} is already owned by `{owner}`"
            ))),
            None => Ok(()),
        }
    }

    pub(crate) fn set_owner(&mut self, owner: ClassRef) {
        debug_assert!(self.owner.is_none());
        self.owner = Some(owner);
    }
}

macro_rules! impl_member_traits {
    ($ty:ty) => {
        impl AccessModifiable for $ty {
            fn access_modifier(&self) -> AccessModifier {
                self.header.access
            }

            fn set_access_modifier(&mut self, access: AccessModifier) {
                self.header.access = access;
            }
        }

        impl Annotated for $ty {
            fn annotations(&self) -> &[Annotation] {
                &self.header.annotations
            }

            fn add_annotation(&mut self, annotation: Annotation) {
                self.header.annotations.push(annotation);
            }
        }

        impl $ty {
            /// The class this member was attached to, if any.
            pub fn owner(&self) -> Option<&ClassRef> {
                self.header.owner()
            }

            pub fn header(&self) -> &MemberHeader {
                &self.header
            }

            #[must_use]
            pub fn with_access(mut self, access: AccessModifier) -> Self {
                self.header.access = access;
                self
            }

            #[must_use]
            pub fn with_annotation(mut self, annotation: Annotation) -> Self {
                self.header.annotations.push(annotation);
                self
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: Type,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: impl Into<Type>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    header: MemberHeader,
    ty: Type,
    name: String,
    is_static: bool,
    is_final: bool,
}

impl_member_traits!(Field);

impl Field {
    pub fn new(ty: impl Into<Type>, name: impl Into<String>) -> Self {
        Self {
            header: MemberHeader::default(),
            ty: ty.into(),
            name: name.into(),
            is_static: false,
            is_final: false,
        }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn set_final(&mut self, is_final: bool) {
        self.is_final = is_final;
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    #[must_use]
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    header: MemberHeader,
    name: String,
    return_type: Type,
    parameters: Vec<Parameter>,
    type_parameters: Vec<TypeVariable>,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    body: Option<Vec<String>>,
}

impl_member_traits!(Method);

impl Method {
    pub fn new(return_type: impl Into<Type>, name: impl Into<String>) -> Self {
        Self {
            header: MemberHeader::default(),
            name: name.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            is_abstract: false,
            is_static: false,
            is_final: false,
            body: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    #[must_use]
    pub fn with_parameter(mut self, ty: impl Into<Type>, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(ty, name));
        self
    }

    pub fn type_parameters(&self) -> &[TypeVariable] {
        &self.type_parameters
    }

    pub fn add_type_parameter(&mut self, var: TypeVariable) {
        self.type_parameters.push(var);
    }

    #[must_use]
    pub fn with_type_parameter(mut self, var: TypeVariable) -> Self {
        self.type_parameters.push(var);
        self
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn set_final(&mut self, is_final: bool) {
        self.is_final = is_final;
    }

    /// Raw statement lines for the method body. Emitters render `None` as an empty block.
    pub fn body(&self) -> Option<&[String]> {
        self.body.as_deref()
    }

    pub fn set_body<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = Some(lines.into_iter().map(Into::into).collect());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    header: MemberHeader,
    parameters: Vec<Parameter>,
    type_parameters: Vec<TypeVariable>,
    body: Option<Vec<String>>,
}

impl_member_traits!(Constructor);

impl Default for Constructor {
    fn default() -> Self {
        Self::new()
    }
}

impl Constructor {
    pub fn new() -> Self {
        Self {
            header: MemberHeader::default(),
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            body: None,
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    #[must_use]
    pub fn with_parameter(mut self, ty: impl Into<Type>, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(ty, name));
        self
    }

    pub fn type_parameters(&self) -> &[TypeVariable] {
        &self.type_parameters
    }

    pub fn add_type_parameter(&mut self, var: TypeVariable) {
        self.type_parameters.push(var);
    }

    #[must_use]
    pub fn with_type_parameter(mut self, var: TypeVariable) -> Self {
        self.type_parameters.push(var);
        self
    }

    pub fn body(&self) -> Option<&[String]> {
        self.body.as_deref()
    }

    pub fn set_body<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = Some(lines.into_iter().map(Into::into).collect());
    }
}

/// One entry of a class's unified, declaration-ordered member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(Field),
    Method(Method),
    Constructor(Constructor),
}

impl Member {
    pub fn header(&self) -> &MemberHeader {
        match self {
            Member::Field(field) => &field.header,
            Member::Method(method) => &method.header,
            Member::Constructor(constructor) => &constructor.header,
        }
    }

    pub(crate) fn header_mut(&mut self) -> &mut MemberHeader {
        match self {
            Member::Field(field) => &mut field.header,
            Member::Method(method) => &mut method.header,
            Member::Constructor(constructor) => &mut constructor.header,
        }
    }

    pub fn owner(&self) -> Option<&ClassRef> {
        self.header().owner()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.header().annotations
    }

    pub fn access_modifier(&self) -> AccessModifier {
        self.header().access
    }

    /// Generic parameters declared by the member itself (always empty for fields).
    pub fn type_parameters(&self) -> &[TypeVariable] {
        match self {
            Member::Field(_) => &[],
            Member::Method(method) => method.type_parameters(),
            Member::Constructor(constructor) => constructor.type_parameters(),
        }
    }

    /// Types the member uses (field type, return type, parameter types), excluding the bounds
    /// of its own type parameters.
    pub(crate) fn use_sites(&self) -> Vec<&Type> {
        let (head, parameters) = match self {
            Member::Field(field) => return vec![field.ty()],
            Member::Method(method) => (Some(method.return_type()), method.parameters()),
            Member::Constructor(constructor) => (None, constructor.parameters()),
        };
        head.into_iter()
            .chain(parameters.iter().map(|parameter| &parameter.ty))
            .collect()
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Member::Field(field) => format!("field `{}`", field.name()),
            Member::Method(method) => format!("method `{}`", method.name()),
            Member::Constructor(_) => "constructor".to_string(),
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Member::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Member::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_constructor(&self) -> Option<&Constructor> {
        match self {
            Member::Constructor(constructor) => Some(constructor),
            _ => None,
        }
    }
}

impl From<Field> for Member {
    fn from(value: Field) -> Self {
        Member::Field(value)
    }
}

impl From<Method> for Member {
    fn from(value: Method) -> Self {
        Member::Method(value)
    }
}

impl From<Constructor> for Member {
    fn from(value: Constructor) -> Self {
        Member::Constructor(value)
    }
}
