//! Structural model of Java compilation units.
//!
//! Callers build [`JavaClass`] declarations incrementally: fields, methods, constructors, type
//! parameters, annotations, a superclass and interfaces. Each attachment derives the imports the
//! compilation unit needs (see [`imports`]), so a finished class can be handed straight to an
//! emitter.
//!
//! The model is single-threaded: a class graph is owned by one builder while it is constructed.

#![forbid(unsafe_code)]

mod access;
mod annotation;
mod class;
mod error;
pub mod imports;
mod member;
mod package;
mod reflect;
mod types;

pub use crate::access::{AccessModifiable, AccessModifier, Annotated};
pub use crate::annotation::Annotation;
pub use crate::class::JavaClass;
pub use crate::error::{ErrorKind, ModelError, Result};
pub use crate::imports::{
    resolve_references, ImportConflict, ImportDecision, ImportList, SkipReason, TypeReferences,
};
pub use crate::member::{Constructor, Field, Member, MemberHeader, Method, Parameter};
pub use crate::package::{Package, JAVA_LANG};
pub use crate::reflect::TypeDescriptor;
pub use crate::types::{
    ClassKind, ClassRef, ParameterizedType, PrimitiveType, Type, TypeVariable, WildcardType,
};
