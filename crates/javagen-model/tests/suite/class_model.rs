use javagen_model::{
    AccessModifiable, AccessModifier, Annotated, ClassRef, Constructor, ErrorKind, Field,
    JavaClass, Member, Method, Parameter, Type, TypeVariable,
};

use pretty_assertions::assert_eq;

fn list() -> ClassRef {
    ClassRef::interface("java.util", "List")
}

fn abstract_list() -> ClassRef {
    ClassRef::new("java.util", "AbstractList")
}

#[test]
fn set_parent_accepts_class_and_parameterized_class() {
    let mut class = JavaClass::new("com.acme", "Foo");
    class.set_parent(abstract_list()).unwrap();
    assert_eq!(class.parent(), Some(&Type::class(abstract_list())));

    let parameterized = Type::parameterized(abstract_list(), vec![Type::var_ref("T")]);
    class.set_parent(parameterized.clone()).unwrap();
    assert_eq!(class.parent(), Some(&parameterized));
}

#[test]
fn set_parent_rejects_interfaces_and_non_class_types() {
    let mut class = JavaClass::new("com.acme", "Foo");

    let err = class.set_parent(list()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = class
        .set_parent(Type::parameterized(list(), vec![Type::var_ref("T")]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = class.set_parent(Type::int()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    assert_eq!(class.parent(), None);
    assert!(class.imports().is_empty());
}

#[test]
fn interfaces_never_accept_a_parent() {
    let mut iface = JavaClass::interface("com.acme", "Repository");

    for parent in [
        Type::class(abstract_list()),
        Type::class(list()),
        Type::parameterized(abstract_list(), vec![]),
    ] {
        let err = iface.set_parent(parent).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }

    assert_eq!(iface.parent(), None);
    assert!(iface.imports().is_empty());
}

#[test]
fn add_interface_requires_interface_kind() {
    let mut class = JavaClass::new("com.acme", "Foo");
    let comparable = Type::parameterized(
        ClassRef::interface("java.lang", "Comparable"),
        vec![class.as_type()],
    );
    class.add_interface(list()).unwrap();
    class.add_interface(comparable).unwrap();

    let err = class.add_interface(abstract_list()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let err = class
        .add_interface(Type::parameterized(abstract_list(), vec![]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    assert_eq!(class.interfaces().len(), 2);
}

#[test]
fn interfaces_may_extend_interfaces() {
    let mut iface = JavaClass::interface("com.acme", "NamedList");
    iface.add_interface(list()).unwrap();
    assert_eq!(iface.interfaces(), &[Type::class(list())]);
}

#[test]
fn member_ownership_is_set_once() {
    let mut first = JavaClass::new("com.acme", "First");
    let mut second = JavaClass::new("com.acme", "Second");

    first.add_field(Field::new(Type::int(), "count")).unwrap();
    let owned = first.fields().next().unwrap().clone();
    assert_eq!(owned.owner(), Some(&first.to_ref()));

    let err = second.add_field(owned).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    assert_eq!(first.members().len(), 1);
    assert!(second.members().is_empty());
}

#[test]
fn owned_methods_and_constructors_are_rejected_too() {
    let mut first = JavaClass::new("com.acme", "First");
    first.add_method(Method::new(Type::void(), "run")).unwrap();
    first.add_constructor(Constructor::new()).unwrap();

    let mut second = JavaClass::new("com.acme", "Second");
    let method = first.methods().next().unwrap().clone();
    let constructor = first.constructors().next().unwrap().clone();
    assert_eq!(
        second.add_method(method).unwrap_err().kind(),
        ErrorKind::InvalidState
    );
    assert_eq!(
        second.add_member(constructor).unwrap_err().kind(),
        ErrorKind::InvalidState
    );
    assert!(second.members().is_empty());
}

#[test]
fn interface_methods_are_forced_abstract() {
    let mut iface = JavaClass::interface("com.acme", "Repository");

    let mut concrete = Method::new(Type::void(), "save");
    concrete.set_abstract(false);
    iface.add_method(concrete).unwrap();
    iface.add_member(Method::new(Type::int(), "count")).unwrap();

    assert!(iface.methods().all(Method::is_abstract));

    let mut class = JavaClass::new("com.acme", "Impl");
    class.add_method(Method::new(Type::void(), "save")).unwrap();
    assert!(!class.methods().next().unwrap().is_abstract());
}

#[test]
fn unbounded_type_parameters_are_rejected_everywhere() {
    let mut class = JavaClass::new("com.acme", "Box");

    let err = class.add_type_parameter(TypeVariable::new("T")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(class.type_parameters().is_empty());

    let method = Method::new(Type::var_ref("U"), "get").with_type_parameter(TypeVariable::new("U"));
    assert_eq!(
        class.add_method(method).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );

    let constructor = Constructor::new().with_type_parameter(TypeVariable::new("V"));
    assert_eq!(
        class.add_constructor(constructor).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );

    assert!(class.members().is_empty());
}

#[test]
fn bounded_type_parameters_are_kept_in_order() {
    let mut class = JavaClass::new("com.acme", "Box");
    let number = ClassRef::new("java.lang", "Number");
    let serializable = ClassRef::interface("java.io", "Serializable");

    class
        .add_type_parameter(TypeVariable::bounded("T", number.into()))
        .unwrap();
    class
        .add_type_parameter(TypeVariable::new("U").with_additional_bound(serializable.into()))
        .unwrap();

    let names: Vec<&str> = class.type_parameters().iter().map(TypeVariable::name).collect();
    assert_eq!(names, vec!["T", "U"]);
}

#[test]
fn member_accessors_filter_the_unified_list() {
    let mut class = JavaClass::new("com.acme", "Foo");
    class.add_field(Field::new(Type::int(), "a")).unwrap();
    class.add_method(Method::new(Type::void(), "m1")).unwrap();
    class.add_constructor(Constructor::new()).unwrap();
    class.add_field(Field::new(Type::long(), "b")).unwrap();
    class.add_method(Method::new(Type::void(), "m2")).unwrap();

    let fields: Vec<&str> = class.fields().map(Field::name).collect();
    let methods: Vec<&str> = class.methods().map(Method::name).collect();
    assert_eq!(fields, vec!["a", "b"]);
    assert_eq!(methods, vec!["m1", "m2"]);
    assert_eq!(class.constructors().count(), 1);

    let kinds: Vec<&str> = class
        .members()
        .iter()
        .map(|member| match member {
            Member::Field(_) => "field",
            Member::Method(_) => "method",
            Member::Constructor(_) => "constructor",
        })
        .collect();
    assert_eq!(kinds, vec!["field", "method", "constructor", "field", "method"]);
}

#[test]
fn members_keep_their_modifiers_and_annotations() {
    let deprecated = ClassRef::new("java.lang", "Deprecated");

    let mut field = Field::new(Type::int(), "MAX")
        .with_static(true)
        .with_final(true)
        .with_access(AccessModifier::Public);
    field.annotate(deprecated.clone());

    let mut method = Method::new(Type::void(), "run").with_parameter(Type::int(), "times");
    method.set_access_modifier(AccessModifier::Protected);
    method.annotate_with(ClassRef::new("java.lang", "SuppressWarnings"), "\"unchecked\"");

    let mut class = JavaClass::new("com.acme", "Foo");
    class.add_field(field).unwrap();
    class.add_method(method).unwrap();

    let field = class.fields().next().unwrap();
    assert!(field.is_static() && field.is_final());
    assert_eq!(field.access_modifier(), AccessModifier::Public);
    assert_eq!(field.annotations()[0].class(), &deprecated);

    let method = class.methods().next().unwrap();
    assert_eq!(method.access_modifier(), AccessModifier::Protected);
    assert_eq!(method.annotations()[0].value(), Some("\"unchecked\""));
    assert_eq!(method.parameters(), &[Parameter::new(Type::int(), "times")]);
}
