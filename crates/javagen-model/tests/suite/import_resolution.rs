use javagen_model::{
    resolve_references, Annotated, Annotation, ClassRef, Constructor, ErrorKind, Field, JavaClass,
    Method, Type, TypeVariable, WildcardType,
};

use pretty_assertions::assert_eq;

fn import_names(class: &JavaClass) -> Vec<String> {
    class.imports().iter().map(ClassRef::full_name).collect()
}

#[test]
fn end_to_end_import_derivation() {
    let mut foo = JavaClass::new("com.acme", "Foo");

    foo.add_field(Field::new(ClassRef::new("com.acme", "Bar"), "bar"))
        .unwrap();
    assert!(foo.imports().is_empty());

    let baz = ClassRef::new("com.other", "Baz");
    foo.add_field(Field::new(baz.clone(), "baz")).unwrap();
    assert_eq!(import_names(&foo), vec!["com.other.Baz"]);

    let list_of_baz = Type::parameterized(ClassRef::interface("java.util", "List"), vec![baz.into()]);
    foo.add_method(Method::new(list_of_baz, "all")).unwrap();
    assert_eq!(import_names(&foo), vec!["com.other.Baz", "java.util.List"]);
}

#[test]
fn same_package_classes_are_never_imported() {
    let sibling = ClassRef::new("com.acme", "Sibling");
    let sibling_iface = ClassRef::interface("com.acme", "Marker");
    let mut class = JavaClass::new("com.acme", "Foo");

    class.set_parent(sibling.clone()).unwrap();
    class.add_interface(sibling_iface.clone()).unwrap();
    class.annotate(ClassRef::new("com.acme", "Generated"));
    class
        .add_type_parameter(TypeVariable::bounded("T", sibling.clone().into()))
        .unwrap();
    class
        .add_method(
            Method::new(Type::array(sibling.clone().into()), "all")
                .with_parameter(sibling_iface.clone(), "marker")
                .with_annotation(Annotation::new(ClassRef::new("com.acme", "Audit"))),
        )
        .unwrap();
    class
        .add_constructor(Constructor::new().with_parameter(sibling, "seed"))
        .unwrap();

    assert!(class.imports().is_empty());
}

#[test]
fn classes_without_package_are_never_imported() {
    let mut class = JavaClass::new("com.acme", "Foo");
    class
        .add_field(Field::new(ClassRef::unpackaged("Ghost"), "ghost"))
        .unwrap();
    assert!(class.imports().is_empty());
}

#[test]
fn simple_name_dedup_keeps_first_and_flags_the_rest() {
    let util_date = ClassRef::new("java.util", "Date");
    let sql_date = ClassRef::new("java.sql", "Date");

    let mut class = JavaClass::new("com.acme", "Foo");
    class.add_field(Field::new(util_date.clone(), "created")).unwrap();
    class.add_field(Field::new(sql_date.clone(), "stored")).unwrap();
    class.add_field(Field::new(util_date.clone(), "updated")).unwrap();

    assert_eq!(class.imports(), &[util_date.clone()]);
    assert_eq!(class.import_conflicts().len(), 1);
    assert_eq!(class.import_conflicts()[0].imported, util_date);
    assert_eq!(class.import_conflicts()[0].shadowed, sql_date);
}

#[test]
fn method_scan_order_is_bounds_annotations_return_parameters() {
    let bound = ClassRef::new("a.bound", "Bound");
    let annotation = ClassRef::new("a.annotation", "Marker");
    let ret = ClassRef::new("a.ret", "Result");
    let param = ClassRef::new("a.param", "Input");

    let method = Method::new(ret, "apply")
        .with_parameter(param, "input")
        .with_type_parameter(TypeVariable::bounded("T", bound.into()))
        .with_annotation(Annotation::new(annotation));

    let mut class = JavaClass::new("com.acme", "Foo");
    class.add_method(method).unwrap();

    assert_eq!(
        import_names(&class),
        vec!["a.bound.Bound", "a.annotation.Marker", "a.ret.Result", "a.param.Input"]
    );
}

#[test]
fn constructor_and_field_scan_order() {
    let mut class = JavaClass::new("com.acme", "Foo");

    let constructor = Constructor::new()
        .with_parameter(ClassRef::new("c.param", "Arg"), "arg")
        .with_annotation(Annotation::new(ClassRef::new("c.annotation", "Inject")))
        .with_type_parameter(
            TypeVariable::new("T").with_additional_bound(ClassRef::interface("c.bound", "Api").into()),
        );
    class.add_constructor(constructor).unwrap();

    let field = Field::new(ClassRef::new("f.ty", "Value"), "value")
        .with_annotation(Annotation::new(ClassRef::new("f.annotation", "Column")));
    class.add_field(field).unwrap();

    assert_eq!(
        import_names(&class),
        vec![
            "c.bound.Api",
            "c.annotation.Inject",
            "c.param.Arg",
            "f.annotation.Column",
            "f.ty.Value",
        ]
    );
}

#[test]
fn traversal_reaches_into_nested_structure() {
    let map = ClassRef::interface("java.util", "Map");
    let string = ClassRef::new("java.lang", "String");
    let list = ClassRef::interface("java.util", "List");
    let integer = ClassRef::new("java.lang", "Integer");

    // Map<String, List<? super Integer[]>>
    let ty = Type::parameterized(
        map,
        vec![
            string.into(),
            Type::parameterized(
                list,
                vec![Type::wildcard(WildcardType::super_of(vec![Type::array(
                    integer.into(),
                )]))],
            ),
        ],
    );

    let mut class = JavaClass::new("com.acme", "Foo");
    class.add_field(Field::new(ty, "index")).unwrap();

    assert_eq!(
        import_names(&class),
        vec![
            "java.util.Map",
            "java.lang.String",
            "java.util.List",
            "java.lang.Integer",
        ]
    );
    // The resolver keeps system classes; emitters drop them.
    assert_eq!(class.imports().iter().filter(|c| c.is_system()).count(), 2);
}

#[test]
fn declared_type_variables_are_rejected_at_use_sites() {
    let thing = ClassRef::new("org.lib", "Thing");
    let declared = || Type::Variable(TypeVariable::bounded("T", thing.clone().into()));
    let list = ClassRef::interface("java.util", "List");
    let mut class = JavaClass::new("com.acme", "Holder");

    let err = class.add_field(Field::new(declared(), "value")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let nested = Type::array(Type::parameterized(
        list.clone(),
        vec![Type::wildcard(WildcardType::extends(vec![declared()]))],
    ));
    let err = class
        .add_method(Method::new(Type::void(), "fill").with_parameter(nested, "items"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = class
        .add_constructor(Constructor::new().with_parameter(declared(), "seed"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = class
        .set_parent(Type::parameterized(ClassRef::new("org.base", "Base"), vec![declared()]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(class.parent().is_none());

    let err = class
        .add_interface(Type::parameterized(list.clone(), vec![declared()]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    assert!(class.members().is_empty());
    assert!(class.imports().is_empty());

    // Declarations stay legal in type parameter lists; uses go through references.
    class
        .add_method(
            Method::new(Type::var_ref("T"), "get")
                .with_type_parameter(TypeVariable::bounded("T", thing.clone().into())),
        )
        .unwrap();
    assert_eq!(import_names(&class), vec!["org.lib.Thing"]);
}

#[test]
fn type_parameter_bounds_are_traversed() {
    let comparable = ClassRef::interface("java.lang", "Comparable");
    let var = TypeVariable::bounded(
        "T",
        Type::parameterized(comparable.clone(), vec![Type::var_ref("T")]),
    );

    let refs = resolve_references(&var);
    assert_eq!(refs, vec![&comparable]);
}

#[test]
fn declaration_level_pieces_are_imported() {
    let mut class = JavaClass::new("com.acme", "Repo");

    class.annotate_with(ClassRef::new("javax.annotation", "Generated"), "\"javagen\"");
    class
        .add_type_parameter(
            TypeVariable::bounded("E", ClassRef::new("com.acme.model", "Entity").into())
                .with_additional_bound(ClassRef::interface("java.io", "Serializable").into()),
        )
        .unwrap();
    class
        .set_parent(Type::parameterized(
            ClassRef::new("org.base", "BaseRepo"),
            vec![Type::var_ref("E")],
        ))
        .unwrap();
    class
        .add_interface(ClassRef::interface("java.lang", "AutoCloseable"))
        .unwrap();

    assert_eq!(
        import_names(&class),
        vec![
            "javax.annotation.Generated",
            "com.acme.model.Entity",
            "java.io.Serializable",
            "org.base.BaseRepo",
            "java.lang.AutoCloseable",
        ]
    );
}

#[test]
fn imports_are_never_retracted() {
    let mut class = JavaClass::new("com.acme", "Foo");
    class.set_parent(ClassRef::new("org.one", "Base")).unwrap();
    class.set_parent(ClassRef::new("org.two", "Other")).unwrap();

    assert_eq!(import_names(&class), vec!["org.one.Base", "org.two.Other"]);
    assert_eq!(
        class.parent(),
        Some(&Type::class(ClassRef::new("org.two", "Other")))
    );
}

#[test]
fn failed_attachments_do_not_touch_imports() {
    let mut class = JavaClass::new("com.acme", "Foo");
    let method = Method::new(ClassRef::new("org.lib", "Thing"), "thing")
        .with_type_parameter(TypeVariable::new("T"));
    assert!(class.add_method(method).is_err());
    assert!(class.add_interface(ClassRef::new("org.lib", "NotAnInterface")).is_err());
    assert!(class.imports().is_empty());
}

#[test]
fn explicit_imports_follow_the_same_rules() {
    let mut class = JavaClass::new("com.acme", "Foo");
    assert!(class.add_import(&ClassRef::new("java.util", "List")));
    assert!(!class.add_import(&ClassRef::new("java.util", "List")));
    assert!(!class.add_import(&ClassRef::new("com.acme", "Bar")));
    assert!(!class.add_import(&ClassRef::new("java.awt", "List")));
    assert_eq!(import_names(&class), vec!["java.util.List"]);
}

#[test]
fn import_derivation_is_deterministic() {
    fn build() -> JavaClass {
        let mut class = JavaClass::new("com.acme", "Foo");
        for (pkg, name) in [("z.last", "Zed"), ("a.first", "Alpha"), ("m.mid", "Mid")] {
            class
                .add_field(Field::new(ClassRef::new(pkg, name), name.to_lowercase()))
                .unwrap();
        }
        class
            .add_method(Method::new(
                Type::parameterized(
                    ClassRef::interface("java.util", "Set"),
                    vec![ClassRef::new("a.first", "Alpha").into()],
                ),
                "alphas",
            ))
            .unwrap();
        class
    }

    let first = build();
    let second = build();
    assert_eq!(first.imports(), second.imports());
    assert_eq!(
        import_names(&first),
        vec!["z.last.Zed", "a.first.Alpha", "m.mid.Mid", "java.util.Set"]
    );
}

#[test]
fn resolve_references_is_pure() {
    let method = Method::new(Type::void(), "accept").with_parameter(
        Type::parameterized(
            ClassRef::interface("java.util", "List"),
            vec![Type::wildcard(WildcardType::unbounded())],
        ),
        "items",
    );

    let refs = resolve_references(&method);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].full_name(), "java.util.List");
    assert!(method.owner().is_none());
}
