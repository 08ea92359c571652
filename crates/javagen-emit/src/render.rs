use javagen_model::{ClassRef, ImportList, JavaClass, Type, TypeVariable};

/// Renders types as they should appear inside one compilation unit.
///
/// Classes are written by simple name unless that name means a different class in the unit:
/// the declared class itself, or another class holding the simple name in the import list. Such
/// classes are written fully qualified when `qualify_conflicts` is set.
#[derive(Debug, Clone, Copy)]
pub struct TypeRenderer<'a> {
    unit: &'a JavaClass,
    imports: &'a ImportList,
    qualify_conflicts: bool,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(class: &'a JavaClass, qualify_conflicts: bool) -> Self {
        Self {
            unit: class,
            imports: class.import_list(),
            qualify_conflicts,
        }
    }

    /// `true` if the simple name of `class` refers to some other class in this unit.
    pub fn is_hidden(&self, class: &ClassRef) -> bool {
        if class.name() == self.unit.name() {
            return class.package_name().unwrap_or("") != self.unit.package().full_name();
        }
        self.imports
            .by_simple_name(class.name())
            .is_some_and(|holder| holder != class)
    }

    pub fn class_name(&self, class: &ClassRef) -> String {
        let mut name = if self.qualify_conflicts && self.is_hidden(class) {
            class.full_name()
        } else {
            class.name().to_owned()
        };
        if class.is_array() {
            name.push_str("[]");
        }
        name
    }

    pub fn render(&self, ty: &Type) -> String {
        match ty {
            Type::Primitive { primitive } => primitive.keyword().to_owned(),
            Type::Class(class) => self.class_name(class),
            Type::Array { element } => format!("{}[]", self.render(element)),
            Type::Variable(var) => var.name().to_owned(),
            Type::VariableRef { name } => name.clone(),
            Type::Wildcard(wildcard) => {
                let mut out = "?".to_owned();
                if let Some(upper) = wildcard.upper_bounds().filter(|b| !b.is_empty()) {
                    out.push_str(" extends ");
                    out.push_str(&self.join(upper, " & "));
                }
                if let Some(lower) = wildcard.lower_bounds().filter(|b| !b.is_empty()) {
                    out.push_str(" super ");
                    out.push_str(&self.join(lower, " & "));
                }
                out
            }
            Type::Parameterized(parameterized) => format!(
                "{}<{}>",
                self.class_name(parameterized.base()),
                self.join(parameterized.arguments(), ", ")
            ),
        }
    }

    /// A type parameter declaration: `T`, `T extends A`, `T extends A & B`.
    pub fn declaration(&self, var: &TypeVariable) -> String {
        let bounds: Vec<String> = var.bounds().map(|bound| self.render(bound)).collect();
        if bounds.is_empty() {
            var.name().to_owned()
        } else {
            format!("{} extends {}", var.name(), bounds.join(" & "))
        }
    }

    fn join(&self, types: &[Type], sep: &str) -> String {
        types
            .iter()
            .map(|ty| self.render(ty))
            .collect::<Vec<_>>()
            .join(sep)
    }
}
