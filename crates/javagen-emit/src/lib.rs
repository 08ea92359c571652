//! Java source emission for finished [`JavaClass`] models.
//!
//! The emitter only reads the model. Imports were already derived while the class was built;
//! emission just drops the ones for implicitly visible packages (`java.lang` by default).

use std::path::{Path, PathBuf};

use javagen_config::{FormatConfig, GeneratorConfig, ImportsConfig};
use javagen_model::{
    AccessModifiable, AccessModifier, Annotated, Annotation, ClassKind, ClassRef, Constructor,
    Field, JavaClass, Member, Method, Parameter, TypeVariable,
};
use thiserror::Error;

mod render;

pub use render::TypeRenderer;

const TARGET: &str = "javagen.emit";

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct JavaEmitter {
    imports: ImportsConfig,
    format: FormatConfig,
}

impl JavaEmitter {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            imports: config.imports.clone(),
            format: config.format.clone(),
        }
    }

    /// Import lines that must appear in the emitted file, in derivation order.
    ///
    /// An import sharing the declared class's simple name is left out; references to it are
    /// written fully qualified.
    pub fn visible_imports<'a>(&self, class: &'a JavaClass) -> Vec<&'a ClassRef> {
        class
            .imports()
            .iter()
            .filter(|import| {
                !import
                    .package_name()
                    .is_some_and(|pkg| self.imports.is_implicit(pkg))
            })
            .filter(|import| import.name() != class.name())
            .collect()
    }

    /// Render `class` as the text of a `.java` compilation unit.
    pub fn emit(&self, class: &JavaClass) -> String {
        let types = TypeRenderer::new(class, self.imports.qualify_conflicts);
        let indent = self.format.indent_unit();
        let mut out = String::new();

        if !class.package().is_default() {
            out.push_str(&format!("package {};\n\n", class.package()));
        }

        let imports = self.visible_imports(class);
        if !imports.is_empty() {
            for import in &imports {
                out.push_str(&format!("import {};\n", import.full_name()));
            }
            out.push('\n');
        }

        push_annotations(&mut out, "", class.annotations(), &types);
        out.push_str(&self.class_header(class, &types));
        out.push_str(" {\n");

        for (idx, member) in class.members().iter().enumerate() {
            if idx > 0 && self.format.blank_line_between_members {
                out.push('\n');
            }
            match member {
                Member::Field(field) => self.push_field(&mut out, &indent, field, &types),
                Member::Method(method) => {
                    self.push_method(&mut out, &indent, class.kind(), method, &types)
                }
                Member::Constructor(constructor) => {
                    self.push_constructor(&mut out, &indent, class.name(), constructor, &types)
                }
            }
        }

        out.push_str("}\n");
        tracing::debug!(
            target: TARGET,
            class = %class.full_name(),
            imports = imports.len(),
            members = class.members().len(),
            "emitted class"
        );
        out
    }

    /// Write `class` to `<root>/<package path>/<Name>.java`, creating directories as needed.
    pub fn emit_to_path(&self, class: &JavaClass, root: &Path) -> Result<PathBuf, EmitError> {
        let mut dir = root.to_path_buf();
        for segment in class.package().segments() {
            dir.push(segment);
        }
        std::fs::create_dir_all(&dir).map_err(|source| EmitError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        let path = dir.join(format!("{}.java", class.name()));
        std::fs::write(&path, self.emit(class)).map_err(|source| EmitError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(path)
    }

    fn class_header(&self, class: &JavaClass, types: &TypeRenderer<'_>) -> String {
        let mut header = modifiers(class.access_modifier(), &[]);
        header.push_str(class.kind().keyword());
        header.push(' ');
        header.push_str(class.name());
        header.push_str(&type_parameters(class.type_parameters(), types));

        if let Some(parent) = class.parent() {
            header.push_str(" extends ");
            header.push_str(&types.render(parent));
        }

        if !class.interfaces().is_empty() {
            header.push_str(match class.kind() {
                ClassKind::Class => " implements ",
                ClassKind::Interface => " extends ",
            });
            let names: Vec<String> = class.interfaces().iter().map(|i| types.render(i)).collect();
            header.push_str(&names.join(", "));
        }
        header
    }

    fn push_field(&self, out: &mut String, indent: &str, field: &Field, types: &TypeRenderer<'_>) {
        push_annotations(out, indent, field.annotations(), types);
        let mut flags = Vec::new();
        if field.is_static() {
            flags.push("static");
        }
        if field.is_final() {
            flags.push("final");
        }
        out.push_str(&format!(
            "{indent}{}{} {};\n",
            modifiers(field.access_modifier(), &flags),
            types.render(field.ty()),
            field.name()
        ));
    }

    fn push_method(
        &self,
        out: &mut String,
        indent: &str,
        owner_kind: ClassKind,
        method: &Method,
        types: &TypeRenderer<'_>,
    ) {
        push_annotations(out, indent, method.annotations(), types);

        let mut flags = Vec::new();
        // Interface methods are implicitly abstract.
        if method.is_abstract() && owner_kind == ClassKind::Class {
            flags.push("abstract");
        }
        if method.is_static() {
            flags.push("static");
        }
        if method.is_final() {
            flags.push("final");
        }

        let mut signature = modifiers(method.access_modifier(), &flags);
        let generics = type_parameters(method.type_parameters(), types);
        if !generics.is_empty() {
            signature.push_str(&generics);
            signature.push(' ');
        }
        signature.push_str(&format!(
            "{} {}({})",
            types.render(method.return_type()),
            method.name(),
            parameters(method.parameters(), types)
        ));

        if method.is_abstract() {
            out.push_str(&format!("{indent}{signature};\n"));
        } else {
            self.push_block(out, indent, &signature, method.body().unwrap_or_default());
        }
    }

    fn push_constructor(
        &self,
        out: &mut String,
        indent: &str,
        class_name: &str,
        constructor: &Constructor,
        types: &TypeRenderer<'_>,
    ) {
        push_annotations(out, indent, constructor.annotations(), types);
        let mut signature = modifiers(constructor.access_modifier(), &[]);
        let generics = type_parameters(constructor.type_parameters(), types);
        if !generics.is_empty() {
            signature.push_str(&generics);
            signature.push(' ');
        }
        signature.push_str(&format!(
            "{class_name}({})",
            parameters(constructor.parameters(), types)
        ));
        self.push_block(out, indent, &signature, constructor.body().unwrap_or_default());
    }

    fn push_block(&self, out: &mut String, indent: &str, signature: &str, body: &[String]) {
        if body.is_empty() {
            out.push_str(&format!("{indent}{signature} {{\n{indent}}}\n"));
            return;
        }
        out.push_str(&format!("{indent}{signature} {{\n"));
        let inner = format!("{indent}{}", self.format.indent_unit());
        for line in body {
            if line.trim().is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("{inner}{line}\n"));
            }
        }
        out.push_str(&format!("{indent}}}\n"));
    }
}

fn modifiers(access: AccessModifier, flags: &[&str]) -> String {
    let mut out = String::new();
    for word in std::iter::once(access.keyword()).chain(flags.iter().copied()) {
        if !word.is_empty() {
            out.push_str(word);
            out.push(' ');
        }
    }
    out
}

fn push_annotations(
    out: &mut String,
    indent: &str,
    annotations: &[Annotation],
    types: &TypeRenderer<'_>,
) {
    for annotation in annotations {
        let name = types.class_name(annotation.class());
        match annotation.value() {
            Some(value) => out.push_str(&format!("{indent}@{name}({value})\n")),
            None => out.push_str(&format!("{indent}@{name}\n")),
        }
    }
}

fn type_parameters(vars: &[TypeVariable], types: &TypeRenderer<'_>) -> String {
    if vars.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = vars.iter().map(|var| types.declaration(var)).collect();
    format!("<{}>", rendered.join(", "))
}

fn parameters(params: &[Parameter], types: &TypeRenderer<'_>) -> String {
    params
        .iter()
        .map(|param| format!("{} {}", types.render(&param.ty), param.name))
        .collect::<Vec<_>>()
        .join(", ")
}
