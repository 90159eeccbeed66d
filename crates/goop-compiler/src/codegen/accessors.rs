//! Getter and setter synthesis for public fields.

use crate::ir::ClassIR;
use super::{method_header, RECEIVER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Getter,
    Setter,
}

/// One synthesized accessor method.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    pub kind: AccessorKind,
    /// Method name: the field name, or `Set` + field name.
    pub name: String,
    pub field: String,
    pub typ: String,
}

impl Accessor {
    fn params(&self) -> String {
        match self.kind {
            AccessorKind::Getter => String::new(),
            AccessorKind::Setter => format!("{} {}", self.field, self.typ),
        }
    }

    fn returns(&self) -> String {
        match self.kind {
            AccessorKind::Getter => format!(" {} ", self.typ),
            AccessorKind::Setter => " ".to_string(),
        }
    }

    /// Interface entry for this accessor.
    pub fn signature(&self) -> String {
        match self.kind {
            AccessorKind::Getter => format!("{}() {}", self.name, self.typ),
            AccessorKind::Setter => format!("{}({})", self.name, self.params()),
        }
    }

    /// Full method definition bound to `class_name`.
    pub fn render(&self, class_name: &str) -> Vec<String> {
        let body = match self.kind {
            AccessorKind::Getter => format!("\treturn {}.{}", RECEIVER, self.field),
            AccessorKind::Setter => format!("\t{}.{} = {}", RECEIVER, self.field, self.field),
        };
        vec![
            method_header(class_name, &self.name, &self.params(), &self.returns()),
            body,
            "}".to_string(),
        ]
    }
}

/// Getter/setter pairs for public fields, skipping names the class already declares.
pub fn synthesize_accessors(class: &ClassIR) -> Vec<Accessor> {
    let mut accessors = Vec::new();

    for field in class.fields.iter().filter(|f| f.is_public()) {
        let typ = field.value_type().to_string();

        if !class.has_method(&field.name) {
            accessors.push(Accessor {
                kind: AccessorKind::Getter,
                name: field.name.clone(),
                field: field.name.clone(),
                typ: typ.clone(),
            });
        }

        let setter = format!("Set{}", field.name);
        if !class.has_method(&setter) {
            accessors.push(Accessor {
                kind: AccessorKind::Setter,
                name: setter,
                field: field.name.clone(),
                typ,
            });
        }
    }

    accessors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::FieldIR;

    fn class_with(fields: &[(&str, &str)], methods: &[&str]) -> ClassIR {
        let mut class = ClassIR::new("Box", 0);
        for (name, typ) in fields {
            class.fields.push(FieldIR::new(*name, Some(typ.to_string()), None));
        }
        for method in methods {
            class.add_method(method, "", " ");
        }
        class
    }

    fn names(accessors: &[Accessor]) -> Vec<&str> {
        accessors.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_public_fields_get_pairs() {
        let class = class_with(&[("Width", "int"), ("Label", "string")], &[]);
        let accessors = synthesize_accessors(&class);
        assert_eq!(names(&accessors), vec!["Width", "SetWidth", "Label", "SetLabel"]);
    }

    #[test]
    fn test_private_fields_are_skipped() {
        let class = class_with(&[("width", "int")], &[]);
        assert!(synthesize_accessors(&class).is_empty());
    }

    #[test]
    fn test_existing_getter_suppresses_only_getter() {
        let class = class_with(&[("Width", "int")], &["Width"]);
        assert_eq!(names(&synthesize_accessors(&class)), vec!["SetWidth"]);
    }

    #[test]
    fn test_existing_setter_suppresses_only_setter() {
        let class = class_with(&[("Width", "int")], &["SetWidth"]);
        assert_eq!(names(&synthesize_accessors(&class)), vec!["Width"]);
    }

    #[test]
    fn test_render_getter_and_setter() {
        let class = class_with(&[("Width", "int")], &[]);
        let accessors = synthesize_accessors(&class);

        assert_eq!(
            accessors[0].render("Box"),
            vec!["func (this *Box) Width() int {", "\treturn this.Width", "}"]
        );
        assert_eq!(
            accessors[1].render("Box"),
            vec!["func (this *Box) SetWidth(Width int) {", "\tthis.Width = Width", "}"]
        );
        assert_eq!(accessors[0].signature(), "Width() int");
        assert_eq!(accessors[1].signature(), "SetWidth(Width int)");
    }
}
