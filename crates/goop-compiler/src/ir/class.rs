//! Class, field and method IR.

/// Export status of a field, fixed at parse time from the case of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Uppercase first character. Gets generated accessors.
    Public,
    /// Anything else.
    Private,
}

impl Visibility {
    pub fn of(name: &str) -> Self {
        match name.chars().next() {
            Some(c) if c.is_uppercase() => Visibility::Public,
            _ => Visibility::Private,
        }
    }
}

/// A field declared directly in a class body.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIR {
    pub name: String,

    /// Declared type. `None` for embedded fields (`Base`), whose type is the name.
    pub typ: Option<String>,

    /// Raw struct tag including backquotes.
    pub tag: Option<String>,

    pub visibility: Visibility,
}

impl FieldIR {
    pub fn new(name: impl Into<String>, typ: Option<String>, tag: Option<String>) -> Self {
        let name = name.into();
        let visibility = Visibility::of(&name);
        Self { name, typ, tag, visibility }
    }

    /// The type accessors take and return.
    pub fn value_type(&self) -> &str {
        self.typ.as_deref().unwrap_or(&self.name)
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A method header declared directly in a class body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodIR {
    pub name: String,

    /// Parameter list text between the parentheses.
    pub params: String,

    /// Text between the closing parenthesis and the opening brace.
    pub returns: String,

    /// The method is named after its class.
    pub is_constructor: bool,
}

impl MethodIR {
    /// Signature as listed in an interface: `Name(params) ret`.
    pub fn signature(&self) -> String {
        let returns = self.returns.trim();
        if returns.is_empty() {
            format!("{}({})", self.name, self.params)
        } else {
            format!("{}({}) {}", self.name, self.params, returns)
        }
    }
}

/// State collected for one class region.
#[derive(Debug, Clone)]
pub struct ClassIR {
    pub name: String,

    /// Brace depth before the header line.
    pub entry_depth: i64,

    /// Leading whitespace of the first indented body line; stripped once from nested lines.
    pub indent_unit: Option<String>,

    pub fields: Vec<FieldIR>,
    pub methods: Vec<MethodIR>,

    /// Parameter text of the constructor, empty when none was declared.
    pub constructor_params: String,

    /// Rewritten method headers and de-indented method bodies, in source order.
    pub body: Vec<String>,
}

impl ClassIR {
    pub fn new(name: impl Into<String>, entry_depth: i64) -> Self {
        Self {
            name: name.into(),
            entry_depth,
            indent_unit: None,
            fields: Vec::new(),
            methods: Vec::new(),
            constructor_params: String::new(),
            body: Vec::new(),
        }
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }

    /// Records a method, capturing the construction signature when it is the constructor.
    pub fn add_method(&mut self, name: &str, params: &str, returns: &str) {
        let is_constructor = name == self.name;
        if is_constructor {
            self.constructor_params = params.to_string();
        }
        self.methods.push(MethodIR {
            name: name.to_string(),
            params: params.to_string(),
            returns: returns.to_string(),
            is_constructor,
        });
    }

    /// Removes one indent unit from the start of `line`.
    pub fn dedent<'a>(&self, line: &'a str) -> &'a str {
        let unit = self.indent_unit.as_deref().unwrap_or("\t");
        line.strip_prefix(unit).unwrap_or(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_from_first_letter() {
        assert_eq!(Visibility::of("Name"), Visibility::Public);
        assert_eq!(Visibility::of("name"), Visibility::Private);
        assert_eq!(Visibility::of("_Name"), Visibility::Private);
        assert_eq!(Visibility::of(""), Visibility::Private);
    }

    #[test]
    fn test_embedded_field_type_is_its_name() {
        let field = FieldIR::new("Base", None, None);
        assert_eq!(field.value_type(), "Base");
        assert!(field.is_public());
    }

    #[test]
    fn test_signature_trims_return_clause() {
        let method = MethodIR {
            name: "Area".to_string(),
            params: String::new(),
            returns: " float64 ".to_string(),
            is_constructor: false,
        };
        assert_eq!(method.signature(), "Area() float64");

        let method = MethodIR {
            name: "Move".to_string(),
            params: "dx, dy int".to_string(),
            returns: " ".to_string(),
            is_constructor: false,
        };
        assert_eq!(method.signature(), "Move(dx, dy int)");
    }

    #[test]
    fn test_constructor_captures_params() {
        let mut class = ClassIR::new("Point", 0);
        class.add_method("Norm", "", " float64 ");
        assert!(class.constructor_params.is_empty());

        class.add_method("Point", "x, y int", " ");
        assert_eq!(class.constructor_params, "x, y int");
        assert!(class.methods[1].is_constructor);
        assert!(!class.methods[0].is_constructor);
    }

    #[test]
    fn test_dedent_uses_indent_unit() {
        let mut class = ClassIR::new("Point", 0);
        assert_eq!(class.dedent("\t\treturn x"), "\treturn x");
        assert_eq!(class.dedent("  return x"), "  return x");

        class.indent_unit = Some("  ".to_string());
        assert_eq!(class.dedent("    return x"), "  return x");
    }
}
