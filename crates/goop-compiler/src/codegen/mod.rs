//! Go code generation for closed class regions.
//!
//! A class becomes, in order:
//! - a struct carrying the declared fields
//! - a capability interface `Interface__<Class>` listing its methods
//! - an allocator `New__<Class>` that runs the constructor
//! - getters and setters for public fields
//!
//! The rewritten method bodies collected in the class IR follow the block.

mod accessors;
pub mod rewrite;

pub use accessors::{synthesize_accessors, Accessor, AccessorKind};
pub use rewrite::ReferenceRewriter;

use crate::frontend::patterns::parameter_names;
use crate::ir::ClassIR;

/// Prefix of generated allocator functions.
pub const ALLOCATOR_PREFIX: &str = "New__";

/// Prefix of generated capability interfaces.
pub const INTERFACE_PREFIX: &str = "Interface__";

/// Receiver name bound in generated and rewritten methods.
pub const RECEIVER: &str = "this";

/// Rewrites a class method header into a method on the generated struct.
pub fn method_header(class_name: &str, name: &str, params: &str, returns: &str) -> String {
    format!(
        "func ({} *{}) {}({}){}{{",
        RECEIVER, class_name, name, params, returns
    )
}

/// Generates the declarations that replace a class header, separated by blank lines.
pub fn generate_class(class: &ClassIR) -> Vec<String> {
    let accessors = synthesize_accessors(class);

    let mut sections = vec![
        generate_struct(class),
        generate_interface(class, &accessors),
        generate_allocator(class),
    ];
    sections.extend(accessors.iter().map(|accessor| accessor.render(&class.name)));

    let mut output = Vec::new();
    for (idx, section) in sections.into_iter().enumerate() {
        if idx > 0 {
            output.push(String::new());
        }
        output.extend(section);
    }
    output
}

/// `type Class struct { ... }` with fields in source order.
fn generate_struct(class: &ClassIR) -> Vec<String> {
    let mut output = vec![format!("type {} struct {{", class.name)];

    for field in &class.fields {
        let mut line = format!("\t{}", field.name);
        if let Some(typ) = &field.typ {
            line.push(' ');
            line.push_str(typ);
        }
        if let Some(tag) = &field.tag {
            line.push(' ');
            line.push_str(tag);
        }
        output.push(line);
    }

    output.push("}".to_string());
    output
}

/// Declared non-constructor methods first, then synthesized accessors.
fn generate_interface(class: &ClassIR, accessors: &[Accessor]) -> Vec<String> {
    let mut output = vec![format!("type {}{} interface {{", INTERFACE_PREFIX, class.name)];

    for method in class.methods.iter().filter(|m| !m.is_constructor) {
        output.push(format!("\t{}", method.signature()));
    }
    for accessor in accessors {
        output.push(format!("\t{}", accessor.signature()));
    }

    output.push("}".to_string());
    output
}

/// Allocates a zero value, runs the constructor and returns the pointer.
fn generate_allocator(class: &ClassIR) -> Vec<String> {
    vec![
        format!(
            "func {}{}({}) *{} {{",
            ALLOCATOR_PREFIX, class.name, class.constructor_params, class.name
        ),
        format!("\t{} := &{}{{}}", RECEIVER, class.name),
        format!(
            "\t{}.{}({})",
            RECEIVER,
            class.name,
            parameter_names(&class.constructor_params)
        ),
        format!("\treturn {}", RECEIVER),
        "}".to_string(),
    ]
}
