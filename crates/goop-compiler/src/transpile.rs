//! The per-file transformation engine.
//!
//! Comments are stripped up front; the rest is one pass over the lines in
//! which class detection, member classification and code generation are
//! fused. Finished lines go to an output builder, and every line pushed
//! there passes through the reference rewriter.

use serde::Serialize;
use tracing::{debug, warn};

use crate::codegen::{self, ReferenceRewriter};
use crate::config::TranspileOptions;
use crate::diagnostic::CompilerError;
use crate::frontend::{BraceDepth, CommentNormalizer, Patterns};
use crate::ir::{ClassIR, FieldIR};

/// Summary of one class expanded in a file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSummary {
    pub name: String,
    pub fields: usize,
    pub methods: usize,
    pub accessors: usize,
}

/// Result of transforming one file's text.
#[derive(Debug, Clone)]
pub struct Transpiled {
    /// Generated Go source.
    pub code: String,
    /// Classes expanded, in source order.
    pub classes: Vec<ClassSummary>,
}

/// Holds the compiled patterns; shared read-only across files.
#[derive(Debug, Clone)]
pub struct Transpiler {
    patterns: Patterns,
    rewriter: ReferenceRewriter,
}

impl Transpiler {
    pub fn new(options: TranspileOptions) -> Result<Self, CompilerError> {
        options.validate()?;
        Ok(Self {
            patterns: Patterns::new(),
            rewriter: ReferenceRewriter::new(options.marker),
        })
    }

    /// Transforms a whole `.goo` source into Go.
    pub fn transpile(&self, source: &str) -> Transpiled {
        let mut ctx = FileContext::new(self);

        let lines = ctx.comments.strip_all(source.lines());
        if ctx.comments.in_block() {
            warn!("unterminated block comment blanks the rest of the file");
        }

        for line in &lines {
            ctx.process_line(line);
        }

        let mut code = ctx.finish().join("\n");
        if source.ends_with('\n') {
            code.push('\n');
        }

        Transpiled {
            code,
            classes: ctx.classes,
        }
    }
}

/// Fresh per-file state: comment state, brace depth, open class and output.
struct FileContext<'t> {
    transpiler: &'t Transpiler,
    comments: CommentNormalizer,
    depth: BraceDepth,
    class: Option<ClassIR>,
    output: Vec<String>,
    classes: Vec<ClassSummary>,
}

impl<'t> FileContext<'t> {
    fn new(transpiler: &'t Transpiler) -> Self {
        Self {
            transpiler,
            comments: CommentNormalizer::new(),
            depth: BraceDepth::new(),
            class: None,
            output: Vec::new(),
            classes: Vec::new(),
        }
    }

    fn emit(&mut self, line: &str) {
        let line = self.transpiler.rewriter.rewrite(line);
        self.output.push(line);
    }

    fn process_line(&mut self, line: &str) {
        let (before, after) = self.depth.advance(line);
        let transpiler = self.transpiler;
        let patterns = &transpiler.patterns;

        let Some(class) = self.class.as_mut() else {
            match patterns.class_start(line) {
                Some(name) => self.class = Some(ClassIR::new(name, before)),
                None => self.emit(line),
            }
            return;
        };

        if before == class.entry_depth + 1 {
            if class.indent_unit.is_none() && !line.trim().is_empty() {
                let indent = &line[..line.len() - line.trim_start().len()];
                if !indent.is_empty() {
                    class.indent_unit = Some(indent.to_string());
                }
            }

            if let Some(decl) = patterns.field_decl(line) {
                for name in decl.names {
                    class
                        .fields
                        .push(FieldIR::new(name, decl.typ.clone(), decl.tag.clone()));
                }
                return;
            }

            if let Some(header) = patterns.method_decl(line) {
                class.add_method(&header.name, &header.params, &header.returns);
                let rewritten =
                    codegen::method_header(&class.name, &header.name, &header.params, &header.returns);
                class.body.push(rewritten);
                return;
            }
        }

        if after == class.entry_depth {
            self.close_class();
            return;
        }

        let dedented = class.dedent(line).to_string();
        class.body.push(dedented);
    }

    /// Emits the generated block followed by the buffered method bodies.
    fn close_class(&mut self) {
        let Some(class) = self.class.take() else {
            return;
        };

        let generated = codegen::generate_class(&class);
        let accessors = codegen::synthesize_accessors(&class).len();
        debug!(
            class = %class.name,
            fields = class.fields.len(),
            methods = class.methods.len(),
            accessors,
            "expanded class"
        );

        for line in &generated {
            self.emit(line);
        }
        if !class.body.is_empty() {
            self.emit("");
        }
        for line in &class.body {
            self.emit(line);
        }

        self.classes.push(ClassSummary {
            name: class.name,
            fields: class.fields.len(),
            methods: class.methods.len(),
            accessors,
        });
    }

    fn finish(&mut self) -> Vec<String> {
        if let Some(class) = &self.class {
            warn!(class = %class.name, "class region still open at end of file");
            self.close_class();
        }
        std::mem::take(&mut self.output)
    }
}
