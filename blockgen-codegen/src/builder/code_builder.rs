//! Code builder utility for generating properly indented code.

use crate::Indent;

/// Fluent API for building code with proper indentation.
///
/// Blank lines never carry indentation, so nested output has no trailing
/// whitespace.
///
/// # Example
///
/// ```
/// use blockgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::php()
///     .line("class HeroBlock extends AbstractBlock")
///     .line("{")
///     .indent()
///     .line("public $name;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "class HeroBlock extends AbstractBlock\n{\n    public $name;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder for PHP sources.
    pub fn php() -> Self {
        Self::new(Indent::Php)
    }

    /// Builder for Smarty templates.
    pub fn smarty() -> Self {
        Self::new(Indent::Smarty)
    }

    /// Add a line of code with current indentation.
    ///
    /// A blank line is written without indentation.
    pub fn line(mut self, s: &str) -> Self {
        if !s.trim().is_empty() {
            self.write_indent();
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of a multi-line text at the current indentation.
    pub fn lines(self, text: &str) -> Self {
        text.split('\n').fold(self, |b, line| b.line(line))
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use blockgen_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::smarty()
    ///     .block_with_close("{if !empty($blocks)}", "{/if}", |b| {
    ///         b.line("<div></div>")
    ///     })
    ///     .build();
    ///
    /// assert_eq!(code, "{if !empty($blocks)}\n  <div></div>\n{/if}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add content produced by a helper taking and returning the builder.
    pub fn apply<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self)
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.unit());
        }
    }
}
