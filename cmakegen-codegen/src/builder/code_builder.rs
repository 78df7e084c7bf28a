//! Code builder utility for generating properly indented CMake code.

/// One indentation level, the layout used by CMake's own modules.
const INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use cmakegen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::cmake()
///     .block("if(CUDA_FOUND)", "endif()", |b| {
///         b.line("list(APPEND HPWL_SOURCES src/hpwl_cuda.cu)")
///     })
///     .build();
///
/// assert_eq!(
///     code,
///     "if(CUDA_FOUND)\n    list(APPEND HPWL_SOURCES src/hpwl_cuda.cu)\nendif()\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 4-space indentation.
    pub fn cmake() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
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

    /// Add a `# text` comment line.
    pub fn comment(self, text: &str) -> Self {
        self.line(&format!("# {}", text))
    }

    /// Add an indented block between `header` and `close`.
    pub fn block<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a command whose arguments go one per line, e.g.
    /// `set(FOO_SOURCES` ... `)`.
    pub fn call<I, S>(self, open: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line(open)
            .indent()
            .each(args, |b, arg| b.line(arg.as_ref()))
            .dedent()
            .line(")")
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::cmake()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::cmake().line("project(Limbo)").build();
        assert_eq!(code, "project(Limbo)\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::cmake()
            .block("if(USE_CUDA)", "endif()", |b| {
                b.line("target_link_libraries(rudy ${CUDA_LIBRARIES})")
            })
            .build();

        assert_eq!(
            code,
            "if(USE_CUDA)\n    target_link_libraries(rudy ${CUDA_LIBRARIES})\nendif()\n"
        );
    }

    #[test]
    fn test_call_lists_args() {
        let code = CodeBuilder::cmake()
            .call("set(HPWL_SOURCES", ["src/hpwl.cpp", "src/hpwl_atomic.cpp"])
            .build();

        assert_eq!(
            code,
            "set(HPWL_SOURCES\n    src/hpwl.cpp\n    src/hpwl_atomic.cpp\n)\n"
        );
    }

    #[test]
    fn test_nested_indent() {
        let code = CodeBuilder::cmake()
            .block("if(CUDA_FOUND)", "endif()", |b| {
                b.call("list(APPEND RUDY_SOURCES", ["src/rudy_cuda.cu"])
            })
            .build();

        assert_eq!(
            code,
            "if(CUDA_FOUND)\n    list(APPEND RUDY_SOURCES\n        src/rudy_cuda.cu\n    )\nendif()\n"
        );
    }

    #[test]
    fn test_comment_and_blank() {
        let code = CodeBuilder::cmake()
            .comment("Install module")
            .blank()
            .build();
        assert_eq!(code, "# Install module\n\n");
    }

    #[test]
    fn test_conditional() {
        let with = CodeBuilder::cmake()
            .when(true, |b| b.line("a()"))
            .line("b()")
            .build();
        let without = CodeBuilder::cmake()
            .when(false, |b| b.line("a()"))
            .line("b()")
            .build();

        assert_eq!(with, "a()\nb()\n");
        assert_eq!(without, "b()\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::cmake().dedent().line("x()").build();
        assert_eq!(code, "x()\n");
    }
}
