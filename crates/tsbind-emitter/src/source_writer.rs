//! Indentation-aware text buffer for generated C#.

const INDENT: &str = "    ";

/// `s` as a C# regular string literal, quotes included.
pub fn string_literal(s: &str) -> String {
    let mut literal = String::with_capacity(s.len() + 2);
    literal.push('"');
    for c in s.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            '\0' => literal.push_str("\\0"),
            c if (c as u32) < 0x20 || c == '\x7F' => {
                literal.push_str(&format!("\\u{:04X}", c as u32));
            }
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

pub struct SourceWriter {
    output: String,
    indent_level: u32,
    new_line: &'static str,
}

impl SourceWriter {
    pub fn new(new_line: &'static str) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            new_line,
        }
    }

    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub fn write_line(&mut self) {
        self.output.push_str(self.new_line);
    }

    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
    }

    /// One indented line.
    pub fn line(&mut self, s: &str) {
        if !s.is_empty() {
            self.write_indent();
            self.write(s);
        }
        self.write_line();
    }

    pub fn blank_line(&mut self) {
        self.write_line();
    }

    pub const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// `{`, then indent.
    pub fn open_block(&mut self) {
        self.line("{");
        self.increase_indent();
    }

    /// Dedent, then `}`.
    pub fn close_block(&mut self) {
        self.decrease_indent();
        self.line("}");
    }

    pub fn finish(self) -> String {
        self.output
    }
}
