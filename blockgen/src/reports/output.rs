//! Output trait for rendering reports.

/// Where a rendered line belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Report content.
    Out,
    /// Diagnostics.
    Err,
}

/// Target output for reports.
///
/// Reports describe *what* to output through the semantic methods; every one
/// of them formats a single line (or block) and hands it to [`Output::emit`],
/// the only method an implementation has to provide.
pub trait Output {
    /// Write one already formatted line (or block of lines).
    fn emit(&mut self, stream: Stream, text: String);

    fn section(&mut self, name: &str) {
        self.emit(Stream::Out, format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.emit(Stream::Out, format!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.emit(Stream::Out, format!("  {}: {}", key, value));
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        self.emit(Stream::Out, format!("  {}. {}", index, text));
    }

    fn list_item(&mut self, text: &str) {
        self.emit(Stream::Out, format!("  - {}", text));
    }

    /// A created file or record.
    fn added_item(&mut self, text: &str) {
        self.emit(Stream::Out, format!("  + {}", text));
    }

    /// A deleted record.
    fn removed_item(&mut self, text: &str) {
        self.emit(Stream::Out, format!("  - {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.emit(Stream::Err, format!("warning: {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.emit(Stream::Err, format!("error: {}", msg));
    }

    /// Separator labelled with, e.g., the previewed file name.
    fn divider(&mut self, label: &str) {
        self.emit(Stream::Out, format!("── {} ──", label));
    }

    /// Text printed as is (generated code, JSON payloads).
    fn preformatted(&mut self, text: &str) {
        self.emit(Stream::Out, text.to_string());
    }

    fn newline(&mut self) {
        self.emit(Stream::Out, String::new());
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output: report content to stdout, diagnostics to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn emit(&mut self, stream: Stream, text: String) {
        match stream {
            Stream::Out => println!("{}", text),
            Stream::Err => eprintln!("{}", text),
        }
    }
}

/// Output that records rendered lines, for report tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl RecordingOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn emit(&mut self, _stream: Stream, text: String) {
        self.lines.push(text);
    }
}
