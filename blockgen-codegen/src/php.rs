//! PHP literal rendering.
//!
//! The definition file is a nested PHP array literal. It is built as a small
//! IR ([`PhpValue`], [`PhpArray`]) and rendered here, so quoting and
//! indentation are decided in one place. Strings are escaped exactly once,
//! at render time.

/// Escape a string for use inside a single-quoted PHP literal.
///
/// Backslashes are escaped before quotes so the inserted escape characters
/// are not escaped again.
pub fn escape_php(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Quote a string as a single-quoted PHP literal.
pub fn quote(value: &str) -> String {
    format!("'{}'", escape_php(value))
}

/// Prefix every non-blank line of `text` with `spaces` spaces.
///
/// Blank lines pass through unchanged.
pub fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a number the way the block editor spells it.
///
/// Integral values drop the fractional part (`3`, not `3.0`). Magnitudes
/// from `1e21` up and below `1e-6` switch to exponent notation with an
/// explicit sign (`1e+21`, `1.5e-7`).
pub fn number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }
    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => exponential,
    }
}

/// Columns a nested array body is indented by.
const NESTED_INDENT: usize = 4;

/// A PHP value inside the definition array.
#[derive(Debug, Clone, PartialEq)]
pub enum PhpValue {
    /// String literal (will be quoted and escaped).
    String(String),
    /// Back-office translation call: `$this->module->l('...')`.
    Translated(String),
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Number literal (integral values render without a fraction).
    Number(f64),
    /// Raw expression, emitted verbatim.
    Expr(String),
    /// Single-line list of strings: `['a', 'b']`.
    List(Vec<String>),
    /// Multi-line array, one `key => value,` entry per line.
    Array(PhpArray),
    /// Single-line array: `['url' => '']`.
    Inline(PhpArray),
}

impl PhpValue {
    /// Create a string literal value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a translated string value.
    pub fn translated(v: impl Into<String>) -> Self {
        Self::Translated(v.into())
    }

    /// Create a raw expression value.
    pub fn expr(v: impl Into<String>) -> Self {
        Self::Expr(v.into())
    }

    /// Create a string list value.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Render the value as PHP source.
    pub fn render(&self) -> String {
        match self {
            Self::String(s) => quote(s),
            Self::Translated(s) => format!("$this->module->l({})", quote(s)),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Number(n) => number(*n),
            Self::Expr(e) => e.clone(),
            Self::List(items) => {
                let items: Vec<String> = items.iter().map(|s| quote(s)).collect();
                format!("[{}]", items.join(", "))
            }
            Self::Array(array) => {
                if array.is_empty() {
                    "[]".to_string()
                } else {
                    format!("[\n{}\n]", indent(&array.render_entries(), NESTED_INDENT))
                }
            }
            Self::Inline(array) => {
                let entries: Vec<String> = array
                    .entries
                    .iter()
                    .map(|(key, value)| match key {
                        Some(key) => format!("{} => {}", quote(key), value.render()),
                        None => value.render(),
                    })
                    .collect();
                format!("[{}]", entries.join(", "))
            }
        }
    }
}

impl From<bool> for PhpValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<PhpArray> for PhpValue {
    fn from(value: PhpArray) -> Self {
        Self::Array(value)
    }
}

/// An ordered PHP array: keyed entries, keyless items, or both.
///
/// Declaration order is kept; duplicate keys are emitted as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhpArray {
    entries: Vec<(Option<String>, PhpValue)>,
}

impl PhpArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyed entry (builder style).
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<PhpValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Add a keyless item (builder style).
    pub fn item(mut self, value: impl Into<PhpValue>) -> Self {
        self.entries.push((None, value.into()));
        self
    }

    /// Add a keyed entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<PhpValue>) {
        self.entries.push((Some(key.into()), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Keys in declaration order (keyless items are skipped).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|(key, _)| key.as_deref())
    }

    /// Value of the first entry with `key`.
    pub fn get(&self, key: &str) -> Option<&PhpValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_deref() == Some(key))
            .map(|(_, value)| value)
    }

    /// Render the entries, one per line, each terminated by a comma.
    ///
    /// Nested arrays span several lines; the caller decides the indentation
    /// of the whole body.
    pub fn render_entries(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| match key {
                Some(key) => format!("{} => {},", quote(key), value.render()),
                None => format!("{},", value.render()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
