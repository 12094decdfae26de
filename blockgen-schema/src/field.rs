//! Field model: one typed, named configuration input.

use serde::{Deserialize, Deserializer, Serialize, de};

/// A configurable field of a block or of its repeater.
///
/// Shared attributes live here; everything specific to a field type is
/// carried by [`FieldKind`], discriminated by the `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// snake_case key of the field inside its sequence
    pub name: String,
    /// Label shown in the back office
    pub label: String,
    /// Force the default value on existing blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_default_value: Option<bool>,
    /// Type and type-specific options
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl Field {
    /// Create a field with no forced default.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            force_default_value: None,
            kind,
        }
    }

    /// Mark the default value as forced.
    pub fn force_default(mut self) -> Self {
        self.force_default_value = Some(true);
        self
    }

    /// The `type` discriminator of this field.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

/// Field type with its specific options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text(TextOptions),
    Color(TextOptions),
    Textarea(TextOptions),
    Fileupload(FileuploadOptions),
    Selector(SelectorOptions),
    Editor(EditorOptions),
    Checkbox(CheckboxOptions),
    Select(ChoiceOptions),
    RadioGroup(ChoiceOptions),
    Multiselect(MultiselectOptions),
    Title(TitleOptions),
    Slider(SliderOptions),
    Datepicker(TextOptions),
}

impl FieldKind {
    /// Every `type` discriminator, in declaration order.
    pub const TYPE_NAMES: &'static [&'static str] = &[
        "text",
        "color",
        "textarea",
        "fileupload",
        "selector",
        "editor",
        "checkbox",
        "select",
        "radio_group",
        "multiselect",
        "title",
        "slider",
        "datepicker",
    ];

    /// Returns the `type` discriminator as a static string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Color(_) => "color",
            Self::Textarea(_) => "textarea",
            Self::Fileupload(_) => "fileupload",
            Self::Selector(_) => "selector",
            Self::Editor(_) => "editor",
            Self::Checkbox(_) => "checkbox",
            Self::Select(_) => "select",
            Self::RadioGroup(_) => "radio_group",
            Self::Multiselect(_) => "multiselect",
            Self::Title(_) => "title",
            Self::Slider(_) => "slider",
            Self::Datepicker(_) => "datepicker",
        }
    }

    /// A plain text field without default.
    pub fn text() -> Self {
        Self::Text(TextOptions::default())
    }
}

/// Options of `text`, `color`, `textarea` and `datepicker` fields.
///
/// Datepicker defaults are date strings (e.g. `2026-01-19`); their format is
/// not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileuploadOptions {
    /// Upload path; PrettyBlocks expects it to start with `$`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_urls: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectorOptions {
    /// Entity collection, e.g. `Product`
    pub collection: String,
    /// Display pattern, e.g. `{id} - {name}`
    pub selector: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<EditorProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Rich text editor implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorProvider {
    #[default]
    Vuequill,
}

impl EditorProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vuequill => "vuequill",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<bool>,
}

/// Options of `select` and `radio_group` fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiselectOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
}

/// One selectable option.
///
/// Written either as a bare string (id and label identical) or as an
/// `{ id, label }` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Plain(String),
    Labeled { id: String, label: String },
}

impl Choice {
    pub fn id(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Labeled { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Labeled { label, .. } => label,
        }
    }

    /// Normalize to an `(id, label)` pair.
    pub fn normalize(&self) -> (&str, &str) {
        (self.id(), self.label())
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<TitleDefault>,
}

/// Default value of a `title` field. Omitted keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleDefault {
    pub tag: String,
    pub classes: Vec<String>,
    pub value: String,
    pub focus: bool,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font size; integral floats such as `18.0` are accepted
    #[serde(deserialize_with = "integer")]
    pub size: i64,
}

impl Default for TitleDefault {
    fn default() -> Self {
        Self {
            tag: "h2".to_string(),
            classes: Vec::new(),
            value: String::new(),
            focus: false,
            bold: false,
            italic: false,
            underline: false,
            size: 18,
        }
    }
}

/// Deserialize an integer written either as such or as an integral float.
fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(n) => Ok(n),
        Number::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        Number::Float(f) => Err(de::Error::custom(format!(
            "expected an integer, found {}",
            f
        ))),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}
