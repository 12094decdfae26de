//! Field lowering: one [`Field`] to its PHP definition array.
//!
//! Entry order is fixed: `type`, `label`, `force_default_value`, then the
//! type-specific entries. Optional values are omitted when unset or empty,
//! except where a type always carries a default (checkbox, fileupload).

use blockgen_schema::{Choice, Field, FieldKind, TitleDefault};

use crate::php::{PhpArray, PhpValue};

/// Upload path used by `fileupload` fields that declare none.
///
/// This is PHP source spliced into a string literal; it is escaped like any
/// other path.
pub const DEFAULT_UPLOAD_PATH: &str = "$/img/' . $this->module->name . '/";

/// Editor provider used when none is given.
pub const DEFAULT_EDITOR_PROVIDER: &str = "vuequill";

/// Lower an ordered field sequence to a `name => [...]` array.
///
/// Duplicate names are kept in order; PHP keeps the last one.
pub fn fields_array(fields: &[Field]) -> PhpArray {
    fields.iter().fold(PhpArray::new(), |array, field| {
        array.entry(field.name.as_str(), field_definition(field))
    })
}

/// Lower one field to its definition array.
pub fn field_definition(field: &Field) -> PhpArray {
    let mut array = PhpArray::new()
        .entry("type", PhpValue::string(field.type_name()))
        .entry("label", PhpValue::translated(field.label.as_str()));

    if field.force_default_value == Some(true) {
        array.push("force_default_value", true);
    }

    match &field.kind {
        FieldKind::Text(options)
        | FieldKind::Color(options)
        | FieldKind::Textarea(options)
        | FieldKind::Datepicker(options) => {
            push_non_empty(&mut array, "default", options.default_value.as_deref());
        }
        FieldKind::Fileupload(options) => {
            let path = options.path.as_deref().unwrap_or(DEFAULT_UPLOAD_PATH);
            array.push("path", PhpValue::string(path));
            array.push("default", upload_defaults(options.default_urls.as_deref()));
        }
        FieldKind::Selector(options) => {
            array.push("collection", PhpValue::string(options.collection.as_str()));
            array.push("selector", PhpValue::string(options.selector.as_str()));
        }
        FieldKind::Editor(options) => {
            let provider = options
                .provider
                .map(|p| p.as_str())
                .unwrap_or(DEFAULT_EDITOR_PROVIDER);
            array.push("provider", PhpValue::string(provider));
            push_non_empty(&mut array, "default", options.default_value.as_deref());
        }
        FieldKind::Checkbox(options) => {
            array.push("default", options.default_value.unwrap_or(false));
        }
        FieldKind::Select(options) | FieldKind::RadioGroup(options) => {
            push_non_empty(&mut array, "default", options.default_value.as_deref());
            push_choices(&mut array, options.choices.as_deref());
        }
        FieldKind::Multiselect(options) => {
            if let Some(values) = options.default_value.as_ref().filter(|v| !v.is_empty()) {
                array.push("default", PhpValue::list(values.iter().cloned()));
            }
            push_choices(&mut array, options.choices.as_deref());
        }
        FieldKind::Title(options) => {
            if let Some(default) = &options.default_value {
                array.push("default", title_default(default));
            }
        }
        FieldKind::Slider(options) => {
            let numbers = [
                ("step", options.step),
                ("min", options.min),
                ("max", options.max),
                ("default", options.default_value),
            ];
            for (key, value) in numbers {
                if let Some(value) = value {
                    array.push(key, PhpValue::Number(value));
                }
            }
        }
    }

    array
}

/// Normalize choices to an ordered `id => label` array.
pub fn choices(choices: &[Choice]) -> PhpArray {
    choices.iter().fold(PhpArray::new(), |array, choice| {
        let (id, label) = choice.normalize();
        array.entry(id, PhpValue::string(label))
    })
}

/// The title default as an associative array, keys in fixed order.
pub fn title_default(default: &TitleDefault) -> PhpArray {
    PhpArray::new()
        .entry("tag", PhpValue::string(default.tag.as_str()))
        .entry("classes", PhpValue::list(default.classes.iter().cloned()))
        .entry("value", PhpValue::string(default.value.as_str()))
        .entry("focus", default.focus)
        .entry("bold", default.bold)
        .entry("italic", default.italic)
        .entry("underline", default.underline)
        .entry("size", PhpValue::Int(default.size))
}

fn upload_defaults(urls: Option<&[String]>) -> PhpArray {
    let empty = [String::new()];
    let urls = match urls {
        Some(urls) if !urls.is_empty() => urls,
        _ => &empty,
    };
    urls.iter().fold(PhpArray::new(), |array, url| {
        array.item(PhpValue::Inline(
            PhpArray::new().entry("url", PhpValue::string(url.as_str())),
        ))
    })
}

fn push_non_empty(array: &mut PhpArray, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        array.push(key, PhpValue::string(value));
    }
}

fn push_choices(array: &mut PhpArray, list: Option<&[Choice]>) {
    let mapping = choices(list.unwrap_or_default());
    if !mapping.is_empty() {
        array.push("choices", mapping);
    }
}

#[cfg(test)]
mod tests {
    use blockgen_schema::{
        CheckboxOptions, ChoiceOptions, EditorOptions, FileuploadOptions, MultiselectOptions,
        SelectorOptions, SliderOptions, TextOptions, TitleOptions,
    };

    use super::*;

    fn render(field: &Field) -> String {
        field_definition(field).render_entries()
    }

    fn text(default: Option<&str>) -> FieldKind {
        FieldKind::Text(TextOptions {
            default_value: default.map(Into::into),
        })
    }

    #[test]
    fn test_text_default_only_when_non_empty() {
        let field = Field::new("title", "Title", text(Some("Hello")));
        assert_eq!(
            render(&field),
            "'type' => 'text',\n'label' => $this->module->l('Title'),\n'default' => 'Hello',"
        );

        let empty = Field::new("title", "Title", text(Some("")));
        assert!(field_definition(&empty).get("default").is_none());
        let unset = Field::new("title", "Title", text(None));
        assert!(field_definition(&unset).get("default").is_none());
    }

    #[test]
    fn test_force_default_follows_label() {
        let field = Field::new("title", "Title", text(Some("x"))).force_default();
        let keys: Vec<_> = field_definition(&field).keys().map(String::from).collect();
        assert_eq!(keys, vec!["type", "label", "force_default_value", "default"]);

        let mut not_forced = Field::new("title", "Title", text(None));
        not_forced.force_default_value = Some(false);
        assert!(field_definition(&not_forced).get("force_default_value").is_none());
    }

    #[test]
    fn test_checkbox_always_has_default() {
        let unset = Field::new("agree", "Agree", FieldKind::Checkbox(CheckboxOptions::default()));
        assert_eq!(field_definition(&unset).get("default"), Some(&PhpValue::Bool(false)));

        let set = Field::new(
            "agree",
            "Agree",
            FieldKind::Checkbox(CheckboxOptions {
                default_value: Some(true),
            }),
        );
        assert!(render(&set).ends_with("'default' => true,"));
    }

    #[test]
    fn test_optional_defaults_are_omitted_when_unset() {
        let kinds = [
            FieldKind::Color(TextOptions::default()),
            FieldKind::Textarea(TextOptions::default()),
            FieldKind::Datepicker(TextOptions::default()),
            FieldKind::Editor(EditorOptions::default()),
            FieldKind::Select(ChoiceOptions::default()),
            FieldKind::RadioGroup(ChoiceOptions::default()),
            FieldKind::Multiselect(MultiselectOptions {
                default_value: Some(Vec::new()),
                choices: None,
            }),
            FieldKind::Title(TitleOptions::default()),
            FieldKind::Slider(SliderOptions::default()),
        ];
        for kind in kinds {
            let field = Field::new("x", "X", kind);
            assert!(
                field_definition(&field).get("default").is_none(),
                "{} should omit default",
                field.type_name()
            );
        }
    }

    #[test]
    fn test_fileupload_fallbacks() {
        let field = Field::new(
            "image",
            "Image",
            FieldKind::Fileupload(FileuploadOptions::default()),
        );
        assert_eq!(
            render(&field),
            "'type' => 'fileupload',\n\
             'label' => $this->module->l('Image'),\n\
             'path' => '$/img/\\' . $this->module->name . \\'/',\n\
             'default' => [\n    ['url' => ''],\n],"
        );
    }

    #[test]
    fn test_fileupload_with_urls() {
        let field = Field::new(
            "image",
            "Image",
            FieldKind::Fileupload(FileuploadOptions {
                path: Some("$/img/hero/".into()),
                default_urls: Some(vec!["/a.png".into(), "/b'.png".into()]),
            }),
        );
        let rendered = render(&field);
        assert!(rendered.contains("'path' => '$/img/hero/',"));
        assert!(rendered.contains("'default' => [\n    ['url' => '/a.png'],\n    ['url' => '/b\\'.png'],\n],"));
    }

    #[test]
    fn test_selector_and_editor() {
        let selector = Field::new(
            "product",
            "Product",
            FieldKind::Selector(SelectorOptions {
                collection: "Product".into(),
                selector: "{id} - {name}".into(),
            }),
        );
        assert!(render(&selector).ends_with(
            "'collection' => 'Product',\n'selector' => '{id} - {name}',"
        ));

        let editor = Field::new("body", "Body", FieldKind::Editor(EditorOptions::default()));
        assert!(render(&editor).ends_with("'provider' => 'vuequill',"));
    }

    #[test]
    fn test_multiselect_choices_normalize() {
        let field = Field::new(
            "tags",
            "Tags",
            FieldKind::Multiselect(MultiselectOptions {
                default_value: Some(vec!["a".into()]),
                choices: Some(vec!["a".into(), "b".into()]),
            }),
        );
        assert!(render(&field).ends_with(
            "'default' => ['a'],\n'choices' => [\n    'a' => 'a',\n    'b' => 'b',\n],"
        ));
    }

    #[test]
    fn test_select_labeled_choices() {
        let field = Field::new(
            "size",
            "Size",
            FieldKind::Select(ChoiceOptions {
                default_value: Some("lg".into()),
                choices: Some(vec![
                    Choice::Labeled {
                        id: "lg".into(),
                        label: "Large".into(),
                    },
                    "sm".into(),
                ]),
            }),
        );
        assert!(render(&field).ends_with(
            "'default' => 'lg',\n'choices' => [\n    'lg' => 'Large',\n    'sm' => 'sm',\n],"
        ));

        let empty = Field::new(
            "size",
            "Size",
            FieldKind::Select(ChoiceOptions {
                default_value: None,
                choices: Some(Vec::new()),
            }),
        );
        assert!(field_definition(&empty).get("choices").is_none());
    }

    #[test]
    fn test_title_default_key_order() {
        let field = Field::new(
            "heading",
            "Heading",
            FieldKind::Title(TitleOptions {
                default_value: Some(TitleDefault {
                    classes: vec!["display-1".into()],
                    value: "Welcome".into(),
                    bold: true,
                    ..TitleDefault::default()
                }),
            }),
        );
        assert!(render(&field).ends_with(
            "'default' => [\n    'tag' => 'h2',\n    'classes' => ['display-1'],\n    'value' => 'Welcome',\n    'focus' => false,\n    'bold' => true,\n    'italic' => false,\n    'underline' => false,\n    'size' => 18,\n],"
        ));
    }

    #[test]
    fn test_slider_zero_is_defined() {
        let field = Field::new(
            "gap",
            "Gap",
            FieldKind::Slider(SliderOptions {
                default_value: Some(1.5),
                step: Some(0.0),
                min: Some(0.0),
                max: None,
            }),
        );
        assert!(render(&field).ends_with("'step' => 0,\n'min' => 0,\n'default' => 1.5,"));
    }

    #[test]
    fn test_fields_array_keeps_duplicates_in_order() {
        let fields = vec![
            Field::new("title", "First", text(None)),
            Field::new("subtitle", "Second", text(None)),
            Field::new("title", "Third", text(None)),
        ];
        let array = fields_array(&fields);
        assert_eq!(
            array.keys().collect::<Vec<_>>(),
            vec!["title", "subtitle", "title"]
        );
        assert!(array.render_entries().starts_with("'title' => [\n    'type' => 'text',"));
    }

    #[test]
    fn test_every_kind_lowers_type_and_label() {
        for name in FieldKind::TYPE_NAMES {
            let json = format!(
                r#"{{"name":"x","label":"X","type":"{name}","collection":"C","selector":"S"}}"#
            );
            let field: Field = serde_json::from_str(&json).unwrap();
            let array = field_definition(&field);
            assert_eq!(array.get("type"), Some(&PhpValue::string(*name)));
            assert_eq!(array.get("label"), Some(&PhpValue::translated("X")));
        }
    }
}
