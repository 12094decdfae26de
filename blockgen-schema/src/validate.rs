//! Validation rules for block descriptions.
//!
//! [`validate`] enforces every shape rule and the `hasRepeater`/`repeater`
//! invariant; [`lint`] reports suspicious but accepted input.

use std::collections::HashSet;

use crate::{BlockDescription, Choice, Field, FieldKind, Issue};

/// Check a block description against every rule.
///
/// Returns all issues found, in document order. An empty list means the
/// description can be handed to the generator.
pub fn validate(block: &BlockDescription) -> Vec<Issue> {
    let mut v = Validator::default();
    let root = Scope::root();

    if block.block_name.is_empty() {
        v.report(root.key("blockName"), "Block name is required");
    } else if !is_pascal_identifier(&block.block_name) {
        v.report(root.key("blockName"), "Use PascalCase (ex: HeroBanner)");
    }

    if block.template_filename.is_empty() {
        v.report(root.key("tplFilename"), "TPL filename is required");
    } else if !is_template_filename(&block.template_filename) {
        v.report(root.key("tplFilename"), "Example: hero-banner.tpl");
    }

    if block.code.is_empty() {
        v.report(root.key("code"), "Code is required");
    } else if !is_block_code(&block.code) {
        v.report(root.key("code"), "Example: cpb_herobanner");
    }

    v.require(root.key("nameLabel"), &block.display_name, "Displayed name is required");
    v.require(root.key("description"), &block.description, "Description is required");

    v.fields(&root.key("fields"), &block.fields);

    match (block.has_repeater, &block.repeater) {
        (true, None) => v.report(
            root.key("repeater"),
            "Repeater is required when hasRepeater is true",
        ),
        (false, Some(_)) => v.report(
            root.key("repeater"),
            "Repeater must be omitted when hasRepeater is false",
        ),
        (true, Some(repeater)) => {
            let scope = root.key("repeater");
            v.require(scope.key("nameLabel"), &repeater.label, "Repeater label is required");
            v.require(scope.key("nameFrom"), &repeater.name_from, "nameFrom is required");
            if repeater.fields.is_empty() {
                v.report(scope.key("fields"), "At least one repeater field is required");
            }
            v.fields(&scope.key("fields"), &repeater.fields);
        }
        (false, None) => {}
    }

    v.issues
}

/// Report accepted-but-suspicious input as warnings.
///
/// Duplicate field names are not rejected: the generator emits every field in
/// order and the last declaration wins when the PHP array is evaluated.
pub fn lint(block: &BlockDescription) -> Vec<Issue> {
    let mut warnings = Vec::new();
    let root = Scope::root();

    duplicate_names(&root.key("fields"), &block.fields, &mut warnings);

    if let Some(repeater) = block.active_repeater() {
        let scope = root.key("repeater");
        duplicate_names(&scope.key("fields"), &repeater.fields, &mut warnings);

        if !repeater.name_from.is_empty()
            && !repeater.fields.iter().any(|f| f.name == repeater.name_from)
        {
            warnings.push(Issue::new(
                scope.key("nameFrom").path,
                format!(
                    "'{}' does not match any repeater field name",
                    repeater.name_from
                ),
            ));
        }
    }

    warnings
}

fn duplicate_names(scope: &Scope, fields: &[Field], warnings: &mut Vec<Issue>) {
    let mut seen = HashSet::new();
    for (i, field) in fields.iter().enumerate() {
        if !seen.insert(field.name.as_str()) {
            warnings.push(Issue::new(
                scope.index(i).key("name").path,
                format!(
                    "duplicate field name '{}'; the last declaration wins",
                    field.name
                ),
            ));
        }
    }
}

/// Dotted path to the value being validated.
#[derive(Debug, Clone)]
struct Scope {
    path: String,
}

impl Scope {
    fn root() -> Self {
        Self {
            path: String::new(),
        }
    }

    fn key(&self, segment: &str) -> Self {
        if self.path.is_empty() {
            Self {
                path: segment.to_string(),
            }
        } else {
            Self {
                path: format!("{}.{}", self.path, segment),
            }
        }
    }

    fn index(&self, i: usize) -> Self {
        self.key(&i.to_string())
    }
}

#[derive(Default)]
struct Validator {
    issues: Vec<Issue>,
}

impl Validator {
    fn report(&mut self, scope: Scope, message: &str) {
        self.issues.push(Issue::new(scope.path, message));
    }

    fn require(&mut self, scope: Scope, value: &str, message: &str) {
        if value.is_empty() {
            self.report(scope, message);
        }
    }

    fn fields(&mut self, scope: &Scope, fields: &[Field]) {
        for (i, field) in fields.iter().enumerate() {
            self.field(&scope.index(i), field);
        }
    }

    fn field(&mut self, scope: &Scope, field: &Field) {
        if field.name.is_empty() {
            self.report(scope.key("name"), "Field name is required");
        } else if !is_snake_identifier(&field.name) {
            self.report(scope.key("name"), "Use snake_case (ex: title, image_alt)");
        }
        self.require(scope.key("label"), &field.label, "Label is required");

        match &field.kind {
            FieldKind::Selector(options) => {
                self.require(
                    scope.key("collection"),
                    &options.collection,
                    "collection is required (ex: Product)",
                );
                self.require(
                    scope.key("selector"),
                    &options.selector,
                    "selector pattern is required (ex: {id} - {name})",
                );
            }
            FieldKind::Select(options) | FieldKind::RadioGroup(options) => {
                self.choices(scope, options.choices.as_deref());
            }
            FieldKind::Multiselect(options) => {
                self.choices(scope, options.choices.as_deref());
            }
            FieldKind::Title(options) => {
                if let Some(default) = &options.default_value {
                    self.require(
                        scope.key("defaultValue").key("tag"),
                        &default.tag,
                        "Title tag is required",
                    );
                }
            }
            FieldKind::Text(_)
            | FieldKind::Color(_)
            | FieldKind::Textarea(_)
            | FieldKind::Fileupload(_)
            | FieldKind::Editor(_)
            | FieldKind::Checkbox(_)
            | FieldKind::Slider(_)
            | FieldKind::Datepicker(_) => {}
        }
    }

    fn choices(&mut self, scope: &Scope, choices: Option<&[Choice]>) {
        let scope = scope.key("choices");
        for (i, choice) in choices.unwrap_or_default().iter().enumerate() {
            if let Choice::Labeled { id, label } = choice {
                self.require(scope.index(i).key("id"), id, "Choice id is required");
                self.require(scope.index(i).key("label"), label, "Choice label is required");
            }
        }
    }
}

/// `^[A-Z][A-Za-z0-9]*$`
fn is_pascal_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `^[a-z][a-z0-9_]*$`
fn is_snake_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// `^[a-z0-9-]+\.tpl$`
fn is_template_filename(s: &str) -> bool {
    match s.strip_suffix(".tpl") {
        Some(stem) => {
            !stem.is_empty()
                && stem
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        }
        None => false,
    }
}

/// `^cpb_[a-z0-9_]+$`
fn is_block_code(s: &str) -> bool {
    match s.strip_prefix("cpb_") {
        Some(rest) => {
            !rest.is_empty()
                && rest
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChoiceOptions, Repeater, SelectorOptions, TextOptions, TitleDefault, TitleOptions};

    fn block() -> BlockDescription {
        BlockDescription {
            block_name: "HeroBanner".into(),
            template_filename: "hero-banner.tpl".into(),
            code: "cpb_hero_banner".into(),
            display_name: "Hero banner".into(),
            description: "Large banner".into(),
            tab: "general".into(),
            icon: "DocumentIcon".into(),
            has_repeater: false,
            fields: vec![Field::new("title", "Title", FieldKind::text())],
            repeater: None,
        }
    }

    fn paths(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn test_valid_block_has_no_issues() {
        assert!(validate(&block()).is_empty());
    }

    #[test]
    fn test_identifier_rules() {
        assert!(is_pascal_identifier("HeroBanner2"));
        assert!(!is_pascal_identifier("heroBanner"));
        assert!(!is_pascal_identifier("Hero_Banner"));

        assert!(is_snake_identifier("image_alt"));
        assert!(!is_snake_identifier("1title"));
        assert!(!is_snake_identifier("Title"));
        assert!(!is_snake_identifier("_title"));

        assert!(is_template_filename("hero-banner.tpl"));
        assert!(!is_template_filename(".tpl"));
        assert!(!is_template_filename("Hero.tpl"));
        assert!(!is_template_filename("hero.tpl.bak"));

        assert!(is_block_code("cpb_hero_2"));
        assert!(!is_block_code("cpb_"));
        assert!(!is_block_code("cpb-hero"));
        assert!(!is_block_code("hero"));
    }

    #[test]
    fn test_top_level_issues_in_order() {
        let mut b = block();
        b.block_name = "hero".into();
        b.template_filename = "hero.html".into();
        b.code = String::new();
        b.description = String::new();

        let issues = validate(&b);
        assert_eq!(
            paths(&issues),
            vec!["blockName", "tplFilename", "code", "description"]
        );
        assert_eq!(issues[2].message, "Code is required");
    }

    #[test]
    fn test_field_issues_carry_index() {
        let mut b = block();
        b.fields.push(Field::new("Bad Name", "", FieldKind::text()));
        b.fields.push(Field::new(
            "product",
            "Product",
            FieldKind::Selector(SelectorOptions {
                collection: String::new(),
                selector: "{id}".into(),
            }),
        ));

        let issues = validate(&b);
        assert_eq!(
            paths(&issues),
            vec!["fields.1.name", "fields.1.label", "fields.2.collection"]
        );
    }

    #[test]
    fn test_labeled_choices_must_be_complete() {
        let mut b = block();
        b.fields = vec![Field::new(
            "size",
            "Size",
            FieldKind::Select(ChoiceOptions {
                default_value: None,
                choices: Some(vec![
                    Choice::from("sm"),
                    Choice::Labeled {
                        id: "lg".into(),
                        label: String::new(),
                    },
                ]),
            }),
        )];

        assert_eq!(paths(&validate(&b)), vec!["fields.0.choices.1.label"]);
    }

    #[test]
    fn test_title_tag_required() {
        let mut b = block();
        b.fields = vec![Field::new(
            "heading",
            "Heading",
            FieldKind::Title(TitleOptions {
                default_value: Some(TitleDefault {
                    tag: String::new(),
                    ..TitleDefault::default()
                }),
            }),
        )];

        assert_eq!(paths(&validate(&b)), vec!["fields.0.defaultValue.tag"]);
    }

    #[test]
    fn test_repeater_flag_must_match_payload() {
        let mut b = block();
        b.has_repeater = true;
        assert_eq!(paths(&validate(&b)), vec!["repeater"]);

        let mut b = block();
        b.repeater = Some(Repeater::empty());
        assert_eq!(paths(&validate(&b)), vec!["repeater"]);
    }

    #[test]
    fn test_empty_repeater_is_rejected() {
        let mut b = block();
        b.set_repeater_enabled(true);

        let issues = validate(&b);
        assert_eq!(
            paths(&issues),
            vec!["repeater.nameLabel", "repeater.nameFrom", "repeater.fields"]
        );
        assert_eq!(issues[2].message, "At least one repeater field is required");
    }

    #[test]
    fn test_repeater_field_issues() {
        let mut b = block();
        b.has_repeater = true;
        b.repeater = Some(Repeater {
            label: "Slides".into(),
            name_from: "title".into(),
            fields: vec![Field::new(
                "title",
                "",
                FieldKind::Text(TextOptions::default()),
            )],
        });

        assert_eq!(paths(&validate(&b)), vec!["repeater.fields.0.label"]);
    }

    #[test]
    fn test_lint_reports_duplicates_without_rejecting() {
        let mut b = block();
        b.fields.push(Field::new("title", "Again", FieldKind::text()));

        assert!(validate(&b).is_empty());
        let warnings = lint(&b);
        assert_eq!(paths(&warnings), vec!["fields.1.name"]);
        assert!(warnings[0].message.contains("last declaration wins"));
    }

    #[test]
    fn test_lint_reports_unknown_name_from() {
        let mut b = block();
        b.has_repeater = true;
        b.repeater = Some(Repeater {
            label: "Slides".into(),
            name_from: "heading".into(),
            fields: vec![Field::new("title", "Title", FieldKind::text())],
        });

        assert_eq!(paths(&lint(&b)), vec!["repeater.nameFrom"]);
    }
}
