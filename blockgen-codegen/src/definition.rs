//! The PHP definition class of a block.

use blockgen_core::GeneratedFile;
use blockgen_schema::{BlockDescription, Repeater};

use crate::{
    CodeBuilder,
    fields::fields_array,
    php::{PhpArray, PhpValue, escape_php},
};

const LICENSE_HEADER: &str = "\
/**
 * Copyright since 2002 Creabilis
 *
 * NOTICE OF LICENSE
 *
 * This source file is subject to the Academic Free License 3.0 (AFL-3.0)
 * that is bundled with this package in the file LICENSE.txt.
 * It is also available through the world-wide-web at this URL:
 * https://opensource.org/licenses/AFL-3.0
 *
 * @author    Creabilis <contact@creabilis.com>
 * @copyright Since 2002 Creabilis
 * @license   https://opensource.org/licenses/AFL-3.0 Academic Free License 3.0 (AFL-3.0)
 * International Registered Trademark & Property of Creabilis
 */";

/// Namespace of generated block classes.
pub const NAMESPACE: &str = "Creabilis\\CreaPrettyBlocks\\Block";

/// Directory of block templates inside the module.
const TEMPLATES_DIR: &str = "/views/templates/blocks/";

/// `<BlockName>Block.php`: a class whose `getDefinition()` returns the block
/// metadata and field schema.
pub struct DefinitionPhp<'a> {
    block: &'a BlockDescription,
}

impl<'a> DefinitionPhp<'a> {
    pub fn new(block: &'a BlockDescription) -> Self {
        Self { block }
    }

    /// The array returned by `getDefinition()`.
    ///
    /// `config` is present iff the block has fields; `repeater` iff the block
    /// is flagged as having one and carries it.
    pub fn definition(&self) -> PhpArray {
        let block = self.block;
        let template_path = format!(
            "'module:' . $this->module->name . '{}{}'",
            TEMPLATES_DIR,
            escape_php(&block.template_filename)
        );

        let mut array = PhpArray::new()
            .entry("name", PhpValue::translated(block.display_name.as_str()))
            .entry("description", PhpValue::translated(block.description.as_str()))
            .entry("code", PhpValue::string(block.code.as_str()))
            .entry("tab", PhpValue::string(block.tab.as_str()))
            .entry("icon", PhpValue::string(block.icon.as_str()))
            .entry("need_reload", true)
            .entry(
                "templates",
                PhpArray::new().entry("default", PhpValue::expr(template_path)),
            );

        if !block.fields.is_empty() {
            array.push(
                "config",
                PhpArray::new().entry("fields", fields_array(&block.fields)),
            );
        }

        if let Some(repeater) = block.active_repeater() {
            array.push("repeater", repeater_section(repeater));
        }

        array
    }
}

fn repeater_section(repeater: &Repeater) -> PhpArray {
    PhpArray::new()
        .entry("name", PhpValue::translated(repeater.label.as_str()))
        .entry("nameFrom", PhpValue::string(repeater.name_from.as_str()))
        .entry("groups", fields_array(&repeater.fields))
}

impl GeneratedFile for DefinitionPhp<'_> {
    fn filename(&self) -> String {
        format!("{}.php", self.block.class_name())
    }

    fn render(&self) -> String {
        CodeBuilder::php()
            .line("<?php")
            .lines(LICENSE_HEADER)
            .line(&format!("namespace {};", NAMESPACE))
            .blank()
            .line(&format!(
                "class {} extends AbstractBlock",
                self.block.class_name()
            ))
            .line("{")
            .indent()
            .line("public function getDefinition(): array")
            .line("{")
            .indent()
            .block_with_close("return [", "];", |b| {
                b.lines(&self.definition().render_entries())
            })
            .dedent()
            .line("}")
            .dedent()
            .line("}")
            .build()
    }
}
