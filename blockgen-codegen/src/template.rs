//! The Smarty template of a block.

use blockgen_core::GeneratedFile;
use blockgen_schema::BlockDescription;

use crate::{CodeBuilder, naming::css_basename};

const CONTAINER_GUARD: &str = "{if !$block.settings.default.container}";

/// The block's Smarty template, flat or repeater depending on `hasRepeater`.
pub struct TemplateTpl<'a> {
    block: &'a BlockDescription,
}

impl<'a> TemplateTpl<'a> {
    pub fn new(block: &'a BlockDescription) -> Self {
        Self { block }
    }

    fn header(&self, b: CodeBuilder, suffix: &str) -> CodeBuilder {
        b.line("{**")
            .line(&format!(
                " * Prettyblocks template - {}{}",
                self.block.block_name, suffix
            ))
            .line(" *}")
            .blank()
    }

    fn flat(&self, b: CodeBuilder) -> CodeBuilder {
        let base = css_basename(&self.block.code);
        self.header(b, "")
            .block_with_close(&format!("<div class=\"{}\">", base), "</div>", |b| {
                b.apply(open_container)
                    .blank()
                    .block_with_close(&format!("<div class=\"{}__inner\">", base), "</div>", |b| {
                        b.line("{* Example field usage *}").block_with_close(
                            "{if !empty($block.settings.title)}",
                            "{/if}",
                            |b| {
                                b.block_with_close(
                                    &format!("<p class=\"{}__title\">", base),
                                    "</p>",
                                    |b| b.line("{$block.settings.title}"),
                                )
                            },
                        )
                    })
                    .blank()
                    .apply(close_container)
            })
    }

    fn repeater(&self, b: CodeBuilder) -> CodeBuilder {
        let base = css_basename(&self.block.code);
        self.header(b, " (Repeater)")
            .line("{$blocks = $block.states}")
            .blank()
            .block_with_close("{if !empty($blocks)}", "{/if}", |b| {
                b.block_with_close(&format!("<div class=\"{}\">", base), "</div>", |b| {
                    b.apply(open_container)
                        .blank()
                        .block_with_close(
                            &format!("<div class=\"{}__items row g-3\">", base),
                            "</div>",
                            |b| {
                                b.block_with_close(
                                    "{foreach from=$blocks item=block}",
                                    "{/foreach}",
                                    |b| repeater_item(b, &base),
                                )
                            },
                        )
                        .blank()
                        .apply(close_container)
                })
            })
    }
}

fn open_container(b: CodeBuilder) -> CodeBuilder {
    b.block_with_close(CONTAINER_GUARD, "{/if}", |b| b.line("<div class=\"container\">"))
}

fn close_container(b: CodeBuilder) -> CodeBuilder {
    b.block_with_close(CONTAINER_GUARD, "{/if}", |b| b.line("</div>"))
}

fn repeater_item(b: CodeBuilder, base: &str) -> CodeBuilder {
    b.block_with_close("<div class=\"col-12 col-md-6\">", "</div>", |b| {
        b.block_with_close(&format!("<div class=\"{}__item card\">", base), "</div>", |b| {
            b.block_with_close("<div class=\"card-body\">", "</div>", |b| {
                b.line("{* Example repeater field usage *}").block_with_close(
                    "{if !empty($block.title)}",
                    "{/if}",
                    |b| {
                        b.block_with_close(
                            &format!("<p class=\"{}__title\">", base),
                            "</p>",
                            |b| b.line("{$block.title nofilter}"),
                        )
                    },
                )
            })
        })
    })
}

impl GeneratedFile for TemplateTpl<'_> {
    fn filename(&self) -> String {
        self.block.template_filename.clone()
    }

    fn render(&self) -> String {
        let builder = CodeBuilder::smarty();
        if self.block.has_repeater {
            self.repeater(builder).build()
        } else {
            self.flat(builder).build()
        }
    }
}
