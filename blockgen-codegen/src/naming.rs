//! Names derived from a block description.

use blockgen_core::ARCHIVE_EXTENSION;

/// Prefix every block code starts with.
pub const CODE_PREFIX: &str = "cpb_";

/// CSS class basename of a block: the first `cpb_` becomes `cpb-`.
pub fn css_basename(code: &str) -> String {
    code.replacen(CODE_PREFIX, "cpb-", 1)
}

/// File name of the archive bundling a block's generated files.
///
/// The template name with `.tpl` swapped for `.zip`, or `<code>.zip` when the
/// template name has no `.tpl` suffix.
pub fn archive_filename(template_filename: &str, code: &str) -> String {
    match template_filename.strip_suffix(".tpl") {
        Some(stem) => format!("{}.{}", stem, ARCHIVE_EXTENSION),
        None => format!("{}.{}", code, ARCHIVE_EXTENSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_basename() {
        assert_eq!(css_basename("cpb_hero_banner"), "cpb-hero_banner");
        assert_eq!(css_basename("cpb_cpb_x"), "cpb-cpb_x");
    }

    #[test]
    fn test_archive_filename() {
        assert_eq!(archive_filename("hero-banner.tpl", "cpb_hero"), "hero-banner.zip");
        assert_eq!(archive_filename("hero-banner.html", "cpb_x"), "cpb_x.zip");
        assert_eq!(archive_filename("hero.tpl.bak", "cpb_x"), "cpb_x.zip");
    }
}
