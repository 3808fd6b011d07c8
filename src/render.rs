//! Rendering of a [`ConfigModel`] into po4a's configuration syntax.
//!
//! The output is line oriented, one newline-terminated record per line:
//!
//! ```text
//! [po4a_langs] pt es en
//! [po4a_paths] translations/$master.pot $lang:translations/$master-$lang.po
//! [options] opt: "-M UTF-8 -L UTF-8 -k 0 -f"
//! [type: xhtml] documents/document.html $lang:documents/document-$lang.html
//! ```
//!
//! Master-side paths are prefixed with `$(srcdir)` when a source base
//! directory is set, target-side paths with `$(destdir)` when a destination
//! base directory is set. The directories themselves are bound by po4a at
//! run time (`--variable srcdir=...`), never written into the text.

use crate::config::ConfigModel;
use crate::placeholder::LANG_VARIABLE;

/// Variable reference prefixed to master-side paths.
pub const SRCDIR_VARIABLE: &str = "$(srcdir)";

/// Variable reference prefixed to target-side paths.
pub const DESTDIR_VARIABLE: &str = "$(destdir)";

/// Render the model into po4a configuration text.
///
/// Total and deterministic: the same model always yields the same text.
/// An unset source language renders as an empty token.
pub fn render(model: &ConfigModel) -> String {
    let mut config = String::new();

    config.push_str(&format!(
        "[po4a_langs] {} {}\n",
        model.source_language().unwrap_or_default(),
        model.target_languages().join(" ")
    ));

    config.push_str(&format!(
        "[po4a_paths] {} {}:{}\n",
        master_path(model, model.master_translation_file()),
        LANG_VARIABLE,
        target_path(model, model.translation_file())
    ));

    config.push_str(&format!("[options] opt: \"{}\"\n", options_tokens(model)));

    for file in model.files() {
        config.push_str(&format!(
            "[type: {}] {} {}:{}\n",
            file.file_type(),
            master_path(model, file.master_file()),
            LANG_VARIABLE,
            target_path(model, file.target_file())
        ));
    }

    config
}

/// Space-joined option tokens: valued options first, then bare flags.
fn options_tokens(model: &ConfigModel) -> String {
    let options = model
        .build_options()
        .iter()
        .map(|(option, value)| format!("{} {}", option.token(), value));
    let flags = model
        .build_flags()
        .iter()
        .map(|flag| flag.token().to_string());

    options.chain(flags).collect::<Vec<_>>().join(" ")
}

fn master_path(model: &ConfigModel, path: &str) -> String {
    prefixed(model.source_base_dir().is_some(), SRCDIR_VARIABLE, path)
}

fn target_path(model: &ConfigModel, path: &str) -> String {
    prefixed(model.destination_base_dir().is_some(), DESTDIR_VARIABLE, path)
}

fn prefixed(enabled: bool, variable: &str, path: &str) -> String {
    if enabled {
        format!("{}{}", variable, path)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildFlag, BuildOption, FileSpec};

    fn scenario_model() -> ConfigModel {
        let mut model = ConfigModel::new();
        model.set_source_language("pt");
        model.add_target_language("es");
        model.add_target_language("en");
        model.add_file("xhtml", "doc.html", "doc-%lang.html").unwrap();
        model.set_master_translation_file("doc.pot");
        model.set_translation_file("doc-%lang.po");
        model
    }

    #[test]
    fn test_render_scenario_without_base_dirs() {
        let text = render(&scenario_model());

        assert_eq!(
            text,
            "[po4a_langs] pt es en\n\
             [po4a_paths] doc.pot $lang:doc-$lang.po\n\
             [options] opt: \"\"\n\
             [type: xhtml] doc.html $lang:doc-$lang.html\n"
        );
    }

    #[test]
    fn test_render_underscore_joined_placeholders() {
        let mut model = ConfigModel::new();
        model.set_master_translation_file("po/%master.pot");
        model.set_translation_file("po/%master_%lang.po");
        model.add_file("xhtml", "doc.html", "out/doc_%lang_v2.html").unwrap();

        let text = render(&model);

        assert!(text.contains("[po4a_paths] po/$master.pot $lang:po/$master_$lang.po\n"));
        assert!(text.contains("[type: xhtml] doc.html $lang:out/doc_$lang_v2.html\n"));
        assert!(!text.contains('%'));
        assert!(model.is_split_mode());
    }

    #[test]
    fn test_render_scenario_with_base_dirs() {
        let mut model = scenario_model();
        model.set_source_base_dir("/src");
        model.set_destination_base_dir("/dest");

        let text = render(&model);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[1],
            "[po4a_paths] $(srcdir)doc.pot $lang:$(destdir)doc-$lang.po"
        );
        assert_eq!(
            lines[3],
            "[type: xhtml] $(srcdir)doc.html $lang:$(destdir)doc-$lang.html"
        );
        // Directory values are bound at run time, never written.
        assert!(!text.contains("/src"));
        assert!(!text.contains("/dest"));
    }

    #[test]
    fn test_base_dirs_apply_independently() {
        let mut model = scenario_model();
        model.set_source_base_dir("/src");

        let text = render(&model);
        assert!(text.contains("[po4a_paths] $(srcdir)doc.pot $lang:doc-$lang.po\n"));
        assert!(text.contains("[type: xhtml] $(srcdir)doc.html $lang:doc-$lang.html\n"));

        let mut model = scenario_model();
        model.set_destination_base_dir("/dest");

        let text = render(&model);
        assert!(text.contains("[po4a_paths] doc.pot $lang:$(destdir)doc-$lang.po\n"));
        assert!(text.contains("[type: xhtml] doc.html $lang:$(destdir)doc-$lang.html\n"));
    }

    #[test]
    fn test_line_structure_and_order() {
        let mut model = scenario_model();
        model.add_file("man", "man/tool.1", "man/%lang/tool.1").unwrap();
        model.add_file("docbook", "book.xml", "book-%lang.xml").unwrap();

        let text = render(&model);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3 + model.files().len());
        assert!(lines[0].starts_with("[po4a_langs] "));
        assert!(lines[1].starts_with("[po4a_paths] "));
        assert!(lines[2].starts_with("[options] opt: "));
        assert!(lines[3].starts_with("[type: xhtml] doc.html "));
        assert!(lines[4].starts_with("[type: man] man/tool.1 "));
        assert!(lines[5].starts_with("[type: docbook] book.xml "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_readding_file_replaces_line() {
        let mut model = scenario_model();
        model.add_file("man", "other.1", "other-%lang.1").unwrap();
        model.add_file("html", "doc.html", "out/doc-%lang.html").unwrap();

        let text = render(&model);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "[type: html] doc.html $lang:out/doc-$lang.html");
        assert_eq!(lines[4], "[type: man] other.1 $lang:other-$lang.1");
    }

    #[test]
    fn test_duplicate_language_rendered_once() {
        let mut model = scenario_model();
        model.add_target_language("es");
        model.add_target_language("fr");

        let text = render(&model);
        assert!(text.starts_with("[po4a_langs] pt es en fr\n"));
    }

    #[test]
    fn test_empty_target_languages_keeps_separator() {
        let mut model = ConfigModel::new();
        model.set_source_language("pt");

        let text = render(&model);
        assert!(text.starts_with("[po4a_langs] pt \n"));
    }

    #[test]
    fn test_unset_source_language_renders_empty_token() {
        let model = ConfigModel::new();
        let text = render(&model);
        assert!(text.starts_with("[po4a_langs]  \n"));
    }

    #[test]
    fn test_file_less_model_renders() {
        let mut model = scenario_model();
        model.set_files(&[]).unwrap();

        let text = render(&model);
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_options_line() {
        let mut model = scenario_model();
        model.set_build_option(BuildOption::MasterCharset, "UTF-8");
        model.set_build_option(BuildOption::LocalizedCharset, "UTF-8");
        model.set_build_option(BuildOption::Keep, "0");
        model.add_build_flag(BuildFlag::Force);
        model.add_build_flag(BuildFlag::Stamp);

        let text = render(&model);
        assert!(text.contains("[options] opt: \"-M UTF-8 -L UTF-8 -k 0 -f --stamp\"\n"));
    }

    #[test]
    fn test_long_option_tokens() {
        let mut model = scenario_model();
        model.set_build_option(BuildOption::PackageName, "manual");
        model.set_build_option(BuildOption::EmailAddress, "i18n@example.org");

        let text = render(&model);
        assert!(text.contains(
            "[options] opt: \"--package-name manual --msgid-bugs-address i18n@example.org\"\n"
        ));
    }

    #[test]
    fn test_flags_only() {
        let mut model = scenario_model();
        model.add_build_flag(BuildFlag::Force);

        let text = render(&model);
        assert!(text.contains("[options] opt: \"-f\"\n"));
    }

    #[test]
    fn test_unknown_option_leaves_options_line_unchanged() {
        let mut model = scenario_model();
        model.set_build_option(BuildOption::Keep, "80");
        let before = render(&model);

        assert!(!model.set_build_option_named("verbose", "yes"));
        let after = render(&model);

        assert_eq!(before, after);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut model = scenario_model();
        model.set_build_option(BuildOption::Keep, "0");
        model.add_build_flag(BuildFlag::Force);
        model.set_source_base_dir("/src");

        assert_eq!(render(&model), render(&model));
    }

    #[test]
    fn test_split_mode_placeholders_left_for_po4a() {
        let mut model = scenario_model();
        model.set_master_translation_file("translations/%master.pot");
        model.set_translation_file("translations/%master-%lang.po");

        let text = render(&model);
        assert!(text.contains(
            "[po4a_paths] translations/$master.pot $lang:translations/$master-$lang.po\n"
        ));
    }

    #[test]
    fn test_render_from_file_specs() {
        let mut model = scenario_model();
        model
            .set_files(&[FileSpec::new("pod", "lib/Tool.pm", "lib/%lang/Tool.pm")])
            .unwrap();

        let text = render(&model);
        assert!(text.ends_with("[type: pod] lib/Tool.pm $lang:lib/$lang/Tool.pm\n"));
    }
}
