//! Implementation of the `po4a-build render` command.

use crate::cli::RenderArgs;
use po4a_build::config::ConfigModel;
use po4a_build::error::Result;
use po4a_build::invoker::write_config;
use po4a_build::render::render;

/// Execute the `po4a-build render` command.
///
/// Prints the rendered configuration, or writes it to `--output`
/// (refusing to replace an existing file unless `--force` is given).
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let model = ConfigModel::load(&args.project)?;

    match args.output {
        Some(path) => {
            write_config(&model, &path, args.force)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", render(&model)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use po4a_build::error::Po4aError;
    use std::path::Path;
    use tempfile::TempDir;

    const PROJECT: &str = r#"
sourceLanguage: pt
targetLanguages: [es, en]
masterTranslationFile: doc.pot
translationFile: doc-%lang.po
files:
  - fileType: xhtml
    masterFile: doc.html
    targetFile: doc-%lang.html
"#;

    fn write_project(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("project.yaml");
        std::fs::write(&path, PROJECT).unwrap();
        path
    }

    #[test]
    fn test_render_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let project = write_project(temp_dir.path());
        let output = temp_dir.path().join("po4a.cfg");

        cmd_render(RenderArgs {
            project,
            output: Some(output.clone()),
            force: false,
        })
        .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "[po4a_langs] pt es en\n\
             [po4a_paths] doc.pot $lang:doc-$lang.po\n\
             [options] opt: \"\"\n\
             [type: xhtml] doc.html $lang:doc-$lang.html\n"
        );
    }

    #[test]
    fn test_render_refuses_existing_file_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let project = write_project(temp_dir.path());
        let output = temp_dir.path().join("po4a.cfg");
        std::fs::write(&output, "keep me").unwrap();

        let err = cmd_render(RenderArgs {
            project: project.clone(),
            output: Some(output.clone()),
            force: false,
        })
        .unwrap_err();
        assert!(matches!(err, Po4aError::ConfigFileExists { .. }));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "keep me");

        cmd_render(RenderArgs {
            project,
            output: Some(output.clone()),
            force: true,
        })
        .unwrap();
        assert!(
            std::fs::read_to_string(&output)
                .unwrap()
                .starts_with("[po4a_langs]")
        );
    }

    #[test]
    fn test_render_missing_project() {
        let err = cmd_render(RenderArgs {
            project: "/nonexistent/project.yaml".into(),
            output: None,
            force: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("failed to read project file"));
    }
}
