//! Runs a parsed command against files and the template catalog.

use crate::cli::{Args, Command, TemplateCommand};
use crate::config::Config;
use crate::output::OutputFormatter;
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use sfc_extract::StyleBlock;
use sfc_templates::{store_from_location, TemplateCatalog, TemplateRegistry, TemplateStore};
use std::path::{Path, PathBuf};

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked.
    Success,
    /// The command ran but found nothing to act on.
    Failure,
}

impl Outcome {
    /// The process exit status for this outcome.
    pub fn exit_status(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
        }
    }
}

/// Executes sfc-studio commands.
pub struct Runner {
    /// Configuration.
    config: Config,
    /// CLI arguments.
    args: Args,
    /// Output formatter.
    formatter: OutputFormatter,
}

impl Runner {
    /// Create a new runner.
    pub fn new(cwd: PathBuf, args: Args) -> Result<Self> {
        let config = Config::load(&cwd, &args)?;
        let formatter = OutputFormatter::new(args.output);

        if let Some(source) = &config.source {
            tracing::debug!(config = %source.display(), "loaded configuration");
        }

        Ok(Self {
            config,
            args,
            formatter,
        })
    }

    /// Run the command.
    pub async fn run(&self) -> Result<Outcome> {
        match &self.args.command {
            Command::Props { file } => {
                let source = read_source(file)?;
                let properties = sfc_extract::parse_properties(&source).into_diagnostic()?;
                println!("{}", self.formatter.properties(&properties));
                Ok(Outcome::Success)
            }
            Command::Styles { file } => {
                let source = read_source(file)?;
                let styles = sfc_extract::parse_styles(&source).into_diagnostic()?;
                println!("{}", self.formatter.styles(&styles));
                Ok(Outcome::Success)
            }
            Command::Inspect { file } => {
                let source = read_source(file)?;
                let result = sfc_extract::try_parse_component(&source).into_diagnostic()?;
                println!("{}", self.formatter.parse_result(&result));
                Ok(Outcome::Success)
            }
            Command::SetDefault {
                file,
                prop,
                value,
                write,
            } => self.set_default(file, prop, value, *write),
            Command::SetStyles {
                file,
                css,
                scoped,
                write,
            } => self.set_styles(file, css, *scoped, *write),
            Command::Templates { command } => self.templates(command).await,
        }
    }

    fn set_default(&self, file: &Path, prop: &str, value: &str, write: bool) -> Result<Outcome> {
        let source = read_source(file)?;
        match sfc_extract::set_property_default(&source, prop, value).into_diagnostic()? {
            Some(rewritten) => {
                self.emit(file, &rewritten, write)?;
                Ok(Outcome::Success)
            }
            None => {
                eprintln!(
                    "{}: no prop '{}' with a string default",
                    file.display(),
                    prop
                );
                Ok(Outcome::Failure)
            }
        }
    }

    fn set_styles(&self, file: &Path, css: &[PathBuf], scoped: bool, write: bool) -> Result<Outcome> {
        let source = read_source(file)?;
        let styles = css
            .iter()
            .map(|path| read_source(path).map(|content| StyleBlock::new(content.trim(), scoped)))
            .collect::<Result<Vec<_>>>()?;

        let rewritten = sfc_extract::rewrite_styles(&source, &styles);
        self.emit(file, &rewritten, write)?;
        Ok(Outcome::Success)
    }

    async fn templates(&self, command: &TemplateCommand) -> Result<Outcome> {
        match command {
            TemplateCommand::List => {
                let registry = TemplateRegistry::builtin();
                println!("{}", self.formatter.templates(&registry));
                Ok(Outcome::Success)
            }
            TemplateCommand::Show { name } => {
                let registry = TemplateRegistry::builtin();
                let template = registry
                    .find_by_name(name)
                    .ok_or_else(|| miette!("no built-in template named '{}'", name))?;
                println!("{}", self.formatter.template(template));
                Ok(Outcome::Success)
            }
            TemplateCommand::Load { identifier } => {
                let catalog = self.catalog()?;
                let template = catalog
                    .load_template(identifier)
                    .await
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("failed to load from {}", catalog.store().location())
                    })?;
                println!("{}", self.formatter.template(&template));
                Ok(Outcome::Success)
            }
            TemplateCommand::Default => {
                let code = self.catalog()?.default_code().await;
                if code.is_empty() {
                    eprintln!("default template '{}' is unavailable", self.config.default_template);
                    return Ok(Outcome::Failure);
                }
                println!("{}", self.formatter.source(&code));
                Ok(Outcome::Success)
            }
        }
    }

    fn catalog(&self) -> Result<TemplateCatalog<Box<dyn TemplateStore>>> {
        let location = self.config.template_store.as_deref().ok_or_else(|| {
            miette!("no template store configured; pass --store or set templateStore in sfc-studio.json")
        })?;

        Ok(TemplateCatalog::new(store_from_location(location))
            .with_identifiers(self.config.template_ids.iter().cloned())
            .with_default_name(self.config.default_template.clone()))
    }

    /// Print rewritten source or write it back to `file`.
    fn emit(&self, file: &Path, source: &str, write: bool) -> Result<()> {
        if write {
            std::fs::write(file, source)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", file.display()))?;
            if self.args.verbose {
                eprintln!("Updated {}", file.display());
            }
        } else {
            println!("{}", self.formatter.source(source));
        }
        Ok(())
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    const CARD: &str = r#"<script setup>
defineProps({ title: { type: String, default: 'Card' } })
</script>
"#;

    fn runner(dir: &Path, argv: &[&str]) -> Runner {
        let mut full = vec!["sfc-studio"];
        full.extend_from_slice(argv);
        Runner::new(dir.to_path_buf(), Args::parse_from(full)).unwrap()
    }

    #[tokio::test]
    async fn test_set_default_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Card.vue");
        std::fs::write(&file, CARD).unwrap();
        let path = file.to_str().unwrap();

        let code = runner(dir.path(), &["set-default", path, "title", "Updated", "--write"])
            .run()
            .await
            .unwrap();
        assert_eq!(code, Outcome::Success);
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            CARD.replace("'Card'", "'Updated'")
        );
    }

    #[tokio::test]
    async fn test_set_default_unknown_prop_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Card.vue");
        std::fs::write(&file, CARD).unwrap();
        let path = file.to_str().unwrap();

        let code = runner(dir.path(), &["set-default", path, "missing", "x", "--write"])
            .run()
            .await
            .unwrap();
        assert_eq!(code, Outcome::Failure);
        assert_eq!(std::fs::read_to_string(&file).unwrap(), CARD);
    }

    #[tokio::test]
    async fn test_set_styles_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Card.vue");
        let css = dir.path().join("card.css");
        std::fs::write(&file, CARD).unwrap();
        std::fs::write(&css, ".card { margin: 0; }\n").unwrap();

        let code = runner(
            dir.path(),
            &[
                "set-styles",
                file.to_str().unwrap(),
                css.to_str().unwrap(),
                "--scoped",
                "--write",
            ],
        )
        .run()
        .await
        .unwrap();
        assert_eq!(code, Outcome::Success);

        let written = std::fs::read_to_string(&file).unwrap();
        assert_eq!(
            sfc_extract::parse_styles(&written).unwrap(),
            vec![StyleBlock::scoped(".card { margin: 0; }")]
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Nope.vue");
        let result = runner(dir.path(), &["props", missing.to_str().unwrap()])
            .run()
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_templates_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("basic.json"),
            r#"{ "name": "Basic Component", "description": "", "code": "<template/>" }"#,
        )
        .unwrap();
        let store = dir.path().to_str().unwrap();

        let code = runner(dir.path(), &["--store", store, "templates", "load", "basic"])
            .run()
            .await
            .unwrap();
        assert_eq!(code, Outcome::Success);

        let code = runner(dir.path(), &["--store", store, "templates", "default"])
            .run()
            .await
            .unwrap();
        assert_eq!(code, Outcome::Success);
    }

    #[tokio::test]
    async fn test_templates_without_store() {
        let dir = tempfile::tempdir().unwrap();
        let result = runner(dir.path(), &["templates", "default"]).run().await;
        assert!(result.is_err());
    }
}
