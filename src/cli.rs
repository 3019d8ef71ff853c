//! CLI: JSON in, model declarations (or the inferred schema) out.
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;

use json_modelgen::{
    config::{Convention, DeclarationKind, GenerationConfig, Selection},
    inference, naming, store, value, GenerateError, JsonValue, NameCollision,
};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate Swift, Objective-C or Dart model declarations from JSON samples
#[derive(Parser, Debug)]
#[command(name = "json-modelgen", version)]
pub struct CommandLineInterface {
    /// saved selection file (default: ~/.config/json-modelgen/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// log pipeline details to stderr
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit model declarations
    Convert(ConvertOut),
    /// infer and print the JSON-schema-ish debug view
    Schema(SchemaOut),
    /// pretty-print the input documents
    Format(FormatOut),
    /// show or change the saved convention selection
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
struct SelectionArgs {
    /// output convention (defaults to the saved selection)
    #[arg(long, value_enum)]
    lang: Option<Convention>,

    /// struct or class; Objective-C and Dart always use class, Codable always struct
    #[arg(long, value_enum)]
    kind: Option<DeclarationKind>,

    /// type-name prefix for Objective-C output
    #[arg(long)]
    prefix: Option<String>,
}

#[derive(Args, Debug)]
struct ConvertOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    selection: SelectionArgs,

    /// top-level type name (default: the input file stem, or Root for stdin)
    #[arg(long)]
    root_type: Option<String>,

    /// number repeated type names (Meta, Meta2, ...) instead of letting the last one win
    #[arg(long, default_value_t = false)]
    suffix_collisions: bool,

    /// output file (stdout if omitted)
    #[arg(short, long, conflicts_with = "out_dir")]
    out: Option<PathBuf>,

    /// write one file per input, named after its root type
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// remember the effective selection for later runs
    #[arg(long, default_value_t = false)]
    save: bool,
}

#[derive(Args, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FormatOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// print the saved selection
    Show,
    /// change the saved selection
    Set(SelectionArgs),
}

/// One loaded input document.
struct Document {
    label: String,
    stem: Option<String>,
    value: JsonValue,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Vec<Document>> {
        let mut docs = Vec::new();
        for input in resolve_inputs(&self.input)? {
            let (label, stem, source) = match &input {
                Input::Stdin => {
                    let mut source = String::new();
                    std::io::stdin()
                        .read_to_string(&mut source)
                        .context("failed to read stdin")?;
                    ("<stdin>".to_string(), None, source)
                }
                Input::Path(path) => {
                    let source = std::fs::read_to_string(path)
                        .with_context(|| format!("failed to read source file {}", path.display()))?;
                    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned());
                    (path.display().to_string(), stem, source)
                }
            };

            let json_value = serde_json::from_str::<serde_json::Value>(&source)
                .map_err(GenerateError::Input)
                .with_context(|| format!("failed to parse JSON source file ({label})"))?;
            let json_value = match self.json_pointer.as_deref() {
                None => &json_value,
                Some(pointer) => json_value
                    .pointer(pointer)
                    .ok_or_else(|| anyhow!("JSON pointer {pointer} matched nothing in {label}"))?,
            };
            docs.push(Document { label, stem, value: JsonValue::from(json_value) });
        }
        tracing::debug!(documents = docs.len(), "loaded inputs");
        Ok(docs)
    }
}

impl SelectionArgs {
    /// Feed explicit choices through the selection state machine.
    fn apply(&self, selection: &mut Selection) {
        if let Some(lang) = self.lang {
            selection.select_convention(lang);
        }
        if let Some(kind) = self.kind {
            selection.select_kind(kind);
            if selection.kind() != Some(kind) {
                tracing::warn!(
                    "{} output always uses {} declarations",
                    selection.convention().unwrap_or_default().display_name(),
                    selection.kind().unwrap_or_default().keyword(),
                );
            }
        }
        if let Some(prefix) = &self.prefix {
            selection.set_class_prefix(Some(prefix.clone()));
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => store::default_config_path().context("pass --config to choose a config file"),
        }
    }

    fn saved_selection(&self) -> Result<Selection> {
        let path = self.config_path()?;
        let record = store::load(&path).context("failed to load saved selection")?;
        Ok(Selection::from_record(&record))
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Convert(target) => self.convert(target),
            Command::Schema(target) => {
                let docs = target.input_settings.load()?;
                let schemas = docs
                    .par_iter()
                    .map(|doc| inference::infer(&doc.value).to_schema())
                    .collect::<Vec<_>>();
                let schema = match <[serde_json::Value; 1]>::try_from(schemas) {
                    Ok([single]) => single,
                    Err(many) => serde_json::Value::Array(many),
                };
                let mut schema_src = serde_json::to_string_pretty(&schema)?;
                schema_src.push('\n');
                write_output(target.out.as_deref(), &schema_src)
            }
            Command::Format(target) => {
                let docs = target.input_settings.load()?;
                let formatted = docs
                    .iter()
                    .map(|doc| format!("{}\n", value::pretty(&doc.value)))
                    .collect::<Vec<_>>()
                    .join("\n");
                write_output(target.out.as_deref(), &formatted)
            }
            Command::Config(ConfigCommand::Show) => {
                let selection = self.saved_selection()?;
                print_selection(&self.config_path()?, &selection);
                Ok(())
            }
            Command::Config(ConfigCommand::Set(args)) => {
                let mut selection = self.saved_selection()?;
                args.apply(&mut selection);
                let path = self.config_path()?;
                store::save(&path, &selection.to_record()).context("failed to save selection")?;
                print_selection(&path, &selection);
                Ok(())
            }
        }
    }

    fn convert(&self, target: &ConvertOut) -> Result<()> {
        let mut selection = self.saved_selection()?;
        target.selection.apply(&mut selection);
        let collisions = if target.suffix_collisions {
            NameCollision::Suffix
        } else {
            NameCollision::Overwrite
        };
        let config = selection.to_config().with_collisions(collisions);

        let docs = target.input_settings.load()?;
        // each document is an independent run; collect keeps input order
        let outputs = docs
            .par_iter()
            .map(|doc| -> Result<(String, String)> {
                let root_name = root_name_for(doc, target.root_type.as_deref());
                let source = json_modelgen::generate_from_value(&doc.value, &root_name, &config)
                    .with_context(|| format!("failed to generate models for {}", doc.label))?;
                Ok((root_name, source))
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(dir) = target.out_dir.as_ref() {
            let opts = config.convention.naming_options(&config);
            let files = out_dir_files(dir, &outputs, |root_name| {
                format!("{}.{}", naming::type_name(root_name, &opts), config.convention.file_extension())
            })?;
            for (path, source) in files {
                write_output(Some(&path), source)?;
            }
        } else {
            let joined = outputs
                .iter()
                .map(|(_, source)| source.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            write_output(target.out.as_deref(), &joined)?;
        }

        if target.save {
            store::save(&self.config_path()?, &selection.to_record()).context("failed to save selection")?;
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

enum Input {
    Stdin,
    Path(PathBuf),
}

fn resolve_inputs<I>(patterns: I) -> Result<Vec<Input>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::new();
    let mut stdin_seen = false;

    for raw in patterns {
        let pattern = raw.as_ref();

        if pattern == "-" {
            if stdin_seen {
                bail!("stdin ('-') may only be given once");
            }
            stdin_seen = true;
            out.push(Input::Stdin);
        } else if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))? {
                out.push(Input::Path(entry?));
                matched_any = true;
            }
            if !matched_any {
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(Input::Path(PathBuf::from(pattern)));
        }
    }

    Ok(out)
}

fn root_name_for(doc: &Document, explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| doc.stem.clone())
        .unwrap_or_else(|| "Root".to_string())
}

/// Target path per generated source; two inputs may not claim the same file.
fn out_dir_files<'a>(
    dir: &Path,
    outputs: &'a [(String, String)],
    file_name: impl Fn(&str) -> String,
) -> Result<Vec<(PathBuf, &'a str)>> {
    let mut claimed = HashMap::new();
    let mut files = Vec::with_capacity(outputs.len());
    for (root_name, source) in outputs {
        let name = file_name(root_name);
        if let Some(first) = claimed.insert(name.clone(), root_name.as_str()) {
            bail!("inputs for `{first}` and `{root_name}` would both be written to {name}; use --root-type or --out");
        }
        files.push((dir.join(name), source.as_str()));
    }
    Ok(files)
}

fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            std::fs::write(out, text).with_context(|| format!("failed to write {}", out.display()))?;
            tracing::debug!(path = %out.display(), "wrote output");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn print_selection(path: &Path, selection: &Selection) {
    let config: GenerationConfig = selection.to_config();
    println!("config:     {}", path.display());
    println!("convention: {}", config.convention.display_name());
    println!("kind:       {}", config.kind.keyword());
    println!("prefix:     {}", config.class_prefix.as_deref().unwrap_or("-"));
    println!("extension:  .{}", config.convention.file_extension());
}
