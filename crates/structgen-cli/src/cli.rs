//! `structgen` - generate Go structs from MySQL `CREATE TABLE` statements

mod logging;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use structgen_codegen::{GeneratedModel, GenerationConfig, StructGenerator};

use crate::logging::LoggingConfig;
use crate::settings::Settings;

/// Output format for the generated model
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Go source text
    Go,
    /// The generated model as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "structgen",
    version,
    about = "Generate a Go struct, TableName() accessor and CRUD stubs from a CREATE TABLE statement"
)]
struct Cli {
    /// DDL file to read; `-` or omitted reads stdin
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field tag template; every `%s` is replaced by the column name
    #[arg(short, long, env = "STRUCTGEN_TAG_TEMPLATE")]
    tag_template: Option<String>,

    /// Append create/get/list/update/delete stubs
    #[arg(long, overrides_with = "no_cruds")]
    cruds: bool,

    /// Omit CRUD stubs
    #[arg(long, overrides_with = "cruds")]
    no_cruds: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Go)]
    format: OutputFormat,

    /// Settings file (defaults to <config dir>/structgen/config.toml)
    #[arg(short, long, env = "STRUCTGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `structgen_codegen=trace`
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// CRUD switch from the command line, if one was given
    fn cruds_flag(&self) -> Option<bool> {
        if self.cruds {
            Some(true)
        } else if self.no_cruds {
            Some(false)
        } else {
            None
        }
    }

    /// Merges command-line flags over the settings file
    fn generation_config(&self, settings: &Settings) -> GenerationConfig {
        let mut config = settings.generation.clone();
        if let Some(template) = &self.tag_template {
            config.tag_template = template.clone();
        }
        if let Some(include_cruds) = self.cruds_flag() {
            config.include_cruds = include_cruds;
        }
        config
    }

    fn reads_stdin(&self) -> bool {
        match &self.input {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let filter = cli
        .log_level
        .clone()
        .or_else(|| settings.log_level.clone())
        .unwrap_or_else(|| logging::DEFAULT_FILTER.to_string());
    logging::init(LoggingConfig::default().with_filter(filter))?;

    let sql = read_input(&cli)?;
    let generator =
        StructGenerator::new(cli.generation_config(&settings)).with_catalog(settings.catalog());
    let model = generator
        .generate_sql(&sql)
        .context("Failed to generate model")?;

    let rendered = render(&model, cli.format)?;
    write_output(cli.output.as_deref(), &rendered)
}

fn read_input(cli: &Cli) -> Result<String> {
    if cli.reads_stdin() {
        let mut sql = String::new();
        std::io::stdin()
            .read_to_string(&mut sql)
            .context("Failed to read DDL from stdin")?;
        return Ok(sql);
    }

    let path = cli.input.as_deref().unwrap_or(Path::new("-"));
    std::fs::read_to_string(path).with_context(|| format!("Failed to read DDL file: {:?}", path))
}

fn render(model: &GeneratedModel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Go => Ok(model.body_text.clone()),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(model).context("Failed to serialize model")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            tracing::info!(path = %path.display(), "Wrote generated model");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}
