//! Print the OpenAPI document as JSON or YAML.

use std::io::Write;

use cars_backend::doc::ApiDoc;
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// Dump the cars API OpenAPI document to stdout.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn render(format: Format) -> Result<String> {
    let doc = ApiDoc::openapi();
    match format {
        Format::Json => doc.to_pretty_json().wrap_err("serialise OpenAPI as JSON"),
        Format::Yaml => doc.to_yaml().wrap_err("serialise OpenAPI as YAML"),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let rendered = render(cli.format)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").wrap_err("write OpenAPI document")?;
    Ok(())
}
