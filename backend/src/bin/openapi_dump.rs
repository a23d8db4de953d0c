//! Print the OpenAPI document as JSON or YAML.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use factory_backend::doc::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// Dump the dashboard OpenAPI document to stdout.
#[derive(Debug, Parser)]
struct Args {
    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: Format,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let rendered = match args.format {
        Format::Json => doc.to_pretty_json().map_err(io::Error::other)?,
        Format::Yaml => doc.to_yaml().map_err(io::Error::other)?,
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")
}
