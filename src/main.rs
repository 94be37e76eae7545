use clap::Parser;
use oas_check::{load_instance_file, load_schema_file, AppResult, SchemaValidator};

/// A CLI to validate JSON instances against OpenAPI schema definitions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The path to the schema file (YAML or JSON).
    #[arg(short, long)]
    schema: std::path::PathBuf,

    /// The path to the JSON instance file.
    #[arg(short, long)]
    instance: std::path::PathBuf,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let schema = load_schema_file(&cli.schema)?;
    let instance = load_instance_file(&cli.instance)?;

    let report = SchemaValidator::new().validate(&schema, &instance);
    for error in report.errors() {
        println!("{}", error);
    }

    if !report.passed() {
        std::process::exit(1);
    }

    println!("Instance conforms to {:?}", cli.schema);
    Ok(())
}
