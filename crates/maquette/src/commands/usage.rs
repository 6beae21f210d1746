//! Usage command - Print the usage snippet of a playground definition

use super::{read_config, CommandError, OutputFormat};
use clap::Args;
use maquette_atelier::{get_usage, load_props};
use std::path::PathBuf;

#[derive(Args)]
pub struct UsageArgs {
    /// Playground definition (relaxed JSON)
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: UsageArgs) -> Result<(), CommandError> {
    let config = read_config(&args.file)?;
    let props = load_props(config.props)?;
    let usage = get_usage(&config.tag, &props);

    tracing::debug!("{} props, {} bytes of usage", props.len(), usage.len());

    match args.format {
        OutputFormat::Text => println!("{}", usage),
        OutputFormat::Json => println!("{}", serde_json::json!({ "usage": usage })),
    }

    Ok(())
}
