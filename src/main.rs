use std::str::FromStr;

use anyhow::{Result, bail};
use clap::Parser;

use prosevet::config::{Args, RunConfig};
use prosevet::dict::DictionaryLoader;
use prosevet::parser::parse_document;
use prosevet::validation::ValidationRunner;
use prosevet::{reporter, validator};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(
            log::LevelFilter::from_str(&args.log_level)
                .unwrap_or(log::LevelFilter::Info),
        )
        .init();

    let config = RunConfig::resolve(args.config.as_deref())?;

    let mut runner = ValidationRunner::new();
    for entry in &config.validators {
        match validator::create(&entry.name) {
            Some(v) => runner.register(v, entry.options.clone()),
            None => log::error!("unknown validator {:?}, skipping", entry.name),
        }
    }

    let mut dictionaries = DictionaryLoader::new();
    for failure in runner.init(&mut dictionaries) {
        // Already logged by the runner; keep operators aware on stderr even
        // when logging is filtered down.
        eprintln!(
            "warning: validator {} disabled: {}",
            failure.validator, failure.reason
        );
    }

    let text = std::fs::read_to_string(&args.input)?;
    let document = parse_document(&text);
    let errors = runner.validate(&document);

    match args.format.as_str() {
        "plain" => print!("{}", reporter::render_plain(&errors)),
        "json" => println!("{}", reporter::render_json(&errors)?),
        other => bail!("unknown output format {other:?} (expected plain or json)"),
    }

    if !errors.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
