use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use lanes_client::{LanesClient, LanesConfig, WeightingScheme};

fn print_usage() {
    eprintln!("Usage: lanes-client [--base-url URL] <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  sim <term>...             distributional similarity of a term group");
    eprintln!("  content <term>...         content-bearingness ranking");
    eprintln!("  strsim <s1> <s2>          string similarity");
    eprintln!("  interpret <ws> <query>    interpret a query (ws: poisson|tfidf|noweight)");
    eprintln!("  corpus <term>             corpus statistics for a term");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    // --base-url overrides the configured service location
    let mut base_url: Option<String> = None;
    if let Some(pos) = args.iter().position(|a| a == "--base-url") {
        if pos + 1 >= args.len() {
            bail!("--base-url requires a value");
        }
        base_url = Some(args.remove(pos + 1));
        args.remove(pos);
    }

    if args.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    let client = match base_url {
        Some(url) => LanesClient::new(&url),
        None => {
            let config = LanesConfig::load().unwrap_or_default();
            LanesClient::with_config(&config)?
        }
    };

    let command = args[0].as_str();
    let rest: Vec<&str> = args[1..].iter().map(String::as_str).collect();

    match command {
        "sim" => {
            let result = client.distributional_similarity(&rest)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "content" => {
            let result = client.content_bearingness(&rest)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "strsim" => {
            if rest.len() != 2 {
                bail!("strsim takes exactly two strings");
            }
            let score = client.string_similarity(rest[0], rest[1])?;
            println!("{}", score);
        }
        "interpret" => {
            if rest.len() < 2 {
                bail!("interpret takes a weighting scheme and a query");
            }
            let scheme: WeightingScheme = rest[0].parse()?;
            let query = rest[1..].join(" ");
            let result = client.interpret(&query, scheme)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "corpus" => {
            if rest.len() != 1 {
                bail!("corpus takes exactly one term");
            }
            let result = client.corpus_statistics(rest[0])?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        other => {
            print_usage();
            bail!("unknown command '{}'", other);
        }
    }

    Ok(())
}
