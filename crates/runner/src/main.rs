use auction_runner::{BatchConfig, BatchRunner, JsonFileSink};
use std::path::PathBuf;
use std::sync::Arc;

fn print_help() {
    eprintln!(
        r#"Auction Simulator - concurrent sealed-bid auctions

USAGE:
    auction-sim [OPTIONS]

OPTIONS:
    --config <PATH>         Load configuration from JSON file
    --bidders <N>           Bidders per auction (default: 100)
    --auctions <N>          Concurrent auctions (default: 40)
    --timeout-ms <MS>       Auction timeout in milliseconds (default: 800)
    --attributes <N>        Attributes per auction (default: 20)
    --output <DIR>          Output directory (default: sample-outputs)
    --seed <N>              Seed for reproducible batches
    --help                  Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Log level filter (default: info)

EXAMPLES:
    # Run with defaults
    auction-sim

    # Small reproducible batch
    auction-sim --bidders 10 --auctions 5 --seed 42

    # Run with config file, overriding the timeout
    auction-sim --config batch.json --timeout-ms 300
"#
    );
}

/// Value following a flag, or exit with a message
fn flag_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires a value", flag);
            std::process::exit(1);
        }
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> T {
    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: {} expects a non-negative integer, got '{}'", flag, value);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut bidders: Option<usize> = None;
    let mut auctions: Option<usize> = None;
    let mut timeout_ms: Option<u64> = None;
    let mut attributes: Option<usize> = None;
    let mut output: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                config_path = Some(flag_value(&args, i, flag));
            }
            "--bidders" => {
                i += 1;
                bidders = Some(parse_number(&flag_value(&args, i, flag), flag));
            }
            "--auctions" => {
                i += 1;
                auctions = Some(parse_number(&flag_value(&args, i, flag), flag));
            }
            "--timeout-ms" => {
                i += 1;
                timeout_ms = Some(parse_number(&flag_value(&args, i, flag), flag));
            }
            "--attributes" => {
                i += 1;
                attributes = Some(parse_number(&flag_value(&args, i, flag), flag));
            }
            "--output" | "-o" => {
                i += 1;
                output = Some(PathBuf::from(flag_value(&args, i, flag)));
            }
            "--seed" => {
                i += 1;
                seed = Some(parse_number(&flag_value(&args, i, flag), flag));
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            BatchConfig::from_file(&path)?
        }
        None => BatchConfig::default(),
    };

    // Flags override file values
    if let Some(n) = bidders {
        config.bidders = n;
    }
    if let Some(n) = auctions {
        config.auctions = n;
    }
    if let Some(ms) = timeout_ms {
        config.timeout_ms = ms;
    }
    if let Some(n) = attributes {
        config.attributes = n;
    }
    if let Some(dir) = output {
        config.output_dir = dir;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate()?;

    println!(
        "\nAuctions={} | Bidders={} | Timeout={}ms",
        config.auctions, config.bidders, config.timeout_ms
    );

    let sink = JsonFileSink::create(&config.output_dir)?;
    log::info!("Writing results to: {}", sink.dir().display());

    let runner = BatchRunner::from_config(&config, Arc::new(sink))?;
    let summary = runner.run(config.auctions).await?;

    println!(
        "\nAll auctions complete. Elapsed: {}ms ({} completed, {} failed)",
        summary.elapsed_ms, summary.auctions_completed, summary.auctions_failed
    );

    Ok(())
}
