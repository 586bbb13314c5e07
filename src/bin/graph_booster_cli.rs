//! graph-booster CLI: send one reorder call to the recommendation endpoint
//!
//! Usage:
//!   graph-booster-cli reorder --target <id> [OPTIONS] <key>...   Rank keys and print the result map
//!   graph-booster-cli boosters                                   List registered boosters
//!
//! Settings come from `GRAPH_BOOSTER_*` environment variables.

use graph_booster::config::{ENDPOINT_PARAM, FROM_PARAM, KEY_PROPERTY_PARAM, TARGET_PARAM};
use graph_booster::{get_booster_registry, parse_configuration, BoosterSettings, GRAPH_BOOSTER_NAME};
use std::collections::{HashMap, HashSet};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "reorder" => cmd_reorder(&args[2..]),
        "boosters" => cmd_boosters(),
        "version" | "--version" | "-V" => cmd_version(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"graph-booster-cli: re-rank search keys through a recommendation endpoint

USAGE:
    graph-booster-cli <COMMAND> [OPTIONS]

COMMANDS:
    reorder [OPTIONS] <key>...  Rank keys and print the result map as JSON
    boosters                    List registered boosters
    version                     Show version information
    help                        Show this help message

REORDER OPTIONS:
    --target <id>               Recommendation context (final path segment)
    --key-property <name>       Entity property ids are matched against (default: uuid)
    --endpoint <path>           Endpoint path override
    --from <n>                  Pagination offset (default: 0)
    --booster <name>            Registered booster to use (default: {GRAPH_BOOSTER_NAME})

ENVIRONMENT:
    GRAPH_BOOSTER_HOST          Base URL of the recommendation service (required)
    GRAPH_BOOSTER_USERNAME      Basic auth username
    GRAPH_BOOSTER_PASSWORD      Basic auth password
    GRAPH_BOOSTER_TIMEOUT_SECS  Request timeout, 0 disables (default: 30)
    RUST_LOG                    Log filter, e.g. graph_booster=debug"#
    );
}

fn cmd_version() {
    println!("graph-booster-cli {}", env!("CARGO_PKG_VERSION"));
}

fn cmd_boosters() {
    for name in get_booster_registry().names() {
        println!("{name}");
    }
}

fn cmd_reorder(args: &[String]) {
    let mut params: HashMap<String, String> = HashMap::new();
    let mut booster_name = GRAPH_BOOSTER_NAME.to_string();
    let mut keys: HashSet<String> = HashSet::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let param = match arg.as_str() {
            "--target" => Some(TARGET_PARAM),
            "--key-property" => Some(KEY_PROPERTY_PARAM),
            "--endpoint" => Some(ENDPOINT_PARAM),
            "--from" => Some(FROM_PARAM),
            "--booster" => None,
            flag if flag.starts_with("--") => {
                eprintln!("Unknown option: {flag}");
                std::process::exit(1);
            }
            key => {
                keys.insert(key.to_string());
                continue;
            }
        };
        let Some(value) = iter.next() else {
            eprintln!("Missing value for {arg}");
            std::process::exit(1);
        };
        match param {
            Some(param) => {
                params.insert(param.to_string(), value.clone());
            }
            None => booster_name = value.clone(),
        }
    }

    let settings = match BoosterSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let booster = match get_booster_registry().create(&booster_name, &settings) {
        Ok(booster) => booster,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let config = parse_configuration(&params);
    match booster.reorder(&config, &keys) {
        Ok(results) => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error [{:?}]: {e}", e.kind());
            std::process::exit(2);
        }
    }
}
