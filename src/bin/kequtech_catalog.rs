//! kequtech-catalog: inspect the built-in product catalog
//!
//! Usage:
//!   kequtech-catalog list                 List every versioned path
//!   kequtech-catalog show <path>          Print one version's schemas and example
//!   kequtech-catalog export [--yaml]      Dump the whole catalog
//!   kequtech-catalog check                Validate every worked example

use anyhow::{bail, Context};
use kequtech_api::catalog::{Catalog, CatalogLookup};
use kequtech_api::validation::{JsonSchemaEngine, ParameterValidators};
use serde_json::json;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "list" => cmd_list(),
        "show" => cmd_show(&args[2..]),
        "export" => cmd_export(&args[2..]),
        "check" => cmd_check(),
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"kequtech-catalog: Kequtech API catalog tool

USAGE:
    kequtech-catalog <COMMAND> [OPTIONS]

COMMANDS:
    list                List every versioned path with token cost and rate limit
    show <path>         Print schemas and worked example for one versioned path
    export [--yaml]     Dump the full catalog (JSON by default)
    check               Validate every worked example against its parameter schema
    version             Show version information
    help                Show this help message

ENVIRONMENT:
    RUST_LOG            Log filter (default: warn)"#
    );
}

fn cmd_version() {
    let catalog = Catalog::builtin();
    println!(
        "kequtech-catalog {} (catalog {})",
        env!("CARGO_PKG_VERSION"),
        catalog.catalog_version()
    );
}

fn cmd_list() -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let lookup = CatalogLookup::new(Arc::clone(&catalog));

    println!("{:<28} {:>6}  {:<14} {}", "PATH", "TOKENS", "RATE LIMIT", "PRODUCT");
    for product in catalog.products() {
        for path in product.versioned_paths() {
            let version = lookup.resolve(&path)?;
            println!(
                "{:<28} {:>6}  {:<14} {}",
                path,
                version.tokens,
                format!("{}/{}s", version.rate_limit.max, version.rate_limit.seconds),
                product.name
            );
        }
    }
    Ok(())
}

fn cmd_show(args: &[String]) -> anyhow::Result<()> {
    let Some(path) = args.first() else {
        bail!("show requires a versioned path, e.g. /v1/message-parser");
    };
    let catalog = Catalog::builtin();
    let lookup = CatalogLookup::new(Arc::clone(&catalog));
    let version = lookup
        .resolve(path)
        .with_context(|| format!("cannot resolve {path}"))?;

    let doc = json!({
        "path": path,
        "tokens": version.tokens,
        "rateLimit": version.rate_limit,
        "packageVersion": version.package_version,
        "added": version.added,
        "parameters": version.parameters,
        "response": version.response,
        "example": version.example,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn cmd_export(args: &[String]) -> anyhow::Result<()> {
    let doc = Catalog::builtin().to_json();
    if args.iter().any(|a| a == "--yaml") {
        print!("{}", serde_yaml::to_string(&doc)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }
    Ok(())
}

fn cmd_check() -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let lookup = CatalogLookup::new(Arc::clone(&catalog));
    let validators = ParameterValidators::new(Arc::new(JsonSchemaEngine));

    let mut total = 0u32;
    let mut failures: Vec<String> = Vec::new();

    for path in catalog.versioned_paths() {
        total += 1;
        let version = lookup.resolve(&path)?;
        let validator = validators.get(&path, &lookup)?;
        match validator.validate(&version.example) {
            Ok(()) => println!("  ✅ {path}"),
            Err(failure) => {
                println!("  ❌ {path}: {failure}");
                failures.push(path);
            }
        }
    }

    println!();
    println!("{}/{} examples valid", total as usize - failures.len(), total);
    if !failures.is_empty() {
        bail!("{} example(s) failed validation", failures.len());
    }
    Ok(())
}
