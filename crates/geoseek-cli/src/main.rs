//! geoseek-cli — Command-line interface for geoseek-core
//!
//! This binary provides a simple way to run fuzzy location searches against
//! a countries/states/cities dataset from your terminal. It supports
//! printing index statistics, running full queries with the filter grammar,
//! looking up a specific country, and listing the recognized filters.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ geoseek -i data.json stats
//!
//! - Fuzzy search with filters
//!   $ geoseek -i data.json search "paris"
//!   $ geoseek -i data.json search 'georgia type:state' -n 5
//!   $ geoseek -i data.json search 'in:"united states" type:city' --json
//!
//! - Show details for a country by code or name (case-insensitive)
//!   $ geoseek -i data.json country us
//!   $ geoseek -i data.json country germany
//!
//! - List the filter grammar
//!   $ geoseek filters
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use geoseek_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // The filter listing needs no dataset.
    if let Commands::Filters = args.command {
        for key in FilterKey::ALL {
            println!("{:<10} {}", format!("{}:", key.as_str()), key.help());
        }
        return Ok(());
    }

    let index = DefaultIndex::load_from_path(&args.input)?;

    match args.command {
        Commands::Stats => {
            let stats = index.stats();
            println!("Index statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  States/Regions: {}", stats.states);
            println!("  Cities: {}", stats.cities);
            println!("  Records: {}", index.len());
        }

        Commands::Search {
            query,
            max_results,
            json,
        } => {
            if json {
                let results = search(&index, &query, max_results);
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            let parsed = Query::parse(query.trim());
            let hits = rank(&index, &parsed, max_results);
            if hits.is_empty() {
                println!("No results for: {query}");
                return Ok(());
            }
            for (i, hit) in hits.iter().enumerate() {
                let place = match (hit.record.state_name(), hit.record.country_name()) {
                    (Some(state), Some(country)) => {
                        format!("{} — {}, {}", hit.record.name(), state, country)
                    }
                    (None, Some(country)) => format!("{} — {}", hit.record.name(), country),
                    _ => hit.record.name().to_string(),
                };
                println!(
                    "{:>3}. [{}] {} (score {:.1}{})",
                    i + 1,
                    hit.record.kind(),
                    place,
                    hit.score,
                    if hit.is_exact { ", exact" } else { "" }
                );
            }
        }

        Commands::Country { code } => {
            let found = index
                .find_country_by_code(&code)
                .or_else(|| index.find_country_by_name(&code));
            match found {
                Some(c) => {
                    println!("Country: {}", c.name());
                    println!("ISO2: {}", c.meta.iso2.as_deref().unwrap_or("-"));
                    println!("ISO3: {}", c.meta.iso3.as_deref().unwrap_or("-"));
                    println!("Region: {}", c.meta.region.as_deref().unwrap_or("-"));
                    println!("Currency: {}", c.meta.currency.as_deref().unwrap_or("-"));
                    println!(
                        "Phone Code: {}",
                        c.meta.phone_code.as_deref().unwrap_or("-")
                    );
                }
                None => {
                    eprintln!("No country found for: {code}");
                }
            }
        }

        Commands::Filters => unreachable!("handled above"),
    }

    Ok(())
}
