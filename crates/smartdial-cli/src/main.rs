//! smartdial-cli: Command-line interface for smartdial-core
//!
//! Usage examples
//! --------------
//!
//! - Keypad tokens and index prefixes of a name
//!   $ smartdial tokens "Mary-Ann O'Neil"
//!   $ smartdial prefixes "Albert Ben Ed Foster"
//!
//! - Calling code and NANP area code of a number
//!   $ smartdial --country US number "+1 (555) 123-4567"
//!
//! - Match a query against a name and a number
//!   $ smartdial match 5646 --name "John Smith" --number "555-0199"
//!
//! - Search a contact list
//!   $ smartdial search 57 --contacts contacts.json.gz
//!
//! The process-wide region is taken from `--country`; without it NANP
//! handling is off unless `--nanp` is given.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use serde::Serialize;
use smartdial_core::{
    init_region, load_contacts, name_prefixes, name_tokens, number_prefixes, parse_phone_number,
    search_contacts, LatinDialpadMap, MatchPosition, MatcherConfig, PhoneNumberTokens,
    RegionSettings, SmartDialMatcher,
};

#[derive(Serialize)]
struct NumberReport<'a> {
    number: &'a str,
    tokens: PhoneNumberTokens,
    prefixes: Vec<String>,
}

#[derive(Serialize)]
struct MatchReport<'a> {
    query: &'a str,
    name: Option<NameReport<'a>>,
    number: Option<NumberMatchReport<'a>>,
}

#[derive(Serialize)]
struct NameReport<'a> {
    name: &'a str,
    matched: bool,
    positions: &'a [MatchPosition],
    mask: &'a str,
}

#[derive(Serialize)]
struct NumberMatchReport<'a> {
    number: &'a str,
    position: Option<MatchPosition>,
    mask: &'a str,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let mut region = RegionSettings::detect(args.country.as_deref(), None);
    if args.nanp {
        region = region.with_nanp(true);
    }
    init_region(region.clone())?;

    let config = match &args.config {
        Some(path) => MatcherConfig::load_from_path(path)?,
        None => MatcherConfig::default(),
    };
    log::debug!("region={region:?} config={config:?}");

    let map = LatinDialpadMap;

    match args.command {
        Commands::Tokens { name } => {
            let tokens = name_tokens(&map, &name);
            if args.json {
                print_json(&tokens)?;
            } else {
                println!("{}", tokens.join(" "));
            }
        }

        Commands::Prefixes { name } => {
            let prefixes = name_prefixes(&map, &config, &name);
            if args.json {
                print_json(&prefixes)?;
            } else {
                for prefix in prefixes {
                    println!("{prefix}");
                }
            }
        }

        Commands::Number { number } => {
            let report = NumberReport {
                number: &number,
                tokens: parse_phone_number(&map, &region, &number),
                prefixes: number_prefixes(&map, &region, &number),
            };
            if args.json {
                print_json(&report)?;
            } else {
                let tokens = &report.tokens;
                if tokens.has_country_code() {
                    println!("Country code: +{} (offset {})", tokens.country_code, tokens.country_code_offset);
                } else {
                    println!("Country code: none");
                }
                if tokens.nanp_code_offset != 0 {
                    println!("NANP area code ends at: {}", tokens.nanp_code_offset);
                }
                println!("Prefixes: {}", report.prefixes.join(", "));
            }
        }

        Commands::Match { query, name, number } => {
            if name.is_none() && number.is_none() {
                anyhow::bail!("nothing to match: pass --name and/or --number");
            }
            let mut matcher = SmartDialMatcher::new(&query).with_config(config);
            let name_matched = name.as_deref().map(|n| matcher.matches(n));
            let number_position = number.as_deref().and_then(|n| matcher.matches_number(n));

            let report = MatchReport {
                query: matcher.query(),
                name: name.as_deref().zip(name_matched).map(|(name, matched)| NameReport {
                    name,
                    matched,
                    positions: matcher.match_positions(),
                    mask: matcher.name_match_mask(),
                }),
                number: number.as_deref().map(|number| NumberMatchReport {
                    number,
                    position: number_position,
                    mask: matcher.number_match_mask(),
                }),
            };
            if args.json {
                print_json(&report)?;
            } else {
                if let Some(name) = &report.name {
                    println!("Name:   {}", name.name);
                    println!("        {}  {:?}", name.mask, name.positions);
                }
                if let Some(number) = &report.number {
                    println!("Number: {}", number.number);
                    match number.position {
                        Some(pos) => println!("        {}  {pos:?}", number.mask),
                        None => println!("        no match"),
                    }
                }
            }
        }

        Commands::Search {
            query,
            contacts,
            limit,
        } => {
            let contacts = load_contacts(&contacts)?;
            let (hits, stats) = search_contacts(&contacts, &query, config, &region);
            let shown = &hits[..limit.unwrap_or(hits.len()).min(hits.len())];
            if args.json {
                print_json(&shown)?;
            } else if shown.is_empty() {
                println!("No contacts found matching: {query}");
            } else {
                for hit in shown {
                    let number = hit.contact.number.as_deref().unwrap_or("-");
                    println!("{}  {}", hit.contact.name, number);
                    if hit.matched_name() {
                        println!("{}", hit.name_mask);
                    } else if let Some(mask) = &hit.number_mask {
                        println!("{:width$}  {mask}", "", width = hit.contact.name.chars().count());
                    }
                }
                println!(
                    "{} of {} contacts matched ({} by name, {} by number)",
                    hits.len(),
                    stats.scanned,
                    stats.name_matches,
                    stats.number_matches
                );
            }
        }
    }

    Ok(())
}
