//! Command implementations for the Vitrine CLI.

use std::fs;

use serde::Serialize;

use crate::analysis::Query;
use crate::cli::args::{Command, OutputFormat, SearchArgs, VitrineArgs};
use crate::error::Result;
use crate::product::{products_from_json, Product};
use crate::search::{apply_facets, filter_by_relevance, sort, FacetResults, FacetSelection};

/// Execute a CLI command.
pub fn execute_command(args: VitrineArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
    }
}

/// Everything one search run produces, in JSON-output shape.
#[derive(Debug, Serialize)]
struct SearchOutput {
    query: String,
    total: usize,
    products: Vec<Product>,
    results: FacetResults,
}

/// Load a dataset, run the relevance + facet pipeline, print the results.
fn run_search(args: SearchArgs, cli_args: &VitrineArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading products from: {}", args.data.display());
    }

    let payload = fs::read_to_string(&args.data)?;
    let products = products_from_json(&payload)?;
    let sort_mode = args.sort.parse()?;

    let query = Query::parse(&args.query);
    let working_set = filter_by_relevance(&products, &query);

    let selection = FacetSelection::new()
        .with_stores(&args.stores)
        .with_brands(&args.brands)
        .with_price_ranges(&args.prices);
    let results = apply_facets(&working_set, &selection);
    let ordered = sort(&results.products, sort_mode);

    let output = SearchOutput {
        query: args.query.clone(),
        total: ordered.len(),
        products: ordered.into_iter().take(args.limit).collect(),
        results: FacetResults {
            products: Vec::new(), // already in `products`, sorted
            ..results
        },
    };

    match cli_args.output_format {
        OutputFormat::Json => print_json(&output, cli_args.pretty)?,
        OutputFormat::Human => print_human(&output, cli_args),
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn print_human(output: &SearchOutput, cli_args: &VitrineArgs) {
    if cli_args.verbosity() == 0 {
        for product in &output.products {
            println!("{}", product.name);
        }
        return;
    }

    println!(
        "{} relevant offers for \"{}\" ({} shown)",
        output.total,
        output.query,
        output.products.len()
    );
    for product in &output.products {
        let price = product
            .price_formatted
            .clone()
            .or_else(|| product.price.map(|p| format!("R$ {p:.2}")))
            .unwrap_or_else(|| "price unavailable".to_string());
        println!("  {:<12} {}  [{}]", product.store, product.name, price);
    }

    println!("\nStores:");
    for facet in &output.results.stores {
        println!("  {:<20} ({})", facet.key, facet.count);
    }
    println!("Brands:");
    for facet in &output.results.brands {
        println!("  {:<20} ({})", facet.key, facet.count);
    }
    println!("Price ranges:");
    for bucket in &output.results.price_ranges {
        println!(
            "  {:<20} ({})  [{}]",
            bucket.range.label,
            bucket.count,
            bucket.range.key()
        );
    }
}
