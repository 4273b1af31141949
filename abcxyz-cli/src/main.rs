use std::collections::BTreeMap;
use std::env;
use std::process;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use abcxyz_pipeline::loader::{load_sales_file, ColumnAliases};
use abcxyz_pipeline::pipeline::run_analysis;
use abcxyz_pipeline::report::write_report_file;
use abcxyz_pipeline::types::ItemSummary;
use abcxyz_pipeline::variability::XyzThresholds;

const DEFAULT_OUTPUT: &str = "abc_xyz_analysis_results.csv";

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RunJson {
    generated_at: String,
    input: String,
    output: String,
    pipeline_ms: u128,
    records: usize,
    items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    thresholds: Option<XyzThresholds>,
    abc_counts: BTreeMap<String, usize>,
    xyz_counts: BTreeMap<String, usize>,
    recommendation_counts: BTreeMap<String, usize>,
    unclassified_volatility: usize,
}

fn tally<F>(summaries: &[ItemSummary], f: F) -> BTreeMap<String, usize>
where
    F: Fn(&ItemSummary) -> Option<String>,
{
    let mut counts = BTreeMap::new();
    for summary in summaries {
        if let Some(key) = f(summary) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

fn print_usage() {
    eprintln!("Usage: abcxyz <sales.csv> [--output FILE] [--alias COLUMN=HEADER] [--json]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --output   Result CSV path (default: {})", DEFAULT_OUTPUT);
    eprintln!("  --alias    Map an input header onto a canonical column");
    eprintln!("             (canonical columns: item_id, period, quantity, revenue)");
    eprintln!("  --json     Print the run summary as JSON instead of formatted text");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  abcxyz fixtures/sales.csv");
    eprintln!("  abcxyz fixtures/sales.csv --alias item_id=sku --output results.csv --json");
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let csv_path = &args[1];

    // Parse optional flags
    let mut output_path = DEFAULT_OUTPUT.to_string();
    let mut json_output = false;
    let mut aliases = ColumnAliases::default();
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                if i + 1 < args.len() {
                    output_path = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --output requires a file path");
                    process::exit(1);
                }
            }
            "--alias" => {
                if i + 1 < args.len() {
                    let pair = &args[i + 1];
                    match pair.split_once('=') {
                        Some((canonical, header)) => {
                            if let Err(e) = aliases.add(canonical.trim(), header.trim()) {
                                eprintln!("Error: invalid --alias '{}': {}", pair, e);
                                process::exit(1);
                            }
                        }
                        None => {
                            eprintln!("Error: --alias requires COLUMN=HEADER, got '{}'", pair);
                            process::exit(1);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --alias requires COLUMN=HEADER");
                    process::exit(1);
                }
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
    }

    let start = Instant::now();
    let records = match load_sales_file(csv_path, &aliases) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error loading CSV: {}", e);
            process::exit(1);
        }
    };
    let record_count = records.len();

    let outcome = match run_analysis(&records) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error running analysis: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_report_file(&output_path, &outcome.summaries) {
        eprintln!("Error writing '{}': {}", output_path, e);
        process::exit(1);
    }
    let pipeline_ms = start.elapsed().as_millis();

    let abc_counts = tally(&outcome.summaries, |s| s.abc_class.map(|c| c.to_string()));
    let xyz_counts = tally(&outcome.summaries, |s| s.xyz_class.map(|c| c.to_string()));
    let recommendation_counts =
        tally(&outcome.summaries, |s| s.recommendation.map(|r| r.to_string()));
    let unclassified = outcome
        .summaries
        .iter()
        .filter(|s| s.xyz_class.is_none())
        .count();

    if json_output {
        let json = RunJson {
            generated_at: Utc::now().to_rfc3339(),
            input: csv_path.clone(),
            output: output_path.clone(),
            pipeline_ms,
            records: record_count,
            items: outcome.summaries.len(),
            thresholds: outcome.thresholds,
            abc_counts,
            xyz_counts,
            recommendation_counts,
            unclassified_volatility: unclassified,
        };
        match serde_json::to_string_pretty(&json) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing summary: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("=== ABC/XYZ Analysis ===");
        println!(
            "{} records, {} items, {} ms",
            record_count,
            outcome.summaries.len(),
            pipeline_ms
        );
        if let Some(t) = outcome.thresholds {
            println!(
                "CV thresholds: X <= {:.2}, Y <= {:.2}, Z <= {:.2}",
                t.threshold_x, t.threshold_y, t.threshold_z
            );
        } else {
            println!("CV thresholds: none (no item has a finite CV)");
        }
        for (label, counts) in [
            ("ABC", &abc_counts),
            ("XYZ", &xyz_counts),
            ("Actions", &recommendation_counts),
        ] {
            let parts: Vec<String> = counts
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            println!("{:<8} {}", label, parts.join("  "));
        }
        if unclassified > 0 {
            println!("{} item(s) carry no volatility class (undefined CV)", unclassified);
        }
        println!("Results written to: {}", output_path);
    }
}
