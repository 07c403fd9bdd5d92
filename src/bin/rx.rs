// rx-decoder CLI
// Command-line front end for the shorthand search engine

use clap::{Parser, Subcommand};
use rx_decoder::{
    AnalyticsStore, Category, HistoryStore, RxSearch, SearchOptions, SearchResult, REFERENCES,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Prescription shorthand decoder
#[derive(Parser)]
#[command(name = "rx")]
#[command(about = "Decode prescription shorthand codes into plain English", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search codes with ranked exact/partial/fuzzy matching
    Search(SearchArgs),
    /// As-you-type suggestions for a partial code
    Suggest(SuggestArgs),
    /// Decode a phrase of codes into one sentence
    Decode(DecodeArgs),
    /// List the full table grouped by category
    List(ListArgs),
    /// Show the sources the table was compiled from
    Refs,
    /// Show or clear recent searches
    History(HistoryArgs),
    /// Show or clear search analytics
    Stats(StatsArgs),
}

/// Search arguments
#[derive(Parser)]
struct SearchArgs {
    /// Query text; multi-code queries like "i po" match per token
    query: String,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Minimum similarity for fuzzy hits
    #[arg(long, default_value = "0.3")]
    min_score: f32,

    /// Disable edit-distance matching
    #[arg(long)]
    no_fuzzy: bool,

    /// Disable substring matching of the full query
    #[arg(long)]
    no_partial: bool,

    /// Show scores with each result
    #[arg(short, long)]
    scores: bool,
}

/// Suggest arguments
#[derive(Parser)]
struct SuggestArgs {
    /// Partial code being typed
    query: String,

    /// Maximum number of suggestions
    #[arg(short, long, default_value = "5")]
    limit: usize,
}

/// Decode arguments
#[derive(Parser)]
struct DecodeArgs {
    /// Codes to decode, e.g. "po bid prn"
    #[arg(required = true)]
    phrase: Vec<String>,
}

/// List arguments
#[derive(Parser)]
struct ListArgs {
    /// Only show one category (roman, frequency, route, form, unit,
    /// latin, misc, error-prone)
    #[arg(short, long)]
    category: Option<Category>,

    /// Only show entries whose code or meaning contains this text
    #[arg(short, long)]
    filter: Option<String>,
}

/// History arguments
#[derive(Parser)]
struct HistoryArgs {
    /// Forget all recent searches
    #[arg(long)]
    clear: bool,
}

/// Stats arguments
#[derive(Parser)]
struct StatsArgs {
    /// Drop all recorded analytics
    #[arg(long)]
    clear: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let engine = RxSearch::new();

    match cli.command {
        Commands::Search(args) => run_search(&engine, args),
        Commands::Suggest(args) => run_suggest(&engine, args),
        Commands::Decode(args) => run_decode(&engine, args),
        Commands::List(args) => run_list(&engine, args),
        Commands::Refs => run_refs(),
        Commands::History(args) => run_history(args),
        Commands::Stats(args) => run_stats(args),
    }
}

fn run_search(engine: &RxSearch, args: SearchArgs) {
    let options = SearchOptions {
        fuzzy: !args.no_fuzzy,
        max_results: args.limit,
        min_score: args.min_score,
        include_partial: !args.no_partial,
    };

    let results = if args.query.trim().is_empty() {
        Vec::new()
    } else {
        engine.search_records(&args.query, &options)
    };

    track_search(engine, &args.query, &results);

    if results.is_empty() {
        println!("❌ No matches for \"{}\".", args.query);
        return;
    }

    println!("✅ Found {} matches:\n", results.len());
    for (idx, result) in results.iter().enumerate() {
        println!("{}. {:<8} → {}", idx + 1, result.code, result.meaning);
        if args.scores {
            let percent = (result.score * 100.0) as i32;
            println!(
                "      Score: {}% {} ({})",
                percent,
                score_bar(result.score),
                result.match_type
            );
        }
    }
}

fn run_suggest(engine: &RxSearch, args: SuggestArgs) {
    let mut suggestions = engine.suggestions(&args.query);
    suggestions.truncate(args.limit);

    if suggestions.is_empty() {
        println!("No suggestions.");
        return;
    }

    for suggestion in &suggestions {
        println!("{:<8} {}", suggestion.code, suggestion.meaning);
    }
}

fn run_decode(engine: &RxSearch, args: DecodeArgs) {
    let phrase = args.phrase.join(" ");

    let Some(decoded) = engine.decode_phrase(&phrase) else {
        println!("❌ Abbreviation not found.");
        let mut suggestions = engine.suggestions(&phrase);
        suggestions.truncate(3);
        if !suggestions.is_empty() {
            println!("\nDid you mean:");
            for suggestion in &suggestions {
                println!("  {:<8} {}", suggestion.code, suggestion.meaning);
            }
        }
        track_search(engine, &phrase, &[]);
        return;
    };

    for record in &decoded.records {
        let marker = if record.category == Category::ErrorProne {
            " ⚠ error-prone"
        } else {
            ""
        };
        println!("{:<8} → {}{}", record.code, record.meaning, marker);
    }
    println!("\n💊 {}", decoded.sentence);

    let first_code = decoded.records[0].code.clone();
    let related = engine.related(&first_code, 3);

    // single known code: show its neighborhood like the decode page did
    if decoded.records.len() == 1 {
        if !related.is_empty() {
            println!("\nRelated abbreviations:");
            for result in &related {
                println!("  {:<8} {}", result.code, result.meaning);
            }
        }
        let combos = engine.combinations(&first_code);
        if !combos.is_empty() {
            println!("\nCommon combinations: {}", combos.join(", "));
        }
    }

    record_history(&phrase);
    let parts: Vec<String> = decoded.records.iter().map(|r| r.code.clone()).collect();
    let related_codes: Vec<String> = related.into_iter().map(|r| r.code).collect();
    track_analytics(&phrase, true, parts, related_codes);
}

fn run_list(engine: &RxSearch, args: ListArgs) {
    if let Some(filter) = &args.filter {
        let hits = engine.dictionary().matching(filter);
        if hits.is_empty() {
            println!("No entries match \"{}\".", filter);
            return;
        }
        for record in hits {
            if args.category.is_some() && args.category != Some(record.category) {
                continue;
            }
            println!("{}{:<8} {}", marker(record.category), record.code, record.meaning);
        }
        return;
    }

    let categories: Vec<Category> = match args.category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        let records = engine.dictionary().by_category(category);
        println!("── {} ──", category.label());
        for record in records {
            println!("{}{:<8} {}", marker(category), record.code, record.meaning);
        }
        println!();
    }
}

/// Listing marker; error-prone entries get flagged
fn marker(category: Category) -> &'static str {
    if category == Category::ErrorProne {
        "⚠ "
    } else {
        "  "
    }
}

fn run_refs() {
    println!("Sources:\n");
    for reference in REFERENCES {
        println!("• {}", reference.name);
        println!("  {}", reference.url);
        println!("  {}\n", reference.citation);
    }
}

fn run_history(args: HistoryArgs) {
    let store = match HistoryStore::open() {
        Ok(store) => store,
        Err(err) => {
            warn!(error = %err, "history unavailable");
            return;
        }
    };

    if args.clear {
        if let Err(err) = store.clear() {
            warn!(error = %err, "failed to clear history");
        } else {
            println!("History cleared.");
        }
        return;
    }

    let entries = store.entries();
    if entries.is_empty() {
        println!("No recent searches.");
        return;
    }

    println!("Recent searches:");
    for (idx, entry) in entries.iter().enumerate() {
        println!("{}. {}", idx + 1, entry.query);
    }
}

fn run_stats(args: StatsArgs) {
    let store = match AnalyticsStore::open() {
        Ok(store) => store,
        Err(err) => {
            warn!(error = %err, "analytics unavailable");
            return;
        }
    };

    if args.clear {
        if let Err(err) = store.clear() {
            warn!(error = %err, "failed to clear analytics");
        } else {
            println!("Analytics cleared.");
        }
        return;
    }

    let stats = store.stats();
    println!("📊 Search Statistics");
    println!("─────────────────────");
    println!("  Total searches:  {}", stats.total_searches);
    println!("  Successful:      {}", stats.successful_searches);
    println!("  Success rate:    {:.1}%", stats.success_rate);
    println!("  Avg parts:       {:.2}", stats.average_parts);
    println!("  Unique queries:  {}", stats.unique_queries);

    if !stats.popular.is_empty() {
        println!("\n  Popular:");
        for entry in &stats.popular {
            println!(
                "    {:<12} ×{} ({:.0}% hit)",
                entry.query,
                entry.count,
                entry.success_rate * 100.0
            );
        }
    }
}

/// Record a search outcome in the analytics store
fn track_search(engine: &RxSearch, query: &str, results: &[SearchResult]) {
    let success = !results.is_empty();
    let parts = results
        .first()
        .map(|r| r.matched_parts.clone())
        .unwrap_or_default();
    let related = results
        .first()
        .map(|r| {
            engine
                .related(&r.code, 3)
                .into_iter()
                .map(|res| res.code)
                .collect()
        })
        .unwrap_or_default();
    track_analytics(query, success, parts, related);
}

/// Store failures degrade to warnings; results were already printed
fn track_analytics(query: &str, success: bool, parts: Vec<String>, related: Vec<String>) {
    match AnalyticsStore::open() {
        Ok(store) => {
            if let Err(err) = store.track(query, success, parts, related) {
                warn!(error = %err, "failed to record analytics");
            }
        }
        Err(err) => warn!(error = %err, "analytics unavailable"),
    }
}

fn record_history(query: &str) {
    match HistoryStore::open() {
        Ok(store) => {
            if let Err(err) = store.record(query) {
                warn!(error = %err, "failed to record history");
            }
        }
        Err(err) => warn!(error = %err, "history unavailable"),
    }
}

/// Generate a visual score bar
fn score_bar(score: f32) -> String {
    let bar_len = 10;
    let filled = (score.clamp(0.0, 1.0) * bar_len as f32) as usize;
    let mut bar = String::from("[");
    for i in 0..bar_len {
        if i < filled {
            bar.push('█');
        } else {
            bar.push('░');
        }
    }
    bar.push(']');
    bar
}
