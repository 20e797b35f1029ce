//! Coverage audit over the statute registries.
//!
//! Walks every citation pattern's sample code through both registries and
//! prints the derived citation and reading link per jurisdiction. Exits
//! non-zero when a jurisdiction that has a URL strategy cannot build a link
//! for its own sample code, which is the regression this tool exists to
//! catch after registry edits.

use std::process::ExitCode;

use guidance::statutes::{citation_patterns, generate_citation, resolve_url, url_strategies};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    tracing::info!("statute link audit v{}", env!("CARGO_PKG_VERSION"));

    let mut rows: Vec<_> = citation_patterns()
        .iter()
        .map(|(jurisdiction, pattern)| (*jurisdiction, pattern))
        .collect();
    rows.sort_by_key(|(jurisdiction, _)| *jurisdiction);

    let mut failures = 0usize;
    let mut without_strategy = 0usize;

    println!("{:<4} {:<14} {:<44} link", "", "sample", "citation");
    for (jurisdiction, pattern) in &rows {
        let sample = pattern.sample_code;
        let citation = generate_citation(jurisdiction, sample);
        let url = resolve_url(jurisdiction, sample);
        let has_strategy = url_strategies().contains_key(jurisdiction);

        if citation.is_none() || (has_strategy && url.is_none()) {
            failures += 1;
        }
        if !has_strategy {
            without_strategy += 1;
        }

        let link = match (&url, has_strategy) {
            (Some(url), _) => url.as_str(),
            (None, true) => "(FAILED)",
            (None, false) => "(no strategy)",
        };
        println!(
            "{:<4} {:<14} {:<44} {}",
            jurisdiction,
            sample,
            citation.as_deref().unwrap_or("(FAILED)"),
            link
        );
    }

    println!();
    println!(
        "{} jurisdictions, {} without a url strategy, {} failures",
        rows.len(),
        without_strategy,
        failures
    );

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
