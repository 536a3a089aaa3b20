use anyhow::Context;
use apidocs_search::cli::Cli;
use apidocs_search::{Corpus, SearchOptions, Searcher, logging, render};
use clap::Parser;
use std::io::{self, BufRead, Write};
use termcolor::{ColorChoice, StandardStream, WriteColor};

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut options = SearchOptions::load(cli.config.as_deref())
        .inspect_err(|e| tracing::warn!("Unusable config file: {}", e))?;
    if let Some(limit) = cli.limit {
        options = options.with_limit(limit);
    }
    if let Some(threshold) = cli.threshold {
        options = options.with_threshold(threshold);
    }
    tracing::debug!("Search options: {:?}", options);

    let corpus = Corpus::load(&cli.corpus)
        .with_context(|| format!("Failed to load corpus from {}", cli.corpus.display()))?;
    let searcher = Searcher::new(&corpus, options);

    let choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let mut out = StandardStream::stdout(choice);

    match cli.query {
        Some(query) => run_query(&searcher, &query, &mut out)?,
        None => interactive(&searcher, &mut out)?,
    }
    Ok(())
}

fn run_query<W: WriteColor>(searcher: &Searcher<'_>, query: &str, out: &mut W) -> io::Result<()> {
    if let Some(hint) = render::typing_hint(query, searcher.options().min_query_len) {
        return writeln!(out, "{}", hint);
    }

    let hits = searcher.search(query);
    if hits.is_empty() {
        render::write_no_results(out, query, &searcher.suggest(query))
    } else {
        render::write_hits(out, &hits)
    }
}

/// Read queries line by line until EOF.
fn interactive<W: WriteColor>(searcher: &Searcher<'_>, out: &mut W) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "Query: ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;
        run_query(searcher, line.trim_end_matches(['\r', '\n']), out)?;
    }
}
