//! Terminal rendering of ranked hits.
//!
//! Each hit becomes a block of header lines highlighted in its category's
//! color, followed by the description and a blank line.

use crate::search::{Category, RankedHit, Suggestion};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, NoColor, WriteColor};

fn category_color(category: Category) -> Color {
    match category {
        Category::Module => Color::Cyan,
        Category::Event => Color::Yellow,
        Category::Method => Color::Green,
        Category::Property => Color::Blue,
    }
}

fn header_label(category: Category) -> &'static str {
    match category {
        Category::Module => "Module",
        Category::Event => "Event",
        Category::Method => "Method",
        Category::Property => "Property",
    }
}

/// Write one highlighted header line, resetting before the newline so the
/// background does not bleed across the terminal width.
fn write_header<W: WriteColor>(out: &mut W, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)
}

/// Render `hits` as colored blocks.
pub fn write_hits<W: WriteColor>(out: &mut W, hits: &[RankedHit<'_>]) -> io::Result<()> {
    for ranked in hits {
        let hit = &ranked.hit;
        let category = hit.category();

        let mut spec = ColorSpec::new();
        spec.set_bg(Some(category_color(category)))
            .set_fg(Some(Color::Black));

        match hit.kind() {
            Some(kind) => {
                write_header(out, &spec, &format!("Type: {}", kind))?;
                write_header(out, &spec, &format!("Module Name: {}", hit.name()))?;
            }
            None => {
                write_header(out, &spec, &format!("Type: {}", header_label(category)))?;
                write_header(out, &spec, &format!("Module: {}", hit.module().name))?;
                write_header(out, &spec, &format!("Name: {}", hit.name()))?;
                if let Some(description) = hit.description() {
                    writeln!(out, "{}", description)?;
                }
            }
        }

        tracing::trace!("Rendered {} (score {:.4})", hit.identity_key(), ranked.score);
        writeln!(out)?;
    }
    Ok(())
}

/// Render `hits` without any color codes.
pub fn render_plain(hits: &[RankedHit<'_>]) -> String {
    let mut out = NoColor::new(Vec::new());
    write_hits(&mut out, hits).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

/// Write the "no results" notice, with module suggestions if there are any.
pub fn write_no_results<W: Write>(
    out: &mut W,
    query: &str,
    suggestions: &[Suggestion<'_>],
) -> io::Result<()> {
    writeln!(out, "No results found for '{}'.", query)?;
    if !suggestions.is_empty() {
        writeln!(out, "\nDid you mean one of these modules?\n")?;
        for suggestion in suggestions {
            writeln!(
                out,
                "• {} ({})",
                suggestion.module.name, suggestion.module.kind
            )?;
        }
    }
    Ok(())
}

/// The hint shown instead of results while a query is still too short, or
/// `None` once the query is long enough to search.
pub fn typing_hint(query: &str, min_query_len: usize) -> Option<&'static str> {
    if query.chars().count() >= min_query_len && !query.is_empty() {
        None
    } else if query.is_empty() {
        Some("Start typing for results to appear...")
    } else {
        Some("Keep typing for results to appear...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchOptions;
    use crate::corpus::{
        ConstructorMethod, Corpus, EventRecord, MethodRecord, ModuleKind, ModuleRecord,
    };
    use crate::search::Searcher;
    use assert2::check;
    use rstest::rstest;

    fn corpus() -> Corpus {
        let mut window = ModuleRecord::new("BrowserWindow", ModuleKind::Class);
        window.instance_methods = vec![MethodRecord {
            name: "loadURL".to_string(),
            signature: "(url[, options])".to_string(),
            description: "Loads the given URL.\n".to_string(),
            parameters: Vec::new(),
        }];
        window.constructor_method = Some(ConstructorMethod::default());
        window.instance_events = vec![EventRecord {
            name: "closed".to_string(),
            description: "Emitted when the window is closed.".to_string(),
            parameters: Vec::new(),
        }];
        Corpus::from_modules(vec![window]).unwrap()
    }

    #[test]
    fn test_render_method_block() {
        let corpus = corpus();
        let searcher = Searcher::new(&corpus, SearchOptions::default());
        let output = render_plain(&searcher.search("loadurl"));
        check!(
            output
                == "Type: Method\n\
                    Module: BrowserWindow\n\
                    Name: loadURL\n\
                    Loads the given URL.\n\
                    \n"
        );
    }

    #[test]
    fn test_render_module_block() {
        let corpus = corpus();
        let searcher = Searcher::new(&corpus, SearchOptions::default());
        let output = render_plain(&searcher.search("BrowserWindow"));
        check!(output.starts_with("Type: Class\nModule Name: BrowserWindow\n\n"));
    }

    #[test]
    fn test_colored_output_contains_escape_codes() {
        let corpus = corpus();
        let searcher = Searcher::new(&corpus, SearchOptions::default());
        let mut out = termcolor::Ansi::new(Vec::new());
        write_hits(&mut out, &searcher.search("closed")).unwrap();
        let output = String::from_utf8(out.into_inner()).unwrap();
        check!(output.contains("\x1b["));
        check!(output.contains("Name: closed"));
    }

    #[test]
    fn test_no_results_with_suggestions() {
        let corpus = corpus();
        let suggestions = crate::search::suggest_modules(&corpus, "browserwindw");
        let mut out = Vec::new();
        write_no_results(&mut out, "browserwindw", &suggestions).unwrap();
        let output = String::from_utf8(out).unwrap();
        check!(output.starts_with("No results found for 'browserwindw'."));
        check!(output.contains("• BrowserWindow (Class)"));
    }

    #[rstest]
    #[case("", Some("Start typing for results to appear..."))]
    #[case("a", Some("Keep typing for results to appear..."))]
    #[case("ab", Some("Keep typing for results to appear..."))]
    #[case("abc", None)]
    fn test_typing_hint(#[case] query: &str, #[case] expected: Option<&str>) {
        check!(typing_hint(query, 3) == expected);
    }
}
