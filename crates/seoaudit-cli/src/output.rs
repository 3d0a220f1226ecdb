//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use seoaudit_core::{AnalysisResult, PageSignals};
use unicode_width::UnicodeWidthStr;

/// Widest keyword column before truncation.
const KEYWORD_COLUMN_MAX: usize = 24;

/// Recommended title length range, in characters.
const TITLE_RANGE: (usize, usize) = (30, 60);

/// Recommended meta description length range, in characters.
const META_DESCRIPTION_RANGE: (usize, usize) = (70, 160);

/// Print a keyword density table with a bar per keyword.
pub fn print_density(url: &str, result: &AnalysisResult) {
    println!("{} {}", "Keyword Density".bold(), url.dimmed());
    println!("{}", "─".repeat(60));

    if result.keyword_density.is_empty() {
        println!("{}", "No keywords found.".dimmed());
        println!("  {} total words", result.total_words.to_string().bold());
        return;
    }

    let keyword_width = result
        .keyword_density
        .iter()
        .map(|e| UnicodeWidthStr::width(e.keyword.as_str()))
        .max()
        .unwrap_or(0)
        .min(KEYWORD_COLUMN_MAX);

    // "  NN. " + keyword + "  count  density% "
    let fixed = 6 + keyword_width + 18;
    let bar_room = term_width().saturating_sub(fixed).max(10);
    let top_density = result.keyword_density[0].density;

    for (i, entry) in result.keyword_density.iter().enumerate() {
        let keyword = pad_right(&truncate_visual(&entry.keyword, keyword_width), keyword_width);
        let bar = "█".repeat(bar_len(entry.density, top_density, bar_room));
        println!(
            "  {:>2}. {}  {:>5}  {:>6.2}% {}",
            i + 1,
            keyword.cyan(),
            entry.count,
            entry.density,
            bar.green()
        );
    }

    println!("{}", "─".repeat(60));
    println!(
        "  {} total words, {} keywords shown",
        result.total_words.to_string().bold(),
        result.keyword_density.len()
    );
}

/// Print title, meta description and headings.
pub fn print_signals(signals: &PageSignals) {
    println!("{} {}", "Page Signals".bold(), signals.url.dimmed());
    println!("{}", "─".repeat(60));

    println!(
        "{}: {} {}",
        "Title".bold(),
        signals.title.as_deref().unwrap_or("(missing)"),
        length_badge(signals.title_length, TITLE_RANGE)
    );
    println!(
        "{}: {} {}",
        "Meta description".bold(),
        signals.meta_description.as_deref().unwrap_or("(missing)"),
        length_badge(signals.meta_description_length, META_DESCRIPTION_RANGE)
    );
    println!("{}: {}", "Words".bold(), signals.total_words);

    for (label, headings) in [
        ("H1", &signals.headings.h1),
        ("H2", &signals.headings.h2),
        ("H3", &signals.headings.h3),
    ] {
        println!();
        println!("{} ({})", label.bold(), headings.len());
        if headings.is_empty() {
            println!("  {}", "none".dimmed());
        }
        for heading in headings {
            println!("  - {}", heading);
        }
    }

    if signals.headings.h1.len() != 1 {
        println!();
        println!(
            "{} expected exactly one H1, found {}",
            "!".yellow().bold(),
            signals.headings.h1.len()
        );
    }
}

/// Colored `[len chars]` marker; green inside the range, yellow outside,
/// red when absent.
fn length_badge(len: usize, (min, max): (usize, usize)) -> ColoredString {
    let text = format!("[{} chars]", len);
    if len == 0 {
        text.red()
    } else if (min..=max).contains(&len) {
        text.green()
    } else {
        text.yellow()
    }
}

/// Bar length scaled so the top keyword fills `room`.
fn bar_len(density: f64, top_density: f64, room: usize) -> usize {
    if top_density <= 0.0 {
        return 0;
    }
    ((density / top_density) * room as f64).round().max(1.0) as usize
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}
