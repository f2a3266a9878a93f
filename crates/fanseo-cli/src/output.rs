//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use fanseo_core::analysis::model::{AnalysisRecord, AnalysisResponse, Summary};
use unicode_width::UnicodeWidthStr;

/// Print an analysis response as a table followed by details and a summary.
pub fn print_analysis(response: &AnalysisResponse) {
    let league = response
        .league
        .as_deref()
        .map(|l| format!(" ({})", l))
        .unwrap_or_default();
    println!();
    println!(
        "{}{}  {}",
        response.team_name.cyan().bold(),
        league.dimmed(),
        format!("{} keyword(s) submitted", response.total_keywords).dimmed()
    );
    println!();

    if response.analyses.is_empty() {
        println!("{}", "No keywords analyzed.".dimmed());
        return;
    }

    print_records_table(&response.analyses);
    println!();

    for record in &response.analyses {
        print_record_details(record);
    }

    print_summary(&response.summary, response.analyses.len());
}

fn print_records_table(records: &[AnalysisRecord]) {
    // Fixed columns: opp 4, gap 28, rank 10, volume 7, source 6, plus separators
    let keyword_width = term_width().saturating_sub(62).clamp(16, 40);

    println!(
        "{:<4} {} {:<28} {:<10} {:>7} {:<6}",
        "OPP",
        pad_right("KEYWORD", keyword_width),
        "GAP",
        "RANK",
        "VOLUME",
        "SOURCE"
    );
    println!("{}", "─".repeat(keyword_width + 60));

    for record in records {
        let keyword = truncate_visual(&record.keyword, keyword_width);
        println!(
            "{:<4} {} {:<28} {:<10} {:>7} {}",
            opportunity_colored(record.opportunity),
            pad_right(&keyword, keyword_width),
            record.gap_type.as_str(),
            record.team_rank.to_string(),
            record.search_volume,
            source_label(record)
        );
    }
}

fn print_record_details(record: &AnalysisRecord) {
    println!("{}", record.keyword.bold());
    println!(
        "  {}: {} ({})",
        "Content".bold(),
        record.content_suggestion.title,
        record.content_suggestion.format.dimmed()
    );
    println!("  {}: {}", "CTA".bold(), record.content_suggestion.cta);
    if !record.competitors.is_empty() {
        println!("  {}: {}", "Competitors".bold(), record.competitors.join(", "));
    }
    println!("  {}: {}", "LLM".bold(), record.llm_strategy.dimmed());
    println!();
}

fn print_summary(summary: &Summary, total: usize) {
    println!(
        "{} high opportunity, {} total search volume, {}/{} from live data",
        summary.high_opportunity.to_string().green().bold(),
        summary.total_search_volume.to_string().bold(),
        summary.real_data_count,
        total
    );
}

/// Color an opportunity score by band.
fn opportunity_colored(score: u8) -> ColoredString {
    let label = format!("{:<4}", score);
    match score {
        8..=10 => label.green().bold(),
        6..=7 => label.yellow(),
        _ => label.dimmed(),
    }
}

fn source_label(record: &AnalysisRecord) -> ColoredString {
    if record.is_real_data {
        "live".green()
    } else {
        "sim".dimmed()
    }
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
