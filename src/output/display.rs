//! Display functions for command results

use super::formatters::{example_words, percent, size_bar};
use crate::commands::{CombineResult, PremiumResult};
use colored::Colorize;
use std::path::Path;

const TIER_EXAMPLES: usize = 10;
const PREMIUM_EXAMPLES: usize = 15;

/// Warn on stderr that an optional source file is absent
pub fn print_missing_source(path: &Path) {
    eprintln!(
        "{} {} not found",
        "Warning:".yellow().bold(),
        path.display()
    );
}

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn print_written(paths: &[impl AsRef<Path>], sizes: &[usize]) {
    println!("\n💾 {}", "Written:".bright_cyan().bold());
    for (path, size) in paths.iter().zip(sizes) {
        println!("   {} ({size} words)", path.as_ref().display());
    }
}

/// Print the summary of a combine run
pub fn print_combine_result(result: &CombineResult) {
    print_header("PRIORITY MERGE");

    println!("\n📚 {}", "Sources:".bright_cyan().bold());
    for report in &result.sources {
        let label = format!("{:<20}", report.source.label());
        if report.found {
            println!(
                "   {label} [{:>3}] loaded {:>6}, new {:>6}",
                report.source.priority(),
                report.loaded(),
                format!("{}", report.stats.added).green()
            );
        } else {
            println!(
                "   {label} [{:>3}] {}",
                report.source.priority(),
                "missing".yellow()
            );
        }
    }

    println!(
        "\n   Total unique words: {}",
        format!("{}", result.total_unique).bright_yellow().bold()
    );

    println!("\n📈 {}", "Tiers:".bright_cyan().bold());
    let largest = result.tiers.iter().map(|t| t.len()).max().unwrap_or(0);
    for list in &result.tiers {
        println!(
            "   {:<5} (score ≥{:>3}): {} {:>6} ({:5.1}%)",
            list.tier.name,
            list.tier.min_score,
            size_bar(list.len(), largest, 30).green(),
            list.len(),
            percent(list.len(), result.total_unique)
        );
    }

    for list in result.tiers.iter().filter(|t| !t.is_empty()) {
        println!(
            "\n   {} examples: {}",
            list.tier.name.bright_yellow(),
            example_words(&list.words, TIER_EXAMPLES)
        );
    }

    let sizes: Vec<usize> = result.tiers.iter().map(|t| t.len()).collect();
    print_written(&result.written, &sizes);
}

/// Print the summary of a premium run
pub fn print_premium_result(result: &PremiumResult) {
    print_header("PREMIUM LISTS");

    println!("\n📚 {}", "Sources:".bright_cyan().bold());
    for count in &result.sources {
        let label = format!("{:<20}", count.source.label());
        if count.found {
            println!("   {label} {:>6}", count.words);
        } else {
            println!("   {label} {}", "missing".yellow());
        }
    }

    let overlaps = &result.overlaps;
    println!("\n🔗 {}", "Overlaps:".bright_cyan().bold());
    println!("   Wordle + Google:     {:>6}", overlaps.top1_top2.len());
    println!("   Wordle + Stanford:   {:>6}", overlaps.top1_third.len());
    println!("   Google + Stanford:   {:>6}", overlaps.top2_third.len());
    println!(
        "   All three sources:   {:>6}",
        format!("{}", overlaps.all_three.len()).green()
    );

    println!("\n⭐ {}", "Lists:".bright_cyan().bold());
    println!(
        "   Premium: {} words",
        format!("{}", result.premium.len()).bright_yellow().bold()
    );
    println!(
        "   Daily:   {} words (cap {})",
        format!("{}", result.daily.len()).bright_yellow().bold(),
        result.daily_cap
    );

    if !result.premium.is_empty() {
        println!(
            "\n   premium examples: {}",
            example_words(&result.premium, PREMIUM_EXAMPLES)
        );
    }
    if !result.daily.is_empty() {
        println!(
            "   daily examples:   {}",
            example_words(&result.daily, PREMIUM_EXAMPLES)
        );
    }

    print_written(&result.written, &[result.premium.len(), result.daily.len()]);
}
