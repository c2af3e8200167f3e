//! Display functions for command results

use crate::commands::{CheckReport, ViolationKind};
use colored::Colorize;

/// Print the result of a corpus check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CORPUS CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Levels:".bright_cyan().bold());
    for (level, summary) in &report.levels {
        println!(
            "   {:<7} {:>3} entries, {:>3} distinct words, {}-{} letters",
            level.name(),
            summary.entries,
            summary.distinct_words,
            summary.shortest,
            summary.longest
        );
    }

    println!("\n📊 {}", "Scrambling:".bright_cyan().bold());
    println!("   Entries checked:  {}", report.total_entries());
    println!("   Trials per entry: {}", report.trials_per_entry);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!();
    if report.is_clean() {
        println!("{}", "✅ Every entry scrambles to a distinct permutation".green().bold());
        return;
    }

    println!(
        "{}",
        format!("❌ {} entries failed", report.violations.len()).red().bold()
    );
    for violation in &report.violations {
        let reason = match &violation.kind {
            ViolationKind::Unscramblable => "has no distinct arrangement".to_string(),
            ViolationKind::NotAPermutation(s) => format!("scrambled to non-permutation '{s}'"),
            ViolationKind::SameAsWord(s) => format!("scrambled to itself ('{s}')"),
        };
        println!(
            "   {} {} {}",
            format!("[{}]", violation.level).bright_black(),
            violation.word.bright_white().bold(),
            reason.yellow()
        );
    }
}
