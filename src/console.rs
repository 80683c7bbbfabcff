//! Colorful console output for suggested plans.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

use crate::domain::{AxleStatus, Load, RiskLevel, Severity, SuggestedPlan};

/// ASCII art banner for the demo planner.
pub fn print_banner() {
    let banner = r#"
  _                    _ ____  _
 | |    ___   __ _  __| |  _ \| | __ _ _ __
 | |   / _ \ / _` |/ _` | |_) | |/ _` | '_ \
 | |__| (_) | (_| | (_| |  __/| | (_| | | | |
 |_____\___/ \__,_|\__,_|_|   |_|\__,_|_| |_|
"#;
    println!("{}", banner.cyan().bold());
    println!(
        "  {} {}\n",
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black(),
        "Trailer Loading".bright_cyan()
    );
}

/// Prints the input board before planning.
pub fn print_board(name: &str, loads: &[Load]) {
    let total_pallets: usize = loads.iter().map(|l| l.pallet_count()).sum();
    let total_weight: f64 = loads.iter().map(|l| l.weight_lbs).sum();

    println!(
        "{} {} Board {}: loads ({}), pallets ({}), weight ({})",
        "INFO".bright_green(),
        "[Planner]".bright_cyan(),
        name.white().bold(),
        loads.len().to_formatted_string(&Locale::en).bright_yellow(),
        total_pallets.to_formatted_string(&Locale::en).bright_yellow(),
        format_weight(total_weight).bright_yellow()
    );

    for load in loads {
        println!(
            "    {} {:<8} {:>2} plt  {:>10}  {:<4} {}",
            "·".bright_blue(),
            load.id.white(),
            load.pallet_count(),
            format_weight(load.weight_lbs),
            load.destination_code.as_deref().unwrap_or("—").bright_black(),
            load.stop_window.as_deref().unwrap_or("").bright_black()
        );
    }
    println!();
}

/// Prints each suggested plan with its summary box and violations.
pub fn print_plans(plans: &[SuggestedPlan]) {
    for plan in plans {
        print_plan(plan);
    }
}

fn print_plan(plan: &SuggestedPlan) {
    println!(
        "{} {} {} score ({}), risk ({}), est. savings ({})",
        "INFO".bright_green(),
        format!("[{}]", plan.plan_id).bright_cyan(),
        plan.name.white().bold(),
        plan.score.to_string().bright_magenta().bold(),
        format_risk(plan.risk),
        format!("${}", plan.savings_usd.to_formatted_string(&Locale::en)).yellow()
    );
    for note in &plan.notes {
        println!("    {}", note.bright_black());
    }

    let summary = &plan.summary;

    println!("  {}", "╔══════════════════════════════════════════════╗".bright_cyan());
    print_box_row("Pallets placed:", &summary.pallet_count.to_formatted_string(&Locale::en));
    print_box_row("Fill:", &format!("{:.1}%", summary.fill_pct));
    print_box_row(
        "Weight:",
        &format!(
            "{} / {}",
            format_weight(summary.total_weight_lbs),
            format_weight(summary.legal_weight_lbs)
        ),
    );
    print_box_row(
        "Axle balance:",
        &format!(
            "{} ({:.0}% front)",
            summary.axle_balance.status.as_str(),
            summary.axle_balance.front_pct * 100.0
        ),
    );
    print_box_row(
        "Violations:",
        &summary.violations_by_severity.total().to_string(),
    );
    println!("  {}", "╚══════════════════════════════════════════════╝".bright_cyan());

    if summary.overweight {
        println!(
            "    {} {}",
            "✗".bright_red().bold(),
            "OVER LEGAL WEIGHT".bright_red().bold()
        );
    }
    if summary.axle_balance.status != AxleStatus::Good {
        println!(
            "    {} axle balance {}",
            "!".yellow().bold(),
            format_axle(summary.axle_balance.status)
        );
    }
    for violation in &plan.violations {
        println!(
            "    {} {} {} {}",
            "→".bright_blue(),
            format_severity(violation.severity),
            violation.violation_type.as_str().white(),
            violation.reason.bright_black()
        );
    }
    println!();
}

fn print_box_row(label: &str, value: &str) {
    println!(
        "  {}  {:<16}{:>26}  {}",
        "║".bright_cyan(),
        label,
        value,
        "║".bright_cyan()
    );
}

/// Formats a weight in pounds with thousands separators.
fn format_weight(weight_lbs: f64) -> String {
    format!(
        "{} lb",
        (weight_lbs.round() as i64).to_formatted_string(&Locale::en)
    )
}

fn format_risk(risk: RiskLevel) -> String {
    match risk {
        RiskLevel::Low => risk.as_str().bright_green().to_string(),
        RiskLevel::Medium => risk.as_str().yellow().to_string(),
        RiskLevel::High => risk.as_str().bright_red().bold().to_string(),
    }
}

fn format_axle(status: AxleStatus) -> String {
    match status {
        AxleStatus::Good => status.as_str().bright_green().to_string(),
        AxleStatus::Warning => status.as_str().yellow().to_string(),
        AxleStatus::Bad => status.as_str().bright_red().to_string(),
    }
}

fn format_severity(severity: Severity) -> String {
    match severity {
        Severity::Low => severity.as_str().white().to_string(),
        Severity::Warning => severity.as_str().yellow().to_string(),
        Severity::High => severity.as_str().bright_red().to_string(),
        Severity::Critical => severity.as_str().bright_red().bold().to_string(),
    }
}
