//! Operator-facing run summary.

use crate::filter::FilterOutput;

/// Render the statistics block shown when verbose reporting is on.
pub fn render_summary(output: &FilterOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Total passwords processed: {}\n",
        output.stats.processed
    ));
    out.push_str(&format!("Passwords accepted: {}\n", output.stats.accepted));
    out.push_str(&format!("Passwords rejected: {}\n", output.stats.rejected));
    out.push_str(&format!(
        "Processing time: {:.2} seconds",
        output.elapsed_seconds()
    ));
    out
}
