//! Terminal output of network summaries.

use crate::processing::NetworkSummary;
use colored::Colorize;

/// Width of the label column.
const LABEL_WIDTH: usize = 10;

/// Format a label, right-aligned and followed by a colon.
///
/// # Arguments
/// * `label` - The label text
/// * `width` - The minimum width of the field
pub fn format_label(label: &str, width: usize) -> String {
    let with_colon = format!("{label}:");
    if with_colon.len() >= width {
        with_colon
    } else {
        format!("{with_colon:>width$}")
    }
}

/// Label/value rows for a summary, in print order.
fn summary_rows(summary: &NetworkSummary) -> Vec<(String, String)> {
    let mut rows = vec![
        ("network".to_string(), summary.network.clone()),
        ("family".to_string(), summary.family.to_string()),
        ("address".to_string(), summary.address.clone()),
        ("mask".to_string(), summary.mask.clone()),
        (
            "prefix".to_string(),
            summary
                .prefix_len
                .map(|p| format!("/{p}"))
                .unwrap_or_else(|| "none".to_string()),
        ),
        ("host".to_string(), summary.single_host.to_string()),
        ("first".to_string(), summary.first.clone()),
        ("last".to_string(), summary.last.clone()),
    ];
    for o in &summary.offsets {
        rows.push((format!("{:+}", o.offset), o.address.clone()));
    }
    rows
}

/// Plain text rendering, one `label: value` line per field.
pub fn format_summary(summary: &NetworkSummary) -> String {
    summary_rows(summary)
        .iter()
        .map(|(label, value)| format!("{} {value}\n", format_label(label, LABEL_WIDTH)))
        .collect()
}

/// Only the canonical network row is printed in bold.
fn is_headline(label: &str) -> bool {
    label == "network"
}

/// Print a summary to stdout with highlighted labels.
pub fn print_summary(summary: &NetworkSummary) {
    for (label, value) in summary_rows(summary) {
        let headline = is_headline(&label);
        let label = format_label(&label, LABEL_WIDTH);
        if headline {
            println!("{} {}", label.cyan(), value.bold());
        } else {
            println!("{} {value}", label.cyan());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NetworkSpecification;
    use crate::processing::summarize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_label_short() {
        assert_eq!(format_label("mask", 10), "     mask:");
    }

    #[test]
    fn test_format_label_long() {
        assert_eq!(format_label("prefix_length", 5), "prefix_length:");
    }

    #[test]
    fn test_format_summary() {
        let spec = NetworkSpecification::parse("10.0.0.0/24").unwrap();
        let summary = summarize(&spec, &[1, -1]).unwrap();
        let expected = concat!(
            "  network: 10.0.0.0/255.255.255.0\n",
            "   family: IPv4\n",
            "  address: 10.0.0.0\n",
            "     mask: 255.255.255.0\n",
            "   prefix: /24\n",
            "     host: false\n",
            "    first: 10.0.0.0\n",
            "     last: 10.0.0.255\n",
            "       +1: 10.0.0.1\n",
            "       -1: 9.255.255.255\n",
        );
        assert_eq!(format_summary(&summary), expected);
    }

    #[test]
    fn test_single_host_has_one_headline() {
        let spec = NetworkSpecification::parse("10.0.0.7/32").unwrap();
        let summary = summarize(&spec, &[0]).unwrap();
        let rows = summary_rows(&summary);
        let headlines: Vec<_> = rows.iter().filter(|(label, _)| is_headline(label)).collect();
        assert_eq!(headlines.len(), 1);
        assert_eq!(headlines[0].0, "network");
        // address, first, last and +0 repeat the network text but are not headlines
        assert_eq!(rows.iter().filter(|(_, v)| v == "10.0.0.7").count(), 5);
    }
}
