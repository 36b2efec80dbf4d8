//! Reporting: top-N ranking and the bar chart artifact.

use crate::errors::AppResult;
use crate::models::ngo::Ngo;
use crate::utils::format::format_amount;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// The first `n` NGOs by total donations, descending. Stable: ties keep
/// insertion order. Returns fewer than `n` when the collection is smaller.
pub fn top_n(ngos: &[Ngo], n: usize) -> Vec<&Ngo> {
    let mut view: Vec<&Ngo> = ngos.iter().collect();
    view.sort_by(|a, b| {
        b.donations
            .partial_cmp(&a.donations)
            .unwrap_or(Ordering::Equal)
    });
    view.truncate(n);
    view
}

/// (name, total) pairs in the order the chart should show them.
pub fn chart_entries(top: &[&Ngo]) -> Vec<(String, f64)> {
    top.iter().map(|n| (n.name.clone(), n.donations)).collect()
}

/// Rendering backend for the donation chart. The core only supplies sorted
/// (name, value) pairs; a graphical backend can be swapped in here.
pub trait ChartRenderer {
    fn render(&self, entries: &[(String, f64)]) -> String;
}

/// Horizontal text bar chart, bars scaled to the largest value.
pub struct TextChart {
    pub width: usize,
    pub currency: String,
}

impl Default for TextChart {
    fn default() -> Self {
        Self {
            width: 40,
            currency: "$".to_string(),
        }
    }
}

impl ChartRenderer for TextChart {
    fn render(&self, entries: &[(String, f64)]) -> String {
        let mut out = String::new();
        out.push_str("Top NGOs by Donations\n");
        out.push_str("---------------------\n");

        if entries.is_empty() {
            out.push_str("(no NGOs)\n");
            return out;
        }

        let name_w = entries.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
        let max = entries.iter().map(|(_, v)| *v).fold(0.0f64, f64::max);

        for (name, value) in entries {
            let len = if max > 0.0 {
                ((value / max) * self.width as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:<name_w$} | {} {}{}\n",
                name,
                "█".repeat(len),
                self.currency,
                format_amount(*value),
            ));
        }

        out
    }
}

/// Render the chart, write it to the artifact path and return the text so
/// the caller can also show it on the terminal.
pub fn write_chart(
    renderer: &dyn ChartRenderer,
    entries: &[(String, f64)],
    path: &Path,
) -> AppResult<String> {
    let chart = renderer.render(entries);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &chart)?;
    Ok(chart)
}
