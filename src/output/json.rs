use serde::Serialize;

use crate::error::Result;
use crate::ranking::{RankedRow, RankedView, humanize_count};

use super::ReportFormatter;

/// Machine-readable report; rows keep the ascending view order.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    total: u64,
    total_display: String,
    rows: &'a [RankedRow],
    other: Option<&'a RankedRow>,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, view: &RankedView) -> Result<String> {
        let output = JsonOutput {
            total: view.total,
            total_display: humanize_count(view.total),
            rows: &view.rows,
            other: view.other.as_ref(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
