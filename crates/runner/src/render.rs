//! Report rendering

use std::fmt;

use trendwatch_detector::DetectionReport;

use crate::error::Result;

/// Plain-text view of a report
///
/// ```text
/// 2 documents
/// #1 [2020-03-20] quake:1.00 coast:0.67 alert:0.33
/// #2 [2020-03-20] coast:1.00 quake:1.00
/// ```
pub struct TextReport<'a>(pub &'a DetectionReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "{} documents", report.len())?;
        for (n, doc) in report.documents.iter().enumerate() {
            write!(f, "#{} [{}]", n + 1, doc.day)?;
            for entry in doc.entries() {
                write!(f, " {}:{:.2}", entry.word, entry.probability)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render a report as text
pub fn render_text(report: &DetectionReport) -> String {
    TextReport(report).to_string()
}

/// Render a report as pretty-printed JSON
pub fn render_json(report: &DetectionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
