use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::modules::time_clock::core::reconciliation::HoursComparisonRow;

pub const CSV_HEADER: [&str; 7] = [
    "Employee Name",
    "Email",
    "Scheduled Hours",
    "Actual Hours",
    "Difference Hours",
    "Completion Rate (%)",
    "Late Clock-ins",
];

/// Every field quoted, quotes doubled, one record per `\n` terminated line.
pub fn hours_comparison_csv(rows: &[HoursComparisonRow]) -> anyhow::Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record([
            row.employee_name.clone(),
            row.email.clone(),
            format!("{:.2}", row.scheduled_hours),
            format!("{:.2}", row.actual_hours),
            format!("{:.2}", row.difference_hours),
            row.completion_rate_pct.to_string(),
            row.late_clock_ins.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
