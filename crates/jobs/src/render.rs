//! Rendering of engine results to the log.

use datafusion::arrow::record_batch::RecordBatch;
use datafusion::arrow::util::pretty::pretty_format_batches;
use datafusion::prelude::DataFrame;

use crate::error::JobError;

/// Format `batches` as the engine's ASCII table.
pub fn render_batches(batches: &[RecordBatch]) -> Result<String, JobError> {
    Ok(pretty_format_batches(batches)?.to_string())
}

/// Execute `df` and log its contents line by line at `info`.
///
/// Returns the collected batches so callers can inspect what was shown.
pub async fn show(label: &str, df: DataFrame) -> Result<Vec<RecordBatch>, JobError> {
    let batches = df.collect().await?;
    let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    let table = render_batches(&batches)?;

    tracing::info!(frame = label, rows, "Showing frame");
    for line in table.lines() {
        tracing::info!(frame = label, "{line}");
    }

    Ok(batches)
}
