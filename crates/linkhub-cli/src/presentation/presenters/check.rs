use linkhub_runtime::LoadOutcome;
use std::path::Path;

use crate::presentation::view_models::{CheckReportViewModel, CheckRowViewModel, RowStatus};

pub fn present_check_report(source: &Path, outcome: &LoadOutcome) -> CheckReportViewModel {
    let rows: Vec<CheckRowViewModel> = outcome
        .rows
        .iter()
        .map(|row| {
            let link = row.result.link();
            CheckRowViewModel {
                line: row.line,
                id: link.id,
                title: link.title.clone(),
                status: if row.result.is_fallback() {
                    RowStatus::Fallback
                } else {
                    RowStatus::Ok
                },
                warnings: row.result.warnings().to_vec(),
            }
        })
        .collect();

    let fallback = outcome.fallback_count();

    CheckReportViewModel {
        source: source.display().to_string(),
        ok: rows.len() - fallback,
        fallback,
        rows,
        load_error: outcome.failure.clone(),
    }
}
