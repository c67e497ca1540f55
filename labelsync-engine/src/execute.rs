//! Change execution.

use labelsync_core::{
    ChangeAction, ChangeRecord, ChangeResult, ErrorKind, LabelClient, Outcome,
};

/// Apply each record in order, one remote call at a time.
///
/// Returns exactly one result per input record, in input order. A failing
/// record is reported and the run continues — one repository's failure never
/// blocks unrelated work. Nothing is rolled back.
pub fn execute(client: &dyn LabelClient, changes: &[ChangeRecord]) -> Vec<ChangeResult> {
    changes
        .iter()
        .map(|record| {
            let outcome = match apply(client, record) {
                Ok(()) => {
                    tracing::info!("applied: {record}");
                    Outcome::Succeeded
                }
                Err(err) => {
                    tracing::warn!("failed: {record}: {err}");
                    Outcome::Failed {
                        kind: ErrorKind::from(&err),
                        message: err.to_string(),
                    }
                }
            };
            ChangeResult {
                record: record.clone(),
                outcome,
            }
        })
        .collect()
}

fn apply(
    client: &dyn LabelClient,
    record: &ChangeRecord,
) -> Result<(), labelsync_core::ClientError> {
    match &record.action {
        ChangeAction::Create { label } => {
            client.create(&record.repository, label).map(|_| ())
        }
        ChangeAction::Update {
            previous_name,
            label,
        } => {
            let old_name = previous_name.as_deref().unwrap_or(&label.name);
            client.update(&record.repository, old_name, label).map(|_| ())
        }
        ChangeAction::Delete { name } => client.delete(&record.repository, name),
    }
}
