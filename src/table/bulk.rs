//! Bulk Delete
//!
//! One delete request per id, all in flight at once. There is no rollback:
//! the report lists what succeeded and what failed so the caller can decide
//! what to show and what to keep selected.

use std::fmt::{Debug, Display};
use std::future::Future;

use futures::future::join_all;
use serde::{Deserialize, Serialize};

/// Per-item outcome of a bulk delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkDeleteReport<K> {
    pub succeeded: Vec<K>,
    pub failed: Vec<(K, String)>,
}

impl<K> Default for BulkDeleteReport<K> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<K: Copy> BulkDeleteReport<K> {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_ids(&self) -> Vec<K> {
        self.failed.iter().map(|(id, _)| *id).collect()
    }

    /// One line for a status banner
    pub fn summary(&self) -> String {
        if self.failed.is_empty() {
            format!("Deleted {} record(s)", self.succeeded.len())
        } else {
            format!(
                "Deleted {} of {} record(s); {} failed: {}",
                self.succeeded.len(),
                self.total(),
                self.failed.len(),
                self.failed
                    .first()
                    .map(|(_, e)| e.as_str())
                    .unwrap_or_default()
            )
        }
    }
}

/// What happens to the selection after a bulk delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Clear everything, whatever the outcome
    #[default]
    ClearAll,
    /// Keep failed ids selected so the user can retry them
    KeepFailed,
}

impl SelectionPolicy {
    /// Ids that stay selected after `report`
    pub fn remaining<K: Copy>(&self, report: &BulkDeleteReport<K>) -> Vec<K> {
        match self {
            SelectionPolicy::ClearAll => Vec::new(),
            SelectionPolicy::KeepFailed => report.failed_ids(),
        }
    }
}

/// Run `delete` for every id concurrently and collect the outcomes in input order
pub async fn delete_all<K, F, Fut, E>(ids: Vec<K>, delete: F) -> BulkDeleteReport<K>
where
    K: Copy + Debug,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    let requests = ids.into_iter().map(|id| {
        let request = delete(id);
        async move { (id, request.await) }
    });
    let outcomes = join_all(requests).await;

    let mut report = BulkDeleteReport::default();
    for (id, outcome) in outcomes {
        match outcome {
            Ok(()) => report.succeeded.push(id),
            Err(e) => {
                tracing::error!("Bulk delete failed for {:?}: {}", id, e);
                report.failed.push((id, e.to_string()));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::RefCell;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_partial_failure_reports_each_item() {
        let calls = RefCell::new(Vec::new());
        let report = block_on(delete_all(vec![1i64, 2, 3], |id| {
            calls.borrow_mut().push(id);
            ready(if id == 2 { Err("Fee is referenced by payments") } else { Ok(()) })
        }));

        assert_eq!(*calls.borrow(), vec![1, 2, 3]);
        assert_eq!(report.succeeded, vec![1, 3]);
        assert_eq!(report.failed, vec![(2, "Fee is referenced by payments".to_string())]);
        assert!(!report.is_complete_success());
        assert_eq!(
            report.summary(),
            "Deleted 2 of 3 record(s); 1 failed: Fee is referenced by payments"
        );
    }

    #[test]
    fn test_selection_policy() {
        let report = BulkDeleteReport {
            succeeded: vec![1i64, 3],
            failed: vec![(2, "boom".to_string())],
        };
        assert!(SelectionPolicy::ClearAll.remaining(&report).is_empty());
        assert_eq!(SelectionPolicy::KeepFailed.remaining(&report), vec![2]);
    }

    #[test]
    fn test_failures_are_logged() {
        let log = rolling_logger::RollingLog::new(16);
        let subscriber = tracing_subscriber::registry().with(log.layer());
        let report = tracing::subscriber::with_default(subscriber, || {
            block_on(delete_all(vec![1i64, 2], |id| {
                ready(if id == 2 { Err("409 Conflict") } else { Ok(()) })
            }))
        });

        assert_eq!(report.failed_ids(), vec![2]);
        let errors: Vec<_> = log.entries().into_iter().filter(|e| e.level == Level::ERROR).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Bulk delete failed for 2"));
        assert!(errors[0].message.contains("409 Conflict"));
    }

    #[test]
    fn test_all_succeed() {
        let report = block_on(delete_all(vec![5i64, 6], |_| ready(Ok::<(), String>(()))));
        assert!(report.is_complete_success());
        assert_eq!(report.summary(), "Deleted 2 record(s)");
    }

    #[test]
    fn test_empty_batch() {
        let report = block_on(delete_all(Vec::<i64>::new(), |_| ready(Ok::<(), String>(()))));
        assert_eq!(report.total(), 0);
    }
}
