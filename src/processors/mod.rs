use std::path::Path;

use crate::{
    data_types::common::{DocumentId, Identifiable},
    database::{RouteStore, StoreError},
    loader::{self, LoadError},
    util::confirm::ConfirmationGate,
};
use crate::{logln, logvbln};

pub mod normalizer;

/// Run phases of one upload. `Cancelled` and `Aborted` are terminal;
/// `Aborted` means the run stopped on a fatal error, before or during the
/// writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Loaded,
    Previewed,
    Confirmed,
    Uploading,
    Done,
    Cancelled,
    Aborted,
}

#[derive(Debug)]
pub struct RouteFailure {
    pub route_id: DocumentId,
    pub reason: String,
}

#[derive(Debug)]
pub struct UploadReport {
    pub state: RunState,
    pub loaded: usize,
    pub succeeded: usize,
    pub failures: Vec<RouteFailure>,
}

impl UploadReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Sequences loader, normalizer and store writes over the whole record set.
/// One bad record is logged and skipped; an unreachable store ends the run.
pub struct UploadPipeline<'a, S: RouteStore, C: ConfirmationGate> {
    store: &'a S,
    confirmation: &'a mut C,
    state: RunState,
}

impl<'a, S: RouteStore, C: ConfirmationGate> UploadPipeline<'a, S, C> {
    const CC: &'static str = "UploadPipeline";

    pub fn new(store: &'a S, confirmation: &'a mut C) -> Self {
        Self {
            store,
            confirmation,
            state: RunState::Idle,
        }
    }

    pub async fn run(&mut self, source: &Path) -> UploadReport {
        logln!("Loading routes from: {}", source.display());

        let records = match loader::load_routes(source) {
            Ok(records) => records,
            Err(LoadError::SourceNotFound(path)) => {
                logln!("{} not found - no routes to upload", path.display());
                return self.abort(0);
            }
            Err(err) => {
                logln!("Route file rejected: {}", err);
                return self.abort(0);
            }
        };

        if records.is_empty() {
            logln!("No routes to upload");
            return self.abort(0);
        }

        self.state = RunState::Loaded;
        logln!("Loaded {} routes", records.len());

        logln!("Routes to upload ({}):", records.len());
        for record in &records {
            logln!("  • {}", record.display_name());
        }
        self.state = RunState::Previewed;

        if !self.confirmation.confirm("\nProceed? (yes/no): ") {
            logln!("Cancelled.");
            self.state = RunState::Cancelled;
            return self.report(records.len(), 0, Vec::new());
        }
        self.state = RunState::Confirmed;

        self.state = RunState::Uploading;
        let mut succeeded = 0;
        let mut failures: Vec<RouteFailure> = Vec::new();

        for record in &records {
            logln!("Uploading: {}...", record.display_name());

            let document = match normalizer::normalize_route(record) {
                Ok(document) => document,
                Err(err) => {
                    logln!("  ✗ {}", err);
                    let reason = err.source.to_string();
                    failures.push(RouteFailure {
                        route_id: err.route_id,
                        reason,
                    });
                    continue;
                }
            };

            logvbln!(
                "  {} approved routes in payload",
                document.approved_routes.as_ref().map_or(0, Vec::len)
            );

            match self.store.upsert_route(record.document_id(), &document).await {
                Ok(()) => {
                    succeeded += 1;
                    logln!("  ✓ {}", record.document_id());
                }
                Err(err @ StoreError::WriteRejected(_)) => {
                    logln!("  ✗ {}: {}", record.document_id(), err);
                    failures.push(RouteFailure {
                        route_id: record.document_id().clone(),
                        reason: err.to_string(),
                    });
                }
                Err(err @ StoreError::Unavailable(_)) => {
                    logln!("Aborting run, {}", err);
                    failures.push(RouteFailure {
                        route_id: record.document_id().clone(),
                        reason: err.to_string(),
                    });
                    self.state = RunState::Aborted;
                    return self.report(records.len(), succeeded, failures);
                }
            }
        }

        self.state = RunState::Done;
        logln!("Uploaded {} of {} routes", succeeded, records.len());

        self.report(records.len(), succeeded, failures)
    }

    fn abort(&mut self, loaded: usize) -> UploadReport {
        self.state = RunState::Aborted;
        self.report(loaded, 0, Vec::new())
    }

    fn report(
        &self,
        loaded: usize,
        succeeded: usize,
        failures: Vec<RouteFailure>,
    ) -> UploadReport {
        UploadReport {
            state: self.state,
            loaded,
            succeeded,
            failures,
        }
    }
}
