//! Build summary: the value threaded through one build invocation.

use meowssg_kernel::route::Route;
use serde::Serialize;

/// One route that failed to produce an output file.
#[derive(Debug, Clone, Serialize)]
pub struct FailedRoute {
    pub route: Route,
    pub error: String,
}

/// Aggregate counts for one build. Created by the build command, passed
/// through the per-route loop, and returned to the caller. There is no
/// module-level build state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildSummary {
    pub success_count: usize,
    pub error_count: usize,
    pub fixed_count: usize,
    pub failed_routes: Vec<FailedRoute>,
}

impl BuildSummary {
    pub fn record_written(&mut self) {
        self.success_count += 1;
    }

    pub fn record_fixed(&mut self) {
        self.fixed_count += 1;
    }

    pub fn record_error(&mut self, route: &Route, error: impl Into<String>) {
        self.error_count += 1;
        self.failed_routes.push(FailedRoute {
            route: route.clone(),
            error: error.into(),
        });
    }

    /// Partial success is acceptable; only upstream fatal errors change
    /// the exit code.
    pub fn routes_attempted(&self) -> usize {
        self.success_count + self.error_count
    }
}
