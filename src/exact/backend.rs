//! Backend adapter interface and failure taxonomy.

use super::model::MipModel;
use thiserror::Error;

/// Failure reported by the exact solver.
///
/// Each variant maps to a distinct backend outcome. The solver never
/// retries on any of them; recovery (fallback to the greedy heuristic)
/// belongs to the dispatcher.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// No usable backend: not installed, not reachable, or not licensed.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The model has no feasible assignment.
    #[error("model infeasible")]
    Infeasible,

    /// The objective is unbounded (cannot happen for a well-formed
    /// knapsack, but backends may still report it).
    #[error("model unbounded")]
    Unbounded,

    /// The backend terminated without proving optimality (iteration limit,
    /// numerical failure, malformed answer).
    #[error("solve terminated non-optimally: {0}")]
    NonOptimal(String),

    /// The backend exceeded its time limit.
    #[error("solve timed out after {limit_ms} ms")]
    Timeout { limit_ms: u64 },
}

/// Backend invocation parameters.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Maximum solve time in milliseconds. Adapters must enforce this and
    /// report overruns as [`SolverError::Timeout`], never hang unbounded.
    pub time_limit_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { time_limit_ms: 60_000 }
    }
}

impl BackendConfig {
    /// Sets the time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }
}

/// Adapter over an external mathematical-programming capability.
///
/// Implementations translate the [`MipModel`] into whatever their solver
/// speaks and translate the outcome back into a 0/1 assignment (one `bool`
/// per decision variable, in variable order) or a [`SolverError`].
///
/// The trait is the seam that keeps the exact solver testable: tests inject
/// fakes returning canned assignments or forced failures.
pub trait MipBackend {
    /// Backend name, for logging.
    fn name(&self) -> &str;

    /// Solves the model to proven optimality or reports why it could not.
    fn optimize(&self, model: &MipModel, config: &BackendConfig) -> Result<Vec<bool>, SolverError>;
}

/// The "nothing installed" backend: every solve reports
/// [`SolverError::Unavailable`].
///
/// Stands in wherever a backend parameter is required but no external
/// solver exists — the dispatcher then exercises its documented greedy
/// fallback.
pub struct NoBackend;

impl MipBackend for NoBackend {
    fn name(&self) -> &str {
        "none"
    }

    fn optimize(&self, _model: &MipModel, _config: &BackendConfig) -> Result<Vec<bool>, SolverError> {
        Err(SolverError::Unavailable("no MIP backend configured".into()))
    }
}
