/// Default name of the interface that describes the global scope.
pub const DEFAULT_GLOBAL_SCOPE_INTERFACE: &str = "Window";

/// Solver settings resolved from the command line and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOptions {
    /// Interface whose members are reachable as globals (`globalThis`).
    /// Globals it already exposes are not bound a second time, and every
    /// other global is added to it as a getter.
    pub global_scope_interface: String,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            global_scope_interface: DEFAULT_GLOBAL_SCOPE_INTERFACE.to_string(),
        }
    }
}
