/// Fatal conditions of a solve call. A solver that returns one of these has
/// produced no solution at all; infeasible inputs are not errors and simply
/// yield the empty solution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// A scratch table could not be sized or reserved.
    #[error("cannot allocate {what} with {cells} cells")]
    AllocationFailure { what: &'static str, cells: u128 },
    /// Subset masks are 64 bit wide.
    #[error("cannot enumerate the subsets of {num_items} items (at most {max} supported)")]
    EnumerationTooLarge { num_items: usize, max: usize },
}
