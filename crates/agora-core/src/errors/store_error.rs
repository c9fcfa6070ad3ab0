/// Failures reported by the reaction/attribute store collaborator.
///
/// The analytics functions never retry; retry policy belongs to the store client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{operation} timed out after {elapsed_ms}ms")]
    Timeout { operation: String, elapsed_ms: u64 },

    #[error("store unreachable: {reason}")]
    Unavailable { reason: String },

    #[error("store rejected the request: {reason}")]
    Rejected { reason: String },
}
