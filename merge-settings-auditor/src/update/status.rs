//! Update status types.

/// Outcome of an update attempt on one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Settings were updated successfully.
    Applied,

    /// The update failed.
    Failed {
        /// HTTP status, when the API reported one.
        status: Option<u16>,
        /// Error message.
        error: String,
    },
}
