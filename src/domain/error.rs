//! Contract violations raised by the view-state core

use thiserror::Error;

/// A caller broke an operation's contract.
///
/// These are programming or input errors, never I/O failures. An
/// out-of-range page index is not one of them: pagination
/// answers it with an empty slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("page size must be positive")]
    NonPositivePageSize,

    #[error("unknown status label: {0:?}")]
    UnknownStatus(String),

    #[error("unknown menu leaf: {0:?}")]
    UnknownLeaf(String),

    #[error("unknown menu group: {0:?}")]
    UnknownGroup(String),
}
