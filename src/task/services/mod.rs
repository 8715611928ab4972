//! Application services for the task reward ledger.

mod ledger;
pub mod operations;

pub use ledger::{TaskCompletion, TaskLedger, TaskLedgerError, TaskLedgerResult};
pub use operations::CreateTaskRequest;
