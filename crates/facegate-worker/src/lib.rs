//! Process supervisor — one worker process per call, output captured,
//! exit status mapped to a single terminal result.

pub mod supervisor;

pub use supervisor::{run_worker, WorkerCommand, WorkerOutcome};
