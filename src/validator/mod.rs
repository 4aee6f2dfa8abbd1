//! External validator invocation.

pub mod command;
pub mod invocation;

pub use command::{execute, ExecOptions, ProcessOutput};
pub use invocation::{ExitClass, ValidatorInvocation};
