//! External process abstraction for testable tool invocations

mod mock;
mod system;
mod r#trait;

pub use mock::{MockResponse, MockRunner};
pub use r#trait::{CommandOutput, CommandRunner, CommandStatus, Invocation};
pub use system::SystemRunner;
