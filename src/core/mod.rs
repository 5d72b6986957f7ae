pub mod dispatch;
pub mod error;
pub mod registry;
pub mod report;
pub mod resolve;
pub mod snippet;
pub mod tree;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dispatch::{Dispatcher, Outcome};
pub use error::SnippetError;
pub use registry::Registry;
pub use report::{ConsoleReporter, MemoryReporter, Reporter, Severity};
pub use resolve::Resolved;
pub use snippet::{Snippet, SnippetDescriptor};
pub use tree::render_tree;
