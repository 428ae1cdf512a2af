//! Conversation agent: consent tracking and tool arbitration

pub mod consent;
pub mod router;

pub use router::{RouteOutcome, ToolInvocation, ToolKind, ToolRouter};
