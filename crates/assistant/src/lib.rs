//! Rule-based consultation assistant for the vehicle catalog.
//!
//! This crate turns the deterministic engine in `carinsight-core` into a
//! conversational surface:
//! - `reply` renders a scored recommendation list into the Korean consultation
//!   reply format (preamble, ranked blocks, closing line)
//! - `session` wraps one conversation: greeting, quick actions, the session's
//!   active filter criteria and the simulated thinking delay
//!
//! No model calls anywhere; every reply is a pure function of the catalog,
//! the extracted intent and the session filters.

pub mod reply;
pub mod session;

pub use reply::{build_reply, match_reason, respond};
pub use session::{AssistantSession, GREETING, QUICK_ACTIONS};
