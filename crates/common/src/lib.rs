//! Process-wide plumbing shared by oracle hosts.

pub mod logging;
