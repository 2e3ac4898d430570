//! # CLI Module
//!
//! User-facing command implementations for DevMood DJ.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the HTTP recommendation server on the configured
//!   address until interrupted.
//! - [`recommend`] - Performs one resolution from the command line and
//!   prints the result: the primary playlist with its note, plus a table
//!   of the returned options.
//!
//! Both commands build the same production resolver; the CLI one-shot is
//! just the server's single operation without the HTTP layer around it,
//! which makes it handy for smoke-testing credentials and configuration.

mod recommend;
mod serve;

pub use recommend::recommend;
pub use serve::serve;
