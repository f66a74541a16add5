//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule.

pub mod init;
pub mod pick;

pub use init::{execute_init, InitOptions};
pub use pick::{execute_pick, PickOptions};
