//! Element Bridge - string-id surface over the element registry
//!
//! Callers outside the process never see handles. They send commands that
//! name elements by id and get strings or counts back.
//!
//! Two ways in:
//! 1. **JSON commands**: [`Bridge::execute_json`], one request per call
//! 2. **C ABI**: the functions in [`ffi`], one registry per calling thread

pub mod error;
pub mod ffi;
pub mod protocol;
pub mod session;

pub use error::{BridgeError, Result};
pub use protocol::{Command, Reply, Request, Response};
pub use session::{Bridge, BridgeConfig};
