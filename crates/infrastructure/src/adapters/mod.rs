//! Port implementations.

mod reqwest_client;
mod system_clock;

pub use reqwest_client::{RESOURCE_PATH, ReqwestItemClient};
pub use system_clock::SystemClock;
