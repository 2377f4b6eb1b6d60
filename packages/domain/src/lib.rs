pub mod autolink;
pub mod config;
pub mod models;
pub mod navigation;
pub mod session;

mod memory;
pub use memory::MemorySession;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageSession;

pub use config::{PortalConfig, ServiceLink};
pub use models::{photo_url, profile_lines, ProfileLine, UserInfo, UserType};
pub use navigation::{NavTarget, ProfileAction};
pub use session::SessionStore;
