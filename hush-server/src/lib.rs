//! Backend for the Hush site: serves the built bundle and accepts
//! custom-requirements requests from the BOM page.

pub mod config;
pub mod contact;
pub mod error;
pub mod inbox;

pub use config::ServerConfig;
pub use contact::{api_router, site_router};
pub use error::ServerError;
pub use inbox::{ContactInbox, InboxError, StoredContact};
