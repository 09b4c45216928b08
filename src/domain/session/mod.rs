pub mod dto;
pub mod model;
pub mod service;

pub use dto::SessionResponse;
pub use model::{LoadState, SessionSettings, SessionSnapshot, NO_LIVE_CONTENT};
pub use service::SessionController;
