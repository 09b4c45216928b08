pub mod compass;
pub mod content;
pub mod feed;
pub mod session;
