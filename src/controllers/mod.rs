pub mod compass;
pub mod curated;
pub mod feed;
pub mod health;
