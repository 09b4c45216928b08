pub mod curated_repository;

pub use curated_repository::HardcodedCuratedRepository;
