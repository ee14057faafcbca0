pub mod post_repository;

#[cfg(test)]
pub mod memory_post_repository;

pub use post_repository::{PostRepository, PostgresPostRepository};
