mod cache;

pub use cache::no_cache_middleware;
