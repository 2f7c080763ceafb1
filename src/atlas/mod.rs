pub mod cache;
pub mod resolver;

pub use cache::AtlasCache;
pub use resolver::AtlasResolver;
