pub mod descriptor;

pub use descriptor::{load_record, RawDescriptor, SpriteRecord, SpriteRect};
