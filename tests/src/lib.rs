mod memory;
pub use memory::MemorySetup;

#[cfg(feature = "glue")]
mod glue;
#[cfg(feature = "glue")]
pub use glue::GlueSetup;
