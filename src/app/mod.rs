pub mod export;
pub mod render;

pub use export::OutputFormat;
