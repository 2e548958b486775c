pub mod registry;

pub use registry::NodeRegistry;
