mod params;
pub mod resolver;

pub use params::Params;
pub use resolver::find_node;
