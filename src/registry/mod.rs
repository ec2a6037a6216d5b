mod reverse;
mod store;

pub use reverse::build_path;
pub use store::NamedRoutes;
