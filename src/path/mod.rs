mod normalize;

pub use normalize::{Segments, join_segments, normalize_path, split_segments};
