use memchr::memchr_iter;
use smallvec::SmallVec;

pub type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Splits `path` into its cleaned segments.
///
/// The path is treated as rooted: empty segments (repeated or trailing
/// slashes) and `.` are dropped, `..` removes the previous segment and is a
/// no-op at the root. `/` and the empty string both yield no segments.
pub fn split_segments(path: &str) -> Segments<'_> {
    let bytes = path.as_bytes();
    let mut segments = Segments::new();
    let mut start = 0usize;

    for end in memchr_iter(b'/', bytes).chain(std::iter::once(bytes.len())) {
        push_segment(&mut segments, &path[start..end]);
        start = end + 1;
    }

    segments
}

fn push_segment<'a>(segments: &mut Segments<'a>, segment: &'a str) {
    match segment {
        "" | "." => {}
        ".." => {
            segments.pop();
        }
        _ => segments.push(segment),
    }
}

pub fn join_segments(segments: &[&str]) -> String {
    let capacity = segments.iter().map(|s| s.len() + 1).sum::<usize>().max(1);
    let mut out = String::with_capacity(capacity);
    for segment in segments {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn normalize_path(path: &str) -> String {
    join_segments(&split_segments(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_duplicates_and_trims_trailing_slashes() {
        assert_eq!(normalize_path("//foo//bar///"), "/foo/bar");
    }

    #[test]
    fn drops_current_directory_segments() {
        assert_eq!(normalize_path("/foo/./bar/."), "/foo/bar");
    }

    #[test]
    fn parent_segments_pop_the_previous_segment() {
        assert_eq!(normalize_path("/foo/../bar"), "/bar");
        assert_eq!(normalize_path("/a/b/../../c"), "/c");
    }

    #[test]
    fn parent_segments_never_climb_above_root() {
        assert_eq!(normalize_path("/../../etc"), "/etc");
        assert_eq!(normalize_path(".."), "/");
    }

    #[test]
    fn relative_paths_are_rooted() {
        assert_eq!(normalize_path("users/42"), "/users/42");
    }

    #[test]
    fn root_and_empty_have_no_segments() {
        assert!(split_segments("/").is_empty());
        assert!(split_segments("").is_empty());
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn keeps_pattern_markers_verbatim() {
        let segments = split_segments("/users/:id/files/*rest");
        assert_eq!(segments.as_slice(), &["users", ":id", "files", "*rest"]);
    }

    #[test]
    fn accepts_unicode_segments() {
        assert_eq!(normalize_path("/こんにちは//世界"), "/こんにちは/世界");
    }
}
