//! Lexical path helpers. Nothing here touches the file system.

/// Shortest equivalent of a `/`-separated path, by lexical processing alone.
///
/// Repeated slashes collapse, `.` segments are removed, and each `..`
/// cancels the segment before it. A `..` that would climb above the root is
/// dropped; one at the start of a relative path is kept. The trailing slash
/// goes, and an empty result is `"."`.
///
/// ```
/// use scour::path::clean_path;
///
/// assert_eq!(clean_path("a//b/./c/.."), "a/b");
/// assert_eq!(clean_path("/../x/"), "/x");
/// assert_eq!(clean_path("../x"), "../x");
/// assert_eq!(clean_path(""), ".");
/// ```
#[must_use]
pub fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let rooted = path.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    let _ = segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// The last element of a path, ignoring trailing slashes.
///
/// An empty path gives `"."` and a path of only slashes gives `"/"`.
///
/// ```
/// use scour::path::base_name;
///
/// assert_eq!(base_name("/var/src/bar.go"), "bar.go");
/// assert_eq!(base_name("dir/"), "dir");
/// assert_eq!(base_name("///"), "/");
/// ```
#[must_use]
pub fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed
        .rfind('/')
        .map_or(trimmed, |slash| &trimmed[slash + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_resolves_parents() {
        assert_eq!(clean_path("/images/../4-icon.jpg"), "/4-icon.jpg");
        assert_eq!(clean_path("a/b/../../.."), "..");
        assert_eq!(clean_path("a/../../b"), "../b");
        assert_eq!(clean_path("/"), "/");
        assert_eq!(clean_path("./"), ".");
    }

    #[test]
    fn base_of_plain_name() {
        assert_eq!(base_name("bar.go"), "bar.go");
        assert_eq!(base_name(""), ".");
    }
}
