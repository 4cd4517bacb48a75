//! Path parameter parsing helpers

/// Parse a `{id}` path segment into a project id.
///
/// A segment that is not a base-10 integer cannot name a stored row, so it
/// resolves to `None` and the handler behaves as for an unknown id.
pub fn parse_project_id(s: &str) -> Option<i64> {
    let parsed = s.trim().parse::<i64>().ok();
    if parsed.is_none() {
        log::debug!("Path id '{}' is not an integer, no row can match", s);
    }
    parsed
}
