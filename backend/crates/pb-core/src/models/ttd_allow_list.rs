use std::collections::HashSet;

/// Project names that receive a TTD budget unless configured otherwise
pub const DEFAULT_TTD_PROJECTS: [&str; 4] = [
    "Peking roasted duck Chanel",
    "Choucroute Cartier",
    "Rigua Nintendo",
    "Llapingacho Instagram",
];

/// Set of project names eligible for TTD enrichment.
///
/// Membership is the only gate for attempting a conversion. Matching is
/// exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtdAllowList {
    names: HashSet<String>,
}

impl TtdAllowList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, project_name: &str) -> bool {
        self.names.contains(project_name)
    }

    /// Convenience for optional names coming straight off a row
    pub fn admits(&self, project_name: Option<&str>) -> bool {
        project_name.is_some_and(|name| self.contains(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for TtdAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_TTD_PROJECTS)
    }
}
