/// One checked candidate path and whether the store reported it present.
///
/// Created once per check and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathResult {
    path:   String,
    exists: bool,
}

impl PathResult {
    pub(crate) fn new(path: impl Into<String>, exists: bool) -> Self {
        Self { path: path.into(), exists }
    }

    pub fn path(&self) -> &str { &self.path }

    pub fn exists(&self) -> bool { self.exists }
}

impl std::fmt::Display for PathResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.path, self.exists)
    }
}
