use crate::models::FileRole;

/// Decides the review role of a file from its path.
///
/// Injected into the ranker so projects can teach it what "generated"
/// means for them. Plain closures qualify.
pub trait RoleClassifier: Send + Sync {
    fn classify(&self, filename: &str) -> FileRole;
}

impl<F> RoleClassifier for F
where
    F: Fn(&str) -> FileRole + Send + Sync,
{
    fn classify(&self, filename: &str) -> FileRole {
        self(filename)
    }
}
