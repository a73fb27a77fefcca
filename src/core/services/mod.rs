//! Keyed collections of domain entities
//!
//! Each service owns its entities in an unordered map. Lookups that return lists make no
//! ordering promise.

pub mod course_catalog;
pub mod student_directory;

pub use course_catalog::CourseCatalog;
pub use student_directory::StudentDirectory;

/// Minimal query contract for an indexed collection of entities
pub trait Searchable<T> {
    /// Snapshot of every entity
    fn find_all(&self) -> Vec<&T>;

    /// Entity stored under the primary key, if any
    fn find_by_id(&self, id: &str) -> Option<&T>;

    /// Every entity for which `predicate` returns true
    fn search<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.find_all()
            .into_iter()
            .filter(|item| predicate(item))
            .collect()
    }
}
