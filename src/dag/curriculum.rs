// src/dag/curriculum.rs

use indexmap::IndexMap;

/// Canonical course identifier used throughout the crate.
pub type TaskId = String;

/// One course of a curriculum with its ordered prerequisites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEntry {
    pub id: TaskId,
    /// Display label; `None` means "show the id".
    pub label: Option<String>,
    /// Prerequisites in the order they were listed.
    pub prerequisites: Vec<TaskId>,
}

impl CourseEntry {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Ordered mapping from course to its prerequisite courses.
///
/// Iteration order is insertion order; it is what the critical path engine
/// uses to break ties, so two curricula with the same courses listed in a
/// different order may yield different (equally long) critical paths.
///
/// A prerequisite does not have to be declared as a course of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Curriculum {
    courses: IndexMap<TaskId, CourseEntry>,
}

impl Curriculum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`Curriculum::insert`] without a label.
    pub fn with_course<I, P>(mut self, id: impl Into<TaskId>, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<TaskId>,
    {
        self.insert(id, None, prerequisites);
        self
    }

    /// Builder-style variant of [`Curriculum::insert`] with a display label.
    pub fn with_labeled_course<I, P>(
        mut self,
        id: impl Into<TaskId>,
        label: impl Into<String>,
        prerequisites: I,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<TaskId>,
    {
        self.insert(id, Some(label.into()), prerequisites);
        self
    }

    /// Add a course. Re-inserting an existing id replaces its label and
    /// prerequisites but keeps its original position.
    pub fn insert<I, P>(&mut self, id: impl Into<TaskId>, label: Option<String>, prerequisites: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<TaskId>,
    {
        let id = id.into();
        let entry = CourseEntry {
            id: id.clone(),
            label,
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        };
        self.courses.insert(id, entry);
    }

    pub fn courses(&self) -> impl Iterator<Item = &CourseEntry> {
        self.courses.values()
    }

    pub fn get(&self, id: &str) -> Option<&CourseEntry> {
        self.courses.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// `(course, prerequisite)` pairs whose prerequisite is never declared as
    /// a course, in curriculum order.
    pub fn undeclared_prerequisites(&self) -> Vec<(&str, &str)> {
        self.courses()
            .flat_map(|entry| {
                entry
                    .prerequisites
                    .iter()
                    .filter(|p| !self.contains(p))
                    .map(move |p| (entry.id.as_str(), p.as_str()))
            })
            .collect()
    }
}

impl<K, I, P> FromIterator<(K, I)> for Curriculum
where
    K: Into<TaskId>,
    I: IntoIterator<Item = P>,
    P: Into<TaskId>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut curriculum = Curriculum::new();
        for (id, prerequisites) in iter {
            curriculum.insert(id, None, prerequisites);
        }
        curriculum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_position_on_reinsert() {
        let mut c = Curriculum::new()
            .with_course("Z", Vec::<&str>::new())
            .with_course("A", ["Z"])
            .with_course("M", ["A"]);
        c.insert("A", Some("Alpha".to_string()), Vec::<&str>::new());

        let ids: Vec<&str> = c.courses().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["Z", "A", "M"]);
        assert_eq!(c.get("A").map(|e| e.display_label()), Some("Alpha"));
        assert!(c.get("A").is_some_and(|e| e.prerequisites.is_empty()));
    }

    #[test]
    fn reports_undeclared_prerequisites() {
        let c: Curriculum = [("Simulation", vec!["Operations Research", "Programming"])]
            .into_iter()
            .chain([("Programming", vec![])])
            .collect();

        assert_eq!(
            c.undeclared_prerequisites(),
            vec![("Simulation", "Operations Research")]
        );
    }
}
