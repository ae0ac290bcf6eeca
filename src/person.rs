use std::fmt::Display;

/// A vertex of the friendship graph.
///
/// A person is a student iff a school is attached, so the school can never be present
/// for a non-student.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    school: Option<String>,
}

impl Person {
    /// Creates a student attending `school`
    pub fn student<N: Into<String>, S: Into<String>>(name: N, school: S) -> Self {
        Self {
            name: name.into(),
            school: Some(school.into()),
        }
    }

    /// Creates a person that is not a student
    pub fn non_student<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            school: None,
        }
    }

    /// Creates a student if `school` is given and a non-student otherwise
    pub fn new<N: Into<String>>(name: N, school: Option<&str>) -> Self {
        match school {
            Some(school) => Self::student(name, school),
            None => Self::non_student(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn school(&self) -> Option<&str> {
        self.school.as_deref()
    }

    pub fn is_student(&self) -> bool {
        self.school.is_some()
    }

    /// Returns *true* if the person is a student at the given school
    pub fn attends(&self, school: &str) -> bool {
        self.school.as_deref() == Some(school)
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.school {
            Some(school) => write!(f, "{} ({school})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
