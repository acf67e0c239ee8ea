use crate::domain::model::Student;

/// Case-insensitive exact comparison used for names and the done keyword.
/// Characters are compared one at a time, first by upper case and then by
/// lower case, so lengths never change (`"ß"` does not match `"SS"`).
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_match(x, y))
}

fn chars_match(x: char, y: char) -> bool {
    if x == y {
        return true;
    }
    let (ux, uy) = (simple_upper(x), simple_upper(y));
    ux == uy || simple_lower(ux) == simple_lower(uy)
}

// Multi-char expansions ("ß" -> "SS") keep the original char.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// U+0130 is the only char whose lowercase expands; its simple form is 'i'.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Every student added during the session, in insertion order.
/// Names are not unique and nothing is ever removed.
#[derive(Debug, Default)]
pub struct Registry {
    students: Vec<Student>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Case-insensitive exact match; the earliest student wins on duplicates.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| names_match(s.name(), name))
    }

    /// Read-only counterpart of `find_by_name_mut`.
    pub fn find_by_name(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| names_match(s.name(), name))
    }
}
