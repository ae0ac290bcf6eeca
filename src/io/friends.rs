//! # Friends-Format
//!
//! ```text
//! 4
//! sam|y|rutgers
//! jane|y|rutgers
//! nick|n
//! kaitlin|y|princeton
//! sam|jane
//! jane|nick
//! ```
//!
//! The first non-comment line holds the number of persons `n`. It is followed by `n` person
//! lines `name|y|school` (student) or `name|n` (non-student). All remaining non-empty lines
//! are friendships `name|name` between declared persons. Lines and tokens are trimmed.

use std::io::{BufRead, ErrorKind, Lines, Write};

use tracing::debug;

use super::*;
use crate::error::GraphError;

/// A configurable reader for the Friends-Format
#[derive(Debug, Clone)]
pub struct FriendsReader {
    delimiter: char,
    student_marker: String,
    non_student_marker: String,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: Option<String>,
}

impl Default for FriendsReader {
    fn default() -> Self {
        Self {
            delimiter: '|',
            student_marker: "y".to_string(),
            non_student_marker: "n".to_string(),
            comment_identifier: None,
        }
    }
}

impl FriendsReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the token delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Updates the markers distinguishing students from non-students
    pub fn student_markers<S: Into<String>, T: Into<String>>(
        mut self,
        student: S,
        non_student: T,
    ) -> Self {
        self.student_marker = student.into();
        self.non_student_marker = non_student.into();
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = Some(c.into());
        self
    }

    /// Reads a graph from the given reader.
    ///
    /// # Errors
    /// - [`GraphError::Io`] with `ErrorKind::InvalidData` for malformed input,
    /// - [`GraphError::NotFound`] for friendships with undeclared persons,
    /// - [`GraphError::DuplicatePerson`] / [`GraphError::SelfFriendship`] for invalid declarations.
    pub fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<FriendGraph> {
        let mut lines = FriendsLines {
            lines: reader.lines(),
            comment_identifier: self.comment_identifier.as_deref(),
        };

        let header = lines
            .next_line()?
            .ok_or(io_error!(ErrorKind::InvalidData, "Number of persons not found"))?;
        let n: usize = header.parse().map_err(|_| {
            io_error!(
                ErrorKind::InvalidData,
                format!("Invalid number of persons: `{header}`")
            )
        })?;

        let mut builder = FriendGraphBuilder::with_capacity(n);
        for i in 0..n {
            let line = lines.next_line()?.ok_or(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of input: expected {n} persons, found {i}")
            ))?;
            let (name, school) = self.parse_person(&line)?;
            builder.add_person(name, school)?;
        }

        while let Some(line) = lines.next_line()? {
            let (a, b) = self.parse_friendship(&line)?;
            builder.add_friendship(a, b)?;
        }

        let graph = builder.build();
        debug!(
            persons = graph.number_of_nodes(),
            friendships = graph.number_of_friendships(),
            "Read friendship description"
        );
        Ok(graph)
    }

    fn parse_person<'l>(&self, line: &'l str) -> Result<(&'l str, Option<&'l str>)> {
        let mut parts = line.split(self.delimiter).map(str::trim);
        let name = parts.next().unwrap_or_default();
        raise_error_unless!(
            !name.is_empty(),
            ErrorKind::InvalidData,
            format!("Missing name in person line `{line}`")
        );

        let school = match parts.next() {
            Some(marker) if marker == self.student_marker => {
                let school = parts.next().filter(|s| !s.is_empty());
                raise_error_unless!(
                    school.is_some(),
                    ErrorKind::InvalidData,
                    format!("Missing school of student `{name}`")
                );
                school
            }
            Some(marker) if marker == self.non_student_marker => None,
            _ => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid student marker in person line `{line}`")
                )
                .into());
            }
        };

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Trailing tokens in person line `{line}`")
        );
        Ok((name, school))
    }

    fn parse_friendship<'l>(&self, line: &'l str) -> Result<(&'l str, &'l str)> {
        let parts: Vec<&str> = line.split(self.delimiter).map(str::trim).collect();
        match parts.as_slice() {
            [a, b] if !a.is_empty() && !b.is_empty() => Ok((*a, *b)),
            _ => Err(GraphError::Io(io_error!(
                ErrorKind::InvalidData,
                format!("Invalid friendship line `{line}`")
            ))),
        }
    }
}

/// Yields trimmed, non-empty, non-comment lines
struct FriendsLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: Option<&'a str>,
}

impl<R: BufRead> FriendsLines<'_, R> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        for line in self.lines.by_ref() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty()
                || self
                    .comment_identifier
                    .is_some_and(|c| trimmed.starts_with(c))
            {
                continue;
            }
            return Ok(Some(trimmed.to_string()));
        }
        Ok(None)
    }
}

/// A writer for the Friends-Format
#[derive(Debug, Clone)]
pub struct FriendsWriter {
    delimiter: char,
}

impl Default for FriendsWriter {
    fn default() -> Self {
        Self { delimiter: '|' }
    }
}

impl FriendsWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the token delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Writes persons in index order followed by friendships in insertion order.
    /// Fails with `ErrorKind::InvalidInput` if a name or school contains the delimiter.
    pub fn try_write_graph<W: Write>(
        &self,
        graph: &FriendGraph,
        mut writer: W,
    ) -> std::io::Result<()> {
        let d = self.delimiter;

        writeln!(writer, "{}", graph.number_of_nodes())?;
        for person in graph.persons() {
            raise_error_unless!(
                !person.name().contains(d) && !person.school().is_some_and(|s| s.contains(d)),
                ErrorKind::InvalidInput,
                format!("`{person}` contains the delimiter `{d}`")
            );

            match person.school() {
                Some(school) => writeln!(writer, "{}{d}y{d}{school}", person.name())?,
                None => writeln!(writer, "{}{d}n", person.name())?,
            }
        }

        for Edge(u, v) in graph.friendships() {
            writeln!(writer, "{}{d}{}", graph.name_of(u), graph.name_of(v))?;
        }

        writer.flush()
    }
}
