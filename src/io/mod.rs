/*!
# IO

Reading and writing friendship descriptions.

The only supported format is the `|`-delimited friendship format (see [`friends`]): a person
count, one line per person, then one line per friendship. Both the reader and the writer are
configured with the builder pattern; [`FriendsRead`] and [`FriendsWrite`] are shorthands
for the default settings.
*/

pub mod friends;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{error::Result, prelude::*};

pub use friends::*;

/// Creating graphs from a friendship description with default reader settings
pub trait FriendsRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_friends<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_friends_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_friends(BufReader::new(File::open(path)?))
    }
}

impl FriendsRead for FriendGraph {
    fn try_read_friends<R: BufRead>(reader: R) -> Result<Self> {
        FriendsReader::default().try_read_graph(reader)
    }
}

/// Writing graphs as friendship description with default writer settings
pub trait FriendsWrite {
    /// Tries to write the graph to a writer
    fn try_write_friends<W: Write>(&self, writer: W) -> std::io::Result<()>;

    /// Tries to write the graph to a file
    fn try_write_friends_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        self.try_write_friends(BufWriter::new(File::create(path)?))
    }
}

impl FriendsWrite for FriendGraph {
    fn try_write_friends<W: Write>(&self, writer: W) -> std::io::Result<()> {
        FriendsWriter::default().try_write_graph(self, writer)
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info).into());
        }
    };
}

use io_error;
use raise_error_unless;
