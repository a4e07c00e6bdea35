//! Command dispatch: the first token selects a handler, the remaining tokens
//! are the handler's argument slice.

use std::io::{Read, Write};

use crate::errors::{Error, Result};

pub mod cmd_buckets;
pub mod cmd_delete;
pub mod cmd_insert;
pub mod cmd_list;

/// Process streams threaded into every handler; tests swap in buffers.
pub struct Stdio<'a> {
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

const USAGE: &str = "\
BoltView is a tool for reading/writing single-file key-value databases.

Usage:

    boltview command [arguments]

The commands are:

    buckets       list buckets in the database
    list          list key-value pairs in a bucket
    insert        insert a key-value pair into a bucket
    delete        delete a key-value pair from a bucket

Use \"boltview [command] -h\" for more information about a command.
";

/// The closed command set, matched once at the dispatch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cmd {
    Buckets,
    List,
    Insert,
    Delete,
    Help,
    Unknown,
}

impl Cmd {
    fn from_token(token: &str) -> Cmd {
        match token {
            "buckets" => Cmd::Buckets,
            "list" => Cmd::List,
            "insert" => Cmd::Insert,
            "delete" => Cmd::Delete,
            "help" => Cmd::Help,
            _ => Cmd::Unknown,
        }
    }
}

/// Execute one command invocation against the given streams.
///
/// Usage text goes to stderr; command output goes to stdout. The caller maps
/// the error to the exit status.
pub fn run(io: &mut Stdio<'_>, args: &[String]) -> Result<()> {
    // A command token is required up front.
    let first = match args.first() {
        Some(a) if !a.starts_with('-') => a.as_str(),
        _ => {
            write!(io.stderr, "{}", USAGE)?;
            return Err(Error::Usage);
        }
    };

    match Cmd::from_token(first) {
        Cmd::Buckets => cmd_buckets::exec(io, &args[1..]),
        Cmd::List => cmd_list::exec(io, &args[1..]),
        Cmd::Insert => cmd_insert::exec(io, &args[1..]),
        Cmd::Delete => cmd_delete::exec(io, &args[1..]),
        Cmd::Help => {
            write!(io.stderr, "{}", USAGE)?;
            Err(Error::Usage)
        }
        Cmd::Unknown => Err(Error::UnknownCommand),
    }
}

/// Parse a handler's argument slice into its clap `Args` struct. Parse
/// diagnostics go to stderr and surface as usage errors.
fn parse_args<T: clap::Parser>(io: &mut Stdio<'_>, args: &[String]) -> Result<T> {
    match T::try_parse_from(std::iter::once(String::from("boltview")).chain(args.iter().cloned())) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            write!(io.stderr, "{}", e.render())?;
            Err(Error::Usage)
        }
    }
}
