use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::db::Db;
use crate::errors::{Error, Result};

use super::Stdio;

const USAGE: &str = "\
usage: boltview buckets PATH

Buckets prints a table of buckets in the database
";

#[derive(Parser, Debug)]
#[command(name = "boltview buckets", disable_help_flag = true)]
struct Args {
    #[arg(short = 'h', long = "help")]
    help: bool,
    path: Option<PathBuf>,
    /// Extra positional arguments are accepted and ignored.
    #[arg(hide = true)]
    #[allow(dead_code)]
    rest: Vec<String>,
}

pub fn exec(io: &mut Stdio<'_>, args: &[String]) -> Result<()> {
    let args: Args = super::parse_args(io, args)?;
    if args.help {
        write!(io.stderr, "{}", USAGE)?;
        return Err(Error::Usage);
    }
    let path = args
        .path
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(Error::PathRequired)?;

    let db = Db::open(&path)?;

    writeln!(io.stdout, "NAME     ITEMS")?;
    writeln!(io.stdout, "======== ========")?;
    for stat in db.buckets()? {
        writeln!(io.stdout, "{:<8} {:<8}", stat.name, stat.items)?;
    }
    Ok(())
}
