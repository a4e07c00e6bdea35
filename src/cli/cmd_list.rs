use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::db::Db;
use crate::errors::{Error, Result};
use crate::util::{clip, display_text};

use super::Stdio;

const USAGE: &str = "\
usage: boltview list PATH BUCKET_NAME

List prints a table of key-value pairs in that bucket
";

/// Keys wider than this are clipped in the KEY column.
const KEY_DISPLAY_WIDTH: usize = 12;

#[derive(Parser, Debug)]
#[command(name = "boltview list", disable_help_flag = true)]
struct Args {
    #[arg(short = 'h', long = "help")]
    help: bool,
    path: Option<PathBuf>,
    bucket: Option<String>,
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
    let bucket = args
        .bucket
        .filter(|b| !b.is_empty())
        .ok_or(Error::BucketRequired)?;

    let db = Db::open(&path)?;

    writeln!(io.stdout, "KEY          VALUE")?;
    writeln!(io.stdout, "============ ============")?;
    db.scan(&bucket, |k, v| {
        writeln!(
            io.stdout,
            "{:<12} {:<12}",
            display_text(clip(k, KEY_DISPLAY_WIDTH)),
            display_text(v)
        )?;
        Ok(())
    })
}
