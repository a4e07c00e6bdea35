use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::db::Db;
use crate::errors::{Error, Result};

use super::Stdio;

const USAGE: &str = "\
usage: boltview delete PATH BUCKET_NAME KEY

Delete removes a key-value pair from the bucket
";

#[derive(Parser, Debug)]
#[command(name = "boltview delete", disable_help_flag = true)]
struct Args {
    #[arg(short = 'h', long = "help")]
    help: bool,
    path: Option<PathBuf>,
    bucket: Option<String>,
    key: Option<String>,
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
    let key = args.key.filter(|k| !k.is_empty()).ok_or(Error::KeyRequired)?;

    let db = Db::open(&path)?;
    // Removing an absent key is a committed no-op.
    db.del(&bucket, key.as_bytes())?;
    Ok(())
}
