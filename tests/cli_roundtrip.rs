use std::io;
use std::path::Path;

use anyhow::Result;
use redb::{Database, TableDefinition};
use tempfile::TempDir;

use boltview::cli::{self, Stdio};
use boltview::Error;

const VOLUME: TableDefinition<&[u8], &[u8]> = TableDefinition::new("volume");

#[test]
fn insert_list_delete_roundtrip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("t.db");
    seed(&path)?;
    let path_arg = path.to_str().unwrap();

    // 1) buckets: one bucket, one item
    let (res, out, _) = run(&["buckets", path_arg]);
    res?;
    assert_eq!(out, "NAME     ITEMS\n======== ========\nvolume   1       \n");

    // 2) insert a new pair, silent on success
    let (res, out, _) = run(&["insert", path_arg, "volume", "hello", "world"]);
    res?;
    assert_eq!(out, "");

    // 3) list shows both rows, forward key order
    let (res, out, _) = run(&["list", path_arg, "volume"]);
    res?;
    assert_eq!(
        out,
        "KEY          VALUE\n\
         ============ ============\n\
         hello        world       \n\
         wx-pv        {\"a\":1}     \n"
    );

    // 4) delete the new pair, only the seeded row remains
    let (res, out, _) = run(&["delete", path_arg, "volume", "hello"]);
    res?;
    assert_eq!(out, "");

    let (res, out, _) = run(&["list", path_arg, "volume"]);
    res?;
    assert_eq!(
        out,
        "KEY          VALUE\n\
         ============ ============\n\
         wx-pv        {\"a\":1}     \n"
    );

    // 5) deleting an absent key still succeeds
    let (res, _, _) = run(&["delete", path_arg, "volume", "hello"]);
    res?;

    Ok(())
}

#[test]
fn insert_is_an_idempotent_upsert() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("t.db");
    seed(&path)?;
    let path_arg = path.to_str().unwrap();

    // Same key/value twice leaves a single entry.
    run(&["insert", path_arg, "volume", "hello", "world"]).0?;
    run(&["insert", path_arg, "volume", "hello", "world"]).0?;

    let (res, out, _) = run(&["buckets", path_arg]);
    res?;
    assert_eq!(out, "NAME     ITEMS\n======== ========\nvolume   2       \n");

    // Re-inserting with a new value overwrites in place.
    run(&["insert", path_arg, "volume", "hello", "there"]).0?;

    let (res, out, _) = run(&["list", path_arg, "volume"]);
    res?;
    assert!(out.contains("hello        there       \n"));
    assert!(!out.contains("world"));

    let (res, out, _) = run(&["buckets", path_arg]);
    res?;
    assert_eq!(out, "NAME     ITEMS\n======== ========\nvolume   2       \n");

    Ok(())
}

fn seed(path: &Path) -> Result<()> {
    let db = Database::create(path)?;
    let tx = db.begin_write()?;
    {
        let mut table = tx.open_table(VOLUME)?;
        table.insert(b"wx-pv".as_slice(), br#"{"a":1}"#.as_slice())?;
    }
    tx.commit()?;
    Ok(())
}

fn run(args: &[&str]) -> (Result<(), Error>, String, String) {
    let mut stdin = io::empty();
    let mut stdout: Vec<u8> = Vec::new();
    let mut stderr: Vec<u8> = Vec::new();
    let res = {
        let mut streams = Stdio {
            stdin: &mut stdin,
            stdout: &mut stdout,
            stderr: &mut stderr,
        };
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        cli::run(&mut streams, &args)
    };
    (
        res,
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(stderr).unwrap(),
    )
}
