//! Engine adapter: thin transactional wrapper over a single-file redb database.
//!
//! Every operation runs exactly one transaction. Write transactions commit
//! explicitly; dropping one without commit rolls it back. Dropping `Db`
//! releases the file handle, so the file is closed on every exit path.

use std::path::Path;

use log::debug;
use redb::{
    Database, ReadableTable, ReadableTableMetadata, TableDefinition, TableError, TableHandle,
    WriteTransaction,
};

use crate::errors::{Error, Result};

/// Bucket name with its entry count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketStat {
    pub name: String,
    pub items: u64,
}

/// Buckets are tables keyed and valued by raw byte strings. The definition
/// is built dynamically from the bucket name.
fn bucket_def(name: &str) -> TableDefinition<'_, &'static [u8], &'static [u8]> {
    TableDefinition::new(name)
}

pub struct Db {
    db: Database,
}

impl Db {
    /// Open an existing database file. Absent paths fail with `FileNotFound`
    /// before the engine is involved; the file is never created here.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound);
        }
        let db = Database::open(path)?;
        debug!("opened database {}", path.display());
        Ok(Self { db })
    }

    /// All top-level buckets with their entry counts, in catalog order.
    pub fn buckets(&self) -> Result<Vec<BucketStat>> {
        let tx = self.db.begin_read()?;
        let mut stats = Vec::new();
        for handle in tx.list_tables()? {
            let name = handle.name().to_string();
            // Untyped access keeps the count working for tables whose
            // key/value types this tool did not write.
            let table = tx.open_untyped_table(handle)?;
            let items = table.len()?;
            stats.push(BucketStat { name, items });
        }
        Ok(stats)
    }

    /// Forward ordered scan over one bucket, first key to last.
    pub fn scan(
        &self,
        bucket: &str,
        mut f: impl FnMut(&[u8], &[u8]) -> Result<()>,
    ) -> Result<()> {
        let tx = self.db.begin_read()?;
        let table = match tx.open_table(bucket_def(bucket)) {
            Ok(t) => t,
            Err(TableError::TableDoesNotExist(_)) => return Err(Error::BucketNotFound),
            Err(e) => return Err(e.into()),
        };
        for entry in table.iter()? {
            let (k, v) = entry?;
            f(k.value(), v.value())?;
        }
        Ok(())
    }

    /// Upsert key -> value in an existing bucket. The bucket is never created.
    pub fn put(&self, bucket: &str, key: &[u8], value: &[u8]) -> Result<()> {
        let tx = self.db.begin_write()?;
        require_bucket(&tx, bucket)?;
        {
            let mut table = tx.open_table(bucket_def(bucket))?;
            table.insert(key, value)?;
        }
        tx.commit()?;
        debug!("put key ({} B) into bucket '{}'", key.len(), bucket);
        Ok(())
    }

    /// Remove a key from an existing bucket. Returns whether the key existed;
    /// removing an absent key still commits.
    pub fn del(&self, bucket: &str, key: &[u8]) -> Result<bool> {
        let tx = self.db.begin_write()?;
        require_bucket(&tx, bucket)?;
        let existed = {
            let mut table = tx.open_table(bucket_def(bucket))?;
            let existed = table.remove(key)?.is_some();
            existed
        };
        tx.commit()?;
        debug!("del key from bucket '{}' (existed={})", bucket, existed);
        Ok(existed)
    }
}

/// Fail with `BucketNotFound` unless the bucket is already in the catalog.
/// The caller's early return drops the transaction, rolling it back.
fn require_bucket(tx: &WriteTransaction, bucket: &str) -> Result<()> {
    if tx.list_tables()?.any(|h| h.name() == bucket) {
        Ok(())
    } else {
        Err(Error::BucketNotFound)
    }
}
