use hush_content::ContactRequest;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InboxError {
    #[error("cannot prepare inbox directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("inbox database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredContact {
    pub id: i64,
    pub request: ContactRequest,
    /// Seconds since the Unix epoch.
    pub received_at: String,
}

/// Append-only store of contact requests. Each operation opens its own
/// connection, so clones can be moved onto blocking threads freely.
#[derive(Clone, Debug)]
pub struct ContactInbox {
    db_path: Arc<PathBuf>,
}

impl ContactInbox {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InboxError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            CREATE TABLE IF NOT EXISTS contact_requests (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                organization TEXT NOT NULL,
                scope TEXT NOT NULL,
                requirements TEXT NOT NULL,
                received_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_contact_received ON contact_requests(received_at);
            ",
        )?;

        Ok(Self {
            db_path: Arc::new(path.to_path_buf()),
        })
    }

    pub fn record(&self, request: &ContactRequest, received_at: &str) -> Result<i64, InboxError> {
        let conn = Connection::open(&*self.db_path)?;
        conn.execute(
            "INSERT INTO contact_requests (name, email, organization, scope, requirements, received_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                request.name,
                request.email,
                request.organization,
                request.scope,
                request.requirements,
                received_at,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<StoredContact>, InboxError> {
        let conn = Connection::open(&*self.db_path)?;
        let mut stmt = conn.prepare(
            "SELECT id, name, email, organization, scope, requirements, received_at
             FROM contact_requests
             ORDER BY id DESC
             LIMIT ?1",
        )?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![limit], map_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn count(&self) -> Result<u64, InboxError> {
        let conn = Connection::open(&*self.db_path)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM contact_requests", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<StoredContact> {
    Ok(StoredContact {
        id: row.get(0)?,
        request: ContactRequest {
            name: row.get(1)?,
            email: row.get(2)?,
            organization: row.get(3)?,
            scope: row.get(4)?,
            requirements: row.get(5)?,
        },
        received_at: row.get(6)?,
    })
}

/// Seconds since the Unix epoch, as stored in `received_at`.
pub fn current_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return "0".into();
    };
    duration.as_secs().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join("hush-inbox-tests").join(format!("{name}-{nanos}.db"))
    }

    fn request(name: &str) -> ContactRequest {
        ContactRequest {
            name: name.into(),
            email: format!("{}@hospital.org", name.to_lowercase()),
            organization: "City NICU Hospital".into(),
            scope: "6 beds pilot".into(),
            requirements: String::new(),
        }
    }

    #[test]
    fn record_and_read_back() {
        let inbox = ContactInbox::open(db_path("roundtrip")).expect("open");
        let id = inbox.record(&request("Jane"), "1").expect("record");
        assert!(id > 0);

        let stored = inbox.recent(10).expect("recent");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].request, request("Jane"));
        assert_eq!(stored[0].received_at, "1");
    }

    #[test]
    fn recent_is_newest_first_and_limited() {
        let inbox = ContactInbox::open(db_path("recent")).expect("open");
        for (i, name) in ["Ari", "Jade", "Satya"].into_iter().enumerate() {
            inbox.record(&request(name), &i.to_string()).expect("record");
        }

        let stored = inbox.recent(2).expect("recent");
        let names: Vec<_> = stored.iter().map(|s| s.request.name.as_str()).collect();
        assert_eq!(names, ["Satya", "Jade"]);
        assert_eq!(inbox.count().expect("count"), 3);
    }

    #[test]
    fn reopening_keeps_existing_rows() {
        let path = db_path("reopen");
        ContactInbox::open(&path)
            .expect("open")
            .record(&request("Ari"), "1")
            .expect("record");
        let reopened = ContactInbox::open(&path).expect("reopen");
        assert_eq!(reopened.count().expect("count"), 1);
    }
}
