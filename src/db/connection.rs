use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use crate::errors::ServerError;

// Thread-local connection slot. astra hands requests to a worker pool, so
// each worker thread lazily opens and keeps its own connection.
thread_local! {
    static STORE_CONN: RefCell<Option<Connection>> = RefCell::new(None);
}

/// Handle to the listing store. Cheap to clone; the actual connection lives
/// in a thread-local slot and is opened on first use per thread.
#[derive(Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        let inner_result = STORE_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                if slot.is_none() {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| ServerError::StoreUnavailable(format!("open failed: {e}")))?;
                    *slot = Some(conn);
                }
                match slot.as_mut() {
                    Some(conn) => f(conn),
                    None => Err(ServerError::InternalError),
                }
            })
            .map_err(|_| ServerError::InternalError)?;
        inner_result
    }
}

/// Initialize the store from a SQL schema file.
pub fn init_db(store: &Store, schema_path: &str) -> Result<(), ServerError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| ServerError::StoreUnavailable(format!("failed to read schema file: {e}")))?;

    store.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| ServerError::StoreUnavailable(format!("failed to apply schema: {e}")))?;
        Ok(())
    })?;

    Ok(())
}
