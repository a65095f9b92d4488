use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use super::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Future returned by a `with_txn` closure; borrows the transaction.
pub type TxnFuture<'t, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + 't>>;

/// Execute a function within a database transaction.
///
/// Commits when the closure returns `Ok`, rolls back when it returns `Err`.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> TxnFuture<'t, R>,
{
    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}
