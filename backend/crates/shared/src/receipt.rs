//! Store Operation Receipts
//!
//! Wire-level acknowledgements returned by write endpoints. Every insert
//! route responds with the same `{acknowledged, insertedId}` shape, so the
//! DTO lives in the kernel instead of being redefined per crate.

use serde::Serialize;
use uuid::Uuid;

/// Acknowledgement for a single-record insert
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertReceipt {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertReceipt {
    pub fn new(inserted_id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Acknowledgement for a bulk delete
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReceipt {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteReceipt {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
