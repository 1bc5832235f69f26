use crate::error::{RejestrError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Patch applied by `edit`: top-level fields overwrite the record's fields.
pub type UserPatch = Map<String, Value>;

/// Keys backed by typed fields of [`UserRecord`]; they never live in `extra`.
pub const RESERVED_FIELDS: [&str; 6] = [
    "user_id",
    "pesel",
    "nip",
    "regon",
    "status",
    "removed_at",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: i64,
    pub pesel: String,
    pub nip: String,
    pub regon: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_at: Option<DateTime<Utc>>,
    // Any other fields the caller stores alongside the identifiers
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(
        user_id: i64,
        pesel: impl Into<String>,
        nip: impl Into<String>,
        regon: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            pesel: pesel.into(),
            nip: nip.into(),
            regon: regon.into(),
            status: Status::Active,
            removed_at: None,
            extra: Map::new(),
        }
    }

    /// Sets an additional field. A reserved key is written to its typed field
    /// instead; if the value does not fit it stays in `extra`, where
    /// [`normalized`](UserRecord::normalized) reports it.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let reserved = is_reserved(&key);
        self.extra.insert(key, value.into());
        if reserved {
            if let Ok(record) = self.clone().normalized() {
                return record;
            }
        }
        self
    }

    /// Moves reserved keys out of `extra` and onto the typed fields, the way
    /// an edit patch would, so the record serializes with each key once.
    pub fn normalized(mut self) -> Result<UserRecord> {
        let mut overrides = UserPatch::new();
        for key in RESERVED_FIELDS {
            if let Some(value) = self.extra.remove(key) {
                overrides.insert(key.to_string(), value);
            }
        }
        if overrides.is_empty() {
            return Ok(self);
        }
        self.patched(&overrides)
    }

    pub fn is_removed(&self) -> bool {
        self.status == Status::Removed
    }

    /// Soft delete. The first removal stamps `removed_at`; later ones keep it.
    pub fn mark_removed(&mut self) {
        self.status = Status::Removed;
        if self.removed_at.is_none() {
            self.removed_at = Some(Utc::now());
        }
    }

    /// Returns a copy of this record with the patch fields written over it.
    ///
    /// Fields absent from the patch are left as they are. The merged object
    /// must still be a valid record, and a removed record cannot be made
    /// active again.
    pub fn patched(&self, patch: &UserPatch) -> Result<UserRecord> {
        let mut fields = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            other => {
                return Err(RejestrError::InvalidRecord(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        };
        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }

        let mut updated: UserRecord = serde_json::from_value(Value::Object(fields))
            .map_err(|e| RejestrError::InvalidRecord(e.to_string()))?;

        if self.is_removed() && !updated.is_removed() {
            return Err(RejestrError::StatusTransition {
                user_id: self.user_id,
            });
        }
        if self.is_removed() {
            // the first removal time is kept whatever the patch says
            updated.removed_at = self.removed_at;
        }
        if updated.is_removed() {
            updated.mark_removed();
        }
        Ok(updated)
    }
}

fn is_reserved(key: &str) -> bool {
    RESERVED_FIELDS.contains(&key)
}
