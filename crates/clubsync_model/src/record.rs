//! The stored-record envelope.

use crate::id::RecordId;
use crate::kind::ResourceKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record schema belonging to exactly one resource kind.
///
/// Implemented by the eight field structs in this crate. The bound set
/// is what the store collections and the sync client need to move records
/// across the wire and hold them in memory.
pub trait ResourceRecord:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// The kind this record belongs to.
    const KIND: ResourceKind;
}

/// A record together with its server-issued identifier.
///
/// This is the shape every read endpoint returns and the shape local
/// application state holds. The kind-specific fields are flattened next
/// to `id` on the wire:
///
/// ```json
/// { "id": "4b3c…", "name": "A. Keeper", "role": "Goalkeeper", … }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    /// Server-issued identifier, unique within the kind.
    pub id: RecordId,
    /// Kind-specific fields.
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Stored<T> {
    /// Wraps fields with a freshly issued identifier.
    pub fn new(fields: T) -> Self {
        Self {
            id: RecordId::new(),
            fields,
        }
    }

    /// Wraps fields with a known identifier.
    pub fn with_id(id: RecordId, fields: T) -> Self {
        Self { id, fields }
    }
}
