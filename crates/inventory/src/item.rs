use serde::{Deserialize, Serialize};

use salvage_core::{Entity, ItemId};

/// One inventory record.
///
/// Immutable once constructed. Deserialization is strict: every field must be
/// present and unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    id: ItemId,
    name: String,
    #[serde(rename = "type")]
    item_type: String,
    condition: String,
    amount: i64,
}

impl Item {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        item_type: impl Into<String>,
        condition: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            item_type: item_type.into(),
            condition: condition.into(),
            amount,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
