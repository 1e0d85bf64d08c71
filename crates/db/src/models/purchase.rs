//! Purchase entity model and DTOs.

use operator_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A movie purchase held in the purchase store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Purchase {
    pub id: DbId,
    pub movie_id: DbId,
    pub purchase_date: Option<Date>,
    pub total_price: f64,
    pub payment_type: Option<String>,
}

/// DTO for creating a purchase, also the body of a full replacement (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePurchase {
    pub movie_id: DbId,
    pub purchase_date: Option<Date>,
    #[serde(default)]
    pub total_price: f64,
    pub payment_type: Option<String>,
}

/// DTO for a merge-patch. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchPurchase {
    pub movie_id: Option<DbId>,
    pub purchase_date: Option<Date>,
    pub total_price: Option<f64>,
    pub payment_type: Option<String>,
}

impl Record for Purchase {
    type Draft = CreatePurchase;

    fn from_draft(id: DbId, draft: CreatePurchase) -> Self {
        Self {
            id,
            movie_id: draft.movie_id,
            purchase_date: draft.purchase_date,
            total_price: draft.total_price,
            payment_type: draft.payment_type,
        }
    }
}

impl Purchase {
    pub fn apply_patch(&mut self, patch: PatchPurchase) {
        if let Some(movie_id) = patch.movie_id {
            self.movie_id = movie_id;
        }
        if let Some(purchase_date) = patch.purchase_date {
            self.purchase_date = Some(purchase_date);
        }
        if let Some(total_price) = patch.total_price {
            self.total_price = total_price;
        }
        if let Some(payment_type) = patch.payment_type {
            self.payment_type = Some(payment_type);
        }
    }
}
