//! Rental entity model and DTOs.

use operator_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A movie rental held in the rental store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rental {
    pub id: DbId,
    pub movie_id: DbId,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub final_price: f64,
    pub receipt_type: Option<String>,
}

/// DTO for creating a rental, also the body of a full replacement (PUT).
///
/// Omitted fields become `null` (or `0` for the price); a replacement
/// therefore clears whatever it leaves out.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRental {
    pub movie_id: DbId,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    #[serde(default)]
    pub final_price: f64,
    pub receipt_type: Option<String>,
}

/// DTO for a merge-patch. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchRental {
    pub movie_id: Option<DbId>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub final_price: Option<f64>,
    pub receipt_type: Option<String>,
}

impl Record for Rental {
    type Draft = CreateRental;

    fn from_draft(id: DbId, draft: CreateRental) -> Self {
        Self {
            id,
            movie_id: draft.movie_id,
            start_date: draft.start_date,
            end_date: draft.end_date,
            final_price: draft.final_price,
            receipt_type: draft.receipt_type,
        }
    }
}

impl Rental {
    /// Merge `patch` into this rental. A zero price is a real value, not
    /// "unchanged".
    pub fn apply_patch(&mut self, patch: PatchRental) {
        if let Some(movie_id) = patch.movie_id {
            self.movie_id = movie_id;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = Some(start_date);
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = Some(end_date);
        }
        if let Some(final_price) = patch.final_price {
            self.final_price = final_price;
        }
        if let Some(receipt_type) = patch.receipt_type {
            self.receipt_type = Some(receipt_type);
        }
    }
}
