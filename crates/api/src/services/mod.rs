//! Business rules for rentals and purchases.
//!
//! Each service owns a handle to its entity store and a [`MovieGate`] that
//! checks the movie catalog before anything is created. Held in
//! [`AppState`](crate::state::AppState) as `Arc`s.

pub mod movie_gate;
pub mod purchase;
pub mod rental;

pub use movie_gate::MovieGate;
pub use purchase::PurchaseService;
pub use rental::RentalService;
