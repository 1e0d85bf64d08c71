pub mod purchase;
pub mod rental;
