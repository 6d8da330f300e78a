mod index;
mod list;
mod manage;
mod purchase;
mod types;
mod views;

pub use types::{Listing, ListingId};
pub(crate) use list::verify_listed_token;
