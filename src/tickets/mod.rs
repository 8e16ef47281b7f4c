//! Ticket listing logic: sold-out computation, availability ranking, the
//! presentation split, and the purchase call-to-action.
//!
//! Everything here is a pure function over already-fetched data. The query
//! layer materializes a single snapshot per render and hands it in; nothing
//! in this module touches the database or caches derived state.

pub mod availability;
pub mod presentation;
pub mod purchase;

pub use availability::{rank_by_availability, sold_out_by_ticket, QuotaUsage, RankedTicket};
pub use presentation::{split_listing, PlacedTicket, TicketListing};
pub use purchase::{PurchaseAction, PurchaseActionResolver};
