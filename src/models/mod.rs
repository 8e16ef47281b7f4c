pub mod lookup;
pub mod ticket;
pub mod transaction;
pub mod user;
