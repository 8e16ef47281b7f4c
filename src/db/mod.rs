//! Query layer. Every read and write goes through these functions; the
//! handlers above them never touch SQL directly.

pub mod lookups;
pub mod tickets;
pub mod users;
