pub mod catalog;
pub mod declaration;
pub mod user;
