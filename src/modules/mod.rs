pub mod cart;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod search;
pub mod user;

mod router;
pub use router::get_router;
