pub mod apis;
pub mod aps;
pub mod helpers;

pub use apis::call_builder::*;
pub use apis::newsapi::*;
pub use aps::search::*;
pub use helpers::templates::*;
