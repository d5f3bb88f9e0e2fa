pub mod call_builder;
pub mod newsapi;
