pub mod clients;
pub mod object_store;
pub mod parameter_store;
