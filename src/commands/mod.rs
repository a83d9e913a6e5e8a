pub mod licenses;
pub mod new;
pub mod resolve;
