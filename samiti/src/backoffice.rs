pub mod deposits;
pub mod expenses;
pub mod fines;
pub mod members;
pub mod settings;
