pub mod catalog;
pub mod enrollment;
pub mod registration;
pub mod seed;
pub mod user;
