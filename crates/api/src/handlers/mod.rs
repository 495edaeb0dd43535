pub mod cars;
pub mod colours;
pub mod index;
pub mod status;
