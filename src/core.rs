pub mod assessment;
pub mod engine;
pub mod error;
pub mod quoter;
pub mod route;
pub mod trip;
pub mod unit_type;
