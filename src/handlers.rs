pub mod health;
pub mod portfolio;
