pub mod common;
pub mod food_item;
pub mod health;
pub mod recipe;
