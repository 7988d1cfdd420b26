pub mod db;
pub mod food_item;
pub mod health;
pub mod llm;
