pub mod food_items;
