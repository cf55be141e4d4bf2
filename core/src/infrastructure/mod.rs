pub mod db;
pub mod health;
pub mod jwt;
pub mod llm;
pub mod recipe;
