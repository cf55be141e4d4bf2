pub mod get_common_ingredients;
