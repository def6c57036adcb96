pub mod data_table;
pub mod input_field;
