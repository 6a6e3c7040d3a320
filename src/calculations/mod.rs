pub mod split_mapping;
