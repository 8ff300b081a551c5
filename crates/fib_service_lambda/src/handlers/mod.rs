pub mod fibonacci;
