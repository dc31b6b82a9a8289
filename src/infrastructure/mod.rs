pub mod processors;
