pub mod breakdown_writer;
pub mod order_reader;
