pub mod byte_stream;
