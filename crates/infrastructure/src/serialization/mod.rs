//! Decoders for request document files.

mod yaml;

pub use yaml::YamlDocumentDecoder;
