pub mod ooxml;

pub use ooxml::OoxmlPackage;
