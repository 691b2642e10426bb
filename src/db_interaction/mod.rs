mod combined;

pub use combined::*;
