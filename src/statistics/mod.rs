mod entropy;

pub use entropy::entropy;
