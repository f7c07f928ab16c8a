mod laplace_source;
mod normal_source;
mod source;

pub use laplace_source::LaplaceSource;
pub use normal_source::NormalSource;
pub use source::SampleSource;
