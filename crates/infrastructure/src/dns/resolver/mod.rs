pub mod builder;
pub mod core;

pub use builder::DohResolverBuilder;
pub use core::DohResolver;
