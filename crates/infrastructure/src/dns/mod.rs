pub mod clock;
pub mod resolver;
pub mod transport;

pub use clock::SystemClock;
pub use resolver::{DohResolver, DohResolverBuilder};
pub use transport::ReqwestFetcher;
