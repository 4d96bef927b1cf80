pub mod https;

pub use https::ReqwestFetcher;
