/// Wall-clock source for cache timestamps. Injected so expiry can be driven
/// by tests without sleeping.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}
