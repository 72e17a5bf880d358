pub mod guides;
pub mod platform;
pub mod storage;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
