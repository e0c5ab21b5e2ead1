#[cfg(feature = "std")]
pub async fn delay_ms(ms: u32) {
    tokio::time::sleep(tokio::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(not(feature = "std"))]
pub async fn delay_ms(_ms: u32) {}
