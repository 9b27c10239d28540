use async_trait::async_trait;

/// Port for pacing bidder task starts
///
/// Bounds how fast tasks begin evaluating, not how many run at once.
/// Acquiring never fails; the only observable effect is delay.
#[async_trait]
pub trait AdmissionGate: Send + Sync {
    async fn acquire(&self);

    /// Counterpart to `acquire`; pacing gates have nothing to give back
    fn release(&self) {}
}
