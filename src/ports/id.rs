use async_trait::async_trait;

/// Source of fresh unique values for install identifiers.
///
/// Tests swap in a fixed generator to get predictable identifiers.
#[async_trait]
pub trait IDGenerator {
    /// Returns a new unique value as text. Encoding happens in the caller.
    async fn generate() -> String;
}
