//! Identifier minting port.

/// Port for minting globally-unique identifier strings.
///
/// Every logic item, condition node, action, and segment id comes from an
/// implementation of this trait. Injecting it keeps creation and
/// duplication deterministic under test: production uses random UUIDs,
/// tests a sequence generator.
///
/// # Contract
///
/// Successive calls must never return the same string, across all minters
/// feeding the same environment.
pub trait IdMinter: Send + Sync {
    /// Mints a fresh, collision-free identifier.
    fn mint(&self) -> String;
}
