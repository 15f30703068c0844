use crate::fab_error::FabError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when `check-invariants` feature is enabled.
    fn debug_assert_invariants(&self);

    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), FabError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! fab_debug_assert_ok {
    ($expr:expr, $ctx:literal) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            log::warn!("[fab invariants] {}: {}", $ctx, e);
            panic!("[fab invariants] {}: {}", $ctx, e);
        }
    };
}
