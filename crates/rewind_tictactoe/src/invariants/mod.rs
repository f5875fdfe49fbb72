//! First-class invariants for game histories.
//!
//! Invariants are logical properties that must hold for every [`GameState`]
//! reachable through the public API. They are checked in debug builds after
//! each applied move and can be tested independently.
//!
//! [`GameState`]: crate::GameState

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod alternating_markers;
pub mod cursor_in_range;
pub mod empty_origin;
pub mod nothing_after_win;
pub mod single_cell_delta;

pub use alternating_markers::AlternatingMarkersInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use empty_origin::EmptyOriginInvariant;
pub use nothing_after_win::NothingAfterWinInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    EmptyOriginInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarkersInvariant,
    CursorInRangeInvariant,
    NothingAfterWinInvariant,
);
