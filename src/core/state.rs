//! Core State trait for session phases.
//!
//! Every phase a practice session can be in implements this trait, which
//! provides pure methods for inspecting the phase without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing where
/// a session currently is; they are recorded in history and shipped to the
/// presentation layer, so they must be cloneable and serializable.
///
/// # Example
///
/// ```rust
/// use mathdrill::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum CardState {
///     Hidden,
///     Flipped,
///     Retired,
/// }
///
/// impl State for CardState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Hidden => "Hidden",
///             Self::Flipped => "Flipped",
///             Self::Retired => "Retired",
///         }
///     }
/// }
///
/// assert_eq!(CardState::Flipped.name(), "Flipped");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}
