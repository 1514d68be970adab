//! Macros for declaring state enums.

/// Generate a `State` implementation for a fieldless enum.
///
/// The enum also derives `Copy`, `Eq` and `Hash`, which phases and other
/// tag-like states always want.
///
/// # Example
///
/// ```
/// use mathdrill::state_enum;
/// use mathdrill::core::State;
///
/// state_enum! {
///     pub enum DeckState {
///         Shuffling,
///         Dealing,
///         Exhausted,
///     }
/// }
///
/// assert_eq!(DeckState::Dealing.name(), "Dealing");
/// assert_ne!(DeckState::Shuffling, DeckState::Exhausted);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
