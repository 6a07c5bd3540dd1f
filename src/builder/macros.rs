//! Macros for declaring identifier enums.

/// Generate a `StateId` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use switchyard::state_id;
///
/// state_id! {
///     pub enum Door {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_id {
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
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an `EventKind` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use switchyard::event_kind;
///
/// event_kind! {
///     pub enum DoorEvent {
///         Push,
///         Lock,
///         Unlock,
///     }
/// }
/// ```
#[macro_export]
macro_rules! event_kind {
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::EventKind for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
