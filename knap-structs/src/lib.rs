pub mod config;
pub mod core;

/// Declares a serde struct whose fields all carry a default.
///
/// ```ignore
/// serializable_struct_with_defaults! {
///     Limits {
///         max_items: usize = 30,
///     }
/// }
/// ```
///
/// Missing fields in the input json fall back to the declared defaults, and
/// `Default` builds the struct from them.
#[macro_export]
macro_rules! serializable_struct_with_defaults {
    ( @ $name:ident { } -> ($($fields:tt)*) ($($defaults:tt)*) ) => (
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
        #[serde(default)]
        pub struct $name {
            $($fields)*
        }
        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($defaults)*
                }
            }
        }
    );
    ( @ $name:ident { $(#[$attr:meta])* $param:ident : $type:ty = $default:expr, $($rest:tt)* } -> ($($fields:tt)*) ($($defaults:tt)*) ) => (
        serializable_struct_with_defaults!(@ $name { $($rest)* } -> (
            $($fields)*
            $(#[$attr])*
            pub $param : $type,
        ) (
            $($defaults)*
            $param: $default,
        ));
    );
    ( $name:ident { $( $rest:tt)* } ) => {
        serializable_struct_with_defaults!(@ $name { $($rest)* } -> () ());
    };
}
