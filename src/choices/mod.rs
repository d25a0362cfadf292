pub use self::report::*;

pub(crate) mod report;

/// Trait for types that provide a human-readable description
///
/// Used to print enum variants in the report with friendly text
/// rather than the base identifier names for each variant.
pub trait Description {
    /// Returns a static string description of the implementing type
    fn description(&self) -> &'static str;
}

/// Creates enums that the user can pick a variant of on the CLI
///
/// This macro generates:
/// 1. An enum with specified variants
/// 2. Standard trait implementations (Debug, Copy, Clone, etc.)
/// 3. [`clap::ValueEnum`] so the enum can back a command line flag
/// 4. [`Description`] trait implementation
/// 5. Display trait implementation
///
/// # Syntax
/// `choice!(EnumName, Variant => "Description", ...)`
///
/// # Example
/// ```ignore
/// choice!(BrushChoice,
///     Normal => "Normal - Solid round brush",
///     Spray => "Spray - Scattered dots"
/// );
///
/// // `--brush normal` or `--brush spray` on the command line,
/// // and `BrushChoice::Spray.to_string()` prints "Spray - Scattered dots".
/// ```
#[macro_export]
macro_rules! choice {
    ($enum_name:ident, $($variant:ident => $desc:expr),+) => {
        #[derive(Debug, Copy, Clone, clap::ValueEnum, Ord, PartialOrd, Eq, PartialEq)]
        pub enum $enum_name {
            $($variant,)+
        }

        impl $crate::choices::Description for $enum_name {
            fn description(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $desc),+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", $crate::choices::Description::description(self))
            }
        }
    };
}
