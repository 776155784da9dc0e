//! Display/FromStr boilerplate for status enums
//!
//! Status enums exchanged with the rendering surface are printed and parsed
//! as lowercase snake_case labels. Parsing is case-insensitive.
//!
//! # Example
//!
//! ```rust
//! use deskclock_domain::impl_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Highlight {
//!     Off,
//!     Active,
//!     Dimmed,
//! }
//!
//! impl_status_conversions!(Highlight {
//!     Off => "off",
//!     Active => "active",
//!     Dimmed => "dimmed",
//! });
//!
//! assert_eq!(Highlight::Active.to_string(), "active");
//! assert_eq!("DIMMED".parse::<Highlight>(), Ok(Highlight::Dimmed));
//! ```

/// Implements `Display` and `FromStr` for a fieldless enum
///
/// * `$enum_name` - The enum type
/// * `$variant => $str` - Label for every variant
///
/// Parse failures return a `String` naming the enum and the rejected input.
#[macro_export]
macro_rules! impl_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
