mod kyc;
mod order;
mod user;

pub use kyc::*;
pub use order::*;
pub use user::*;

/// Defines a domain enum backed by a stable numeric code and description.
///
/// The numeric codes are what the database and wire protocols carry; the
/// serde representation uses the variant name, matching how the upstream
/// services serialize these enums in JSON.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = ($code:literal, $description:literal),)*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl $name {
            /// The stable numeric code stored in the database.
            pub const fn code(&self) -> u32 {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// A short human-readable description.
            pub const fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)*
                }
            }

            /// Resolves a numeric code back to its variant.
            ///
            /// # Errors
            ///
            /// Returns a [`ParamInvalid`] business error for unknown codes.
            ///
            /// [`ParamInvalid`]: crate::ErrorCode::ParamInvalid
            pub fn from_code(code: u32) -> Result<Self, $crate::BusinessError> {
                match code {
                    $($code => Ok(Self::$variant),)*
                    _ => Err($crate::BusinessError::with_message(
                        $crate::ErrorCode::ParamInvalid,
                        format!(concat!("invalid ", stringify!($name), " code: {}"), code),
                    )),
                }
            }
        }
    };
}

pub(crate) use coded_enum;
