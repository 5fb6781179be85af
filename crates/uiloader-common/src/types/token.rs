//! Closed enumerations that travel as string tokens.

use std::fmt;

/// A closed set of legal string values.
///
/// `ALL` is the enumeration table for a configuration field: every legal
/// value in declaration order. Matching against it is exact and
/// case-sensitive.
pub trait Token: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Human-readable name of the enumeration, used in error messages.
    const KIND: &'static str;

    /// Every legal value.
    const ALL: &'static [Self];

    /// The wire token for this value.
    fn as_str(self) -> &'static str;

    /// Look up the value whose token is exactly `token`.
    fn from_token(token: &str) -> Option<Self>;
}

/// Declares a `Token` enum whose serde representation is the token itself.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $crate::types::Token for $name {
            const KIND: &'static str = $kind;

            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::types::Token::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::types::Token>::from_token(s).ok_or_else(|| {
                    $crate::errors::UnknownToken {
                        kind: $kind,
                        value: s.to_string(),
                    }
                })
            }
        }
    };
}

pub(crate) use token_enum;
