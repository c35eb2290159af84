/// Declares a closed vocabulary the model answers with as free text.
///
/// Parsing ignores case, spaces, underscores and hyphens so `"twin flame"`,
/// `"TwinFlame"` and `"Twin Flame"` all land on the same variant. Serializing
/// always produces the canonical spelling.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String")]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Canonical spellings, in declaration order. Used for schema enums.
            pub fn names() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = crate::domain::models::normalize_label(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| crate::domain::models::normalize_label(v.as_str()) == wanted)
                    .ok_or_else(|| format!("unknown {} '{}'", stringify!($name), s.trim()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

mod chart_request;
mod compatibility;
mod forecast;
mod natal_chart;
mod user_profile;
mod zodiac;

pub use chart_request::*;
pub use compatibility::*;
pub use forecast::*;
pub use natal_chart::*;
pub use user_profile::*;
pub use zodiac::*;

#[cfg(test)]
pub(crate) use natal_chart::fixtures;

pub(crate) fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}
