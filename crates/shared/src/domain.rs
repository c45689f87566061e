use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DraftFieldError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
}

impl Identity {
    pub fn new(
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
            email: email.into(),
        }
    }

    pub fn stub_admin() -> Self {
        Self::new("Admin", "User", "admin@example.com")
    }
}

macro_rules! labelled_enum {
    ($name:ident, $err:ident, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DraftFieldError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($label => Ok($name::$variant),)+
                    other => Err(DraftFieldError::$err(other.to_string())),
                }
            }
        }
    };
}

labelled_enum!(Gender, InvalidGender, {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

labelled_enum!(Rank, InvalidRank, {
    Beginner => "BEGINNER",
    Intermediate => "INTERMEDIATE",
    Advanced => "ADVANCED",
});
