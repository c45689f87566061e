use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Gender, Rank},
    error::DraftFieldError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FullName,
    Email,
    Username,
    Password,
    ProfilePictureUrl,
    Birthday,
    Gender,
    Rank,
}

impl DraftField {
    pub const ALL: &'static [DraftField] = &[
        DraftField::FullName,
        DraftField::Email,
        DraftField::Username,
        DraftField::Password,
        DraftField::ProfilePictureUrl,
        DraftField::Birthday,
        DraftField::Gender,
        DraftField::Rank,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            DraftField::FullName => "fullName",
            DraftField::Email => "email",
            DraftField::Username => "name",
            DraftField::Password => "enc_password",
            DraftField::ProfilePictureUrl => "profilePicture",
            DraftField::Birthday => "birthday",
            DraftField::Gender => "gender",
            DraftField::Rank => "rank",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::FullName => "Full Name",
            DraftField::Email => "Email",
            DraftField::Username => "Username",
            DraftField::Password => "Password",
            DraftField::ProfilePictureUrl => "Profile Picture URL",
            DraftField::Birthday => "Birthday",
            DraftField::Gender => "Gender",
            DraftField::Rank => "Rank",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, DraftField::Gender | DraftField::Rank)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for DraftField {
    type Err = DraftFieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "fullName" => Ok(DraftField::FullName),
            "email" => Ok(DraftField::Email),
            "username" | "name" => Ok(DraftField::Username),
            "password" | "enc_password" => Ok(DraftField::Password),
            "profilePictureUrl" | "profilePicture" => Ok(DraftField::ProfilePictureUrl),
            "birthday" => Ok(DraftField::Birthday),
            "gender" => Ok(DraftField::Gender),
            "rank" => Ok(DraftField::Rank),
            other => Err(DraftFieldError::UnknownField(other.to_string())),
        }
    }
}

/// The investor record under construction. Serializes to the exact body the
/// record-creation endpoint expects; unset selects go over the wire as `""`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorDraft {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "name")]
    pub username: String,
    #[serde(rename = "enc_password")]
    pub password: String,
    #[serde(rename = "profilePicture")]
    pub profile_picture_url: String,
    /// `YYYY-MM-DD`, as produced by a date input. Not parsed here.
    pub birthday: String,
    #[serde(with = "blank_option", default)]
    pub gender: Option<Gender>,
    #[serde(with = "blank_option", default)]
    pub rank: Option<Rank>,
    #[serde(rename = "aoi", default)]
    pub areas_of_interest: Vec<String>,
}

impl InvestorDraft {
    pub fn set(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), DraftFieldError> {
        let value = value.into();
        match field {
            DraftField::FullName => self.full_name = value,
            DraftField::Email => self.email = value,
            DraftField::Username => self.username = value,
            DraftField::Password => self.password = value,
            DraftField::ProfilePictureUrl => self.profile_picture_url = value,
            DraftField::Birthday => self.birthday = value,
            DraftField::Gender => self.gender = parse_blank(&value)?,
            DraftField::Rank => self.rank = parse_blank(&value)?,
        }
        Ok(())
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FullName => &self.full_name,
            DraftField::Email => &self.email,
            DraftField::Username => &self.username,
            DraftField::Password => &self.password,
            DraftField::ProfilePictureUrl => &self.profile_picture_url,
            DraftField::Birthday => &self.birthday,
            DraftField::Gender => self.gender.map(Gender::as_str).unwrap_or_default(),
            DraftField::Rank => self.rank.map(Rank::as_str).unwrap_or_default(),
        }
    }

    pub fn missing_required_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .iter()
            .copied()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Debug for InvestorDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvestorDraft")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("profile_picture_url", &self.profile_picture_url)
            .field("birthday", &self.birthday)
            .field("gender", &self.gender)
            .field("rank", &self.rank)
            .field("areas_of_interest", &self.areas_of_interest)
            .finish()
    }
}

fn parse_blank<T>(value: &str) -> Result<Option<T>, DraftFieldError>
where
    T: FromStr<Err = DraftFieldError>,
{
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

mod blank_option {
    use std::{fmt::Display, str::FromStr};

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
