use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient display name, also the registry key (trimmed, never empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatientName(String);

impl PatientName {
    pub fn parse(name: impl AsRef<str>) -> Result<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput(
                "patient name must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PatientName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<PatientName> for String {
    fn from(name: PatientName) -> Self {
        name.0
    }
}

impl AsRef<str> for PatientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// First day of therapy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: PatientName,
    #[serde(default)]
    pub demographics: Demographics,
}

impl Patient {
    pub fn new(name: PatientName) -> Self {
        Self {
            name,
            demographics: Demographics::default(),
        }
    }

    pub fn with_demographics(mut self, demographics: Demographics) -> Self {
        self.demographics = demographics;
        self
    }
}
