use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Facial-expression shares for a session, as produced upstream by the
/// vision pipeline. Each share lies in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionDistribution(BTreeMap<String, f64>);

impl EmotionDistribution {
    pub fn new<I, S>(shares: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (name, share) in shares {
            let name = name.as_ref().trim().to_lowercase();
            if name.is_empty() {
                return Err(Error::InvalidInput("emotion name must not be empty".to_string()));
            }
            if !share.is_finite() || !(0.0..=1.0).contains(&share) {
                return Err(Error::InvalidInput(format!(
                    "share for '{}' must be within [0, 1], got {}",
                    name, share
                )));
            }
            map.insert(name, share);
        }
        Ok(Self(map))
    }

    /// Parse `name=share` (e.g. `sedih=0.72`)
    pub fn parse_pair(raw: &str) -> Result<(String, f64)> {
        let (name, share) = raw
            .split_once('=')
            .ok_or_else(|| Error::InvalidInput(format!("expected name=share, got '{}'", raw)))?;
        let share: f64 = share
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("invalid share in '{}'", raw)))?;
        Ok((name.trim().to_string(), share))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, emotion: &str) -> Option<f64> {
        self.0.get(emotion).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Highest share wins; ties go to the alphabetically first emotion
    pub fn dominant(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, share) in self.iter() {
            match best {
                Some((_, current)) if share <= current => {}
                _ => best = Some((name, share)),
            }
        }
        best
    }
}
