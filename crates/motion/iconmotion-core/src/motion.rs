//! Motion type identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MotionError;

/// Named animation style selecting one catalog entry.
///
/// Discriminants double as catalog indices, so the order here is the table order.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    #[default]
    Scale = 0,
    Rotate,
    Translate,
    Shake,
    Pulse,
    Bounce,
    Draw,
    Spin,
    Ring,
    Wiggle,
    Heartbeat,
    Swing,
    Float,
    None,
}

impl MotionType {
    pub const COUNT: usize = 14;

    pub const ALL: [MotionType; Self::COUNT] = [
        MotionType::Scale,
        MotionType::Rotate,
        MotionType::Translate,
        MotionType::Shake,
        MotionType::Pulse,
        MotionType::Bounce,
        MotionType::Draw,
        MotionType::Spin,
        MotionType::Ring,
        MotionType::Wiggle,
        MotionType::Heartbeat,
        MotionType::Swing,
        MotionType::Float,
        MotionType::None,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MotionType::Scale => "scale",
            MotionType::Rotate => "rotate",
            MotionType::Translate => "translate",
            MotionType::Shake => "shake",
            MotionType::Pulse => "pulse",
            MotionType::Bounce => "bounce",
            MotionType::Draw => "draw",
            MotionType::Spin => "spin",
            MotionType::Ring => "ring",
            MotionType::Wiggle => "wiggle",
            MotionType::Heartbeat => "heartbeat",
            MotionType::Swing => "swing",
            MotionType::Float => "float",
            MotionType::None => "none",
        }
    }

    /// Parse without failing: anything unrecognized becomes `Scale`.
    pub fn parse_lenient(raw: &str) -> MotionType {
        raw.parse().unwrap_or_else(|_| {
            log::debug!("unknown motion type {raw:?}; falling back to scale");
            MotionType::Scale
        })
    }

    /// True for the path-drawing style, which animates inner paths instead of the wrapper.
    #[inline]
    pub fn draws_paths(self) -> bool {
        matches!(self, MotionType::Draw)
    }
}

impl FromStr for MotionType {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MotionType::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| MotionError::UnknownMotionType(s.to_string()))
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde helper for props: absent, null, unknown text or a non-string all decode to a usable value.
pub(crate) fn deserialize_lenient<'de, D>(de: D) -> Result<Option<MotionType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(de)?;
    Ok(raw.map(|v| match v {
        serde_json::Value::String(s) => MotionType::parse_lenient(&s),
        other => MotionType::parse_lenient(&other.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_discriminants() {
        for (idx, m) in MotionType::ALL.iter().enumerate() {
            assert_eq!(m.index(), idx, "{m}");
        }
    }

    #[test]
    fn strict_parse_round_trips_every_name() {
        for m in MotionType::ALL {
            assert_eq!(m.as_str().parse::<MotionType>().unwrap(), m);
        }
        assert_eq!(
            "Scale".parse::<MotionType>(),
            Err(MotionError::UnknownMotionType("Scale".into()))
        );
    }

    #[test]
    fn lenient_parse_defaults_to_scale() {
        assert_eq!(MotionType::parse_lenient("not-a-real-type"), MotionType::Scale);
        assert_eq!(MotionType::parse_lenient(""), MotionType::Scale);
        assert_eq!(MotionType::parse_lenient("spin"), MotionType::Spin);
    }
}
