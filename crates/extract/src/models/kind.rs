use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// Category of a documented component member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKind {
    Props,
    Events,
    Slots,
    Methods,
}
impl ApiKind {
    pub const ALL: [ApiKind; 4] = [ApiKind::Props, ApiKind::Events, ApiKind::Slots, ApiKind::Methods];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiKind::Props => "props",
            ApiKind::Events => "events",
            ApiKind::Slots => "slots",
            ApiKind::Methods => "methods",
        }
    }
}
impl FromStr for ApiKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "props" => Self::Props,
            "events" => Self::Events,
            "slots" => Self::Slots,
            "methods" => Self::Methods,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "kind",
                value: s.to_string(),
            }),
        })
    }
}
impl Display for ApiKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
