use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use strum::EnumIter;

#[cfg(feature = "database")]
use sea_orm::Value;

/// Lifecycle state of a reservation, stored as its name string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl FromStr for ReservationStatus {
    type Err = String;

    // Case-insensitive, matching the query parameter handling of the API
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CHECKED_IN" => Ok(Self::CheckedIn),
            "CHECKED_OUT" => Ok(Self::CheckedOut),
            "CANCELLED" => Ok(Self::Cancelled),
            "NO_SHOW" => Ok(Self::NoShow),
            _ => Err(format!("Unknown reservation status: {s}")),
        }
    }
}

impl Display for ReservationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::CheckedIn => write!(f, "CHECKED_IN"),
            Self::CheckedOut => write!(f, "CHECKED_OUT"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::NoShow => write!(f, "NO_SHOW"),
        }
    }
}

impl Default for ReservationStatus {
    fn default() -> Self {
        Self::Confirmed
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for ReservationStatus {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => {
                Self::from_str(&s).map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "ReservationStatus".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::String(sea_orm::sea_query::StringLen::N(20))
    }
}

#[cfg(feature = "database")]
impl From<ReservationStatus> for Value {
    fn from(status: ReservationStatus) -> Self {
        Value::String(Some(Box::new(status.to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for ReservationStatus {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        Self::from_str(&val).map_err(|e| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Failed to parse ReservationStatus: {e}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for ReservationStatus {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::reservation_status::ReservationStatus;
    use std::str::FromStr;

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            ReservationStatus::from_str("CONFIRMED").unwrap(),
            ReservationStatus::Confirmed
        );
        assert_eq!(
            ReservationStatus::from_str("CHECKED_IN").unwrap(),
            ReservationStatus::CheckedIn
        );
        assert_eq!(
            ReservationStatus::from_str("NO_SHOW").unwrap(),
            ReservationStatus::NoShow
        );
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!(
            ReservationStatus::from_str("cancelled").unwrap(),
            ReservationStatus::Cancelled
        );
        assert_eq!(
            ReservationStatus::from_str("Checked_Out").unwrap(),
            ReservationStatus::CheckedOut
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(ReservationStatus::from_str("invalid_status").is_err());
        assert!(ReservationStatus::from_str("").is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for status in ReservationStatus::iter() {
            let s = status.to_string();
            let parsed = ReservationStatus::from_str(&s).unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_default_status() {
        assert_eq!(ReservationStatus::default(), ReservationStatus::Confirmed);
    }

    #[test]
    fn test_status_serializes_as_name() {
        let json = serde_json::to_string(&ReservationStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"CHECKED_IN\"");
    }
}
