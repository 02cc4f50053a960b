pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

// Timestamps travel as UTC ISO-8601 strings with millisecond precision, e.g. 2024-01-31T10:00:00.000Z
pub mod serializer {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = DateTime::parse_from_rfc3339(&str_time).map_err(D::Error::custom)?;
        Ok(time.naive_utc())
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        t.format(DATE_FMT).to_string()
    }
}
