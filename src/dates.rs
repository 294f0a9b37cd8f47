use serde::{de::Error as _, Deserialize, Deserializer};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

// `YYYY-MM-DD` for birth dates in response bodies.
time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Parses the `{date}` segment of an enrollment route.
///
/// Accepts RFC 3339, a naive date-time (`T` or space separated, read as UTC)
/// or a bare date (midnight UTC).
pub fn parse_enrollment_date(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }

    let naive_formats = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ];
    for fmt in naive_formats {
        if let Ok(dt) = PrimitiveDateTime::parse(raw, fmt) {
            return Some(dt.assume_utc());
        }
    }

    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_utc())
}

/// Calendar date from a bare date or any date-time form accepted by
/// [`parse_enrollment_date`]. A date-time keeps the date in its own offset.
pub fn parse_calendar_date(raw: &str) -> Option<Date> {
    parse_enrollment_date(raw).map(|dt| dt.date())
}

/// `deserialize_with` for optional dates sent either as a date or a date-time.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.map(|s| {
        parse_calendar_date(&s)
            .ok_or_else(|| D::Error::custom(format!("invalid date: {s}")))
    })
    .transpose()
}
