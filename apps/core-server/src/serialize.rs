use serde::{Serialize, Serializer};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// RFC 3339 in UTC with millisecond precision, e.g. `2025-09-01T10:15:30.123Z`
pub fn front_time<S>(dt: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let truncated = dt
        .to_offset(time::UtcOffset::UTC)
        .replace_millisecond(dt.millisecond())
        .map_err(serde::ser::Error::custom)?;

    truncated
        .format(&Rfc3339)
        .map_err(serde::ser::Error::custom)?
        .serialize(s)
}
