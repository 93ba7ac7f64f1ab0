use time_tz::Tz;

/// Look up a timezone by its canonical name, e.g. "Europe/Paris".
///
/// The offset from UTC is resolved separately for each date converted into
/// the timezone, so daylight saving time is respected.
pub fn get_timezone(canonical_timezone: &str) -> Option<&'static Tz> {
    time_tz::timezones::get_by_name(canonical_timezone)
}
