use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse "YYYY-MM" into (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

/// First day of the month and first day of the following month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (ny, nm) = shift_month(year, month, 1);
    let next = NaiveDate::from_ymd_opt(ny, nm, 1)?;
    Some((first, next))
}

/// Move `offset` months forward (negative = backward).
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + offset;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// Convert a wall-clock time in the local zone to UTC.
/// Ambiguous times resolve to the earliest instant; times skipped by a DST
/// jump are read as UTC offsets of the moment just after the gap.
pub fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive) {
        chrono::LocalResult::Single(dt) => dt.with_timezone(&Utc),
        chrono::LocalResult::Ambiguous(early, _) => early.with_timezone(&Utc),
        chrono::LocalResult::None => {
            let shifted = naive + chrono::Duration::hours(1);
            Local
                .from_local_datetime(&shifted)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
        }
    }
}

/// Start of the given local calendar day, as a UTC instant.
pub fn local_midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    local_to_utc(date.and_time(chrono::NaiveTime::MIN))
}

/// Parse a period into an inclusive date range.
///
/// Accepted forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `start:end` where both
/// sides use one of the previous forms.
pub fn parse_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();
    if let Some((start, end)) = p.split_once(':') {
        let (s, _) = parse_single_period(start)?;
        let (_, e) = parse_single_period(end)?;
        if e < s {
            return Err(format!("{} ends before it starts", p));
        }
        return Ok((s, e));
    }
    parse_single_period(p)
}

fn parse_single_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some((y, m)) = parse_month(p)
        && let Some((first, next)) = month_bounds(y, m)
        && let Some(last) = next.pred_opt()
    {
        return Ok((first, last));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(p.to_string())
}
