use chrono::NaiveDateTime;

fn plural(n: i64, one: &'static str, few: &'static str, many: &'static str) -> &'static str {
    let n = n.abs();
    match (n % 10, n % 100) {
        (1, rem) if rem != 11 => one,
        (2..=4, rem) if !(12..=14).contains(&rem) => few,
        _ => many,
    }
}

/// Formats how long ago `datetime` was relative to `now`, in Russian.
pub fn format_relative_time(datetime: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let duration = now.signed_duration_since(*datetime);

    let seconds = duration.num_seconds().max(0);
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "только что".to_string()
    } else if minutes < 60 {
        format!("{} {} назад", minutes, plural(minutes, "минуту", "минуты", "минут"))
    } else if hours < 24 {
        format!("{} {} назад", hours, plural(hours, "час", "часа", "часов"))
    } else if days < 30 {
        format!("{} {} назад", days, plural(days, "день", "дня", "дней"))
    } else if days < 365 {
        let months = days / 30;
        format!("{} {} назад", months, plural(months, "месяц", "месяца", "месяцев"))
    } else {
        let years = days / 365;
        format!("{} {} назад", years, plural(years, "год", "года", "лет"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn now() -> NaiveDateTime {
        chrono::DateTime::from_timestamp(1_750_000_000, 0)
            .unwrap()
            .naive_utc()
    }

    #[test]
    fn test_just_now() {
        let now = now();
        assert_eq!(format_relative_time(&(now - Duration::seconds(30)), &now), "только что");
        // Clock skew puts creation slightly in the future
        assert_eq!(format_relative_time(&(now + Duration::seconds(5)), &now), "только что");
    }

    #[test]
    fn test_russian_plural_forms() {
        let now = now();
        assert_eq!(format_relative_time(&(now - Duration::minutes(1)), &now), "1 минуту назад");
        assert_eq!(format_relative_time(&(now - Duration::minutes(3)), &now), "3 минуты назад");
        assert_eq!(format_relative_time(&(now - Duration::minutes(11)), &now), "11 минут назад");
        assert_eq!(format_relative_time(&(now - Duration::hours(21)), &now), "21 час назад");
        assert_eq!(format_relative_time(&(now - Duration::days(2)), &now), "2 дня назад");
    }

    #[test]
    fn test_months_and_years() {
        let now = now();
        assert_eq!(format_relative_time(&(now - Duration::days(65)), &now), "2 месяца назад");
        assert_eq!(format_relative_time(&(now - Duration::days(365 * 5)), &now), "5 лет назад");
    }
}
