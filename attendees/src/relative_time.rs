//! "Time since" wording for the attendee table, in Brazilian Portuguese.
use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_MONTH: f64 = 30.436_875;
const DAYS_PER_YEAR: f64 = 365.242_5;

fn distance(seconds: f64) -> String {
    let minutes = (seconds / SECONDS_PER_MINUTE).round();
    let hours = (seconds / SECONDS_PER_HOUR).round();
    let days = (seconds / SECONDS_PER_DAY).round();
    let months = (seconds / SECONDS_PER_DAY / DAYS_PER_MONTH).round();
    let years = (seconds / SECONDS_PER_DAY / DAYS_PER_YEAR).round();

    if seconds.round() <= 44.0 {
        "poucos segundos".to_owned()
    } else if seconds.round() <= 89.0 || minutes <= 1.0 {
        "um minuto".to_owned()
    } else if minutes <= 44.0 {
        format!("{} minutos", minutes as u64)
    } else if minutes <= 89.0 || hours <= 1.0 {
        "uma hora".to_owned()
    } else if hours <= 21.0 {
        format!("{} horas", hours as u64)
    } else if hours <= 35.0 || days <= 1.0 {
        "um dia".to_owned()
    } else if days <= 25.0 {
        format!("{} dias", days as u64)
    } else if days <= 45.0 || months <= 1.0 {
        "um mês".to_owned()
    } else if months <= 10.0 {
        format!("{} meses", months as u64)
    } else if months <= 17.0 || years <= 1.0 {
        "um ano".to_owned()
    } else {
        format!("{} anos", years as u64)
    }
}

/// Distance from `now` to `instant`, e.g. "há 3 dias" or "em uma hora"
pub fn from_now(now: DateTime<Utc>, instant: DateTime<Utc>) -> String {
    let seconds = (instant - now).num_milliseconds() as f64 / 1_000.0;
    let distance = distance(seconds.abs());
    if seconds > 0.0 {
        format!("em {}", distance)
    } else {
        format!("há {}", distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn ago(duration: Duration) -> String {
        let now = Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap();
        from_now(now, now - duration)
    }

    #[test]
    fn test_past() {
        assert_eq!(ago(Duration::seconds(0)), "há poucos segundos");
        assert_eq!(ago(Duration::seconds(44)), "há poucos segundos");
        assert_eq!(ago(Duration::seconds(45)), "há um minuto");
        assert_eq!(ago(Duration::seconds(89)), "há um minuto");
        assert_eq!(ago(Duration::seconds(90)), "há 2 minutos");
        assert_eq!(ago(Duration::minutes(44)), "há 44 minutos");
        assert_eq!(ago(Duration::minutes(45)), "há uma hora");
        assert_eq!(ago(Duration::minutes(90)), "há 2 horas");
        assert_eq!(ago(Duration::hours(21)), "há 21 horas");
        assert_eq!(ago(Duration::hours(22)), "há um dia");
        assert_eq!(ago(Duration::hours(36)), "há 2 dias");
        assert_eq!(ago(Duration::days(25)), "há 25 dias");
        assert_eq!(ago(Duration::days(26)), "há um mês");
        assert_eq!(ago(Duration::days(46)), "há 2 meses");
        assert_eq!(ago(Duration::days(300)), "há 10 meses");
        assert_eq!(ago(Duration::days(330)), "há um ano");
        assert_eq!(ago(Duration::days(548)), "há 2 anos");
        assert_eq!(ago(Duration::days(3_653)), "há 10 anos");
    }

    #[test]
    fn test_future() {
        let now = Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap();
        assert_eq!(from_now(now, now + Duration::hours(1)), "em uma hora");
        assert_eq!(from_now(now, now + Duration::days(3)), "em 3 dias");
    }
}
