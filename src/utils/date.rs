use crate::errors::AppResult;
use crate::models::DateKey;

/// The day a command works on: the `--date` override if given, else today.
pub fn session_day(override_day: Option<&str>) -> AppResult<DateKey> {
    match override_day {
        Some(s) => DateKey::parse(s),
        None => Ok(DateKey::today()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        assert_eq!(
            session_day(Some("2024-05-01")).unwrap().to_string(),
            "2024-05-01"
        );
        assert!(session_day(Some("05/01/2024")).is_err());
        assert_eq!(session_day(None).unwrap(), DateKey::today());
    }
}
