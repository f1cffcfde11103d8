// ── Check-in/out time transforms ──
//
// The backend stores policy times as `"HH:MM AM/PM"` but the suffix is
// decorative: the hour field is already 24-hour. In memory times are
// plain `"HH:MM"`. These two helpers convert between the formats and
// reproduce the backend's suffix convention (hour >= 12 gets "PM").

/// Payload time -> in-memory input time: strip the AM/PM suffix.
///
/// `"02:00 PM"` -> `"02:00"`, `"14:00"` -> `"14:00"`.
pub fn to_input_time(payload: &str) -> String {
    payload
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_owned()
}

/// In-memory input time -> payload time: append the suffix the backend
/// expects. The hour is NOT converted to 12-hour form; only the suffix
/// is derived from it.
///
/// `"14:00"` -> `"14:00 PM"`, `"09:30"` -> `"09:30 AM"`.
pub fn to_payload_time(input: &str) -> String {
    let hour: u32 = input
        .split(':')
        .next()
        .and_then(|h| h.trim().parse().ok())
        .unwrap_or(0);
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    format!("{input} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn afternoon_hours_get_pm() {
        assert_eq!(to_payload_time("14:00"), "14:00 PM");
        assert_eq!(to_payload_time("12:00"), "12:00 PM");
    }

    #[test]
    fn morning_hours_get_am() {
        assert_eq!(to_payload_time("09:30"), "09:30 AM");
        assert_eq!(to_payload_time("00:15"), "00:15 AM");
    }

    #[test]
    fn input_time_strips_suffix() {
        assert_eq!(to_input_time("02:00 PM"), "02:00");
        assert_eq!(to_input_time("11:00 AM"), "11:00");
        assert_eq!(to_input_time("14:00"), "14:00");
    }

    #[test]
    fn round_trip_preserves_hour_and_minute() {
        for payload in ["02:00 PM", "11:00 AM", "14:30 PM", "09:45 AM"] {
            let input = to_input_time(payload);
            let back = to_payload_time(&input);
            assert!(back.starts_with(&input), "{back} should start with {input}");
            let suffix_hour: u32 = input.split(':').next().unwrap().parse().unwrap();
            let expected_suffix = if suffix_hour >= 12 { "PM" } else { "AM" };
            assert!(back.ends_with(expected_suffix));
        }
    }

    #[test]
    fn malformed_input_defaults_to_am() {
        assert_eq!(to_payload_time("not-a-time"), "not-a-time AM");
        assert_eq!(to_input_time(""), "");
    }
}
