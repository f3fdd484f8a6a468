use chrono::{Duration, NaiveDateTime, Utc};

use crate::models::Booking;

/// Event start from the booking's `dd.mm.yyyy` date and the first bound of
/// its `HH:MM-HH:MM` slot; the event always runs 60 minutes.
pub fn event_times(booking: &Booking) -> anyhow::Result<(NaiveDateTime, NaiveDateTime)> {
    let start_bound = booking
        .time
        .split('-')
        .next()
        .unwrap_or_default()
        .trim();
    let start = NaiveDateTime::parse_from_str(
        &format!("{} {}", booking.date.trim(), start_bound),
        "%d.%m.%Y %H:%M",
    )?;
    Ok((start, start + Duration::minutes(60)))
}

pub fn generate_ics(booking: &Booking) -> anyhow::Result<String> {
    let (start, end) = event_times(booking)?;
    let dtstart = start.format("%Y%m%dT%H%M%S").to_string();
    let dtend = end.format("%Y%m%dT%H%M%S").to_string();
    let dtstamp = booking
        .created_at
        .unwrap_or_else(|| Utc::now().naive_utc())
        .format("%Y%m%dT%H%M%S")
        .to_string();
    let uid = format!("{}@fotobook", booking.id);

    let summary = format!("📸 Foto: {}", booking.client_name);
    let location = &booking.address;
    // \n must stay literal in ICS text fields.
    let description = format!(
        "{}\\n{}\\n{}",
        booking.property_type, booking.phone, booking.comments
    );

    Ok(format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//Fotobook//Booking Admin//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTAMP:{dtstamp}\r\n\
         DTSTART:{dtstart}\r\n\
         DTEND:{dtend}\r\n\
         SUMMARY:{summary}\r\n\
         LOCATION:{location}\r\n\
         DESCRIPTION:{description}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;

    fn sample() -> Booking {
        Booking {
            id: "bk-1".to_string(),
            client_name: "Mari Maasikas".to_string(),
            date: "15.03.2026".to_string(),
            time: "10:00-11:00".to_string(),
            property_type: "Korter".to_string(),
            address: "Pikk 1, Tallinn".to_string(),
            phone: "+3725551234".to_string(),
            comments: "Teine korrus".to_string(),
            status: BookingStatus::Confirmed,
            ..Default::default()
        }
    }

    #[test]
    fn test_event_times_one_hour() {
        let (start, end) = event_times(&sample()).unwrap();
        assert_eq!(start.format("%Y-%m-%d %H:%M").to_string(), "2026-03-15 10:00");
        assert_eq!(end - start, Duration::minutes(60));
    }

    #[test]
    fn test_generate_ics() {
        let ics = generate_ics(&sample()).unwrap();
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("DTSTART:20260315T100000"));
        assert!(ics.contains("DTEND:20260315T110000"));
        assert!(ics.contains("SUMMARY:📸 Foto: Mari Maasikas"));
        assert!(ics.contains("LOCATION:Pikk 1, Tallinn"));
        assert!(ics.contains("DESCRIPTION:Korter\\n+3725551234\\nTeine korrus"));
        assert!(ics.contains("UID:bk-1@fotobook"));
    }

    #[test]
    fn test_unparseable_date_is_an_error() {
        let mut booking = sample();
        booking.date = "not-a-date".to_string();
        assert!(event_times(&booking).is_err());
    }
}
