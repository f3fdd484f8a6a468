use anyhow::Context;
use base64::Engine;

use crate::models::Booking;

const B64: base64::engine::GeneralPurpose = base64::engine::general_purpose::URL_SAFE_NO_PAD;

// The dashboard hands the selected booking to the details screen through a
// navigation argument, so the record has to survive as a transport-safe
// string and come back out identical.

pub fn encode_booking(booking: &Booking) -> anyhow::Result<String> {
    let json = serde_json::to_vec(booking).context("failed to serialize booking")?;
    Ok(B64.encode(json))
}

pub fn decode_booking(payload: &str) -> anyhow::Result<Booking> {
    let json = B64
        .decode(payload.trim())
        .context("payload is not valid base64")?;
    serde_json::from_slice(&json).context("payload is not a booking")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;

    #[test]
    fn test_round_trip() {
        let booking = Booking {
            id: "bk-1".to_string(),
            client_name: "Mari Maasikas".to_string(),
            date: "15.03.2026".to_string(),
            time: "10:00-11:00".to_string(),
            property_type: "Korter".to_string(),
            details: "3 tuba".to_string(),
            address: "Pikk 1, Tallinn".to_string(),
            phone: "+3725551234".to_string(),
            email: "mari@example.com".to_string(),
            comments: "Uksekood 1234".to_string(),
            status: BookingStatus::Confirmed,
            created_at: Some(
                chrono::NaiveDateTime::parse_from_str("2026-03-01 12:00:00", "%Y-%m-%d %H:%M:%S")
                    .unwrap(),
            ),
        };

        let decoded = decode_booking(&encode_booking(&booking).unwrap()).unwrap();
        assert_eq!(decoded, booking);
    }

    #[test]
    fn test_round_trip_empty_fields_and_no_created_at() {
        let booking = Booking::default();
        assert_eq!(booking.created_at, None);

        let decoded = decode_booking(&encode_booking(&booking).unwrap()).unwrap();
        assert_eq!(decoded, booking);
    }

    #[test]
    fn test_garbage_payload_rejected() {
        assert!(decode_booking("!!!not base64!!!").is_err());
        // Valid base64, but not a booking document.
        let payload = B64.encode(b"[1,2,3]");
        assert!(decode_booking(&payload).is_err());
    }
}
