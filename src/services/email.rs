use serde::Serialize;

use crate::models::Booking;

/// A pre-filled outbound email the admin client opens in the mail app.
#[derive(Debug, Clone, Serialize)]
pub struct MailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub fn confirmation_draft(booking: &Booking, owner_name: &str) -> MailDraft {
    MailDraft {
        to: booking.email.clone(),
        subject: "✅ Kinnitus: Teie broneering".to_string(),
        body: format!(
            "Tere {}!\n\n\
             Kinnitan Teie broneeringu:\n\
             📅 Aeg: {} kell {}\n\
             📍 Aadress: {}\n\n\
             Kohtumiseni!\n\
             {}",
            booking.client_name, booking.date, booking.time, booking.address, owner_name
        ),
    }
}

pub fn cancellation_draft(booking: &Booking, owner_name: &str) -> MailDraft {
    MailDraft {
        to: booking.email.clone(),
        subject: "❌ Tühistamine: Teie broneering".to_string(),
        body: format!(
            "Tere {}.\n\n\
             Kahjuks pean tühistama Teie broneeringu:\n\
             📅 Aeg: {} kell {}\n\n\
             Vabandame ebamugavuste pärast.\n\
             {}",
            booking.client_name, booking.date, booking.time, owner_name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Booking {
        Booking {
            client_name: "Mari Maasikas".to_string(),
            date: "15.03.2026".to_string(),
            time: "10:00-11:00".to_string(),
            address: "Pikk 1, Tallinn".to_string(),
            email: "mari@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_confirmation_draft() {
        let draft = confirmation_draft(&sample(), "Fotobook");
        assert_eq!(draft.to, "mari@example.com");
        assert!(draft.subject.contains("Kinnitus"));
        assert!(draft.body.contains("Tere Mari Maasikas!"));
        assert!(draft.body.contains("15.03.2026 kell 10:00-11:00"));
        assert!(draft.body.contains("Pikk 1, Tallinn"));
        assert!(draft.body.ends_with("Fotobook"));
    }

    #[test]
    fn test_cancellation_draft() {
        let draft = cancellation_draft(&sample(), "Fotobook");
        assert!(draft.subject.contains("Tühistamine"));
        assert!(draft.body.contains("tühistama"));
        assert!(!draft.body.contains("Aadress"));
    }
}
