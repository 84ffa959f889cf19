use chrono::NaiveDateTime;

use crate::reservation_status::ReservationStatus;

/// Validated reservation input, independent of how it arrived over the wire.
///
/// Server-managed fields (id, created_at, updated_at) are absent here; the
/// store assigns them in its write path.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDraft {
    pub guest_name: String,
    pub room_number: i32,
    pub contact_number: String,
    pub reservation_date: Option<NaiveDateTime>,
    pub status: Option<ReservationStatus>,
}

impl ReservationDraft {
    /// Checks every field constraint, returning the first violation
    pub fn validate(&self) -> Result<(), String> {
        if self.guest_name.trim().is_empty() {
            return Err("Guest name is required".to_owned());
        }

        let name_len = self.guest_name.chars().count();
        if !(2..=100).contains(&name_len) {
            return Err("Guest name must be between 2 and 100 characters".to_owned());
        }

        if !(1..=9999).contains(&self.room_number) {
            return Err("Room number must be between 1 and 9999".to_owned());
        }

        if !is_valid_contact_number(&self.contact_number) {
            return Err("Contact number must be 10-15 digits".to_owned());
        }

        Ok(())
    }
}

/// Optional leading `+` followed by 10 to 15 digits
fn is_valid_contact_number(contact: &str) -> bool {
    let digits = contact.strip_prefix('+').unwrap_or(contact);

    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use crate::reservation_draft::ReservationDraft;
    use crate::reservation_status::ReservationStatus;

    fn valid_draft() -> ReservationDraft {
        ReservationDraft {
            guest_name: "Ann Lee".to_owned(),
            room_number: 204,
            contact_number: "+12345678901".to_owned(),
            reservation_date: None,
            status: None,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_blank_guest_name_is_rejected() {
        let mut draft = valid_draft();
        draft.guest_name = "   ".to_owned();
        assert_eq!(draft.validate().unwrap_err(), "Guest name is required");
    }

    #[test]
    fn test_guest_name_length_bounds() {
        let mut draft = valid_draft();
        draft.guest_name = "A".to_owned();
        assert!(draft.validate().is_err());

        draft.guest_name = "A".repeat(100);
        assert!(draft.validate().is_ok());

        draft.guest_name = "A".repeat(101);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_room_number_bounds() {
        let mut draft = valid_draft();
        draft.room_number = 0;
        assert!(draft.validate().is_err());

        draft.room_number = 1;
        assert!(draft.validate().is_ok());

        draft.room_number = 9999;
        assert!(draft.validate().is_ok());

        draft.room_number = 10000;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_contact_number_pattern() {
        let mut draft = valid_draft();

        draft.contact_number = "1234567890".to_owned();
        assert!(draft.validate().is_ok());

        draft.contact_number = "+123456789012345".to_owned();
        assert!(draft.validate().is_ok());

        // Too few digits
        draft.contact_number = "123456789".to_owned();
        assert!(draft.validate().is_err());

        // Too many digits
        draft.contact_number = "1234567890123456".to_owned();
        assert!(draft.validate().is_err());

        // Non-digit characters
        draft.contact_number = "12345abc901".to_owned();
        assert!(draft.validate().is_err());

        // Plus sign only allowed at the start
        draft.contact_number = "12345+67890".to_owned();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_status_does_not_affect_validation() {
        let mut draft = valid_draft();
        draft.status = Some(ReservationStatus::Pending);
        assert!(draft.validate().is_ok());
    }
}
