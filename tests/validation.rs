#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use taskdesk::libs::user::Role;
    use taskdesk::libs::validation::{validate_task, RegistrationForm, ValidationError};

    fn form(name: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            role: Role::Student,
        }
    }

    #[test]
    fn test_registration_checks_in_order() {
        assert_eq!(form("", "bad", "1", "2").validate(6), Err(ValidationError::MissingFields));
        assert_eq!(form("Alice", "bad", "1", "2").validate(6), Err(ValidationError::InvalidEmail));
        assert_eq!(form("Alice", "a@x.com", "1", "2").validate(6), Err(ValidationError::PasswordMismatch));
        assert_eq!(form("Alice", "a@x.com", "abc", "abc").validate(6), Err(ValidationError::PasswordTooShort(6)));
        assert_eq!(form("Alice", "a@x.com", "secret1", "secret1").validate(6), Ok(()));
    }

    #[test]
    fn test_min_password_length_is_configurable() {
        let alice = form("Alice", "a@x.com", "secret1", "secret1");

        assert_eq!(alice.validate(8), Err(ValidationError::PasswordTooShort(8)));
        assert_eq!(alice.validate(7), Ok(()));
    }

    #[test]
    fn test_task_form() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let now = tz.with_ymd_and_hms(2026, 10, 16, 14, 0, 0).unwrap();

        assert_eq!(validate_task(Role::Student, "  ", "2026-10-17", &now), Err(ValidationError::MissingTitle));
        assert_eq!(
            validate_task(Role::Student, "Essay", "next tuesday", &now),
            Err(ValidationError::InvalidDueDate("next tuesday".to_string()))
        );
        assert_eq!(validate_task(Role::Student, "Essay", "2026-10-15 23:59", &now), Err(ValidationError::DueDateInPast));

        // Earlier today is still accepted.
        let due = validate_task(Role::Student, "Essay", "2026-10-16 09:00", &now).unwrap();
        assert_eq!(due, tz.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        assert!(validate_task(Role::Student, "Essay", "2026-10-17", &now).is_ok());
    }

    #[test]
    fn test_teachers_may_set_past_due_dates() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let now = tz.with_ymd_and_hms(2026, 10, 16, 14, 0, 0).unwrap();

        let due = validate_task(Role::Teacher, "Marking", "2026-10-10", &now).unwrap();
        assert_eq!(due, tz.with_ymd_and_hms(2026, 10, 10, 0, 0, 0).unwrap());
        assert!(validate_task(Role::Admin, "Audit", "2026-10-10", &now).is_ok());
        assert_eq!(validate_task(Role::Teacher, "", "2026-10-10", &now), Err(ValidationError::MissingTitle));
    }
}
