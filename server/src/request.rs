mod author;
mod book;

pub use self::{author::*, book::*};

use error_stack::{Report, ResultExt};
use kernel::KernelError;
use std::str::FromStr;
use time::macros::format_description;
use time::Date;

fn invalid(message: String) -> Report<KernelError> {
    Report::new(KernelError::InvalidInput).attach_printable(message)
}

/// A field that must be present and non-blank, up to `max_length` characters.
fn required_text(
    value: Option<String>,
    field: &str,
    max_length: usize,
) -> error_stack::Result<String, KernelError> {
    let value = value.ok_or_else(|| invalid(format!("{field} is required")))?;
    if value.trim().is_empty() {
        return Err(invalid(format!("{field} must not be blank")));
    }
    if value.chars().count() > max_length {
        return Err(invalid(format!("{field} must be at most {max_length} characters")));
    }
    Ok(value)
}

fn required_number<T>(value: Option<String>, field: &str) -> error_stack::Result<T, KernelError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.ok_or_else(|| invalid(format!("{field} is required")))?;
    parse_number(value.trim(), field)
}

/// The key must be sent, but an empty value means the field is unset.
fn present_optional_number<T>(
    value: Option<String>,
    field: &str,
) -> error_stack::Result<Option<T>, KernelError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.ok_or_else(|| invalid(format!("{field} is required")))?;
    match value.trim() {
        "" => Ok(None),
        value => parse_number(value, field).map(Some),
    }
}

fn parse_number<T>(value: &str, field: &str) -> error_stack::Result<T, KernelError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse::<T>()
        .change_context_lazy(|| KernelError::InvalidInput)
        .attach_printable_lazy(|| format!("{field} is not a number: {value}"))
}

/// Missing and empty both mean no date; anything else must be `YYYY-MM-DD`.
fn optional_date(
    value: Option<String>,
    field: &str,
) -> error_stack::Result<Option<Date>, KernelError> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(value) if value.starts_with(['+', '-']) => Err(invalid(format!(
            "{field} is not a YYYY-MM-DD date: {value}"
        ))),
        Some(value) => Date::parse(value, format_description!("[year]-[month]-[day]"))
            .map(Some)
            .change_context_lazy(|| KernelError::InvalidInput)
            .attach_printable_lazy(|| format!("{field} is not a YYYY-MM-DD date: {value}")),
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;
    use time::macros::date;

    use super::{optional_date, present_optional_number, required_number, required_text};

    #[test]
    fn text() {
        assert_eq!(
            required_text(Some("Emma".into()), "title", 200).ok(),
            Some("Emma".to_string())
        );
        for value in [None, Some(String::new()), Some("   ".into()), Some("x".repeat(201))] {
            let error = required_text(value, "title", 200).unwrap_err();
            assert_eq!(error.current_context(), &KernelError::InvalidInput);
        }
    }

    #[test]
    fn numbers() {
        assert_eq!(required_number::<i64>(Some("7".into()), "author_id").ok(), Some(7));
        assert!(required_number::<i64>(None, "author_id").is_err());
        assert!(required_number::<i64>(Some("seven".into()), "author_id").is_err());

        assert_eq!(
            present_optional_number::<i32>(Some(String::new()), "publication_year").ok(),
            Some(None)
        );
        assert_eq!(
            present_optional_number::<i32>(Some("1869".into()), "publication_year").ok(),
            Some(Some(1869))
        );
        assert!(present_optional_number::<i32>(None, "publication_year").is_err());
        assert!(present_optional_number::<i32>(Some("18x9".into()), "publication_year").is_err());
    }

    #[test]
    fn dates() {
        assert_eq!(optional_date(None, "birthdate").ok(), Some(None));
        assert_eq!(optional_date(Some(String::new()), "birthdate").ok(), Some(None));
        assert_eq!(
            optional_date(Some("1828-09-09".into()), "birthdate").ok(),
            Some(Some(date!(1828 - 09 - 09)))
        );
        for malformed in [
            "09/09/1828",
            "1828-9-9",
            "1828-02-30",
            "yesterday",
            "+1828-09-09",
            "-0001-01-01",
        ] {
            let error = optional_date(Some(malformed.into()), "birthdate").unwrap_err();
            assert_eq!(error.current_context(), &KernelError::InvalidInput);
        }
    }
}
