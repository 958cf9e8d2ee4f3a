use chrono::NaiveDate;
use shelflog_core::{
    parse_optional_text, parse_rating, parse_read_date, parse_title, BookValidationError, NewBook,
    RATING_MAX, RATING_MIN,
};

#[test]
fn new_book_sets_defaults() {
    let draft = NewBook::new("Dune");

    assert_eq!(draft.title, "Dune");
    assert_eq!(draft.author, None);
    assert_eq!(draft.read_date, None);
    assert_eq!(draft.rating, None);
    assert_eq!(draft.notes, None);
    assert!(draft.validate().is_ok());
}

#[test]
fn validate_rejects_whitespace_only_title() {
    let draft = NewBook::new("   ");
    assert_eq!(draft.validate().unwrap_err(), BookValidationError::EmptyTitle);
}

#[test]
fn validate_rejects_out_of_range_rating() {
    let mut draft = NewBook::new("Rated");
    draft.rating = Some(0);
    assert_eq!(
        draft.validate().unwrap_err(),
        BookValidationError::RatingOutOfRange { value: 0 }
    );

    draft.rating = Some(6);
    assert_eq!(
        draft.validate().unwrap_err(),
        BookValidationError::RatingOutOfRange { value: 6 }
    );

    draft.rating = Some(RATING_MIN);
    assert!(draft.validate().is_ok());
    draft.rating = Some(RATING_MAX);
    assert!(draft.validate().is_ok());
}

#[test]
fn parse_title_trims_and_keeps_content() {
    assert_eq!(parse_title("  Dune ").unwrap(), "Dune");
    assert_eq!(parse_title("Dune").unwrap(), "Dune");
}

#[test]
fn parse_title_rejects_blank_input() {
    assert_eq!(parse_title("").unwrap_err(), BookValidationError::EmptyTitle);
    assert_eq!(
        parse_title("   ").unwrap_err(),
        BookValidationError::EmptyTitle
    );
}

#[test]
fn parse_read_date_treats_blank_as_skipped() {
    assert_eq!(parse_read_date("").unwrap(), None);
    assert_eq!(parse_read_date("   ").unwrap(), None);
}

#[test]
fn parse_read_date_accepts_valid_iso_dates() {
    assert_eq!(
        parse_read_date("2023-01-15").unwrap(),
        Some(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())
    );
    assert_eq!(
        parse_read_date(" 2024-02-29 ").unwrap(),
        Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
    );
}

#[test]
fn parse_read_date_rejects_wrong_shape_as_format_error() {
    assert_eq!(
        parse_read_date("15-01-2023").unwrap_err(),
        BookValidationError::InvalidDateFormat {
            value: "15-01-2023".to_string()
        }
    );
    assert_eq!(
        parse_read_date("2023/01/15").unwrap_err(),
        BookValidationError::InvalidDateFormat {
            value: "2023/01/15".to_string()
        }
    );
    assert_eq!(
        parse_read_date("2023-1-5").unwrap_err(),
        BookValidationError::InvalidDateFormat {
            value: "2023-1-5".to_string()
        }
    );
}

#[test]
fn parse_read_date_rejects_impossible_calendar_dates() {
    assert_eq!(
        parse_read_date("2023-02-30").unwrap_err(),
        BookValidationError::InvalidCalendarDate {
            value: "2023-02-30".to_string()
        }
    );
    assert_eq!(
        parse_read_date("2023-13-01").unwrap_err(),
        BookValidationError::InvalidCalendarDate {
            value: "2023-13-01".to_string()
        }
    );
    assert_eq!(
        parse_read_date("2023-02-29").unwrap_err(),
        BookValidationError::InvalidCalendarDate {
            value: "2023-02-29".to_string()
        }
    );
}

#[test]
fn parse_rating_treats_blank_as_skipped() {
    assert_eq!(parse_rating("").unwrap(), None);
    assert_eq!(parse_rating("   ").unwrap(), None);
}

#[test]
fn parse_rating_accepts_whole_range() {
    assert_eq!(parse_rating("1").unwrap(), Some(1));
    assert_eq!(parse_rating("3").unwrap(), Some(3));
    assert_eq!(parse_rating("5").unwrap(), Some(5));
    assert_eq!(parse_rating(" 4 ").unwrap(), Some(4));
}

#[test]
fn parse_rating_rejects_out_of_range_integers() {
    assert_eq!(
        parse_rating("0").unwrap_err(),
        BookValidationError::RatingOutOfRange { value: 0 }
    );
    assert_eq!(
        parse_rating("6").unwrap_err(),
        BookValidationError::RatingOutOfRange { value: 6 }
    );
    assert_eq!(
        parse_rating("-3").unwrap_err(),
        BookValidationError::RatingOutOfRange { value: -3 }
    );
}

#[test]
fn parse_rating_rejects_non_integer_input() {
    assert_eq!(
        parse_rating("abc").unwrap_err(),
        BookValidationError::InvalidRatingFormat {
            value: "abc".to_string()
        }
    );
    assert_eq!(
        parse_rating("4.5").unwrap_err(),
        BookValidationError::InvalidRatingFormat {
            value: "4.5".to_string()
        }
    );
}

#[test]
fn parse_optional_text_normalizes_blank_to_none() {
    assert_eq!(parse_optional_text(""), None);
    assert_eq!(parse_optional_text("   "), None);
    assert_eq!(parse_optional_text(" liked it "), Some("liked it".to_string()));
}

#[test]
fn validation_errors_render_operator_friendly_messages() {
    assert!(BookValidationError::EmptyTitle
        .to_string()
        .contains("title"));
    assert!(BookValidationError::InvalidDateFormat {
        value: "15-01-2023".to_string()
    }
    .to_string()
    .contains("YYYY-MM-DD"));
    assert!(BookValidationError::RatingOutOfRange { value: 9 }
        .to_string()
        .contains("between 1 and 5"));
}
