use crate::error::AppError;

pub const INVALID_PHONE_MESSAGE: &str =
    "Invalid phone number format. Use +<Country Code> <10 digits>";

const MAX_COUNTRY_CODE_DIGITS: usize = 3;
const SUBSCRIBER_DIGITS: usize = 10;

/// The characters ECMAScript's `\s` matches (WhiteSpace plus LineTerminator).
/// This differs from Unicode `White_Space`: U+FEFF is included, U+0085 is not.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `+<1-3 digit country code><whitespace><10 digits>`, nothing else.
pub fn is_valid_phone_number(phone: &str) -> bool {
    let Some(rest) = phone.strip_prefix('+') else {
        return false;
    };

    let Some((country_code, subscriber)) = rest.split_once(is_js_whitespace) else {
        return false;
    };

    let country_ok = (1..=MAX_COUNTRY_CODE_DIGITS).contains(&country_code.len())
        && country_code.bytes().all(|b| b.is_ascii_digit());
    let subscriber_ok = subscriber.len() == SUBSCRIBER_DIGITS
        && subscriber.bytes().all(|b| b.is_ascii_digit());

    country_ok && subscriber_ok
}

pub fn validate_phone_number(phone: &str) -> Result<(), AppError> {
    if !is_valid_phone_number(phone) {
        return Err(AppError::format(INVALID_PHONE_MESSAGE));
    }
    Ok(())
}
