use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Dues are always in Turkish lira.
pub(crate) const CURRENCY: Currency = Currency::TRY;

/// Formats an amount Turkish style: '.' as thousands separator, ',' as
/// decimal mark, rounded to the currency's minor unit. The fractional part is
/// omitted when it is zero (ex. 2500 → "2.500", 208.333 → "208,33").
pub(crate) fn format_lira(amount: f64) -> String {
    let decimal_places = CURRENCY.exponent().unwrap_or(0) as u32;
    let factor = 10_i64.pow(decimal_places);
    let minor_units = (amount.abs() * factor as f64).round() as i64;
    let integer_part = (minor_units / factor).to_formatted_string(&Locale::tr);
    let fractional_part = minor_units % factor;
    let sign = if amount < 0.0 && minor_units != 0 {
        "-"
    } else {
        ""
    };
    if fractional_part == 0 {
        format!("{}{}", sign, integer_part)
    } else {
        format!(
            "{}{},{:0width$}",
            sign,
            integer_part,
            fractional_part,
            width = decimal_places as usize
        )
    }
}

/// Same as `format_lira`, followed by the currency symbol.
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{} {}", format_lira(amount), CURRENCY.symbol())
}

/// Percent-encodes everything except the characters JavaScript's
/// `encodeURIComponent` leaves alone, so links match what messaging clients
/// expect.
pub(crate) fn encode_uri_component(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lira_amounts() {
        assert_eq!(format_lira(200.0), "200");
        assert_eq!(format_lira(2500.0), "2.500");
        assert_eq!(format_lira(2500.0 / 12.0), "208,33");
        assert_eq!(format_lira(625.0), "625");
        assert_eq!(format_lira(1234567.5), "1.234.567,50");
        assert_eq!(format_lira(-50.0), "-50");
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a b/c?d=e"), "a%20b%2Fc%3Fd%3De");
        assert_eq!(encode_uri_component("Şubat"), "%C5%9Esubat");
        assert_eq!(encode_uri_component("(ok)!"), "(ok)!");
    }
}
