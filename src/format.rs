use chrono::NaiveDate;

use crate::decimal::Money;
use crate::types::CreditStatus;

/// render an amount with space-grouped thousands and the ruble sign,
/// dropping zero kopecks: "1 200 000 ₽", "23 546.89 ₽"
pub fn format_currency(amount: Money) -> String {
    let value = amount.as_decimal().round_dp(2);
    let text = format!("{:.2}", value);
    let (sign, text) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    let (int_part, frac_part) = text.split_once('.').unwrap_or((text, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if frac_part == "00" {
        format!("{sign}{grouped} ₽")
    } else {
        format!("{sign}{grouped}.{frac_part} ₽")
    }
}

/// render a date in day/month/year form: "15.01.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// normalize a phone number to "+7 (999) 123-45-67"
///
/// numbers that do not carry ten national digits are returned unchanged
pub fn format_phone(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let national: &[char] = match digits.len() {
        11 if digits[0] == '7' || digits[0] == '8' => &digits[1..],
        10 => &digits[..],
        _ => return raw.to_string(),
    };

    let part: String = national.iter().collect();
    format!(
        "+7 ({}) {}-{}-{}",
        &part[0..3],
        &part[3..6],
        &part[6..8],
        &part[8..10]
    )
}

/// human-readable status label shown in the console
pub fn status_label(status: CreditStatus) -> &'static str {
    match status {
        CreditStatus::Pending => "На рассмотрении",
        CreditStatus::Approved => "Одобрен",
        CreditStatus::Rejected => "Отклонен",
        CreditStatus::Active => "Активный",
        CreditStatus::Closed => "Закрыт",
    }
}

/// color tag used by the console for status badges
pub fn status_color(status: CreditStatus) -> &'static str {
    match status {
        CreditStatus::Pending => "orange",
        CreditStatus::Approved => "blue",
        CreditStatus::Active => "green",
        CreditStatus::Rejected => "red",
        CreditStatus::Closed => "default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(Money::from_major(500_000)), "500 000 ₽");
        assert_eq!(format_currency(Money::from_major(1_200_000)), "1 200 000 ₽");
        assert_eq!(format_currency(Money::from_major(150)), "150 ₽");
        assert_eq!(
            format_currency(Money::from_str_exact("23546.89").unwrap()),
            "23 546.89 ₽"
        );
        assert_eq!(
            format_currency(Money::from_str_exact("-150.50").unwrap()),
            "-150.50 ₽"
        );
    }

    #[test]
    fn test_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_date(date), "15.01.2024");
    }

    #[test]
    fn test_phone_normalization() {
        assert_eq!(format_phone("89991234567"), "+7 (999) 123-45-67");
        assert_eq!(format_phone("+79991234567"), "+7 (999) 123-45-67");
        assert_eq!(format_phone("999-123-45-67"), "+7 (999) 123-45-67");
        assert_eq!(format_phone("+7 (999) 123-45-67"), "+7 (999) 123-45-67");
        // too short, passed through untouched
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn test_status_presentation() {
        assert_eq!(status_label(CreditStatus::Pending), "На рассмотрении");
        assert_eq!(status_color(CreditStatus::Pending), "orange");
        assert_eq!(status_color(CreditStatus::Closed), "default");
    }
}
