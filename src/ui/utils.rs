/// Price with thousands separators and a precision that suits its magnitude.
pub fn format_price(price: f64) -> String {
    let decimals = if price.abs() >= 1.0 {
        2
    } else if price == 0.0 {
        0
    } else {
        6
    };
    let raw = format!("{:.*}", decimals, price.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(50000.0), "50,000.00");
        assert_eq!(format_price(1234567.891), "1,234,567.89");
        assert_eq!(format_price(999.5), "999.50");
        assert_eq!(format_price(-1500.0), "-1,500.00");
    }

    #[test]
    fn small_and_zero_prices() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(0.00012345), "0.000123");
    }
}
