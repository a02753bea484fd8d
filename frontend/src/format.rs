pub fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let s = value.unsigned_abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

// Beyond this many cents an f64 no longer holds every whole cent.
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

/// `$1,234.50`: two decimals, rounded half away from zero on the cent.
/// Values too large to group exactly are printed plainly; non-finite ones
/// as a dash.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    let scaled = (amount.abs() * 100.0).round();
    if scaled > MAX_EXACT_CENTS {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}{:.2}", sign, symbol, amount.abs());
    }

    let cents = scaled as i64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        format_with_commas(cents / 100),
        cents % 100
    )
}
