//! Display formatting for star properties
//!
//! Every string shown in the detail view, the tooltip and the `show`
//! command goes through these helpers, so the output is identical across
//! the terminal UI and headless mode.

/// Extra digits printed past the requested precision to detect exact ties.
const TIE_PROBE_DIGITS: usize = 24;

/// Minutes of light-travel time per light-year.
const MINUTES_PER_LIGHT_YEAR: [f64; 3] = [365.25, 24.0, 60.0];

/// Fixed-point rendering with exact-tie rounding half away from zero.
///
/// Rust's `{:.N}` already rounds the exact binary value correctly; only
/// values lying exactly halfway between two outputs differ (it rounds those
/// to even), so ties are detected and rounded up by hand.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    let wide = format!("{:.*}", decimals + TIE_PROBE_DIGITS, magnitude);
    let (kept, probe) = wide.split_at(wide.len() - TIE_PROBE_DIGITS);
    let is_tie = probe.starts_with('5') && probe[1..].bytes().all(|b| b == b'0');

    let digits = if is_tie {
        round_up_last_digit(kept.trim_end_matches('.'))
    } else {
        format!("{:.*}", decimals, magnitude)
    };

    if value < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

fn round_up_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    for c in chars.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                return chars.into_iter().collect();
            }
        }
    }
    std::iter::once('1').chain(chars).collect()
}

/// Abbreviates large values with a `K`/`M` suffix.
///
/// Display-only: `1500` becomes `"1.5K"`, `2_500_000` becomes `"2.5M"`,
/// anything below a thousand is printed with `decimals` places.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", to_fixed(value / 1_000_000.0, 1))
    } else if value >= 1_000.0 {
        format!("{}K", to_fixed(value / 1_000.0, 1))
    } else {
        to_fixed(value, decimals)
    }
}

/// Distance in light-years, switching to light-minutes below one light-year.
pub fn format_distance(light_years: f64) -> String {
    if light_years < 1.0 {
        let [days, hours, minutes] = MINUTES_PER_LIGHT_YEAR;
        let light_minutes = light_years * days * hours * minutes;
        format!("{} minutos luz", to_fixed(light_minutes, 1))
    } else {
        format!("{} años luz", format_number(light_years, 2))
    }
}

/// Age given in millions of years, shown in billions from 1000 Myr upwards.
pub fn format_age(million_years: f64) -> String {
    if million_years >= 1_000.0 {
        format!("{} mil millones de años", to_fixed(million_years / 1_000.0, 1))
    } else {
        format!("{} millones de años", format_number(million_years, 2))
    }
}

/// Metallicity with an explicit sign for metal-rich stars.
pub fn format_metallicity(dex: f64) -> String {
    let sign = if dex > 0.0 { "+" } else { "" };
    format!("{}{}", sign, to_fixed(dex, 2))
}

/// Thousands-grouped number with up to three fraction digits (`5778` -> `"5,778"`).
pub fn group_thousands(value: f64) -> String {
    let fixed = to_fixed(value.abs(), 3);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    if value < 0.0 && grouped.chars().any(|c| c != '0' && c != ',' && c != '.') {
        grouped.insert(0, '-');
    }
    grouped
}

/// Short axis tick label: integers without decimals, others with one.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value + 0.0)
    } else {
        to_fixed(value, 1)
    }
}
