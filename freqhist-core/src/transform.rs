use freqhist_common::{FreqHistError, Result, Variant};

fn rescaled(x: f64) -> f64 {
    (((x + 1.0) / 2.0) * 255.0).round()
}

/// Scales a value in [-1.0, 1.0] to [0, 255], rounding half away from zero.
///
/// Inputs outside the unit range are not clamped. Results beyond the `i64`
/// range saturate; `parse_csv_rescaled` rejects such fields instead.
pub fn rescale_to_byte(x: f64) -> i64 {
    rescaled(x) as i64
}

// i64::MAX as f64 rounds up to 2^63, so the upper check is exclusive
fn fits_i64(v: f64) -> bool {
    v >= i64::MIN as f64 && v < i64::MAX as f64
}

fn parse_error(line: usize, text: &str, reason: impl ToString) -> FreqHistError {
    FreqHistError::Parse {
        line,
        text: text.to_owned(),
        reason: reason.to_string(),
    }
}

/// One decimal integer per line, surrounding whitespace ignored.
pub fn parse_integers<S: AsRef<str>>(lines: &[S]) -> Result<Vec<i64>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let raw = raw.as_ref();
            raw.trim()
                .parse::<i64>()
                .map_err(|e| parse_error(i + 1, raw, e))
        })
        .collect()
}

/// Skips `header_lines`, then rescales every field after column 0.
pub fn parse_csv_rescaled<S: AsRef<str>>(lines: &[S], header_lines: usize) -> Result<Vec<i64>> {
    let mut out = Vec::new();
    for (i, raw) in lines.iter().enumerate().skip(header_lines) {
        let raw = raw.as_ref();
        for field in raw.split(',').skip(1) {
            let v: f64 = field
                .trim()
                .parse()
                .map_err(|e| parse_error(i + 1, raw, format!("field {:?}: {e}", field.trim())))?;
            if !v.is_finite() {
                return Err(parse_error(i + 1, raw, format!("field {:?} is not finite", field.trim())));
            }
            if !fits_i64(rescaled(v)) {
                return Err(parse_error(i + 1, raw, format!("field {:?} rescales outside the i64 range", field.trim())));
            }
            out.push(rescale_to_byte(v));
        }
    }
    Ok(out)
}

pub fn parse_samples<S: AsRef<str>>(variant: Variant, lines: &[S], csv_header_lines: usize) -> Result<Vec<i64>> {
    match variant {
        Variant::IntegerRange | Variant::IntegerFixed => parse_integers(lines),
        Variant::CsvRescale => parse_csv_rescaled(lines, csv_header_lines),
    }
}
