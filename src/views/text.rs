/// Pads or truncates to exactly `width` characters. Truncated values end with `~`.
pub fn fit(value: &str, width: usize) -> String {
    let length = value.chars().count();

    if length <= width {
        format!("{}{}", value, " ".repeat(width - length))
    } else if width == 0 {
        String::new()
    } else {
        let mut truncated: String = value.chars().take(width - 1).collect();
        truncated.push('~');
        truncated
    }
}

pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Joins cells with a column separator, trimming trailing padding.
pub fn row(cells: &[String]) -> String {
    cells.join(" | ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_pad_short_values() {
        assert_eq!(fit("KNO", 5), "KNO  ");
    }

    #[test_log::test]
    fn should_truncate_long_values() {
        assert_eq!(fit("Houston Gymnastics Academy", 10), "Houston G~");
        assert_eq!(fit("anything", 0), "");
    }
}
