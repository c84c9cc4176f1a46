//! Field formatting for fixed-width records.

/// Folds a character to a single ASCII byte.
///
/// Latin letters with diacritics lose the accent; anything else outside
/// printable ASCII becomes a space.
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        c if c.is_ascii() && !c.is_ascii_control() => c,
        _ => ' ',
    }
}

/// Left-aligned text field: ASCII-folded, truncated to `width`, space-padded.
pub(crate) fn alpha(value: &str, width: usize) -> String {
    let mut field: String = value.chars().map(fold_char).take(width).collect();
    while field.len() < width {
        field.push(' ');
    }
    field
}

/// Right-aligned numeric field: non-digits stripped, zero-padded to `width`.
///
/// On overflow the rightmost `width` digits are kept.
pub(crate) fn numeric(value: &str, width: usize) -> String {
    let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).collect();
    let kept = &digits[digits.len().saturating_sub(width)..];
    let mut field = "0".repeat(width - kept.len());
    field.extend(kept);
    field
}

/// Blank filler.
pub(crate) fn filler(width: usize) -> String {
    " ".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_pads_and_truncates() {
        assert_eq!(alpha("Ana", 6), "Ana   ");
        assert_eq!(alpha("Maria Ximenes", 5), "Maria");
        assert_eq!(alpha("", 3), "   ");
    }

    #[test]
    fn test_alpha_folds_to_ascii() {
        assert_eq!(alpha("João Conceição", 14), "Joao Conceicao");
        assert_eq!(alpha("Zé\tLobato", 9), "Ze Lobato");
        assert_eq!(alpha("日本", 4), "    ");
    }

    #[test]
    fn test_numeric_pads_and_strips() {
        assert_eq!(numeric("12345", 8), "00012345");
        assert_eq!(numeric("001-234-5", 8), "00012345");
        assert_eq!(numeric("", 4), "0000");
    }

    #[test]
    fn test_numeric_keeps_rightmost_digits() {
        assert_eq!(numeric("123456789", 4), "6789");
    }
}
