//! The HCPL character table.

const PUNCTUATION: [char; 10] = ['.', ',', '?', '!', '(', ')', '"', '-', '+', '*'];

/// Render a Dataling value as text.
///
/// Codes 1–74 map onto the fixed HCPL character table: 1 is a space, 2–27
/// are `a`–`z`, 28–53 are `A`–`Z`, 54–63 are `0`–`9`, 65–74 are punctuation.
/// Code 64 renders as the two-character string `"10"`; this is part of the
/// language and is deliberately indistinguishable from codes 55 and 54 in
/// sequence. Everything outside 1–74 renders as the decimal form of the
/// value itself.
pub fn render(value: i64) -> String {
    match value {
        1 => ' '.to_string(),
        2..=27 => ((b'a' + (value - 2) as u8) as char).to_string(),
        28..=53 => ((b'A' + (value - 28) as u8) as char).to_string(),
        54..=63 => ((b'0' + (value - 54) as u8) as char).to_string(),
        64 => "10".to_string(),
        65..=74 => PUNCTUATION[(value - 65) as usize].to_string(),
        _ => value.to_string(),
    }
}
