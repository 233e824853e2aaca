//! Vehicle identification numbers (ISO 3779).

use rand::Rng;

/// Length of a modern VIN.
pub const VIN_LENGTH: usize = 17;

/// Index of the check digit within a VIN.
pub const CHECK_DIGIT_INDEX: usize = 8;

/// Characters allowed in a VIN. `I`, `O` and `Q` are excluded.
pub const VIN_ALPHABET: &[u8] = b"0123456789ABCDEFGHJKLMNPRSTUVWXYZ";

/// Transliterated value of each [`VIN_ALPHABET`] character, index for index.
const ALPHABET_VALUES: [u32; 33] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, // digits
    1, 2, 3, 4, 5, 6, 7, 8, // A-H
    1, 2, 3, 4, 5, 7, 9, // J-R
    2, 3, 4, 5, 6, 7, 8, 9, // S-Z
];

const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

fn transliterate(c: u8) -> Option<u32> {
    let value = match c {
        b'0'..=b'9' => u32::from(c - b'0'),
        b'A' | b'J' => 1,
        b'B' | b'K' | b'S' => 2,
        b'C' | b'L' | b'T' => 3,
        b'D' | b'M' | b'U' => 4,
        b'E' | b'N' | b'V' => 5,
        b'F' | b'W' => 6,
        b'G' | b'P' | b'X' => 7,
        b'H' | b'Y' => 8,
        b'R' | b'Z' => 9,
        _ => return None,
    };
    Some(value)
}

/// Computes the check digit for a 17 character VIN.
///
/// The character currently at the check digit position is ignored. Returns
/// `None` when the input has the wrong length or contains characters outside
/// [`VIN_ALPHABET`].
pub fn check_digit(vin: &str) -> Option<char> {
    let bytes = vin.as_bytes();
    if bytes.len() != VIN_LENGTH {
        return None;
    }

    let mut sum = 0;
    for (i, &c) in bytes.iter().enumerate() {
        if i == CHECK_DIGIT_INDEX {
            continue;
        }
        sum += transliterate(c)? * WEIGHTS[i];
    }

    Some(check_char(sum))
}

fn check_char(weighted_sum: u32) -> char {
    match weighted_sum % 11 {
        10 => 'X',
        n => char::from(b'0' + n as u8),
    }
}

/// Returns true if `vin` is well formed and its check digit matches.
pub fn is_valid(vin: &str) -> bool {
    let check = vin.as_bytes().get(CHECK_DIGIT_INDEX).map(|&c| c as char);
    check.is_some() && check_digit(vin) == check
}

/// Generates a random VIN with a correct check digit.
pub fn random_vin(rng: &mut (impl Rng + ?Sized)) -> String {
    let mut chars = ['0'; VIN_LENGTH];
    let mut sum = 0;
    for (i, slot) in chars.iter_mut().enumerate() {
        if i == CHECK_DIGIT_INDEX {
            continue;
        }
        let idx = rng.gen_range(0..VIN_ALPHABET.len());
        *slot = char::from(VIN_ALPHABET[idx]);
        sum += ALPHABET_VALUES[idx] * WEIGHTS[i];
    }
    chars[CHECK_DIGIT_INDEX] = check_char(sum);

    chars.iter().collect()
}
