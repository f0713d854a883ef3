use argon2::password_hash::rand_core::{OsRng, RngCore};

/// Join-code alphabet with ambiguous glyphs (O, 0, I, l) removed.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNPQRSTUVWXYZ123456789";

/// Random characters per code, not counting the dash.
const CODE_LEN: usize = 7;

/// Generate one shareable join code, `XXX-XXXX`.
pub fn generate_join_code() -> String {
    let mut code = String::with_capacity(CODE_LEN + 1);
    for i in 0..CODE_LEN {
        let idx = OsRng.next_u32() as usize % CODE_ALPHABET.len();
        code.push(CODE_ALPHABET[idx] as char);
        if i == 2 {
            code.push('-');
        }
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_is_three_dash_four() {
        for _ in 0..50 {
            let code = generate_join_code();
            assert_eq!(code.len(), 8);
            let (head, tail) = code.split_at(3);
            assert!(tail.starts_with('-'));
            for c in head.chars().chain(tail[1..].chars()) {
                assert!(CODE_ALPHABET.contains(&(c as u8)), "unexpected char {c} in {code}");
            }
        }
    }

    #[test]
    fn ambiguous_glyphs_never_appear() {
        for _ in 0..50 {
            let code = generate_join_code();
            assert!(!code.contains(['O', '0', 'I', 'l']), "{code}");
        }
    }
}
