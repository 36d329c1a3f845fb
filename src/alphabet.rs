
pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

pub fn get_idx(a: char) -> usize {
    assert!(a.is_ascii_lowercase(), "character {:?} is outside the a-z alphabet", a);
    (a as u8 - b'a') as usize
}

pub fn normalize(s: &str) -> String {
    s.to_ascii_lowercase().chars().filter(|&x| ALPHABET.contains(&(x as u8))).collect()
}
