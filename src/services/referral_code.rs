use rand::RngCore;
use rand::rngs::OsRng;

pub const REFERRAL_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const DEFAULT_REFERRAL_CODE_LENGTH: usize = 12;

/// Generates a referral code of `length` characters from [`REFERRAL_ALPHABET`].
///
/// Each character comes from one OS-random byte reduced `mod 62`. Because 256
/// is not a multiple of 62 the first 8 symbols (`A`..=`H`) are drawn with
/// probability 5/256 instead of 4/256. Codes are not checked for uniqueness.
pub fn generate_referral_code(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    OsRng.fill_bytes(&mut bytes);

    bytes
        .iter()
        .map(|b| REFERRAL_ALPHABET[*b as usize % REFERRAL_ALPHABET.len()] as char)
        .collect()
}
