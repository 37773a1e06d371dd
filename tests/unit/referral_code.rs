use doctor_invite::services::referral_code::{
    DEFAULT_REFERRAL_CODE_LENGTH, REFERRAL_ALPHABET, generate_referral_code,
};

#[test]
fn generates_exact_length_from_alphabet() {
    for length in 1..=64 {
        let code = generate_referral_code(length);
        assert_eq!(code.len(), length);
        assert!(code.bytes().all(|b| REFERRAL_ALPHABET.contains(&b)), "bad code {}", code);
    }
}

#[test]
fn default_length_is_twelve() {
    assert_eq!(DEFAULT_REFERRAL_CODE_LENGTH, 12);
    assert_eq!(generate_referral_code(DEFAULT_REFERRAL_CODE_LENGTH).len(), 12);
}

#[test]
fn alphabet_is_ascii_alphanumeric() {
    assert_eq!(REFERRAL_ALPHABET.len(), 62);
    assert!(REFERRAL_ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
}

#[test]
fn consecutive_codes_differ() {
    let a = generate_referral_code(DEFAULT_REFERRAL_CODE_LENGTH);
    let b = generate_referral_code(DEFAULT_REFERRAL_CODE_LENGTH);
    assert_ne!(a, b);
}
