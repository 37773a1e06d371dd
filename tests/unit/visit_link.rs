use doctor_invite::utils::{build_visit_link, encode_uri_component};

#[test]
fn encodes_like_encode_uri_component() {
    assert_eq!(encode_uri_component("Dr. Smith"), "Dr.%20Smith");
    assert_eq!(encode_uri_component("a/b?c=d&e#f"), "a%2Fb%3Fc%3Dd%26e%23f");
    assert_eq!(encode_uri_component("José"), "Jos%C3%A9");
    assert_eq!(encode_uri_component("100%"), "100%25");
}

#[test]
fn builds_visit_link() {
    assert_eq!(
        build_visit_link("Dr. Smith", "AbCdEf123456"),
        "/visit/Dr.%20Smith?ref=AbCdEf123456"
    );
}
