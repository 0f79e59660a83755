//! End-to-end decoding of a real certificate and adversarial inputs.

use std::str::FromStr;

use der::{Error, Reader, is_context_specific, validate_structure};
use pem::Pem;

const TEST_PEM_CERT: &str = r"-----BEGIN CERTIFICATE-----
MIICLDCCAdKgAwIBAgIBADAKBggqhkjOPQQDAjB9MQswCQYDVQQGEwJCRTEPMA0G
A1UEChMGR251VExTMSUwIwYDVQQLExxHbnVUTFMgY2VydGlmaWNhdGUgYXV0aG9y
aXR5MQ8wDQYDVQQIEwZMZXV2ZW4xJTAjBgNVBAMTHEdudVRMUyBjZXJ0aWZpY2F0
ZSBhdXRob3JpdHkwHhcNMTEwNTIzMjAzODIxWhcNMTIxMjIyMDc0MTUxWjB9MQsw
CQYDVQQGEwJCRTEPMA0GA1UEChMGR251VExTMSUwIwYDVQQLExxHbnVUTFMgY2Vy
dGlmaWNhdGUgYXV0aG9yaXR5MQ8wDQYDVQQIEwZMZXV2ZW4xJTAjBgNVBAMTHEdu
dVRMUyBjZXJ0aWZpY2F0ZSBhdXRob3JpdHkwWTATBgcqhkjOPQIBBggqhkjOPQMB
BwNCAARS2I0jiuNn14Y2sSALCX3IybqiIJUvxUpj+oNfzngvj/Niyv2394BWnW4X
uQ4RTEiywK87WRcWMGgJB5kX/t2no0MwQTAPBgNVHRMBAf8EBTADAQH/MA8GA1Ud
DwEB/wQFAwMHBgAwHQYDVR0OBBYEFPC0gf6YEr+1KLlkQAPLzB9mTigDMAoGCCqG
SM49BAMCA0gAMEUCIDGuwD1KPyG+hRf88MeyMQcqOFZD0TbVleF+UsAGQ4enAiEA
l4wOuDwKQa+upc8GftXE2C//4mKANBC6It01gUaTIpo=
-----END CERTIFICATE-----";

fn test_cert_der() -> Vec<u8> {
    Pem::from_str(TEST_PEM_CERT).unwrap().contents().unwrap()
}

#[test]
fn test_certificate_validates() {
    validate_structure(&test_cert_der()).unwrap();
}

#[test]
fn test_certificate_prints() {
    let mut out = String::new();
    der::print_structure(&test_cert_der(), &mut out).unwrap();

    assert!(out.contains("SEQUENCE"));
    // signature algorithm: ecdsa-with-SHA256
    assert!(out.contains("1.2.840.10045.4.3.2"));
    // subject organizational unit
    assert!(out.contains("\"GnuTLS certificate authority\""));
    assert!(out.contains("\"Leuven\""));
}

#[test]
fn test_certificate_field_walk() {
    let der_bytes = test_cert_der();
    let mut reader = Reader::new(&der_bytes);

    // Certificate and TBSCertificate headers
    assert_eq!(0x22C, reader.decode_sequence_header().unwrap());
    assert_eq!(0x1D2, reader.decode_sequence_header().unwrap());

    // [0] EXPLICIT version, v3 encoded as INTEGER 2
    let tag = reader.peek_tag().unwrap();
    assert!(is_context_specific(tag));
    let version_tlv = reader.decode_tlv().unwrap();
    let mut version_reader = Reader::new(version_tlv.value);
    assert_eq!(2, version_reader.decode_uint32().unwrap());

    // serial number 0
    assert_eq!(&[0x00], reader.decode_integer(64).unwrap());

    // signature algorithm SEQUENCE { OID ecdsa-with-SHA256 }
    reader.decode_sequence_header().unwrap();
    assert_eq!(
        vec![1, 2, 840, 10045, 4, 3, 2],
        reader.decode_oid().unwrap()
    );
}

#[test]
fn test_certificate_rdn_strings() {
    let der_bytes = test_cert_der();
    let mut reader = Reader::new(&der_bytes);

    reader.decode_sequence_header().unwrap();
    reader.decode_sequence_header().unwrap();
    reader.skip_element().unwrap(); // version
    reader.skip_element().unwrap(); // serial
    reader.skip_element().unwrap(); // signature algorithm

    // Issuer: SEQUENCE of RDN SETs; first is SET { SEQUENCE { OID, value } }
    reader.decode_sequence_header().unwrap();
    reader.decode_set_header().unwrap();
    reader.decode_sequence_header().unwrap();
    assert_eq!(vec![2, 5, 4, 6], reader.decode_oid().unwrap()); // countryName
    assert_eq!("BE", reader.decode_printable_string().unwrap());
}

#[test]
fn test_truncating_the_certificate_fails_cleanly() {
    let der_bytes = test_cert_der();

    // clipping the buffer anywhere must error out, never panic
    for len in [1, 2, 4, 16, der_bytes.len() / 2, der_bytes.len() - 1] {
        assert!(validate_structure(&der_bytes[..len]).is_err());
    }
}

#[test]
fn test_scenario_sequence_of_integer_and_boolean() {
    let data = [0x30, 0x06, 0x02, 0x01, 0x05, 0x01, 0x01, 0xFF];

    validate_structure(&data).unwrap();

    let mut out = String::new();
    der::print_structure(&data, &mut out).unwrap();
    assert!(out.contains("INTEGER"));
    assert!(out.contains("5 (0x05)"));
    assert!(out.contains("BOOLEAN"));
    assert!(out.contains("TRUE"));

    let mut reader = Reader::new(&data);
    assert_eq!(6, reader.decode_sequence_header().unwrap());
    assert_eq!(5, reader.decode_uint32().unwrap());
    assert!(reader.decode_boolean().unwrap());
    assert_eq!(0, reader.remaining());
}

#[test]
fn test_failed_decode_keeps_the_reader_reusable() {
    let data = [0x30, 0x06, 0x02, 0x01, 0x05, 0x01, 0x01, 0xFF];
    let mut reader = Reader::new(&data);

    // wrong codec first: position is untouched, so the right one works
    assert_eq!(Err(Error::InvalidTag), reader.decode_set_header());
    assert_eq!(0, reader.position());
    assert_eq!(Err(Error::InvalidTag), reader.decode_oid());
    assert_eq!(0, reader.position());

    assert_eq!(6, reader.decode_sequence_header().unwrap());
}
