//! Static OID lookups for the certificate inspector.

/// Well-known algorithm and extension OIDs.
pub(crate) fn oid_name(oid: &[u32]) -> Option<&'static str> {
    match oid {
        [1, 2, 840, 113549, 1, 1, 1] => Some("RSA"),
        [1, 2, 840, 113549, 1, 1, 5] => Some("SHA-1 with RSA"),
        [1, 2, 840, 113549, 1, 1, 11] => Some("SHA-256 with RSA"),
        [1, 2, 840, 113549, 1, 1, 12] => Some("SHA-384 with RSA"),
        [1, 2, 840, 113549, 1, 1, 13] => Some("SHA-512 with RSA"),
        [1, 2, 840, 10045, 2, 1] => Some("Elliptic Curve Public Key"),
        [1, 2, 840, 10045, 4, 3, 2] => Some("ECDSA with SHA-256"),
        [1, 2, 840, 10045, 4, 3, 3] => Some("ECDSA with SHA-384"),
        [1, 2, 840, 10045, 4, 3, 4] => Some("ECDSA with SHA-512"),
        [2, 5, 29, 14] => Some("Subject Key Identifier"),
        [2, 5, 29, 15] => Some("Key Usage"),
        [2, 5, 29, 17] => Some("Subject Alternative Name"),
        [2, 5, 29, 19] => Some("Basic Constraints"),
        [2, 5, 29, 31] => Some("CRL Distribution Points"),
        [2, 5, 29, 32] => Some("Certificate Policies"),
        [2, 5, 29, 35] => Some("Authority Key Identifier"),
        [2, 5, 29, 37] => Some("Extended Key Usage"),
        [1, 3, 6, 1, 5, 5, 7, 1, 1] => Some("Authority Information Access"),
        [1, 3, 6, 1, 4, 1, 11129, 2, 4, 2] => Some("Certificate Transparency SCTs"),
        _ => None,
    }
}

/// Short names for X.520 name attributes, as they appear in DNs.
pub(crate) fn attribute_name(oid: &[u32]) -> Option<&'static str> {
    match oid {
        [2, 5, 4, 3] => Some("CN"),
        [2, 5, 4, 6] => Some("C"),
        [2, 5, 4, 7] => Some("L"),
        [2, 5, 4, 8] => Some("ST"),
        [2, 5, 4, 10] => Some("O"),
        [2, 5, 4, 11] => Some("OU"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{attribute_name, oid_name};

    #[rstest(oid, expected,
        case(vec![1, 2, 840, 113549, 1, 1, 11], Some("SHA-256 with RSA")),
        case(vec![1, 2, 840, 10045, 2, 1], Some("Elliptic Curve Public Key")),
        case(vec![2, 5, 29, 19], Some("Basic Constraints")),
        case(vec![1, 3, 6, 1, 5, 5, 7, 1, 1], Some("Authority Information Access")),
        case(vec![1, 2, 3], None),
    )]
    fn test_oid_name(oid: Vec<u32>, expected: Option<&str>) {
        assert_eq!(expected, oid_name(&oid));
    }

    #[rstest(oid, expected,
        case(vec![2, 5, 4, 3], Some("CN")),
        case(vec![2, 5, 4, 6], Some("C")),
        case(vec![2, 5, 4, 99], None),
    )]
    fn test_attribute_name(oid: Vec<u32>, expected: Option<&str>) {
        assert_eq!(expected, attribute_name(&oid));
    }
}
