//! Tag byte layout and classification.
//!
//! A DER tag byte carries the class in bits 7-6, the constructed flag in
//! bit 5, and the tag number in bits 4-0. Tag numbers of 31 and above use
//! the multi-byte high-tag-number form, which this crate does not support.

pub const TAG_BOOLEAN: u8 = 0x01;
pub const TAG_INTEGER: u8 = 0x02;
pub const TAG_BIT_STRING: u8 = 0x03;
pub const TAG_OCTET_STRING: u8 = 0x04;
pub const TAG_NULL: u8 = 0x05;
pub const TAG_OID: u8 = 0x06;
pub const TAG_UTF8_STRING: u8 = 0x0C;
pub const TAG_PRINTABLE_STRING: u8 = 0x13;
pub const TAG_T61_STRING: u8 = 0x14;
pub const TAG_IA5_STRING: u8 = 0x16;
pub const TAG_UTC_TIME: u8 = 0x17;
pub const TAG_GENERALIZED_TIME: u8 = 0x18;
pub const TAG_SEQUENCE: u8 = 0x30;
pub const TAG_SET: u8 = 0x31;

pub const CLASS_UNIVERSAL: u8 = 0x00;
pub const CLASS_APPLICATION: u8 = 0x40;
pub const CLASS_CONTEXT: u8 = 0x80;
pub const CLASS_PRIVATE: u8 = 0xC0;
pub const CLASS_MASK: u8 = 0xC0;

pub const CONSTRUCTED: u8 = 0x20;

/// Low five bits of the tag byte. All five set marks the unsupported
/// high-tag-number form.
pub(crate) const NUMBER_MASK: u8 = 0x1F;

/// Whether the value of this tag is itself a series of nested TLVs.
pub fn is_constructed(tag: u8) -> bool {
    tag & CONSTRUCTED != 0
}

pub fn is_context_specific(tag: u8) -> bool {
    tag & CLASS_MASK == CLASS_CONTEXT
}

/// Human-readable tag name for diagnostics.
pub fn tag_name(tag: u8) -> &'static str {
    match tag {
        TAG_BOOLEAN => "BOOLEAN",
        TAG_INTEGER => "INTEGER",
        TAG_BIT_STRING => "BIT STRING",
        TAG_OCTET_STRING => "OCTET STRING",
        TAG_NULL => "NULL",
        TAG_OID => "OBJECT IDENTIFIER",
        TAG_UTF8_STRING => "UTF8String",
        TAG_PRINTABLE_STRING => "PrintableString",
        TAG_T61_STRING => "T61String",
        TAG_IA5_STRING => "IA5String",
        TAG_UTC_TIME => "UTCTime",
        TAG_GENERALIZED_TIME => "GeneralizedTime",
        TAG_SEQUENCE => "SEQUENCE",
        TAG_SET => "SET",
        _ if is_context_specific(tag) => "CONTEXT SPECIFIC",
        _ => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest(input, expected,
        case(TAG_SEQUENCE, true),
        case(TAG_SET, true),
        case(0xA0, true),
        case(TAG_INTEGER, false),
        case(TAG_OCTET_STRING, false),
        case(0x80, false),
    )]
    fn test_is_constructed(input: u8, expected: bool) {
        assert_eq!(expected, is_constructed(input));
    }

    #[rstest(input, expected,
        case(0x80, true),
        case(0xA0, true),
        case(0xA3, true),
        case(TAG_SEQUENCE, false),
        case(0x40, false),
        case(0xC0, false),
    )]
    fn test_is_context_specific(input: u8, expected: bool) {
        assert_eq!(expected, is_context_specific(input));
    }

    #[rstest(input, expected,
        case(TAG_BOOLEAN, "BOOLEAN"),
        case(TAG_OID, "OBJECT IDENTIFIER"),
        case(TAG_SEQUENCE, "SEQUENCE"),
        case(0xA0, "CONTEXT SPECIFIC"),
        case(0x40, "UNKNOWN"),
    )]
    fn test_tag_name(input: u8, expected: &str) {
        assert_eq!(expected, tag_name(input));
    }
}
