use proptest::prelude::*;
use remito_scanner::decoder::{decode_barcode, MIN_BARCODE_LEN};

const HEAD: &str = "ABCD00000001202301011234560150020000015";

proptest! {
    #[test]
    fn shorter_than_min_len_is_rejected(raw in "\\PC{0,37}") {
        prop_assume!(raw.chars().count() < MIN_BARCODE_LEN);
        prop_assert!(decode_barcode(&raw).is_err());
    }

    #[test]
    fn fixed_fields_ignore_the_tail(tail in "\\PC{0,20}") {
        let head = &HEAD[..MIN_BARCODE_LEN];
        let plain = decode_barcode(head).unwrap();
        let with_tail = decode_barcode(&format!("{}{}", head, tail)).unwrap();
        prop_assert_eq!(&with_tail.remito, &plain.remito);
        prop_assert_eq!(&with_tail.fecha, &plain.fecha);
        prop_assert_eq!(&with_tail.ce, &plain.ce);
        prop_assert_eq!(with_tail.bultos, plain.bultos);
        prop_assert_eq!(&with_tail.kilos, &plain.kilos);
    }

    #[test]
    fn long_digit_runs_in_the_tail_still_decode(
        prefix in "[a-z ]{0,5}",
        digits in "[0-9]{1,400}",
        fraction in "(\\.[0-9]{0,40})?",
    ) {
        let head = &HEAD[..MIN_BARCODE_LEN];
        let plain = decode_barcode(head).unwrap();
        let raw = format!("{}{}{}{}", head, prefix, digits, fraction);
        let with_tail = decode_barcode(&raw).unwrap();
        prop_assert_eq!(&with_tail.remito, &plain.remito);
        prop_assert_eq!(&with_tail.fecha, &plain.fecha);
        prop_assert_eq!(&with_tail.ce, &plain.ce);
        prop_assert_eq!(with_tail.bultos, plain.bultos);
        prop_assert_eq!(&with_tail.kilos, &plain.kilos);
    }

    #[test]
    fn numeric_layout_always_decodes(
        code in "[A-Z0-9]{4}",
        number in "[0-9]{8}",
        date in "[0-9]{8}",
        ce in "[A-Z0-9]{6}",
        bultos in "[0-9]{4}",
        kilos in "[0-9]{8}",
        value in "[0-9]{1,6}\\.[0-9]{2}",
    ) {
        let raw = format!("{}{}{}{}{}{}{}", code, number, date, ce, bultos, kilos, value);
        let r = decode_barcode(&raw).unwrap();
        prop_assert_eq!(r.remito, format!("{}-{}", code, number));
        prop_assert_eq!(r.fecha, format!("{}/{}/{}", &date[6..8], &date[4..6], &date[0..4]));
        prop_assert_eq!(r.ce, ce);
        prop_assert_eq!(r.bultos, bultos.parse::<u32>().unwrap());
        prop_assert_eq!(r.kilos.len() - r.kilos.find('.').unwrap(), 4);
        prop_assert_eq!(r.v_declarado.len() - r.v_declarado.find('.').unwrap(), 3);
    }
}

#[test]
fn reference_barcode() {
    let r = decode_barcode("ABCD000000012023010112345601500200000150050.00").unwrap();
    assert_eq!(r.remito, "ABCD-00000001");
    assert_eq!(r.fecha, "01/01/2023");
    assert_eq!(r.ce, "123456");
    assert_eq!(r.bultos, 150);
    assert_eq!(r.kilos, "2000.001");
}

#[test]
fn declared_value_from_tail() {
    let head = &HEAD[..MIN_BARCODE_LEN];
    assert_eq!(
        decode_barcode(&format!("{}abc45.50xyz", head)).unwrap().v_declarado,
        "45.50"
    );
    assert_eq!(
        decode_barcode(&format!("{}no value", head)).unwrap().v_declarado,
        "0.00"
    );
}

#[test]
fn oversized_declared_value_keeps_the_record() {
    let head = &HEAD[..MIN_BARCODE_LEN];
    let raw = format!("{}123456789012345678901234567890", head);
    let r = decode_barcode(&raw).unwrap();
    assert_eq!(r.remito, "ABCD-00000001");
    assert_eq!(r.v_declarado, "123456789012345677877719597056.00");
}

#[test]
fn impossible_date_is_not_validated() {
    let raw = "ABCD00000001202313321234560150020000015";
    assert_eq!(decode_barcode(raw).unwrap().fecha, "32/13/2023");
}
