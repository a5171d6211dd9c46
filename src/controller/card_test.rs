use super::*;
use crate::state::cart::NOT_APPLICABLE;

fn card(name: &str, variant: Option<(&str, &str)>, price: Option<&str>, quantity: &str) -> CardSnapshot {
    CardSnapshot {
        name: name.to_owned(),
        variant: variant.map(|(value, label)| VariantChoice { value: value.to_owned(), label: label.to_owned() }),
        price_text: price.map(str::to_owned),
        quantity_text: quantity.to_owned(),
    }
}

// =============================================================
// line_item_from_card
// =============================================================

#[test]
fn variant_card_uses_selected_value_and_label() {
    let item = line_item_from_card(&card("Pastel tres leches", Some(("150", "Grande")), None, "2")).unwrap();
    assert_eq!(item, LineItem::new("Pastel tres leches", Some("Grande".to_owned()), 150.0, 2));
}

#[test]
fn variant_wins_over_displayed_price() {
    let item = line_item_from_card(&card("Pastel", Some(("150", "Grande")), Some("99"), "1")).unwrap();
    assert_eq!(item.unit_price, 150.0);
    assert_eq!(item.option, "Grande");
}

#[test]
fn card_without_variant_uses_price_text_and_sentinel_option() {
    let item = line_item_from_card(&card("Flan", None, Some("85"), "1")).unwrap();
    assert_eq!(item.option, NOT_APPLICABLE);
    assert_eq!(item.unit_price, 85.0);
    assert_eq!(item.quantity, 1);
}

#[test]
fn card_name_and_label_are_trimmed() {
    let item = line_item_from_card(&card("\n  Flan  \n", Some(("85", "  Chico ")), None, "1")).unwrap();
    assert_eq!(item.name, "Flan");
    assert_eq!(item.option, "Chico");
}

#[test]
fn card_with_bad_numbers_degrades() {
    let item = line_item_from_card(&card("Flan", None, Some("consultar"), "muchos")).unwrap();
    assert_eq!(item.unit_price, 0.0);
    assert_eq!(item.quantity, 1);
}

#[test]
fn card_without_name_is_rejected() {
    assert_eq!(line_item_from_card(&card("   ", None, Some("85"), "1")), Err(CardError::MissingName));
}

#[test]
fn card_without_any_price_is_rejected() {
    assert_eq!(line_item_from_card(&card("Flan", None, None, "1")), Err(CardError::MissingPrice));
}

// =============================================================
// Stepper
// =============================================================

#[test]
fn increment_adds_one_without_upper_bound() {
    assert_eq!(increment("1"), 2);
    assert_eq!(increment("99"), 100);
    assert_eq!(increment(&u32::MAX.to_string()), u32::MAX);
}

#[test]
fn decrement_subtracts_one() {
    assert_eq!(decrement("5"), 4);
    assert_eq!(decrement("2"), 1);
}

#[test]
fn decrement_never_goes_below_one() {
    for start in 1..=50u32 {
        let mut value = start.to_string();
        for _ in 0..(start + 3) {
            let next = decrement(&value);
            assert!(next >= MIN_QUANTITY);
            value = next.to_string();
        }
        assert_eq!(value, "1");
    }
}

#[test]
fn stepper_normalizes_unreadable_text() {
    assert_eq!(decrement(""), 1);
    assert_eq!(increment("abc"), 2);
}

#[test]
fn quantity_input_id_matches_rendered_markup() {
    assert_eq!(quantity_input_id("7"), "cantidad-7");
}
