use super::*;

#[test]
fn added_to_cart_names_the_product() {
    let toast = ToastMessage::added_to_cart("Flan napolitano");
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.text, "Flan napolitano agregado al carrito ✅");
}

#[test]
fn storage_failure_is_a_warning() {
    assert_eq!(ToastMessage::storage_failed().kind, ToastKind::Warning);
}

#[test]
fn cannot_add_is_a_warning_without_product_name() {
    let toast = ToastMessage::cannot_add();
    assert_eq!(toast.kind, ToastKind::Warning);
    assert_eq!(toast.text, "No se pudo agregar este producto al carrito ⚠️");
}

#[test]
fn kinds_use_distinct_backgrounds() {
    assert_ne!(ToastKind::Success.background(), ToastKind::Warning.background());
}

#[test]
fn style_is_fixed_bottom_right_with_kind_color() {
    let style = ToastMessage::cart_cleared().style();
    assert!(style.contains("position:fixed"));
    assert!(style.contains("bottom:20px;right:20px"));
    assert!(style.contains("background:#ff4d6d"));
}
