//! Property-based tests for the derived sale and stock totals.

use carburis_api::services::restocks::compute_stock_total;
use carburis_api::services::sales::compute_sale_total;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Decimals with two fractional digits, far from overflow
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn sale_total_is_never_below_the_subtotal(quantity in money(), unit_price in money()) {
        let subtotal = quantity * unit_price;
        let total = compute_sale_total(quantity, unit_price, dec!(0.18));
        prop_assert!(total >= subtotal);
    }

    #[test]
    fn sale_total_without_tax_is_the_subtotal(quantity in money(), unit_price in money()) {
        let total = compute_sale_total(quantity, unit_price, Decimal::ZERO);
        prop_assert_eq!(total, quantity * unit_price);
    }

    #[test]
    fn sale_total_scales_linearly_with_quantity(quantity in money(), unit_price in money()) {
        let single = compute_sale_total(quantity, unit_price, dec!(0.18));
        let doubled = compute_sale_total(quantity * dec!(2), unit_price, dec!(0.18));
        prop_assert_eq!(doubled, single * dec!(2));
    }

    #[test]
    fn zero_quantity_always_yields_zero(unit_price in money()) {
        let total = compute_sale_total(Decimal::ZERO, unit_price, dec!(0.18));
        prop_assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn stock_total_is_commutative(before in money(), incoming in money()) {
        prop_assert_eq!(
            compute_stock_total(before, incoming),
            compute_stock_total(incoming, before)
        );
    }

    #[test]
    fn stock_total_grows_with_incoming_stock(before in money(), incoming in money()) {
        let total = compute_stock_total(before, incoming);
        prop_assert!(total >= before);
        prop_assert!(total >= incoming);
    }
}

#[test]
fn reference_scenario_from_the_sales_form() {
    // 100 litres at 500 with 18% tax
    assert_eq!(
        compute_sale_total(dec!(100), dec!(500), dec!(0.18)),
        dec!(59000)
    );
    // 1500 on hand plus a 2500 delivery
    assert_eq!(compute_stock_total(dec!(1500), dec!(2500)), dec!(4000));
}
