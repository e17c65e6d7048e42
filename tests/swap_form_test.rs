mod utils;

use slope_ski_sdk::swap::{SwapForm, SwapFormEvent};
use slope_ski_sdk::token::TokenCatalog;
use utils::test_utils::{init_test_env, sample_pools};

fn catalog() -> TokenCatalog {
    TokenCatalog::from_pools(&sample_pools()).expect("catalog from sample pools")
}

fn default_form() -> SwapForm {
    SwapForm::with_defaults(catalog(), "BTC", "USDT").expect("default form")
}

#[test]
fn test_select_from_every_catalog_token() {
    init_test_env();

    let mut form = default_form();
    for token in catalog().iter() {
        form.select_from(token);
        assert_eq!(form.from_token(), token);
    }
}

#[test]
fn test_select_to_every_catalog_token() {
    init_test_env();

    let mut form = default_form();
    for token in catalog().iter() {
        form.select_to(token);
        assert_eq!(form.to_token(), token);
    }
}

#[test]
fn test_same_token_on_both_sides_is_allowed() {
    init_test_env();

    let mut form = default_form();
    form.select_from("USDC");
    form.select_to("USDC");
    assert_eq!(form.from_token(), "USDC");
    assert_eq!(form.to_token(), "USDC");
}

#[test]
fn test_unknown_token_selection_is_ignored() {
    init_test_env();

    let mut form = default_form();
    form.select_from("DOGE");
    form.select_to("DOGE");
    assert_eq!(form.from_token(), "BTC");
    assert_eq!(form.to_token(), "USDT");
}

#[test]
fn test_amount_out_mirrors_amount_in() {
    init_test_env();

    let mut form = default_form();
    for text in ["10", "0.5", "", "12345.678", "000"] {
        form.set_amount_in(text);
        assert_eq!(form.amount_in(), text);
        assert_eq!(form.amount_out(), text);
    }
}

#[test]
fn test_invert_is_self_inverse() {
    init_test_env();

    let mut form = default_form();
    form.invert();
    assert_eq!(form.from_token(), "USDT");
    assert_eq!(form.to_token(), "BTC");

    form.invert();
    assert_eq!(form.from_token(), "BTC");
    assert_eq!(form.to_token(), "USDT");
}

#[test]
fn test_invert_leaves_amounts_untouched() {
    init_test_env();

    let mut form = default_form();
    form.set_amount_in("42.5");
    form.invert();
    assert_eq!(form.amount_in(), "42.5");
    assert_eq!(form.amount_out(), "42.5");
}

#[test]
fn test_full_swap_scenario() {
    init_test_env();

    // Defaults come from configuration: BTC into USDT
    let mut form = default_form();
    assert_eq!(form.from_token(), "BTC");
    assert_eq!(form.to_token(), "USDT");

    form.set_amount_in("10");
    assert_eq!(form.amount_out(), "10");

    form.invert();
    assert_eq!(form.from_token(), "USDT");
    assert_eq!(form.to_token(), "BTC");
    assert_eq!(form.amount_out(), "10");

    form.select_from("ETH");
    assert_eq!(form.from_token(), "ETH");
}

#[test]
fn test_event_application_matches_direct_calls() {
    init_test_env();

    let mut by_event = default_form();
    let mut by_call = default_form();

    by_event.apply(SwapFormEvent::SelectFrom("ETH".to_string()));
    by_event.apply(SwapFormEvent::SetAmountIn("3.2".to_string()));
    by_event.apply(SwapFormEvent::Invert);
    by_event.apply(SwapFormEvent::SelectTo("USDC".to_string()));

    by_call.select_from("ETH");
    by_call.set_amount_in("3.2");
    by_call.invert();
    by_call.select_to("USDC");

    assert_eq!(by_event, by_call);
}

#[test]
fn test_positional_defaults_without_configuration() {
    init_test_env();

    let form = SwapForm::new(catalog());
    assert_eq!(form.from_token(), "BTC");
    assert_eq!(form.to_token(), "ETH");
    assert_eq!(form.amount_in(), "");
    assert_eq!(form.amount_out(), "");
}

#[test]
fn test_unknown_configured_default_is_rejected() {
    init_test_env();

    assert!(SwapForm::with_defaults(catalog(), "DOGE", "USDT").is_err());
    assert!(SwapForm::with_defaults(catalog(), "BTC", "DOGE").is_err());
}
