#[cfg(test)]
mod tests {
    use crate::token::TokenCatalog;
    use crate::tui::events::Event;
    use crate::tui::screens::swap::{SwapInputFocus, SwapScreenState};
    use crate::tui::tests::sample_pools;

    fn catalog() -> TokenCatalog {
        TokenCatalog::from_pools(&sample_pools()).expect("catalog")
    }

    fn ready_screen() -> SwapScreenState {
        let mut screen = SwapScreenState::default();
        screen
            .initialize(&catalog(), Some("BTC"), Some("USDT"))
            .expect("initialize");
        screen
    }

    #[test]
    fn screen_starts_unready() {
        let mut screen = SwapScreenState::default();
        assert!(!screen.is_ready());
        assert_eq!(screen.input_focus, SwapInputFocus::FromToken);
        // Events before data arrives are no-ops
        assert_eq!(screen.handle_event(&Event::Enter), None);
    }

    #[test]
    fn initialize_applies_configured_defaults() {
        let screen = ready_screen();
        let form = screen.form.as_ref().expect("form");
        assert_eq!(form.from_token(), "BTC");
        assert_eq!(form.to_token(), "USDT");
        assert_eq!(screen.from_dropdown.selected_text(), Some("BTC"));
        assert_eq!(screen.to_dropdown.selected_text(), Some("USDT"));
    }

    #[test]
    fn initialize_without_defaults_uses_first_two_entries() {
        let mut screen = SwapScreenState::default();
        screen.initialize(&catalog(), None, None).expect("initialize");
        let form = screen.form.as_ref().expect("form");
        assert_eq!(form.from_token(), "BTC");
        assert_eq!(form.to_token(), "ETH");
    }

    #[test]
    fn initialize_rejects_unknown_default() {
        let mut screen = SwapScreenState::default();
        assert!(screen.initialize(&catalog(), Some("DOGE"), Some("USDT")).is_err());
    }

    #[test]
    fn focus_cycles_through_all_inputs() {
        let mut screen = ready_screen();
        let order = [
            SwapInputFocus::Amount,
            SwapInputFocus::Invert,
            SwapInputFocus::ToToken,
            SwapInputFocus::Execute,
            SwapInputFocus::FromToken,
        ];
        for expected in order {
            screen.handle_event(&Event::Tab);
            assert_eq!(screen.input_focus, expected);
        }

        screen.handle_event(&Event::BackTab);
        assert_eq!(screen.input_focus, SwapInputFocus::Execute);
    }

    #[test]
    fn typed_amount_flows_into_the_form() {
        let mut screen = ready_screen();
        screen.handle_event(&Event::Tab); // focus the amount input

        screen.handle_event(&Event::Char('1'));
        screen.handle_event(&Event::Char('0'));

        let form = screen.form.as_ref().expect("form");
        assert_eq!(form.amount_in(), "10");
        assert_eq!(form.amount_out(), "10");
    }

    #[test]
    fn non_numeric_characters_never_reach_the_form() {
        let mut screen = ready_screen();
        screen.handle_event(&Event::Tab);

        screen.handle_event(&Event::Char('1'));
        screen.handle_event(&Event::Char('x'));

        let form = screen.form.as_ref().expect("form");
        assert_eq!(form.amount_in(), "1");
    }

    #[test]
    fn backspace_edits_flow_into_the_form() {
        let mut screen = ready_screen();
        screen.handle_event(&Event::Tab);

        screen.handle_event(&Event::Char('1'));
        screen.handle_event(&Event::Char('0'));
        screen.handle_event(&Event::Backspace);

        let form = screen.form.as_ref().expect("form");
        assert_eq!(form.amount_in(), "1");
        assert_eq!(form.amount_out(), "1");
    }

    #[test]
    fn invert_swaps_selections_and_keeps_amounts() {
        let mut screen = ready_screen();
        screen.handle_event(&Event::Tab); // amount
        screen.handle_event(&Event::Char('1'));
        screen.handle_event(&Event::Char('0'));
        screen.handle_event(&Event::Tab); // invert button

        screen.handle_event(&Event::Enter);

        let form = screen.form.as_ref().expect("form");
        assert_eq!(form.from_token(), "USDT");
        assert_eq!(form.to_token(), "BTC");
        assert_eq!(form.amount_in(), "10");
        assert_eq!(form.amount_out(), "10");
        assert_eq!(screen.from_dropdown.selected_text(), Some("USDT"));
        assert_eq!(screen.to_dropdown.selected_text(), Some("BTC"));

        // Inverting again restores the original pair
        screen.handle_event(&Event::Enter);
        let form = screen.form.as_ref().expect("form");
        assert_eq!(form.from_token(), "BTC");
        assert_eq!(form.to_token(), "USDT");
    }

    #[test]
    fn dropdown_selection_updates_the_form() {
        let mut screen = ready_screen();

        // Open the from dropdown, move from BTC to ETH, confirm
        screen.handle_event(&Event::Enter);
        assert!(screen.from_dropdown.is_open());
        screen.handle_event(&Event::Down);
        screen.handle_event(&Event::Enter);

        assert!(!screen.from_dropdown.is_open());
        let form = screen.form.as_ref().expect("form");
        assert_eq!(form.from_token(), "ETH");
    }

    #[test]
    fn execute_reports_missing_backend() {
        let mut screen = ready_screen();
        for _ in 0..4 {
            screen.handle_event(&Event::Tab);
        }
        assert_eq!(screen.input_focus, SwapInputFocus::Execute);
        assert!(screen.handle_event(&Event::Enter).is_some());
    }
}
