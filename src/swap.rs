//! Swap form state machine.
//!
//! Owns the two token selections, the user-entered amount, and the
//! derived amount shown on the receive side. Every mutation happens
//! through a discrete user event; the form has no loading or error state
//! of its own. Quote computation is not part of this state machine: the
//! displayed receive amount mirrors the entered amount, and wiring in a
//! real rate belongs to whichever collaborator owns pricing.

use crate::error::Error;
use crate::token::TokenCatalog;

/// User actions the swap form responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum SwapFormEvent {
    /// Select the source token
    SelectFrom(String),
    /// Select the destination token
    SelectTo(String),
    /// Replace the entered amount
    SetAmountIn(String),
    /// Exchange the source and destination selections
    Invert,
}

/// State of the swap form.
///
/// `from_token` and `to_token` are always members of the catalog the form
/// was built with. Selecting the same token on both sides is allowed, as
/// it is in the selection controls this models. `amount_out` always
/// mirrors `amount_in`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapForm {
    catalog: TokenCatalog,
    from_token: String,
    to_token: String,
    amount_in: String,
    amount_out: String,
}

impl SwapForm {
    /// Create a form with positional defaults: the first catalog entry as
    /// the source and the second as the destination.
    pub fn new(catalog: TokenCatalog) -> Self {
        // The catalog guarantees at least two entries.
        let from_token = catalog.symbols()[0].clone();
        let to_token = catalog.symbols()[1].clone();
        Self {
            catalog,
            from_token,
            to_token,
            amount_in: String::new(),
            amount_out: String::new(),
        }
    }

    /// Create a form with configured default selections.
    ///
    /// Defaults come from configuration, so naming a symbol the catalog
    /// does not carry is an error rather than something to paper over.
    pub fn with_defaults(catalog: TokenCatalog, from: &str, to: &str) -> Result<Self, Error> {
        if !catalog.contains(from) {
            return Err(Error::Catalog(format!("unknown default token: {}", from)));
        }
        if !catalog.contains(to) {
            return Err(Error::Catalog(format!("unknown default token: {}", to)));
        }
        Ok(Self {
            catalog,
            from_token: from.to_string(),
            to_token: to.to_string(),
            amount_in: String::new(),
            amount_out: String::new(),
        })
    }

    /// Apply a form event.
    pub fn apply(&mut self, event: SwapFormEvent) {
        match event {
            SwapFormEvent::SelectFrom(token) => self.select_from(&token),
            SwapFormEvent::SelectTo(token) => self.select_to(&token),
            SwapFormEvent::SetAmountIn(text) => self.set_amount_in(&text),
            SwapFormEvent::Invert => self.invert(),
        }
    }

    /// Select the source token.
    ///
    /// A symbol outside the catalog is ignored: the selection control
    /// this models cannot produce one.
    pub fn select_from(&mut self, token: &str) {
        if self.catalog.contains(token) {
            self.from_token = token.to_string();
        }
    }

    /// Select the destination token. Same contract as [`select_from`].
    ///
    /// [`select_from`]: SwapForm::select_from
    pub fn select_to(&mut self, token: &str) {
        if self.catalog.contains(token) {
            self.to_token = token.to_string();
        }
    }

    /// Replace the entered amount and refresh the displayed receive
    /// amount. The text is taken as-is; format enforcement lives in the
    /// input widget.
    pub fn set_amount_in(&mut self, text: &str) {
        self.amount_in = text.to_string();
        self.amount_out = self.amount_in.clone();
    }

    /// Exchange the source and destination selections.
    ///
    /// Amounts are left untouched: the entered amount keeps belonging to
    /// the (new) source side and the displayed amount keeps mirroring it.
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.from_token, &mut self.to_token);
    }

    /// Currently selected source token.
    pub fn from_token(&self) -> &str {
        &self.from_token
    }

    /// Currently selected destination token.
    pub fn to_token(&self) -> &str {
        &self.to_token
    }

    /// The user-entered amount, possibly empty.
    pub fn amount_in(&self) -> &str {
        &self.amount_in
    }

    /// The derived receive-side display amount.
    pub fn amount_out(&self) -> &str {
        &self.amount_out
    }

    /// The catalog this form selects from.
    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }
}
