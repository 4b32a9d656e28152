//! Numbers & connectivity manager state.
//!
//! Holds the search over owned numbers plus the purchase and SIP trunk
//! dialogs. Neither dialog mutates the seeded records.

use std::collections::HashSet;

use callpilot_core::{filtered_indices, Country, NumberType, PhoneNumberRecord};

/// Country preselected in the purchase dialog.
pub const DEFAULT_COUNTRY: &str = "uz";

/// Summary cards derived from the owned numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct NumbersStats {
    pub count: usize,
    pub total_calls: u64,
    pub countries: usize,
    /// Sum of monthly fees in dollars
    pub monthly_cost: f64,
}

impl NumbersStats {
    pub fn from_records(numbers: &[PhoneNumberRecord]) -> Self {
        let countries: HashSet<&str> = numbers.iter().map(|n| n.country_code.as_str()).collect();
        Self {
            count: numbers.len(),
            total_calls: numbers.iter().map(|n| n.total_calls).sum(),
            countries: countries.len(),
            monthly_cost: numbers.iter().map(|n| n.monthly_fee).sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SipField {
    #[default]
    Host,
    Port,
    Username,
    Password,
}

impl SipField {
    const ORDER: [SipField; 4] = [
        SipField::Host,
        SipField::Port,
        SipField::Username,
        SipField::Password,
    ];

    fn index(&self) -> usize {
        match self {
            SipField::Host => 0,
            SipField::Port => 1,
            SipField::Username => 2,
            SipField::Password => 3,
        }
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SipField::Host => "SIP Host",
            SipField::Port => "Port",
            SipField::Username => "Username",
            SipField::Password => "Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SipField::Host => "sip.provider.com",
            SipField::Port => "5060",
            SipField::Username => "username",
            SipField::Password => "••••••••",
        }
    }
}

/// SIP trunk form. Free text, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SipForm {
    pub host: String,
    pub port: String,
    pub username: String,
    pub password: String,
    pub focus: SipField,
}

impl SipForm {
    pub fn field(&self, field: SipField) -> &str {
        match field {
            SipField::Host => &self.host,
            SipField::Port => &self.port,
            SipField::Username => &self.username,
            SipField::Password => &self.password,
        }
    }

    pub fn focused_text(&self) -> &str {
        self.field(self.focus)
    }

    pub fn set_focused_text(&mut self, text: String) {
        match self.focus {
            SipField::Host => self.host = text,
            SipField::Port => self.port = text,
            SipField::Username => self.username = text,
            SipField::Password => self.password = text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NumbersState {
    pub search: String,
    pub search_editing: bool,
    visible: Vec<usize>,
    pub cursor: usize,

    pub show_buy_modal: bool,
    pub selected_country: String,
    pub selected_number_type: NumberType,
    /// Highlighted row in the available-numbers list
    pub offer_cursor: usize,

    pub show_sip_modal: bool,
    pub sip: SipForm,
}

impl NumbersState {
    pub fn new(numbers: &[PhoneNumberRecord]) -> Self {
        Self {
            search: String::new(),
            search_editing: false,
            visible: (0..numbers.len()).collect(),
            cursor: 0,
            show_buy_modal: false,
            selected_country: DEFAULT_COUNTRY.to_string(),
            selected_number_type: NumberType::default(),
            offer_cursor: 0,
            show_sip_modal: false,
            sip: SipForm::default(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────

    pub fn set_search(&mut self, numbers: &[PhoneNumberRecord], text: String) {
        self.search = text;
        self.visible = filtered_indices(numbers, |n| n.matches(&self.search));
        self.cursor = self.cursor.min(self.visible.len().saturating_sub(1));
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_numbers<'a>(
        &'a self,
        numbers: &'a [PhoneNumberRecord],
    ) -> impl Iterator<Item = &'a PhoneNumberRecord> + 'a {
        self.visible.iter().filter_map(move |&i| numbers.get(i))
    }

    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Purchase Dialog
    // ─────────────────────────────────────────────────────────

    pub fn open_buy_modal(&mut self) {
        self.show_sip_modal = false;
        self.show_buy_modal = true;
        self.offer_cursor = 0;
    }

    pub fn close_buy_modal(&mut self) {
        self.show_buy_modal = false;
    }

    fn country_index(&self, countries: &[Country]) -> Option<usize> {
        countries
            .iter()
            .position(|c| c.code == self.selected_country)
    }

    pub fn next_country(&mut self, countries: &[Country]) {
        if countries.is_empty() {
            return;
        }
        let idx = self
            .country_index(countries)
            .map_or(0, |i| (i + 1) % countries.len());
        self.selected_country = countries[idx].code.clone();
    }

    pub fn previous_country(&mut self, countries: &[Country]) {
        if countries.is_empty() {
            return;
        }
        let len = countries.len();
        let idx = self
            .country_index(countries)
            .map_or(0, |i| (i + len - 1) % len);
        self.selected_country = countries[idx].code.clone();
    }

    pub fn cycle_number_type(&mut self) {
        self.selected_number_type = self.selected_number_type.next();
    }

    pub fn offer_up(&mut self) {
        self.offer_cursor = self.offer_cursor.saturating_sub(1);
    }

    pub fn offer_down(&mut self, offers: usize) {
        if self.offer_cursor + 1 < offers {
            self.offer_cursor += 1;
        }
    }

    // ─────────────────────────────────────────────────────────
    // SIP Trunk Dialog
    // ─────────────────────────────────────────────────────────

    pub fn open_sip_modal(&mut self) {
        self.show_buy_modal = false;
        self.show_sip_modal = true;
        self.sip = SipForm::default();
    }

    /// Close and discard whatever was typed.
    pub fn close_sip_modal(&mut self) {
        self.show_sip_modal = false;
        self.sip = SipForm::default();
    }

    pub fn any_modal_open(&self) -> bool {
        self.show_buy_modal || self.show_sip_modal
    }
}
