//! Table configuration options.

/// Configuration options for a hold'em table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pkrs::TableOptions;
///
/// let options = TableOptions::default()
///     .with_max_players(6)
///     .with_burn_cards(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Private cards dealt to each player.
    pub hole_cards: u8,
    /// Maximum number of seated players.
    pub max_players: u8,
    /// Whether a card is burned before the flop, turn and river.
    pub burn_cards: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            hole_cards: 2,
            max_players: 10,
            burn_cards: false,
        }
    }
}

impl TableOptions {
    /// Sets the number of hole cards per player.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_hole_cards(4);
    /// assert_eq!(options.hole_cards, 4);
    /// ```
    #[must_use]
    pub const fn with_hole_cards(mut self, hole_cards: u8) -> Self {
        self.hole_cards = hole_cards;
        self
    }

    /// Sets the maximum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_players(2);
    /// assert_eq!(options.max_players, 2);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: u8) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets whether cards are burned before each street.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_burn_cards(true);
    /// assert!(options.burn_cards);
    /// ```
    #[must_use]
    pub const fn with_burn_cards(mut self, burn: bool) -> Self {
        self.burn_cards = burn;
        self
    }
}
