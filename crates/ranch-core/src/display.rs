//! Scoreboard views.
//!
//! Scoreboards are derived views recomputed on every refresh; nothing
//! here is persisted. The farm board shows the caller's gauges and the
//! calendar, the market board shows the calendar and balance only.

use rust_decimal::Decimal;

use ranch_types::{OwnerId, Season};

use crate::context::RanchContext;

/// The scoreboard shown while standing on a farm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmScoreboard {
    /// Completed days since startup.
    pub day: u64,
    /// The current season.
    pub season: Season,
    /// The farm's upkeep gauge.
    pub upkeep: Decimal,
    /// The farm's crop health gauge.
    pub crop_health: Decimal,
    /// The farm's animal health gauge.
    pub animal_health: Decimal,
    /// Weeds on the farm.
    pub weed_count: u32,
    /// The owner's balance.
    pub balance: Decimal,
}

impl FarmScoreboard {
    /// Render the board as display lines, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Day {} - {}", self.day, self.season.display_name()),
            format!("Upkeep: {:.1}", self.upkeep),
            format!("Crops: {:.1}", self.crop_health),
            format!("Animals: {:.1}", self.animal_health),
            format!("Weeds: {}", self.weed_count),
            format!("Balance: {:.2} RC", self.balance),
        ]
    }
}

/// The scoreboard shown at the market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketScoreboard {
    /// Completed days since startup.
    pub day: u64,
    /// The current season.
    pub season: Season,
    /// The owner's balance.
    pub balance: Decimal,
}

impl MarketScoreboard {
    /// Render the board as display lines, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Day {} - {}", self.day, self.season.display_name()),
            format!("Balance: {:.2} RC", self.balance),
        ]
    }
}

/// Build the farm scoreboard for `owner`, or `None` without a farm.
pub fn farm_scoreboard(context: &RanchContext, owner: OwnerId) -> Option<FarmScoreboard> {
    let farm = context.farms.farm(owner)?;
    let day = context.degradation.day();
    Some(FarmScoreboard {
        day,
        season: Season::for_day(day),
        upkeep: farm.upkeep(),
        crop_health: farm.crop_health(),
        animal_health: farm.animal_health(),
        weed_count: farm.weed_count(),
        balance: context.ledger.balance(owner),
    })
}

/// Build the market scoreboard for `owner`.
pub fn market_scoreboard(context: &RanchContext, owner: OwnerId) -> MarketScoreboard {
    let day = context.degradation.day();
    MarketScoreboard {
        day,
        season: Season::for_day(day),
        balance: context.ledger.balance(owner),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use rust_decimal_macros::dec;

    use ranch_economy::MemoryInventory;
    use ranch_world::RecordingWorldEditor;

    use crate::config::RanchConfig;

    use super::*;

    fn context_with_farm(owner: OwnerId) -> RanchContext {
        let mut context = RanchContext::new(&RanchConfig::default());
        let mut editor = RecordingWorldEditor::new();
        let mut inventory = MemoryInventory::new();
        context
            .create_farm(owner, &mut editor, &mut inventory, Path::new("island.schem"))
            .unwrap();
        context
    }

    #[test]
    fn no_farm_means_no_farm_board() {
        let context = RanchContext::new(&RanchConfig::default());
        assert!(farm_scoreboard(&context, OwnerId::new()).is_none());
    }

    #[test]
    fn farm_board_reflects_current_state() {
        let owner = OwnerId::new();
        let mut context = context_with_farm(owner);
        context.advance_day();

        let board = farm_scoreboard(&context, owner).unwrap();
        assert_eq!(board.day, 1);
        assert_eq!(board.season, Season::Spring);
        assert!(board.weed_count >= 1);
        assert!(board.upkeep < Decimal::ONE_HUNDRED);
        assert_eq!(board.balance, dec!(50.0));

        let lines = board.lines();
        assert_eq!(lines.len(), 6);
        assert!(lines.first().unwrap().contains("Day 1 - Spring"));
    }

    #[test]
    fn market_board_shows_calendar_and_balance() {
        let owner = OwnerId::new();
        let mut context = RanchContext::new(&RanchConfig::default());
        context.ledger.deposit(owner, dec!(12.5));

        let board = market_scoreboard(&context, owner);
        assert_eq!(board.day, 0);
        assert_eq!(board.balance, dec!(12.5));
        assert!(board.lines().last().unwrap().contains("12.50 RC"));
    }
}
