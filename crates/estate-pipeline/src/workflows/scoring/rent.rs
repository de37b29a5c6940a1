//! Rent resolution and the investment/yield arithmetic shared by every axis.

use super::domain::{RentalConfiguration, RentalStrategy, UnitFinancials, VacancyStatus};

/// Reads a money or area figure, treating negative and non-finite input as zero.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Caps a sum of non-negative figures that overflowed to infinity.
pub(crate) fn capped(value: f64) -> f64 {
    value.min(f64::MAX)
}

/// Monthly rent the unit earns or is planned to earn.
///
/// A rented unit reports its contractual rent. A vacant shared-room unit earns the sum of
/// its room rents, whatever the planned single-lease rent says. Otherwise the planned rent
/// applies. `None` means the rent has not been determined yet.
pub fn effective_monthly_rent(rental: &RentalConfiguration) -> Option<f64> {
    let rent = match (rental.vacancy_status, rental.strategy) {
        (VacancyStatus::Rented, _) => rental.current_rent,
        (VacancyStatus::Vacant, RentalStrategy::SharedRooms) => {
            if rental.rooms.is_empty() {
                None
            } else {
                Some(capped(rental.rooms.iter().map(|room| non_negative(room.rent)).sum()))
            }
        }
        (VacancyStatus::Vacant, RentalStrategy::Standard) => rental.planned_rent,
    };

    rent.map(non_negative)
}

/// Purchase price plus renovation and furnishing budgets.
pub fn total_investment(financials: &UnitFinancials) -> f64 {
    capped(
        non_negative(financials.purchase_price)
            + non_negative(financials.renovation_budget)
            + non_negative(financials.furnishing_budget),
    )
}

/// Annualised rent over total investment, in percent. Zero without rent or investment.
pub fn gross_yield(monthly_rent: Option<f64>, total_investment: f64) -> f64 {
    match monthly_rent {
        Some(rent) if total_investment > 0.0 => {
            capped(non_negative(rent) * 12.0 / total_investment * 100.0)
        }
        _ => 0.0,
    }
}
