use chrono::NaiveDate;

use crate::models::{Category, NewTransaction};

/// Demo ledger loaded during onboarding, standing in for a linked bank's history.
struct SampleTxn {
    date: (i32, u32, u32),
    name: &'static str,
    amount: f64,
    category: Category,
}

const SAMPLES: &[SampleTxn] = &[
    SampleTxn { date: (2025, 5, 1), name: "Bella Italia", amount: -3015.0, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 16), name: "Cafe Luxe", amount: -4880.62, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 6), name: "Molecular Munchies", amount: -1666.43, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 5), name: "Dragon Garden", amount: -3705.09, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 21), name: "Atomic Eats", amount: -4092.59, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 23), name: "Ocean's Catch", amount: -2340.26, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 4), name: "Atomic Eats", amount: -2306.63, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 1), name: "Bella Italia", amount: -7361.83, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 13), name: "Atomic Eats", amount: -4413.75, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 15), name: "Atomic Eats", amount: -205.78, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 17), name: "Fusion Bistro", amount: -5601.43, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 2), name: "Salary Deposit - Atomic Corp", amount: 6700.00, category: Category::Services },
    SampleTxn { date: (2025, 5, 16), name: "Salary Deposit - Atomic Corp", amount: 7550.00, category: Category::Services },
    SampleTxn { date: (2025, 5, 3), name: "Gas Station - Molecular Fuel Co", amount: -50.67, category: Category::Transportation },
    SampleTxn { date: (2025, 5, 14), name: "Dinner at Skyline", amount: -4150.12, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 7), name: "Elite Eats", amount: -3013.78, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 19), name: "Transfer to Savings", amount: -1000.00, category: Category::Services },
    SampleTxn { date: (2025, 5, 18), name: "Sushi Supreme", amount: -2702.65, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 20), name: "The Golden Spoon", amount: -3920.43, category: Category::FoodDrink },
    SampleTxn { date: (2025, 5, 30), name: "Salary Deposit - Atomic Corp", amount: 7850.00, category: Category::Services },
    SampleTxn { date: (2025, 6, 1), name: "Skyline Grill", amount: -4250.88, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 1), name: "Atomic Buffet", amount: -1899.99, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 2), name: "Salary Deposit - Atomic Corp", amount: 6950.00, category: Category::Services },
    SampleTxn { date: (2025, 6, 2), name: "Molecular Munchies", amount: -2050.75, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 3), name: "Fusion Feast", amount: -3720.50, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 3), name: "Gourmet Vault", amount: -4899.00, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 4), name: "Sky Sushi", amount: -3550.00, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 4), name: "Salary Deposit - Atomic Corp", amount: 8100.00, category: Category::Services },
    SampleTxn { date: (2025, 6, 5), name: "Moonlight Meals", amount: -2850.66, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 5), name: "Elite Sushi", amount: -4632.43, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 6), name: "Skyline Rooftop Dining", amount: -5250.23, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 6), name: "The Truffle Table", amount: -3789.99, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 6), name: "Atomic Cafe", amount: -1675.45, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 7), name: "Cafe Luxe", amount: -3900.75, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 7), name: "Atomic Bistro", amount: -2600.00, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 8), name: "Salary Deposit - Atomic Corp", amount: 7250.00, category: Category::Services },
    SampleTxn { date: (2025, 6, 8), name: "La Fusion", amount: -4325.89, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 9), name: "Sky View Dine", amount: -3922.77, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 9), name: "Gastronome's Table", amount: -4000.00, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Salary Deposit - Atomic Corp", amount: 7850.00, category: Category::Services },
    SampleTxn { date: (2025, 6, 10), name: "The Ember Lounge", amount: -4870.35, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Prestige Plates", amount: -3900.15, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Salary Deposit - Atomic Corp", amount: 8800.00, category: Category::Services },
    SampleTxn { date: (2025, 6, 10), name: "Nuclear Noodles", amount: -2520.80, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Gilded Grains", amount: -4400.00, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Luxe Tapas Lounge", amount: -3725.55, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Elevated Eats", amount: -3880.99, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Crystalline Kitchen", amount: -4099.40, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Opulent Oyster Bar", amount: -2980.60, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Vaulted Vegan", amount: -3250.35, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Quantum Quiche Cafe", amount: -2480.45, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Gastronome Gala", amount: -4600.00, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Aurora Appetites", amount: -3875.67, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Salary Deposit - Atomic Corp", amount: 9400.00, category: Category::Services },
    SampleTxn { date: (2025, 6, 10), name: "Obsidian Eats", amount: -3410.22, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Golden Grain Eatery", amount: -3620.78, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Binary Bistro", amount: -2800.00, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Copper Fork Lounge", amount: -3775.34, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Dark Matter Dining", amount: -3150.12, category: Category::FoodDrink },
    SampleTxn { date: (2025, 6, 10), name: "Salary Deposit - Atomic Corp", amount: 8720.00, category: Category::Services },
];

/// The sample bundle as insertable records, each stamped at midnight of its day.
pub fn sample_transactions() -> Vec<NewTransaction> {
    SAMPLES
        .iter()
        .filter_map(|s| {
            let (y, m, d) = s.date;
            let date = NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(0, 0, 0)?;
            Some(NewTransaction::new(s.name, s.amount, s.category).at(date))
        })
        .collect()
}
