//! Seeded sample tables for first-run and demo use.
//!
//! Generation is deterministic per seed so restarts serve the same
//! catalog until a real table is uploaded.

use lab_match::round::round_to;
use lab_match::{LabColor, Order, Pigment, Priority};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Customer names drawn for sample orders.
const CUSTOMER_POOL: [&str; 12] = [
    "Acme Corp",
    "Global Industries",
    "Tech Solutions",
    "Prime Manufacturing",
    "Elite Products",
    "Quality Goods",
    "Master Coatings",
    "Supreme Paints",
    "ColorMax",
    "PigmentPro",
    "Industrial Colors",
    "Custom Shades",
];

/// Generate a sample pigment table with inventory.
///
/// Colors span most of the Lab gamut (L 20..95, a/b -60..60) and
/// tonnage 5..100, all rounded to 2 decimals like uploaded tables.
pub fn sample_pigments(count: usize, seed: u64) -> Vec<Pigment> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let color = LabColor::new(
                round_to(rng.gen_range(20.0..95.0), 2),
                round_to(rng.gen_range(-60.0..60.0), 2),
                round_to(rng.gen_range(-60.0..60.0), 2),
            );
            let tonnage = round_to(rng.gen_range(5.0..100.0), 2);
            Pigment::new(format!("PIG-{:04}", i + 1), color, tonnage)
        })
        .collect()
}

/// Generate a sample order table.
///
/// Target colors sit inside the pigment gamut (L 25..90, a/b -50..50)
/// so sample matches stay plausible; demand is 2..40 tonnes.
pub fn sample_orders(count: usize, seed: u64) -> Vec<Order> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let customer = CUSTOMER_POOL[rng.gen_range(0..CUSTOMER_POOL.len())];
            let color = LabColor::new(
                round_to(rng.gen_range(25.0..90.0), 2),
                round_to(rng.gen_range(-50.0..50.0), 2),
                round_to(rng.gen_range(-50.0..50.0), 2),
            );
            let required = round_to(rng.gen_range(2.0..40.0), 2);
            let priority = match rng.gen_range(0..3) {
                0 => Priority::High,
                1 => Priority::Medium,
                _ => Priority::Low,
            };
            Order::new(
                format!("ORD-2024-{:04}", i + 1),
                customer,
                color,
                required,
                priority,
            )
        })
        .collect()
}
