pub const SPACE_FACTS: &[&str] = &[
    "Did you know? A day on Venus is longer than a year on Venus.",
    "Did you know? Neutron stars can spin 600 times per second.",
    "Did you know? Space is not completely empty — it contains tiny particles and radiation.",
    "Did you know? The footprints on the Moon will likely remain for millions of years.",
    "Did you know? Jupiter’s magnetic field is 20,000 times stronger than Earth’s.",
    "Did you know? A teaspoon of a neutron star would weigh about a billion tons on Earth.",
    "Did you know? There are more trees on Earth than stars in the Milky Way.",
    "Did you know? The Sun makes up 99.86% of the mass in our solar system.",
    "Did you know? Saturn could float in water because it is mostly made of gas.",
    "Did you know? The largest volcano in the solar system is Olympus Mons on Mars.",
];

/// Picks a fact for the banner, without its "Did you know?" lead-in.
pub fn pick(seed: u64) -> &'static str {
    let fact = SPACE_FACTS[(seed % SPACE_FACTS.len() as u64) as usize];
    fact.strip_prefix("Did you know?")
        .map(str::trim_start)
        .unwrap_or(fact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_strips_lead_in_and_wraps_seed() {
        assert_eq!(pick(0), "A day on Venus is longer than a year on Venus.");
        assert_eq!(pick(SPACE_FACTS.len() as u64 + 1), pick(1));
        for seed in 0..SPACE_FACTS.len() as u64 {
            assert!(!pick(seed).starts_with("Did you know"));
        }
    }
}
