/// Fixed difficulty tiers: where the secret can fall and how many guesses
/// the player gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// Menu order
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    /// Inclusive bounds the secret is drawn from
    pub fn range(&self) -> (u32, u32) {
        match self {
            Tier::Easy => (1, 50),
            Tier::Medium => (1, 100),
            Tier::Hard => (1, 200),
        }
    }

    pub fn attempt_budget(&self) -> u32 {
        match self {
            Tier::Easy => 5,
            Tier::Medium => 7,
            Tier::Hard => 10,
        }
    }

    /// Key shown next to the tier in the difficulty menu
    pub fn menu_key(&self) -> &'static str {
        match self {
            Tier::Easy => "1",
            Tier::Medium => "2",
            Tier::Hard => "3",
        }
    }

    /// Parse a difficulty menu selection; anything but the three keys is
    /// rejected and the caller re-prompts.
    pub fn from_choice(choice: &str) -> Option<Tier> {
        match choice.trim() {
            "1" => Some(Tier::Easy),
            "2" => Some(Tier::Medium),
            "3" => Some(Tier::Hard),
            _ => None,
        }
    }
}
