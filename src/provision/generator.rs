use crate::models::user::SyntheticUser;
use rand::distr::Alphanumeric;
use rand::Rng;

/// Pluggable source of synthetic account payloads
pub trait UserGenerator {
    fn generate(&mut self) -> SyntheticUser;
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "John",
    "Katherine", "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Tim", "Vint",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Turing", "Liskov", "Shannon", "Knuth", "Dijkstra", "Allen", "Hopper", "Lamarr",
    "Backus", "Johnson", "Thompson", "Torvalds", "Hamilton", "Wirth", "Perlman", "Lee", "Cerf",
];

/// Generates users from random name pairs with a numeric suffix to keep
/// accidental collisions within one run unlikely. Uniqueness against data
/// already on the server is not attempted.
pub struct RandomUserGenerator {
    rng: rand::rngs::ThreadRng,
}

impl RandomUserGenerator {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomUserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UserGenerator for RandomUserGenerator {
    fn generate(&mut self) -> SyntheticUser {
        let first = FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())];
        let suffix: u16 = self.rng.random_range(0..10_000);

        let username = format!(
            "{}.{}{}",
            first.to_lowercase(),
            last.to_lowercase(),
            suffix
        );

        let password: String = (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();

        SyntheticUser {
            name: format!("{first} {last}"),
            email: format!("{username}@example.com"),
            username,
            password,
        }
    }
}
