//! Synthetic user records
//!
//! Clean mode produces a fully-populated record; challenge mode runs the
//! per-field corruption trials from the profile table over the same clean
//! values. Every draw goes through the injected [`Randomness`] source so
//! tests can script outcomes.

use crate::corrupt::FieldCorruptor;
use crate::profile::ChaosProfile;
use crate::rng::Randomness;
use havoc_types::{Address, Degradable, User, UserId};
use std::sync::Arc;

/// Fixed placeholder substituted for the avatar when its trial fires.
pub const BROKEN_AVATAR_URL: &str = "https://broken-image-url.com";

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dorothy", "Edsger", "Frances", "Grace", "Hedy", "John",
    "Katherine", "Leslie", "Margaret", "Niklaus", "Radia", "Tim",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Backus", "Hamilton", "Hopper", "Kay", "Lamport", "Liskov", "Lovelace", "Perlman",
    "Ritchie", "Shannon", "Thompson", "Torvalds", "Turing", "Wilkes", "Wirth",
];

const STREET_NAMES: &[&str] = &[
    "Cedar", "Chestnut", "Elm", "Highland", "Lakeview", "Maple", "Oak", "Park", "Sunset",
    "Washington", "Willow",
];

const STREET_SUFFIXES: &[&str] = &["Avenue", "Boulevard", "Drive", "Lane", "Road", "Street"];

const CITIES: &[&str] = &[
    "Arlington", "Aurora", "Bellevue", "Boulder", "Chandler", "Durham", "Eugene", "Fairfield",
    "Madison", "Norfolk", "Pasadena", "Richmond", "Salem", "Tacoma",
];

const STATES: &[&str] = &[
    "Arizona", "California", "Colorado", "Georgia", "Illinois", "Massachusetts", "Michigan",
    "North Carolina", "Ohio", "Oregon", "Texas", "Virginia", "Washington", "Wisconsin",
];

const COUNTRIES: &[&str] = &[
    "Australia", "Canada", "France", "Germany", "Ireland", "Japan", "Netherlands", "New Zealand",
    "Norway", "Spain", "Sweden", "United Kingdom", "United States",
];

const COMPANY_STEMS: &[&str] = &[
    "Acme", "Apex", "Borealis", "Cascade", "Foxglove", "Granite", "Harbor", "Ironwood", "Meridian",
    "Northwind", "Quicksilver", "Redwood", "Summit", "Vertex",
];

const COMPANY_SUFFIXES: &[&str] = &["Group", "Holdings", "Inc", "Labs", "LLC", "Systems"];

const JOB_TITLES: &[&str] = &[
    "Account Executive",
    "Backend Engineer",
    "Customer Success Manager",
    "Data Analyst",
    "Designer",
    "DevOps Engineer",
    "Marketing Coordinator",
    "Operations Manager",
    "Product Manager",
    "QA Engineer",
    "Sales Director",
    "Technical Writer",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org", "mail.example.dev"];

/// Whether a record is produced clean or with corruption trials applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Clean,
    Challenge,
}

/// Produces synthetic user records on demand.
///
/// Pure value construction: no I/O, nothing cached, nothing mutated after
/// a record is built.
pub struct UserGenerator {
    rng: Arc<dyn Randomness>,
    profile: ChaosProfile,
}

impl UserGenerator {
    pub fn new(rng: Arc<dyn Randomness>, profile: ChaosProfile) -> Self {
        Self { rng, profile }
    }

    /// Generate one record.
    ///
    /// In challenge mode the corruption trials run in a fixed order: name,
    /// phone, address value, job title, avatar, then the unconditional
    /// address-drop trial. The drop trial overrides whatever the address
    /// value trial produced, so a nulled address can still vanish from the
    /// record entirely.
    pub fn generate(&self, mode: GenerationMode) -> User {
        let id = UserId::generate();
        let name = self.full_name();
        let email = self.email_for(&name);
        let phone = self.phone_number();
        let address = self.address();
        let company = self.company_name();
        let job_title = self.pick(JOB_TITLES).to_string();
        let avatar = self.avatar_for(&id);

        match mode {
            GenerationMode::Clean => User {
                id,
                name: Some(name),
                email,
                phone: Some(phone),
                address: Degradable::Intact(address),
                company,
                job_title,
                avatar,
            },
            GenerationMode::Challenge => {
                let corruptor = FieldCorruptor::new(self.rng.as_ref());
                let profile = &self.profile;

                let name = corruptor.nullable(profile.name_null_rate, name);
                let phone = corruptor.droppable(profile.phone_drop_rate, phone);
                let mut address = corruptor.degradable(profile.address_null_rate, address);
                let job_title = corruptor.blankable(profile.job_title_blank_rate, job_title);
                let avatar =
                    corruptor.substitutable(profile.avatar_broken_rate, avatar, BROKEN_AVATAR_URL);

                if self.rng.chance(profile.address_drop_rate) {
                    address = Degradable::Dropped;
                }

                User {
                    id,
                    name,
                    email,
                    phone,
                    address,
                    company,
                    job_title,
                    avatar,
                }
            }
        }
    }

    /// Generate a batch, clamping the requested count to the configured
    /// bound. In challenge mode the batch may be silently under-delivered:
    /// no error, no marker in the payload.
    pub fn generate_batch(&self, requested: i64, mode: GenerationMode) -> Vec<User> {
        let clamped = requested.clamp(0, self.profile.max_batch as i64) as usize;

        let count = match mode {
            GenerationMode::Challenge if self.rng.chance(self.profile.truncation_rate) => {
                let partial = (clamped as f64 * self.profile.truncation_factor).floor() as usize;
                tracing::debug!(requested = clamped, returning = partial, "truncating batch");
                partial
            }
            _ => clamped,
        };

        (0..count).map(|_| self.generate(mode)).collect()
    }

    /// Batch size used when the caller's count parameter does not parse.
    pub fn fallback_batch(&self) -> i64 {
        self.profile.batch_fallback as i64
    }

    fn pick<'a>(&self, values: &'a [&'a str]) -> &'a str {
        let index = self.rng.int_in_range(0, values.len() as u64 - 1) as usize;
        values[index]
    }

    fn digits(&self, count: usize) -> String {
        (0..count)
            .map(|_| char::from_digit(self.rng.int_in_range(0, 9) as u32, 10).unwrap_or('0'))
            .collect()
    }

    fn full_name(&self) -> String {
        format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }

    fn email_for(&self, name: &str) -> String {
        let local = name.to_lowercase().replace(' ', ".");
        format!("{}@{}", local, self.pick(EMAIL_DOMAINS))
    }

    fn phone_number(&self) -> String {
        format!(
            "({}) {}-{}",
            self.digits(3),
            self.digits(3),
            self.digits(4)
        )
    }

    fn address(&self) -> Address {
        Address {
            street: format!(
                "{} {} {}",
                self.rng.int_in_range(1, 9999),
                self.pick(STREET_NAMES),
                self.pick(STREET_SUFFIXES)
            ),
            city: self.pick(CITIES).to_string(),
            state: self.pick(STATES).to_string(),
            zip_code: self.digits(5),
            country: self.pick(COUNTRIES).to_string(),
        }
    }

    fn company_name(&self) -> String {
        format!(
            "{} {}",
            self.pick(COMPANY_STEMS),
            self.pick(COMPANY_SUFFIXES)
        )
    }

    fn avatar_for(&self, id: &UserId) -> String {
        format!("https://avatars.example.com/u/{id}.png")
    }
}
