//! Mock user generation.
//!
//! Produces the hand-authored seed users (athletes 1-4, sponsors 5-7,
//! scouts 8-10) followed by `count` randomly attributed users whose ids
//! continue from the highest seed id. All randomness flows from one seeded
//! ChaCha stream, so a seed and a reference time fully determine the output.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use talentnet_types::{
    AthleteProfile, RoleProfile, ScoutProfile, SponsorProfile, User, UserRole,
};

const SPORTS: &[&str] = &[
    "Soccer",
    "Basketball",
    "Tennis",
    "Swimming",
    "Gymnastics",
    "Track & Field",
    "Baseball",
    "Football",
    "Volleyball",
    "Golf",
];

const COMPANIES: &[&str] = &[
    "PowerSport Inc.",
    "Athletic Vision",
    "Peak Performance",
    "GoldMedal Agency",
    "Champion Sponsors",
    "Victory Talent",
    "Elite Scouting",
];

const SPECIALTIES: &[&str] = &[
    "Equipment",
    "Apparel",
    "Nutrition",
    "Technology",
    "Media",
    "Youth Development",
    "Professional",
];

const ACHIEVEMENTS: &[&str] = &[
    "National Champion",
    "Regional Champion",
    "Conference Player of the Year",
    "All-American",
    "Rookie of the Year",
    "Team Captain",
    "Record Holder",
    "Tournament MVP",
    "Olympic Trials Finalist",
    "World Cup Qualifier",
    "Hall of Fame Nominee",
    "Most Improved Player",
    "Sportsmanship Award",
    "Scholarship Athlete",
];

const GENERATED_AVATARS: &[&str] = &[
    "photo-1535713875002-d1d0cf377fde",
    "photo-1494790108377-be9c29b29330",
    "photo-1500648767791-00dcc994a43e",
    "photo-1534528741775-53994a69daeb",
    "photo-1570295999919-56ceb5ecca61",
];

const ACHIEVEMENTS_PER_ATHLETE: usize = 3;

/// Probability that a generated user is verified
const VERIFIED_PROBABILITY: f64 = 0.7;

/// Attributes shared by every hand-authored user
struct SeedBase {
    id: &'static str,
    name: &'static str,
    photo: &'static str,
    bio: &'static str,
    connections: &'static [&'static str],
}

struct SeedAthlete {
    base: SeedBase,
    sport: &'static str,
    achievements: [&'static str; 3],
    ranking: u32,
    sponsorships: u32,
}

struct SeedOrganization {
    base: SeedBase,
    company: &'static str,
    specialty: &'static str,
}

const SEED_ATHLETES: &[SeedAthlete] = &[
    SeedAthlete {
        base: SeedBase {
            id: "1",
            name: "Alex Johnson",
            photo: "photo-1568602471122-7832951cc4c5",
            bio: "Olympic gold medalist in 100m sprint. Passionate about inspiring the next generation of athletes.",
            connections: &["5", "8", "11"],
        },
        sport: "Track & Field",
        achievements: ["Olympic Gold Medal", "World Champion", "3x National Champion"],
        ranking: 1,
        sponsorships: 5,
    },
    SeedAthlete {
        base: SeedBase {
            id: "2",
            name: "Samantha Williams",
            photo: "photo-1567532939604-b6b5b0db2604",
            bio: "Professional basketball player with a focus on community outreach and youth development.",
            connections: &["6", "9", "12"],
        },
        sport: "Basketball",
        achievements: ["WNBA Champion", "MVP", "All-Star 5x"],
        ranking: 2,
        sponsorships: 4,
    },
    SeedAthlete {
        base: SeedBase {
            id: "3",
            name: "David Chen",
            photo: "photo-1633332755192-727a05c4013d",
            bio: "Tennis champion with a passion for sustainability and eco-friendly sports equipment.",
            connections: &["7", "10"],
        },
        sport: "Tennis",
        achievements: ["Grand Slam Winner", "2x Masters Champion", "Davis Cup Winner"],
        ranking: 3,
        sponsorships: 3,
    },
    SeedAthlete {
        base: SeedBase {
            id: "4",
            name: "Maria Rodriguez",
            photo: "photo-1580489944761-15a19d654956",
            bio: "Soccer player focused on advancing women in sports. Educational advocate and coach.",
            connections: &["5", "8"],
        },
        sport: "Soccer",
        achievements: ["World Cup Winner", "Golden Boot", "Champions League Winner"],
        ranking: 4,
        sponsorships: 2,
    },
];

const SEED_SPONSORS: &[SeedOrganization] = &[
    SeedOrganization {
        base: SeedBase {
            id: "5",
            name: "Global Sports Co.",
            photo: "photo-1599305445671-ac291c95aaa9",
            bio: "Market leader in sports equipment and apparel. Looking to sponsor top athletes across all sports.",
            connections: &["1", "4"],
        },
        company: "Global Sports Co.",
        specialty: "Equipment & Apparel",
    },
    SeedOrganization {
        base: SeedBase {
            id: "6",
            name: "HealthFit Nutrition",
            photo: "photo-1559526324-593bc073d938",
            bio: "Premium sports nutrition brand specializing in performance supplements and recovery products.",
            connections: &["2"],
        },
        company: "HealthFit Nutrition",
        specialty: "Nutrition & Supplements",
    },
    SeedOrganization {
        base: SeedBase {
            id: "7",
            name: "Tech Athletics",
            photo: "photo-1521119989659-a83eee488004",
            bio: "Innovative sports technology company focusing on performance tracking and enhancement tools.",
            connections: &["3"],
        },
        company: "Tech Athletics",
        specialty: "Sports Technology",
    },
];

const SEED_SCOUTS: &[SeedOrganization] = &[
    SeedOrganization {
        base: SeedBase {
            id: "8",
            name: "James Wilson",
            photo: "photo-1507003211169-0a1dd7228f2d",
            bio: "Experienced talent scout specializing in track and field with over 15 years in athlete development.",
            connections: &["1", "4"],
        },
        company: "Elite Athletics Agency",
        specialty: "Track & Field",
    },
    SeedOrganization {
        base: SeedBase {
            id: "9",
            name: "Emily Parker",
            photo: "photo-1573496359142-b8d87734a5a2",
            bio: "Basketball talent scout focusing on collegiate and international recruitment for professional teams.",
            connections: &["2"],
        },
        company: "Parker Scouting",
        specialty: "Basketball",
    },
    SeedOrganization {
        base: SeedBase {
            id: "10",
            name: "Michael Thompson",
            photo: "photo-1506794778202-cad84cf45f1d",
            bio: "Tennis talent scout with connections to major tournaments and academies worldwide.",
            connections: &["3"],
        },
        company: "Global Tennis Network",
        specialty: "Tennis",
    },
];

fn avatar_url(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?auto=format&fit=facearea&facepad=2&w=300&h=300&q=80",
        photo
    )
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// Seeded source of mock users
pub struct UserGenerator {
    rng: ChaCha8Rng,
    now: DateTime<Utc>,
}

impl UserGenerator {
    /// `now` anchors every generated timestamp
    pub fn new(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            now,
        }
    }

    /// Seed users followed by `count` generated users
    pub fn all_users(&mut self, count: usize) -> Vec<User> {
        let mut users = self.seed_users();
        let next_id = users
            .iter()
            .filter_map(|u| u.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        users.extend(self.generate_users(count, next_id));
        users
    }

    /// The hand-authored athletes, sponsors and scouts, in that order
    pub fn seed_users(&mut self) -> Vec<User> {
        let capacity = SEED_ATHLETES.len() + SEED_SPONSORS.len() + SEED_SCOUTS.len();
        let mut users = Vec::with_capacity(capacity);

        for seed in SEED_ATHLETES {
            let profile = RoleProfile::Athlete(AthleteProfile {
                sport: seed.sport.to_string(),
                achievements: owned(&seed.achievements),
                ranking: seed.ranking,
                sponsorships: seed.sponsorships,
            });
            users.push(self.seed_user(&seed.base, profile));
        }

        for seed in SEED_SPONSORS {
            let profile = RoleProfile::Sponsor(SponsorProfile {
                company: seed.company.to_string(),
                specialty: seed.specialty.to_string(),
            });
            users.push(self.seed_user(&seed.base, profile));
        }

        for seed in SEED_SCOUTS {
            let profile = RoleProfile::Scout(ScoutProfile {
                company: seed.company.to_string(),
                specialty: seed.specialty.to_string(),
            });
            users.push(self.seed_user(&seed.base, profile));
        }

        users
    }

    fn seed_user(&mut self, base: &SeedBase, profile: RoleProfile) -> User {
        User {
            id: base.id.to_string(),
            name: base.name.to_string(),
            avatar: avatar_url(base.photo),
            bio: base.bio.to_string(),
            connections: owned(base.connections),
            verified: true,
            joined: self.joined_date(),
            last_active: self.last_active_date(),
            profile,
        }
    }

    /// Randomly attributed users with sequential ids starting at `first_id`
    pub fn generate_users(&mut self, count: usize, first_id: u64) -> Vec<User> {
        (0..count as u64)
            .map(|offset| self.generate_user(first_id + offset))
            .collect()
    }

    fn generate_user(&mut self, numeric_id: u64) -> User {
        let id = numeric_id.to_string();
        let role = *UserRole::ALL.choose(&mut self.rng).unwrap_or(&UserRole::Athlete);

        let profile = match role {
            UserRole::Athlete => RoleProfile::Athlete(AthleteProfile {
                sport: self.pick(SPORTS),
                achievements: self.unique_achievements(),
                ranking: self.rng.gen_range(5..=104),
                sponsorships: self.rng.gen_range(0..=4),
            }),
            UserRole::Sponsor => RoleProfile::Sponsor(SponsorProfile {
                company: self.pick(COMPANIES),
                specialty: self.pick(SPECIALTIES),
            }),
            UserRole::Scout => RoleProfile::Scout(ScoutProfile {
                company: self.pick(COMPANIES),
                specialty: self.pick(SPORTS),
            }),
        };

        let avatar = avatar_url(&self.pick(GENERATED_AVATARS));

        User {
            name: format!("User {}", id),
            bio: format!("Bio for user {} in the role of {}.", id, role.as_str()),
            avatar,
            connections: Vec::new(),
            verified: self.rng.gen_bool(VERIFIED_PROBABILITY),
            joined: self.joined_date(),
            last_active: self.last_active_date(),
            profile,
            id,
        }
    }

    /// Draws from the phrase pool until enough distinct achievements are collected
    fn unique_achievements(&mut self) -> Vec<String> {
        let mut achievements: Vec<String> = Vec::with_capacity(ACHIEVEMENTS_PER_ATHLETE);
        while achievements.len() < ACHIEVEMENTS_PER_ATHLETE {
            let candidate = self.pick(ACHIEVEMENTS);
            if !achievements.contains(&candidate) {
                achievements.push(candidate);
            }
        }
        achievements
    }

    fn pick(&mut self, pool: &[&str]) -> String {
        pool.choose(&mut self.rng)
            .map(|s| s.to_string())
            .unwrap_or_default()
    }

    fn joined_date(&mut self) -> DateTime<Utc> {
        let start = Utc
            .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or(self.now);
        self.date_between(start, self.now)
    }

    fn last_active_date(&mut self) -> DateTime<Utc> {
        self.date_between(self.now - Duration::days(7), self.now)
    }

    fn date_between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        let span = (end - start).num_milliseconds();
        if span <= 0 {
            return start;
        }
        start + Duration::milliseconds(self.rng.gen_range(0..=span))
    }
}
