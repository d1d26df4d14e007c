//! Static copy and decoration for the hero, about and skills sections.

use crate::core::constants::HERO_BUBBLE_COUNT;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name",
            tagline: "A brief description about yourself.",
            image: "/path-to-your-image.jpg",
            github: "https://github.com/your-github",
            linkedin: "https://linkedin.com/in/your-linkedin",
            email: "your-email@example.com",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Projects Completed", value: "50+" },
    Stat { label: "Cups of Coffee", value: "1000+" },
    Stat { label: "Happy Clients", value: "30+" },
    Stat { label: "Design Awards", value: "5" },
];

pub const ABOUT_HEADLINE: &str = "Crafting Digital Experiences";
pub const ABOUT_TEXT: &str = "With over 5 years of experience in full-stack development, I specialize in \
creating innovative web solutions that combine cutting-edge technology with intuitive design. My \
passion lies in building scalable applications that make a real impact.";

pub const MAX_SKILL_LEVEL: u8 = 5;

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub title: &'static str,
    pub level: u8,
    pub description: &'static str,
}

impl Skill {
    /// Filled/empty flags for each of the `MAX_SKILL_LEVEL` stars.
    pub fn stars(&self) -> [bool; MAX_SKILL_LEVEL as usize] {
        let mut out = [false; MAX_SKILL_LEVEL as usize];
        for (i, star) in out.iter_mut().enumerate() {
            *star = (i as u8) < self.level;
        }
        out
    }
}

pub const SKILLS: [Skill; 4] = [
    Skill {
        title: "Frontend Development",
        level: 5,
        description: "Expert in React, Vue.js, and modern CSS frameworks",
    },
    Skill {
        title: "Backend Development",
        level: 4,
        description: "Node.js, Python, and database management",
    },
    Skill {
        title: "UI/UX Design",
        level: 4,
        description: "Figma, Adobe XD, and responsive design principles",
    },
    Skill {
        title: "Cloud Services",
        level: 3,
        description: "AWS, Google Cloud, and serverless architecture",
    },
];

/// A decorative circle floating behind the hero text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub top_pct: f32,
    pub left_pct: f32,
    pub size_px: f32,
    pub red: u8,
    pub green: u8,
    pub float_secs: f32,
}

/// Randomly placed hero bubbles; deterministic for a given seed.
pub fn hero_bubbles(seed: u64) -> Vec<Bubble> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..HERO_BUBBLE_COUNT)
        .map(|_| Bubble {
            top_pct: rng.gen::<f32>() * 100.0,
            left_pct: rng.gen::<f32>() * 100.0,
            size_px: rng.gen::<f32>() * 10.0 + 5.0,
            red: rng.gen(),
            green: rng.gen(),
            float_secs: rng.gen::<f32>() * 10.0 + 5.0,
        })
        .collect()
}
