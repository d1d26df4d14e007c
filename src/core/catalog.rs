use smallvec::SmallVec;

/// Tags attached to a project; most projects carry a handful.
pub type Tags = SmallVec<[&'static str; 4]>;

/// A gallery entry. The catalog is static and never mutated after load.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: Tags,
    pub repo_link: &'static str,
    pub live_link: &'static str,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

/// Projects shown in the gallery, in display order.
pub fn default_catalog() -> Vec<Project> {
    vec![
        Project {
            title: "AI-Powered Analytics Platform",
            description: "Real-time data analysis platform with machine learning capabilities.",
            image: "/api/placeholder/800/600",
            tags: Tags::from_slice(&["React", "Python", "TensorFlow"]),
            repo_link: "#",
            live_link: "#",
        },
        Project {
            title: "E-commerce Solution",
            description: "Full-stack e-commerce platform with advanced features.",
            image: "/api/placeholder/800/600",
            tags: Tags::from_slice(&["Next.js", "Node.js", "MongoDB"]),
            repo_link: "#",
            live_link: "#",
        },
        Project {
            title: "Social Media Dashboard",
            description: "Comprehensive social media management tool.",
            image: "/api/placeholder/800/600",
            tags: Tags::from_slice(&["Vue.js", "Firebase", "TypeScript"]),
            repo_link: "#",
            live_link: "#",
        },
    ]
}

/// Every distinct tag in the catalog, in first-seen order.
pub fn all_tags(catalog: &[Project]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for tag in catalog.iter().flat_map(|p| p.tags.iter().copied()) {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
