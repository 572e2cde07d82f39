//! Copy, links and image references for every section. Plain constants;
//! nothing here changes at runtime.

use crate::components::icon::Icon;
use crate::theme::{Gradient, GREEN, INK, MINT};

pub const BRAND_NAME: &str = "ByteBloom";
pub const STUDIO_NAME: &str = "ByteBloom Studio";
pub const COPYRIGHT_YEAR: u16 = 2024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Services", anchor: "services" },
    NavLink { label: "Portfolio", anchor: "portfolio" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub const ABOUT_HIGHLIGHTS: &[&str] = &[
    "5+ Years of Design Excellence",
    "50+ Eco-Tech Brands Launched",
    "100% Sustainable Design Process",
];

pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=600&h=500&fit=crop&crop=faces";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: Gradient,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Logo Design",
        description: "Memorable logos that capture your eco-tech vision",
        icon: Icon::Palette,
        color: Gradient::new(GREEN, MINT),
    },
    Service {
        title: "Web Design",
        description: "Modern, responsive websites that convert visitors",
        icon: Icon::Globe,
        color: Gradient::new(MINT, GREEN),
    },
    Service {
        title: "Packaging",
        description: "Sustainable packaging design that stands out",
        icon: Icon::Package,
        color: Gradient::new(GREEN, INK),
    },
    Service {
        title: "Social Media",
        description: "Cohesive social media branding and templates",
        icon: Icon::Share,
        color: Gradient::new(MINT, INK),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const PORTFOLIO: &[Project] = &[
    Project {
        title: "EcoFlow Energy",
        category: "Solar Tech Startup",
        image: "https://images.unsplash.com/photo-1509391366360-2e959784a276?w=600&h=400&fit=crop",
        description: "Complete rebrand for renewable energy platform",
    },
    Project {
        title: "GreenTech Labs",
        category: "Sustainable Innovation",
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=600&h=400&fit=crop",
        description: "Modern identity for green technology incubator",
    },
    Project {
        title: "PlantBase Co",
        category: "Eco-Friendly Products",
        image: "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=600&h=400&fit=crop",
        description: "Packaging design for plant-based product line",
    },
    Project {
        title: "CleanWave",
        category: "Water Technology",
        image: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=600&h=400&fit=crop",
        description: "Brand identity for water purification startup",
    },
    Project {
        title: "SolarSync",
        category: "Smart Energy",
        image: "https://images.unsplash.com/photo-1466611653911-95081537e5b7?w=600&h=400&fit=crop",
        description: "Digital branding for solar management app",
    },
    Project {
        title: "EcoVenture",
        category: "Green Investment",
        image: "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=600&h=400&fit=crop",
        description: "Professional identity for eco-investment firm",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Chen",
        role: "CEO, EcoFlow Energy",
        content: "ByteBloom transformed our brand completely. The new identity perfectly captures our mission and has helped us attract top-tier investors.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face",
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "Founder, GreenTech Labs",
        content: "Working with ByteBloom was incredible. They understood our vision and created a brand that truly represents our values and innovation.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
    },
    Testimonial {
        name: "Emily Watson",
        role: "CMO, PlantBase Co",
        content: "The packaging design ByteBloom created for us increased our sales by 40%. Their attention to detail and creativity is unmatched.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face",
    },
];

pub const AVATAR_PLACEHOLDER: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub description: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📧",
        title: "Email Us",
        content: "hello@bytebloomstudio.com",
        description: "Drop us a line anytime",
    },
    ContactChannel {
        icon: "📱",
        title: "Call Us",
        content: "+1 (555) 123-4567",
        description: "Mon-Fri from 9am to 6pm",
    },
    ContactChannel {
        icon: "📍",
        title: "Visit Us",
        content: "San Francisco, CA",
        description: "Schedule a meeting",
    },
];

pub const CONTACT_IMAGE: &str =
    "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?w=500&h=300&fit=crop";

pub const SOCIAL_NETWORKS: &[&str] = &["Twitter", "LinkedIn", "Instagram", "Dribbble"];

pub const FOOTER_SERVICES: &[&str] = &[
    "Logo Design",
    "Web Design",
    "Packaging",
    "Social Media",
    "Brand Strategy",
];

pub const FOOTER_COMPANY: &[&str] = &["About", "Portfolio", "Blog", "Careers", "Contact"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_anchors() {
        let hrefs: Vec<String> = NAV_LINKS.iter().map(|l| l.href()).collect();
        assert_eq!(hrefs, ["#about", "#services", "#portfolio", "#contact"]);
        for link in NAV_LINKS {
            assert_eq!(link.anchor, link.label.to_lowercase());
        }
    }

    #[test]
    fn test_services_in_canonical_order() {
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Logo Design", "Web Design", "Packaging", "Social Media"]);
    }

    #[test]
    fn test_portfolio_has_six_distinct_projects() {
        assert_eq!(PORTFOLIO.len(), 6);
        assert_eq!(PORTFOLIO[0].title, "EcoFlow Energy");
        assert_eq!(PORTFOLIO[5].title, "EcoVenture");
        for project in PORTFOLIO {
            assert!(project.image.starts_with("https://"));
        }
    }

    #[test]
    fn test_testimonial_ratings_are_stars() {
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn test_contact_channels() {
        let titles: Vec<&str> = CONTACT_CHANNELS.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Email Us", "Call Us", "Visit Us"]);
    }
}
