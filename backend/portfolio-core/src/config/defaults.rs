//! Canonical page content used when no `portfolio.toml` is present.

use models::{About, ContactSection, Hero, Project, SiteMetadata, Skill};

pub(crate) fn site() -> SiteMetadata {
    SiteMetadata {
        title: "Jovel".to_string(),
        description: "Jove the greatest Graphic Artist of all time.".to_string(),
        brand: "JOVEL".to_string(),
        copyright_holder: "JOVEL".to_string(),
        year: 2025,
        favicon: "/favicon.ico".to_string(),
    }
}

pub(crate) fn hero() -> Hero {
    Hero {
        heading: "Creative Developer & Digital Designer".to_string(),
        subtitle: "Crafting elegant solutions through clean code and thoughtful design"
            .to_string(),
        cta_label: "GET IN TOUCH".to_string(),
    }
}

pub(crate) fn about() -> About {
    About {
        title: "About".to_string(),
        paragraphs: vec![
            "I'm Jovel, a developer and designer focused on creating meaningful digital \
             experiences. I believe in the power of simplicity and the impact of attention \
             to detail."
                .to_string(),
        ],
        highlights: vec![
            "Jovel".to_string(),
            "meaningful digital experiences".to_string(),
        ],
    }
}

pub(crate) fn skills() -> Vec<Skill> {
    vec![
        Skill::new(
            "Development",
            "React, Node.js, TypeScript, Next.js, modern web technologies",
        ),
        Skill::new(
            "Design",
            "UI/UX, Figma, prototyping, design systems, brand identity",
        ),
        Skill::new(
            "Strategy",
            "Product thinking, user research, information architecture",
        ),
        Skill::new(
            "Optimization",
            "Performance, accessibility, SEO, best practices",
        ),
    ]
}

pub(crate) fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "Brand Identity & Logo Design",
            "Complete brand identity package including logo design, color palette, \
             typography system, and brand guidelines for a premium wellness company.",
            "/images/work1.webp",
        ),
        Project::new(
            "Social Media Campaign",
            "Creative visual content and graphics for a 3-month social media campaign, \
             featuring custom illustrations, templates, and cohesive brand storytelling.",
            "/images/work2.jpg",
        ),
        Project::new(
            "Packaging Design",
            "Modern packaging design for an organic skincare line, combining minimalist \
             aesthetics with eco-friendly materials and print production.",
            "/images/work2.jpg",
        ),
        Project::new(
            "Editorial & Print Design",
            "Magazine layouts, posters, and print collateral featuring bold typography, \
             creative compositions, and attention to detail in every spread.",
            "/images/work2.jpg",
        ),
        Project::new(
            "Digital Illustrations",
            "Custom digital artwork and illustrations for web, mobile apps, and marketing \
             materials, showcasing versatile artistic styles and creative concepts.",
            "/images/work2.jpg",
        ),
        Project::new(
            "UI/UX Visual Design",
            "Interface design and visual systems for mobile and web applications, focusing \
             on beautiful, user-friendly experiences with pixel-perfect execution.",
            "/images/work2.jpg",
        ),
    ]
}

pub(crate) fn contact() -> ContactSection {
    ContactSection {
        title: "Get In Touch".to_string(),
        heading: "Let's create something exceptional together".to_string(),
        submit_label: "SEND MESSAGE".to_string(),
        confirmation: "Thank you for reaching out. I'll get back to you soon.".to_string(),
    }
}
