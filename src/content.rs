#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static SECTIONS: [SectionDescriptor; 4] = [
    SectionDescriptor {
        id: "home",
        label: "Home",
        icon: "icon-home",
    },
    SectionDescriptor {
        id: "about",
        label: "About",
        icon: "icon-user",
    },
    SectionDescriptor {
        id: "projects",
        label: "Projects",
        icon: "icon-code",
    },
    SectionDescriptor {
        id: "contact",
        label: "Contact",
        icon: "icon-mail",
    },
];

pub fn initial_section() -> &'static str {
    SECTIONS[0].id
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub link: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Blog Zwei",
        description: "A modern blog platform with a clean and responsive design, dark mode support, and a seamless reading experience.",
        image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?auto=format&fit=crop&w=1200&q=80",
        technologies: &["React", "TypeScript", "Material UI", "Dark Mode", "Responsive Design"],
        link: "https://blog-zwei.vercel.app",
    },
    Project {
        title: "My Developer Portfolio",
        description: "A portfolio website showcasing projects and skills, with a light/dark toggle and smooth scroll-driven animations.",
        image: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?auto=format&fit=crop&w=1200&q=80",
        technologies: &["Rust", "Leptos", "WebAssembly", "Dark Mode", "Responsive Design"],
        link: "https://portfolio-kimbeff.vercel.app/",
    },
    Project {
        title: "E-Commerce Online Store",
        description: "An online store with a filterable product catalog, shopping cart and user authentication.",
        image: "https://images.unsplash.com/photo-1607082349566-187342175e2f?auto=format&fit=crop&w=1200&q=80",
        technologies: &["React", "TypeScript", "Chakra UI", "Context API", "E-commerce"],
        link: "https://reakt2.vercel.app/",
    },
    Project {
        title: "Weather App",
        description: "A weather application with current conditions from the OpenWeather API and animated weather scenes.",
        image: "https://images.unsplash.com/photo-1580193769210-b8d1c049a7d9?auto=format&fit=crop&w=1200&q=80",
        technologies: &["React", "TypeScript", "Weather API", "Styled Components", "Animations"],
        link: "https://v0-weather-app-ui-rose.vercel.app/",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Frontend",
        icon: "icon-code",
        skills: &[
            skill("React.js", 65),
            skill("TypeScript", 50),
            skill("Angular.js", 65),
            skill("Material UI", 60),
            skill("Tailwind CSS", 50),
        ],
    },
    SkillGroup {
        title: "Backend",
        icon: "icon-storage",
        skills: &[
            skill("Node.js", 60),
            skill("Express.js", 60),
            skill("Firebase", 90),
            skill("MongoDB", 60),
            skill("REST APIs", 50),
        ],
    },
    SkillGroup {
        title: "Tools & Others",
        icon: "icon-build",
        skills: &[
            skill("Git", 40),
            skill("Docker", 50),
            skill("Windows Subsystem for Linux", 80),
            skill("Mocha & Chai", 75),
            skill("AI prompt engineering", 90),
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub description: &'static str,
}

pub static EXPERIENCES: [Experience; 2] = [
    Experience {
        period: "2025 (1 month)",
        role: "Technical Assistant (internship)",
        company: "CRM Kraft",
        description: "Managed and maintained the CRM system, provided technical support to the sales team, and assisted with data entry and reporting.",
    },
    Experience {
        period: "2021 - 2024",
        role: "Student (software engineering)",
        company: "Software University",
        description: "Completed the full JavaScript path from basics through fundamentals, advanced and professional modules, working on projects and workshops along the way.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub title: &'static str,
    pub detail: &'static str,
}

pub static CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        title: "Email",
        detail: "face7onol@gmail.com",
    },
    ContactInfo {
        title: "Location",
        detail: "Vidin, Bulgaria",
    },
    ContactInfo {
        title: "Phone",
        detail: "+359 876 227 442",
    },
];

pub const HERO_TITLE: [&str; 3] = ["FRONT", "END", "DEVELOPER"];
pub const HERO_TAGLINE: [&str; 3] = ["CRAFTING", "DIGITAL", "EXPERIENCES"];
pub const OWNER: &str = "Kliment Petrov";

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_section_ids_unique_and_ordered() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["home", "about", "projects", "contact"]);
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(initial_section(), "home");
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for group in &SKILL_GROUPS {
            assert!(!group.skills.is_empty());
            for skill in group.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }
}
