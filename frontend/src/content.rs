use crate::components::icons::IconKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
}

/// Everything the page shows. Compiled in; there is no loader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioContent {
    pub owner_name: &'static str,
    /// Hero reads `lead` / `accent` / `tail`, with `accent` set large in red.
    pub hero_lead: &'static str,
    pub hero_accent: &'static str,
    pub hero_tail: &'static [&'static str],
    pub portrait_url: &'static str,
    pub portrait_alt: &'static str,
    pub about_title: &'static str,
    pub about_paragraphs: &'static [&'static str],
    pub work_label: &'static [&'static str],
    pub contact_prompt: &'static str,
    pub contact_headline: &'static [&'static str],
    pub contact_email: &'static str,
    pub socials: &'static [SocialLink],
}

pub static CONTENT: PortfolioContent = PortfolioContent {
    owner_name: "Srivatsa Pidaparthi",
    hero_lead: "Crafting",
    hero_accent: "play",
    hero_tail: &["with immersive", "technology."],
    portrait_url: "https://static1.squarespace.com/static/5cfb0f8783523500013c5639/t/60391a67844f10416b040f2f/1614355064391/Headshots-photographer-vancouver-1.jpg?format=1500w",
    portrait_alt: "Project placeholder",
    about_title: "About Me",
    about_paragraphs: &[
        "I am a passionate creator and technologist specializing in the intersection of art, design, and immersive technologies. With a background in interactive design and software development, I thrive on building experiences that are not only visually stunning but also deeply engaging and playful.",
        "My work explores how we interact with digital spaces, from augmented reality games that merge the real and virtual, to generative art that responds to its environment. I believe that technology should be a tool for wonder and connection.",
        "Let's build something amazing together.",
    ],
    work_label: &["View my", "work"],
    contact_prompt: "Have some questions?",
    contact_headline: &["Let's get", "in touch"],
    contact_email: "srivatsa.pidaparthi@gmail.com",
    socials: &[
        SocialLink { label: "LinkedIn", href: "https://www.linkedin.com", icon: IconKind::Linkedin },
        SocialLink { label: "YouTube", href: "https://www.youtube.com", icon: IconKind::Youtube },
        SocialLink { label: "Instagram", href: "https://www.instagram.com", icon: IconKind::Instagram },
    ],
};
