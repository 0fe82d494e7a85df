//! About page: mission copy, highlights, technology stack and team.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::components::card::Card;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

impl TeamMember {
    /// Avatar letter shown in place of a photo.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
    }
}

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight { icon: "⚡", title: "Real-time Processing", text: "Instant object detection and classification" },
    Highlight { icon: "⌘", title: "High Accuracy", text: "State-of-the-art machine learning models" },
    Highlight { icon: "🛡", title: "Secure & Private", text: "Enterprise-grade security and privacy" },
];

pub const TECH_STACK: [&str; 4] = ["Leptos", "WebAssembly", "Axum", "YOLOv8"];

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Shinjan Saha",
        role: "Developer",
        linkedin: "https://www.linkedin.com/in/shinjan-saha-1bb744319/",
        github: "https://github.com/Code-r4Life/",
    },
    TeamMember {
        name: "Satyabrata Das Adhikari",
        role: "Developer",
        linkedin: "https://www.linkedin.com/in/satyabrata-das-adhikari-1813a7324/",
        github: "https://github.com/satya-py/",
    },
    TeamMember {
        name: "Sayan Sk",
        role: "Developer",
        linkedin: "https://www.linkedin.com/in/sayan-sk-092203318/",
        github: "https://github.com/Sayan474/",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <section class="about__hero">
                <div class="about__mission">
                    <h1 class="about__title">"About ObjectDetect"</h1>
                    <p class="about__tagline">"Advanced Object Detection Technology"</p>
                    <Card class="about__mission-card">
                        <h2>"Mission Overview"</h2>
                        <p>
                            "ObjectDetect represents the next generation of visual analytics technology. Our mission is to enhance operational efficiency and safety through intelligent, real-time detection of critical objects in any environment."
                        </p>
                        <p>
                            "Using state-of-the-art YOLOv8 models, our system can instantly identify and classify objects with high precision, providing crucial information for security, automation, and analytics."
                        </p>
                        <p>
                            "The project combines a Rust web front end with a dedicated inference service, making it accessible to developers, researchers, and businesses alike."
                        </p>
                    </Card>
                </div>
                <div class="about__highlights">
                    {HIGHLIGHTS
                        .iter()
                        .map(|h| {
                            view! {
                                <div class="highlight">
                                    <div class="highlight__icon">{h.icon}</div>
                                    <div>
                                        <h3 class="highlight__title">{h.title}</h3>
                                        <p class="highlight__text">{h.text}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="about__section">
                <h2 class="about__heading">"Technology Stack"</h2>
                <div class="tech-grid">
                    {TECH_STACK
                        .iter()
                        .map(|name| view! { <div class="tech-grid__item">{*name}</div> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="about__section">
                <h2 class="about__heading">"Meet The Team"</h2>
                <div class="team-grid">
                    {TEAM
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="team-member">
                                    <div class="team-member__avatar">{member.initial()}</div>
                                    <h3 class="team-member__name">{member.name}</h3>
                                    <p class="team-member__role">{member.role}</p>
                                    <div class="team-member__links">
                                        <a href=member.linkedin target="_blank" rel="noopener noreferrer">
                                            "LinkedIn"
                                        </a>
                                        <a href=member.github target="_blank" rel="noopener noreferrer">
                                            "GitHub"
                                        </a>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
