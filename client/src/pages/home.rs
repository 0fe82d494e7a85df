//! Landing page: hero copy, a preview window and the capability grid.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::card::Card;

pub const HERO_IMAGE: &str = "/hero-image.png";

/// One capability card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "⚡",
        title: "Live Detection",
        description: "Real-time processing of video streams with minimal latency.",
    },
    Feature {
        icon: "📈",
        title: "Smart Analytics",
        description: "Detailed insights and confidence scores for every detection.",
    },
    Feature {
        icon: "▣",
        title: "Visual Overlay",
        description: "Clean, accurate bounding boxes and labels drawn directly on images.",
    },
    Feature {
        icon: "◎",
        title: "Precision Mode",
        description: "High-accuracy configuration for critical detection tasks.",
    },
    Feature {
        icon: "⬢",
        title: "Pretrained Model",
        description: "Powered by the state-of-the-art YOLOv8 architecture.",
    },
    Feature {
        icon: "🛡",
        title: "Secure Processing",
        description: "Enterprise-grade security for your data and images.",
    },
];

/// Figures shown in the hero preview window.
pub const PREVIEW_STATS: [(&str, &str); 2] = [("Processing Time", "12ms"), ("Objects Detected", "8")];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <div class="hero__copy">
                    <h1 class="hero__title">
                        <span class="hero__title-accent">"Next-Gen"</span>
                        <br/>
                        <span>"Object Detection"</span>
                    </h1>
                    <p class="hero__lead">
                        "Experience the power of real-time AI object detection. Fast, accurate, and seamless integration for your security and analytics needs."
                    </p>
                    <a href="/detection" class="hero__cta">
                        "Start Detecting"
                        <span class="hero__cta-arrow">"→"</span>
                    </a>
                </div>
                <div class="hero__window">
                    <div class="hero__window-bar">
                        <span class="hero__dot hero__dot--red"></span>
                        <span class="hero__dot hero__dot--yellow"></span>
                        <span class="hero__dot hero__dot--green"></span>
                        <span class="hero__window-name">"detection_preview.rs"</span>
                    </div>
                    <div class="hero__window-body">
                        <img src=HERO_IMAGE alt="Detection Preview" class="hero__image"/>
                        <div class="hero__stats">
                            {PREVIEW_STATS
                                .iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="hero__stat">
                                            <span>{*label}</span>
                                            <span class="hero__stat-value">{*value}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </section>

            <section class="features">
                <div class="features__header">
                    <h2>"Advanced Capabilities"</h2>
                    <p>"Everything you need for powerful object detection"</p>
                </div>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <Card class="feature-card">
                                    <div class="feature-card__icon">{feature.icon}</div>
                                    <h3 class="feature-card__title">{feature.title}</h3>
                                    <p class="feature-card__text">{feature.description}</p>
                                </Card>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
