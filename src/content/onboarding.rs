use serde::Serialize;

/// One onboarding slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
}

pub const APP_NAME: &str = "JanMitra";
pub const APP_TAGLINE: &str = "Aapka Digital Mitra";

pub static SLIDES: [Slide; 3] = [
    Slide {
        title: "Welcome to JanMitra",
        subtitle: "Your Digital Government Companion",
        description: "Access all government services from one beautiful, easy-to-use app",
        glyph: "♥",
    },
    Slide {
        title: "Smart Services",
        subtitle: "Everything You Need",
        description: "Apply for certificates, file complaints, and track applications with ease",
        glyph: "▤",
    },
    Slide {
        title: "Stay Connected",
        subtitle: "Real-time Updates",
        description: "Get instant notifications about your applications and city news",
        glyph: "◉",
    },
];

pub const TERMS_NOTICE: &str =
    "By continuing, you agree to our Terms of Service and Privacy Policy";
