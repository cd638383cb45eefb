// Literal page content. Everything the static pages show lives here.

use crate::routes::Route;

pub const SITE_OWNER: &str = "Dylan Sellberg";

pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Apps", route: Route::Kids },
    NavLink { label: "Work", route: Route::Work },
    NavLink { label: "About", route: Route::About },
];

pub struct WorkSection {
    pub route: Route,
    pub title: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
}

pub const WORK_SECTIONS: [WorkSection; 2] = [
    WorkSection {
        route: Route::ProductLaunchTalks,
        title: "Product Launch Talks",
        description: "On-stage presentations from INBOUND 2023, 2024, and 2025",
        tag: "Speaking",
    },
    WorkSection {
        route: Route::Patents,
        title: "Patents",
        description: "Granted and published patents from my time at HubSpot",
        tag: "Intellectual Property",
    },
];

pub struct Patent {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub co_inventors: &'static [&'static str],
    pub href: &'static str,
    pub featured: bool,
}

pub const PATENTS: [Patent; 3] = [
    Patent {
        number: "US20240211439A1",
        title: "AI/ML Concierge for a Multi-Client Distributed System",
        description: "A conversational AI system that processes natural language commands to generate reports, drafts, documents, and manage CRM data, all through simple chat rather than traditional app interfaces.",
        co_inventors: &["Dharmesh Shah"],
        href: "https://patents.google.com/patent/US20240211439",
        featured: true,
    },
    Patent {
        number: "US12386797B2",
        title: "Multi-Service Business Platform System Having Entity Resolution Systems and Methods",
        description: "An AI/ML system for identifying and resolving duplicate business entities across large datasets using vectorization, neural networks, and companion matrix scoring.",
        co_inventors: &[],
        href: "https://patents.google.com/patent/US12386797",
        featured: false,
    },
    Patent {
        number: "US12511256B2",
        title: "Multi-Service Business Platform System Having Custom Object Systems and Methods",
        description: "A flexible CRM platform enabling businesses to define arbitrary custom objects and apply workflow automation, reporting, and analytics without being locked into preset data structures.",
        co_inventors: &[],
        href: "https://patents.google.com/patent/US12511256",
        featured: false,
    },
];

pub struct Talk {
    /// YouTube video id.
    pub video_id: &'static str,
    pub title: &'static str,
    pub event: &'static str,
}

pub const TALKS: [Talk; 3] = [
    Talk { video_id: "QP0SHDV_7Ts", title: "Meet Breeze", event: "INBOUND 2024" },
    Talk { video_id: "hT4NvY1vbK0", title: "Meet ChatSpot", event: "INBOUND 2023" },
    Talk { video_id: "qHXMlj6fdrI", title: "Breeze Agents", event: "INBOUND 2025" },
];

pub struct KidsGame {
    pub route: Route,
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub colors: (&'static str, &'static str),
}

pub const KIDS_GAMES: [KidsGame; 2] = [
    KidsGame {
        route: Route::Alphabet,
        emoji: "🔤",
        title: "Alphabet",
        description: "Tap a letter to learn its sound",
        colors: ("#f472b6", "#fb7185"),
    },
    KidsGame {
        route: Route::Hockey,
        emoji: "🏒",
        title: "Hockey",
        description: "Time your shot and score five goals",
        colors: ("#60a5fa", "#818cf8"),
    },
];

/// (emoji, title, gradient) tiles shown greyed out.
pub const COMING_SOON: [(&str, &str, (&str, &str)); 4] = [
    ("🔢", "Counting", ("#93c5fd", "#67e8f9")),
    ("🎨", "Colors & Shapes", ("#d8b4fe", "#f9a8d4")),
    ("🐶", "Animals", ("#86efac", "#5eead4")),
    ("⚽", "Sports", ("#fdba74", "#fde047")),
];
