use crate::models::Event;

/// External application form, always linked from the event card.
pub const APPLY_LINK: &str = "https://docs.google.com/forms/d/e/1FAIpQLSditdPgSknXtq_6FnaEsaZyyJp2zlmGwj0YvhDf7W09Mf4-XA/viewform?usp=sharing&ouid=111351627280286504766";

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Extra lines shown on the event card only when the fallback event is in use.
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackDetails {
    pub theme: &'static str,
    pub medium: &'static str,
    pub eligibility: &'static str,
    pub awards: &'static str,
}

pub fn fallback_event() -> Event {
    Event {
        title: "Inter-College Painting Competition 2025".to_string(),
        description: "“Explore Your Creativity” — Inter-college painting competition by Sumirayan Design Pvt. Ltd. in collaboration with College of Arts & Crafts, Patna. Theme: \"Bihar & Dr. Rajendra Prasad\". One hour, one canvas. Mix media allowed; paper will be provided, participants must bring their own materials.".to_string(),
        date: "2025-12-09T11:00:00".to_string(),
        location: "Ground, College of Arts & Crafts, Patna".to_string(),
    }
}

pub fn fallback_details() -> FallbackDetails {
    FallbackDetails {
        theme: "Bihar & Dr. Rajendra Prasad – One hour, one canvas",
        medium: "Mix media (any colour medium allowed)",
        eligibility: "Max 5 students per college, individuals welcome",
        awards: "Top 3 medal winners; all participants receive medals & certificates",
    }
}
