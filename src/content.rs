//! Static copy for the landing and about pages.

use crate::carousel::Carousel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub contribution: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
    pub linkedin: &'static str,
}

pub const TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Ryan Madhuwala",
        contribution: "Team Leader",
        image: "/ryan.jpeg",
        quote: "Innovating for the future of defense technology.",
        linkedin: "https://linkedin.com/in/ryanmadhuwala/",
    },
    TeamMember {
        name: "Anukrati Chaturvedi",
        contribution: "Team Member",
        image: "/anu.jpg",
        quote: "Dedicated to advancing military intelligence systems.",
        linkedin: "https://www.linkedin.com/in/anukrati-chaturvedi-948572288/",
    },
    TeamMember {
        name: "Ronit Raj",
        contribution: "Team Member",
        image: "/ronit.jpg",
        quote: "Pushing the boundaries of AI in military applications.",
        linkedin: "https://www.linkedin.com/in/ronit-raj-662485225/",
    },
    TeamMember {
        name: "Murtuza Shaikh",
        contribution: "Team Member",
        image: "/murtuza.jpg",
        quote: "Committed to enhancing military intelligence capabilities.",
        linkedin: "https://www.linkedin.com/in/murtuza-shaikh-2167b0295/",
    },
    TeamMember {
        name: "Udit Shrivastava",
        contribution: "Team Member",
        image: "/udit.jpg",
        quote: "Developing cutting-edge solutions for defense.",
        linkedin: "https://www.linkedin.com/in/udit2303/",
    },
    TeamMember {
        name: "Kushal Trivedi",
        contribution: "Team Member",
        image: "/kushal.jpg",
        quote: "Striving for excellence in military tech innovation.",
        linkedin: "https://www.linkedin.com/in/kushal-trivedi-16421a210/",
    },
];

pub fn team_carousel() -> Carousel<TeamMember> {
    Carousel::new(TEAM.to_vec())
}

/// Title and description of one card on a content page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

const fn card(title: &'static str, description: &'static str) -> Card {
    Card { title, description }
}

/// A card on the about page linking to one of its sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub path: &'static str,
    pub card: Card,
}

pub const ABOUT_SECTIONS: [Section; 4] = [
    Section {
        path: "/about/project",
        card: card(
            "Project Insights",
            "Dive deep into our cutting-edge military intelligence system. Explore its advanced AI capabilities, real-time data processing, and how it's revolutionizing decision-making on the battlefield.",
        ),
    },
    Section {
        path: "/about/team",
        card: card(
            "Meet Our Experts",
            "Get to know the brilliant minds behind our innovation. Our team of AI specialists, military strategists, and data scientists are pushing the boundaries of what's possible in military intelligence.",
        ),
    },
    Section {
        path: "/about/technology",
        card: card(
            "Technology Stack",
            "Uncover the advanced technologies powering our platform. From machine learning algorithms to secure cloud infrastructure, learn how we're leveraging cutting-edge tech to keep our military ahead.",
        ),
    },
    Section {
        path: "/about/impact",
        card: card(
            "Real-World Impact",
            "Explore the tangible results of our system in action. Discover case studies, success stories, and the measurable impact we're making in enhancing military operations and saving lives.",
        ),
    },
];

pub const PROJECT_OVERVIEW: &str = "We present SHAKTI (Strategic Handling and Knowledge of Tactical \
Intelligence), an advanced multimodal Large Language Model (MLLM) tailored for military tactical \
response through AI-powered image conversational capabilities. SHAKTI integrates cutting-edge \
vision-language modeling to perform complex military tasks, such as real-time reasoning, \
decision-making, and scene understanding.";

pub const HIGHLIGHTS: [Card; 3] = [
    card("Secure", "End-to-end encryption"),
    card("Precise", "99.9% accuracy"),
    card("AI-Powered", "Advanced algorithms"),
];

pub const FEATURES: [Card; 6] = [
    card(
        "Real-time Analytics",
        "Get instant insights from your data with our powerful analytics engine.",
    ),
    card(
        "Geospatial Intelligence",
        "Visualize and analyze geographical data for strategic planning.",
    ),
    card(
        "Collaborative Platform",
        "Work seamlessly with your team in a secure, shared environment.",
    ),
    card(
        "Video Detection",
        "Support for real-time video detection and analysis.",
    ),
    card(
        "Lightweight",
        "Runs efficiently on a single machine with minimal resources.",
    ),
    card(
        "Offline Operation",
        "Operates completely offline for enhanced security.",
    ),
];

pub const TECHNOLOGIES: [Card; 10] = [
    card(
        "Vision Models",
        "DRISHTI Vision Model, OpenCV, YOLO for object detection and analysis.",
    ),
    card(
        "Text Processing & Tactical Models",
        "CHAKRAVYUHA tactical text model, RAG (Retrieval-Augmented Generation), and NLP pipelines.",
    ),
    card(
        "AI Frameworks",
        "AIRAVATA Framework for efficient pipeline management, training, and database handling.",
    ),
    card(
        "OCR & Document Analysis",
        "OCR for text extraction, PDF summarization, and document understanding.",
    ),
    card(
        "Multimodal AI",
        "Integrated text, image, and video analysis for holistic decision-making.",
    ),
    card(
        "Generative AI",
        "Transformer-based models for content generation and contextual storytelling.",
    ),
    card(
        "UI Development",
        "Rust, Leptos and WebAssembly for a fast, type-safe interface.",
    ),
    card(
        "Deep Learning Frameworks",
        "TensorFlow, PyTorch for training and deploying AI models.",
    ),
    card(
        "Video Analysis",
        "Advanced video feed processing for real-time monitoring and analytics.",
    ),
    card(
        "Real-Time Inference",
        "Optimized inference pipelines ensuring fast, accurate results.",
    ),
];

pub const IMPACTS: [Card; 8] = [
    card(
        "Situational Awareness",
        "Provides real-time insights on battlefields by analyzing drone footage for tactical advantages.",
    ),
    card(
        "Threat Identification",
        "Accurately detects enemy assets, camouflaged positions, and hidden threats using advanced object detection and OCR.",
    ),
    card(
        "Tactical Decision Support",
        "Generates actionable strategies by processing multi-modal inputs like images, text, and environmental conditions.",
    ),
    card(
        "Resource Optimization",
        "Efficiently operates on low-resource systems, ensuring continuity during critical system failures or resource scarcity.",
    ),
    card(
        "Intelligence Reporting",
        "Summarizes operational data from PDFs and images into concise intelligence briefs for rapid communication.",
    ),
    card(
        "Camouflage Detection",
        "Enhances recognition of obscured targets through multi-attention models analyzing complex terrains.",
    ),
    card(
        "Collaborative Mission Planning",
        "Enables multi-team coordination by seamlessly sharing mission-critical data across units.",
    ),
    card(
        "Disaster Relief Assistance",
        "Supports humanitarian missions by identifying survivors, analyzing terrains, and streamlining logistics.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_carousel_wraps() {
        let mut carousel = team_carousel();
        assert_eq!(carousel.current().map(|m| m.name), Some("Ryan Madhuwala"));

        let last = carousel.prev().map(|m| m.name);
        assert_eq!(last, Some("Kushal Trivedi"));
        assert_eq!(carousel.index(), TEAM.len() - 1);

        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_about_sections_are_routes() {
        use crate::routes::Route;
        for section in ABOUT_SECTIONS {
            assert!(Route::parse(section.path).is_some(), "{}", section.path);
        }
    }
}
