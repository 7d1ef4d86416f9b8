//! English translations

use super::Translations;

pub static EN: Translations = Translations {
    app_name: "InsightSnap",

    hero_title1: "Redefine Micro-learning",
    hero_title2: "with Minimalism",
    hero_subtitle: "One minute, two clicks, three cards - Complex concepts at a glance",
    hero_tagline: "Your curiosity, knowledge delivered",

    input_placeholder: "What to explore? (e.g., Game Theory, Photography)",

    tags: [
        "Stoic Philosophy",
        "Wine Tasting",
        "Web3 Basics",
        "Minimalist Living",
    ],

    loading_steps: [
        "Building knowledge structure...",
        "Extracting core concepts...",
        "Designing interactive experience...",
    ],

    generate_error: "Failed to generate course. Please try again.",
    mind_map_error: "Mind map generation failed. Please check API Key permissions.",

    recent_explore: "Recent Exploration",
    knowledge_points: " knowledge points",
    quiz: " quiz",

    empty_title: "Ready for Inspiration",
    empty_subtitle1: "Enter a keyword",
    empty_subtitle2: "Start your micro-knowledge journey",

    chapter: "Chapter {n}",

    quiz_header: "Knowledge Check",
    correct_answer: "Correct!",
    wrong_answer: "Not quite",
    explanation: "Explanation",
    generate_mind_map: "Generate Mind Map",
    generating_mind_map: "Creating mind map...",
    knowledge_crystal: "Knowledge Crystal",
    save_to_local: "Save to device",
    saved: "Saved",
    restart: "Restart",

    api_key_not_set: "GEMINI_API_KEY is not set!\n\n\
        1. Get an API key: https://aistudio.google.com/apikey\n\
        2. export GEMINI_API_KEY=your_key\n\
        3. Run insightsnap again",
};
